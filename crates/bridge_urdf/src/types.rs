//! Mirrors of the simulator's URDF visual records.
//!
//! These carry exactly what the simulator hands over after parsing a robot
//! description, in its double precision and with its integer tags, so that
//! unknown tags survive a round trip untouched.

use bridge_math::{RigidTransform, Vec3d};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UrdfGeomType
// ---------------------------------------------------------------------------

/// Geometry tag of a URDF shape.
///
/// Serialized as the simulator's raw integer. Values outside the known set
/// are kept in [`UrdfGeomType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum UrdfGeomType {
    Sphere,
    Box,
    Cylinder,
    Mesh,
    Plane,
    Capsule,
    Sdf,
    Heightfield,
    Unknown,
    Other(i32),
}

impl UrdfGeomType {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            2 => Self::Sphere,
            3 => Self::Box,
            4 => Self::Cylinder,
            5 => Self::Mesh,
            6 => Self::Plane,
            7 => Self::Capsule,
            8 => Self::Sdf,
            9 => Self::Heightfield,
            10 => Self::Unknown,
            other => Self::Other(other),
        }
    }

    pub const fn raw(self) -> i32 {
        match self {
            Self::Sphere => 2,
            Self::Box => 3,
            Self::Cylinder => 4,
            Self::Mesh => 5,
            Self::Plane => 6,
            Self::Capsule => 7,
            Self::Sdf => 8,
            Self::Heightfield => 9,
            Self::Unknown => 10,
            Self::Other(raw) => raw,
        }
    }
}

impl Default for UrdfGeomType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<i32> for UrdfGeomType {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<UrdfGeomType> for i32 {
    fn from(ty: UrdfGeomType) -> Self {
        ty.raw()
    }
}

// ---------------------------------------------------------------------------
// MeshFileType
// ---------------------------------------------------------------------------

/// Where a mesh geometry's data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum MeshFileType {
    Stl,
    Collada,
    Obj,
    Cdf,
    /// Vertices are carried in the geometry record itself
    MemoryVertices,
    Other(i32),
}

impl MeshFileType {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Stl,
            2 => Self::Collada,
            3 => Self::Obj,
            4 => Self::Cdf,
            5 => Self::MemoryVertices,
            other => Self::Other(other),
        }
    }

    pub const fn raw(self) -> i32 {
        match self {
            Self::Stl => 1,
            Self::Collada => 2,
            Self::Obj => 3,
            Self::Cdf => 4,
            Self::MemoryVertices => 5,
            Self::Other(raw) => raw,
        }
    }
}

impl Default for MeshFileType {
    fn default() -> Self {
        Self::Other(0)
    }
}

impl From<i32> for MeshFileType {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<MeshFileType> for i32 {
    fn from(ty: MeshFileType) -> Self {
        ty.raw()
    }
}

// ---------------------------------------------------------------------------
// UrdfFlags
// ---------------------------------------------------------------------------

/// URDF load option bits, as passed to the simulator's loader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrdfFlags(pub i32);

impl UrdfFlags {
    pub const NONE: Self = Self(0);
    pub const ENABLE_CACHED_GRAPHICS_SHAPES: Self = Self(1 << 10);
    /// Take mesh colors from the mesh's own material file
    pub const USE_MATERIAL_COLORS_FROM_MTL: Self = Self(1 << 15);

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl core::ops::BitOr for UrdfFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

// ---------------------------------------------------------------------------
// UrdfGeometry
// ---------------------------------------------------------------------------

/// Geometry of a URDF shape.
///
/// Every field is present regardless of the tag; only the ones relevant to
/// `geom_type` are meaningful. Cylinders store their radius and length in
/// the capsule fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrdfGeometry {
    pub geom_type: UrdfGeomType,
    pub sphere_radius: f64,
    /// Box size, used directly as the cube's scale
    pub box_size: Vec3d,
    pub capsule_radius: f64,
    pub capsule_height: f64,
    pub plane_normal: Vec3d,
    pub mesh_file_name: String,
    pub mesh_file_type: MeshFileType,
    pub mesh_scale: Vec3d,
    pub vertices: Vec<Vec3d>,
    pub uvs: Vec<[f64; 2]>,
    pub normals: Vec<Vec3d>,
    pub indices: Vec<i32>,
}

impl Default for UrdfGeometry {
    fn default() -> Self {
        Self {
            geom_type: UrdfGeomType::Unknown,
            sphere_radius: 1.0,
            box_size: Vec3d::ONE,
            capsule_radius: 1.0,
            capsule_height: 1.0,
            plane_normal: Vec3d::Z,
            mesh_file_name: String::new(),
            mesh_file_type: MeshFileType::default(),
            mesh_scale: Vec3d::ONE,
            vertices: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl UrdfGeometry {
    pub fn sphere(radius: f64) -> Self {
        Self {
            geom_type: UrdfGeomType::Sphere,
            sphere_radius: radius,
            ..Default::default()
        }
    }

    pub fn cuboid(size: Vec3d) -> Self {
        Self {
            geom_type: UrdfGeomType::Box,
            box_size: size,
            ..Default::default()
        }
    }

    pub fn cylinder(radius: f64, length: f64) -> Self {
        Self {
            geom_type: UrdfGeomType::Cylinder,
            capsule_radius: radius,
            capsule_height: length,
            ..Default::default()
        }
    }

    pub fn capsule(radius: f64, height: f64) -> Self {
        Self {
            geom_type: UrdfGeomType::Capsule,
            capsule_radius: radius,
            capsule_height: height,
            ..Default::default()
        }
    }

    pub fn plane(normal: Vec3d) -> Self {
        Self {
            geom_type: UrdfGeomType::Plane,
            plane_normal: normal,
            ..Default::default()
        }
    }

    /// Mesh loaded from a file by the renderer
    pub fn mesh_file(
        file_name: impl Into<String>,
        file_type: MeshFileType,
        scale: Vec3d,
    ) -> Self {
        Self {
            geom_type: UrdfGeomType::Mesh,
            mesh_file_name: file_name.into(),
            mesh_file_type: file_type,
            mesh_scale: scale,
            ..Default::default()
        }
    }

    /// Mesh whose vertices are carried in the record
    pub fn mesh_vertices(vertices: Vec<Vec3d>, indices: Vec<i32>, scale: Vec3d) -> Self {
        Self {
            geom_type: UrdfGeomType::Mesh,
            mesh_file_type: MeshFileType::MemoryVertices,
            mesh_scale: scale,
            vertices,
            indices,
            ..Default::default()
        }
    }

    /// Heightfield, already triangulated and scaled by the simulator
    pub fn heightfield(vertices: Vec<Vec3d>, indices: Vec<i32>) -> Self {
        Self {
            geom_type: UrdfGeomType::Heightfield,
            mesh_file_type: MeshFileType::MemoryVertices,
            vertices,
            indices,
            ..Default::default()
        }
    }

    /// Set texture coordinates (builder pattern)
    pub fn with_uvs(mut self, uvs: Vec<[f64; 2]>) -> Self {
        self.uvs = uvs;
        self
    }

    /// Set normals (builder pattern)
    pub fn with_normals(mut self, normals: Vec<Vec3d>) -> Self {
        self.normals = normals;
        self
    }
}

// ---------------------------------------------------------------------------
// UrdfMaterial
// ---------------------------------------------------------------------------

/// Colors of a URDF material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrdfMaterialColor {
    /// Diffuse RGBA
    pub rgba: [f64; 4],
    /// Specular RGB
    pub specular: [f64; 3],
}

impl Default for UrdfMaterialColor {
    fn default() -> Self {
        Self {
            rgba: [0.8, 0.8, 0.8, 1.0],
            specular: [0.4, 0.4, 0.4],
        }
    }
}

/// Visual material of a URDF shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrdfMaterial {
    pub name: String,
    /// Diffuse texture file, empty for none
    pub texture_filename: String,
    pub color: UrdfMaterialColor,
}

impl UrdfMaterial {
    pub fn from_rgba(rgba: [f64; 4]) -> Self {
        Self {
            color: UrdfMaterialColor {
                rgba,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Set texture file (builder pattern)
    pub fn with_texture(mut self, filename: impl Into<String>) -> Self {
        self.texture_filename = filename.into();
        self
    }

    /// Set specular color (builder pattern)
    pub fn with_specular(mut self, specular: [f64; 3]) -> Self {
        self.color.specular = specular;
        self
    }
}

// ---------------------------------------------------------------------------
// UrdfShape / UrdfVisual
// ---------------------------------------------------------------------------

/// A shape attached to a link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrdfShape {
    pub name: String,
    /// Placement of the shape in the link frame
    pub link_local_frame: RigidTransform,
    pub geometry: UrdfGeometry,
}

impl UrdfShape {
    pub fn new(name: impl Into<String>, geometry: UrdfGeometry) -> Self {
        Self {
            name: name.into(),
            link_local_frame: RigidTransform::IDENTITY,
            geometry,
        }
    }

    /// Set the link-local frame (builder pattern)
    pub fn with_frame(mut self, frame: RigidTransform) -> Self {
        self.link_local_frame = frame;
        self
    }
}

/// A visual element: shape plus its material
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrdfVisual {
    pub shape: UrdfShape,
    pub material: UrdfMaterial,
}

impl UrdfVisual {
    pub fn new(shape: UrdfShape, material: UrdfMaterial) -> Self {
        Self { shape, material }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
