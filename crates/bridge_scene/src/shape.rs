//! Renderable shapes

use std::sync::Arc;

use bridge_math::Pose;
use serde::{Deserialize, Serialize};

use crate::material::Material;
use crate::mesh::Mesh;

/// Primitive kind of a shape.
///
/// Primitives are unit-sized and placed by the pose: a cube's scale holds
/// its edge lengths, a sphere's scale its radius, cylinders and capsules
/// carry `(radius, radius, height)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Nothing to render
    #[default]
    Empty,
    Cube,
    Sphere,
    Cylinder,
    Capsule,
    Plane,
    Mesh,
    Heightfield,
}

/// A single renderable shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub pose: Pose,
    /// Shared material; `None` lets mesh-embedded materials take over
    pub material: Option<Arc<Material>>,
    /// Shared mesh for `Mesh` and `Heightfield` shapes
    pub mesh: Option<Arc<Mesh>>,
}

impl Shape {
    /// Create a primitive shape with no mesh
    pub fn new(kind: ShapeKind, pose: Pose, material: Option<Arc<Material>>) -> Self {
        Self {
            kind,
            pose,
            material,
            mesh: None,
        }
    }

    /// Create a mesh-backed shape
    pub fn with_mesh(
        kind: ShapeKind,
        pose: Pose,
        material: Option<Arc<Material>>,
        mesh: Arc<Mesh>,
    ) -> Self {
        Self {
            kind,
            pose,
            material,
            mesh: Some(mesh),
        }
    }

    /// The empty shape produced for unsupported geometry
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.kind == ShapeKind::Empty
    }
}
