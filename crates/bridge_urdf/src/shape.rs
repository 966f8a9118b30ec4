//! Shape builder: URDF shape + material → scene shape

use std::sync::Arc;

use bridge_math::{Quatd, RigidTransform, Vec3d};
use bridge_scene::{
    Material, Mesh, Shape, ShapeKind, Texture, TextureId, TextureRegistry, NO_TEXTURE,
};

use crate::config::ConverterConfig;
use crate::mesh_data::mesh_data;
use crate::pose::make_pose;
use crate::types::{MeshFileType, UrdfFlags, UrdfGeomType, UrdfMaterial, UrdfShape};

/// Convert a URDF shape with the default configuration.
///
/// See [`make_shape_with`].
pub fn make_shape<R>(
    shape: &UrdfShape,
    material: &UrdfMaterial,
    local_inertia_frame: &RigidTransform,
    flags: UrdfFlags,
    registry: &mut R,
) -> Shape
where
    R: TextureRegistry + ?Sized,
{
    make_shape_with(
        shape,
        material,
        local_inertia_frame,
        flags,
        registry,
        &ConverterConfig::default(),
    )
}

/// Convert a URDF shape into a scene shape.
///
/// The shape is placed at `local_inertia_frame⁻¹ * link_local_frame`. A
/// non-empty texture filename is registered with `registry` before the
/// geometry is looked at, so it is registered even when the geometry turns
/// out to be unsupported. Unsupported geometry yields [`Shape::empty`].
pub fn make_shape_with<R>(
    shape: &UrdfShape,
    material: &UrdfMaterial,
    local_inertia_frame: &RigidTransform,
    flags: UrdfFlags,
    registry: &mut R,
    config: &ConverterConfig,
) -> Shape
where
    R: TextureRegistry + ?Sized,
{
    let frame = local_inertia_frame.inverse() * shape.link_local_frame;

    let texture_id = register_texture(registry, &material.texture_filename);
    let material = Some(Arc::new(make_material(material, texture_id)));

    let geometry = &shape.geometry;
    match geometry.geom_type {
        UrdfGeomType::Box => {
            Shape::new(ShapeKind::Cube, make_pose(&frame, geometry.box_size), material)
        }
        UrdfGeomType::Sphere => {
            let r = geometry.sphere_radius;
            Shape::new(ShapeKind::Sphere, make_pose(&frame, Vec3d::splat(r)), material)
        }
        // Cylinders and capsules both read the capsule radius/height fields,
        // so the two kinds differ only by tag. This is what the simulator
        // hands over; whether it is intended is not known.
        UrdfGeomType::Cylinder => {
            let scale = capsule_scale(geometry.capsule_radius, geometry.capsule_height);
            Shape::new(ShapeKind::Cylinder, make_pose(&frame, scale), material)
        }
        UrdfGeomType::Capsule => {
            let scale = capsule_scale(geometry.capsule_radius, geometry.capsule_height);
            Shape::new(ShapeKind::Capsule, make_pose(&frame, scale), material)
        }
        UrdfGeomType::Plane => {
            let frame = align_plane(frame, geometry.plane_normal, config.plane_alignment_threshold);
            Shape::new(ShapeKind::Plane, make_pose(&frame, Vec3d::ONE), material)
        }
        UrdfGeomType::Mesh => {
            let pose = make_pose(&frame, geometry.mesh_scale);
            let mesh = if geometry.mesh_file_type == MeshFileType::MemoryVertices {
                Mesh::from_data(mesh_data(geometry))
            } else {
                Mesh::from_file(geometry.mesh_file_name.clone())
            };
            let material = if flags.contains(UrdfFlags::USE_MATERIAL_COLORS_FROM_MTL) {
                None
            } else {
                material
            };
            Shape::with_mesh(ShapeKind::Mesh, pose, material, Arc::new(mesh))
        }
        UrdfGeomType::Heightfield => {
            let pose = make_pose(&frame, Vec3d::ONE);
            let mesh = Mesh::from_data(mesh_data(geometry));
            Shape::with_mesh(ShapeKind::Heightfield, pose, material, Arc::new(mesh))
        }
        other => {
            log::debug!(
                "Geometry type {} of shape '{}' has no scene counterpart, using an empty shape",
                other.raw(),
                shape.name
            );
            Shape::empty()
        }
    }
}

/// Register a texture file, or return [`NO_TEXTURE`] without touching the
/// registry when there is none
pub fn register_texture<R>(registry: &mut R, filename: &str) -> TextureId
where
    R: TextureRegistry + ?Sized,
{
    if filename.is_empty() {
        return NO_TEXTURE;
    }
    let id = registry.register_texture(Texture::new(filename));
    log::trace!("Texture {} -> {}", filename, id);
    id
}

fn make_material(material: &UrdfMaterial, texture_id: TextureId) -> Material {
    let d = material.color.rgba;
    let s = material.color.specular;
    Material::new(
        [d[0] as f32, d[1] as f32, d[2] as f32, d[3] as f32],
        [s[0] as f32, s[1] as f32, s[2] as f32],
        texture_id,
    )
}

fn capsule_scale(radius: f64, height: f64) -> Vec3d {
    Vec3d::new(radius, radius, height)
}

/// Rotate a plane's frame so that its +Z axis follows `normal`.
///
/// The rotation axis is `Z × normal` and the angle is the arcsine of that
/// axis' length, which is exact for unit normals up to 90° from +Z. Normals
/// within `threshold` of +Z keep the frame unchanged, as do normals whose
/// dot product with +Z is NaN. An anti-parallel normal gives a zero axis
/// and therefore no rotation.
///
/// Keep the operand order: crossing `normal × Z` instead would turn +Z onto
/// the negated normal.
fn align_plane(frame: RigidTransform, normal: Vec3d, threshold: f64) -> RigidTransform {
    let cos = normal.dot(Vec3d::Z);
    if cos.is_nan() || cos >= threshold {
        return frame;
    }
    let axis = Vec3d::Z.cross(normal);
    let angle = axis.length().clamp(-1.0, 1.0).asin();
    frame * RigidTransform::from_rotation(Quatd::from_axis_angle(axis, angle))
}
