//! End-to-end conversion of simulator visuals into scene shapes and query records

use std::f64::consts::FRAC_1_SQRT_2;

use approx::assert_relative_eq;
use bridge_math::{Quat, Vec3};
use bridge_scene::{SceneGraph, ShapeKind, SharedSceneGraph, NO_TEXTURE};
use bridge_urdf::prelude::*;

fn assert_vec3_eq(a: Vec3, b: Vec3) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
}

fn up(rotation: Quat) -> Vec3 {
    rotation.rotate(Vec3::Z)
}

#[test]
fn sphere_without_texture() {
    let mut graph = SceneGraph::new();
    let shape = make_shape(
        &UrdfShape::new("ball", UrdfGeometry::sphere(0.5)),
        &UrdfMaterial::from_rgba([1.0, 0.0, 0.0, 1.0]),
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
    );

    assert_eq!(shape.kind, ShapeKind::Sphere);
    assert_eq!(shape.pose.scale, Vec3::splat(0.5));
    assert_eq!(shape.pose.origin, Vec3::ZERO);
    let material = shape.material.as_ref().expect("material");
    assert_eq!(material.diffuse, [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(material.diffuse_texture, NO_TEXTURE);
    assert!(graph.textures().is_empty());
}

#[test]
fn box_scale_and_frame_composition() {
    let mut graph = SceneGraph::new();
    let inertia = RigidTransform::from_origin(Vec3d::new(1.0, 0.0, 0.0));
    let shape = make_shape(
        &UrdfShape::new("crate", UrdfGeometry::cuboid(Vec3d::new(1.0, 2.0, 3.0)))
            .with_frame(RigidTransform::from_origin(Vec3d::new(3.0, 0.5, 0.0))),
        &UrdfMaterial::default(),
        &inertia,
        UrdfFlags::NONE,
        &mut graph,
    );

    assert_eq!(shape.kind, ShapeKind::Cube);
    assert_eq!(shape.pose.scale, Vec3::new(1.0, 2.0, 3.0));
    assert_vec3_eq(shape.pose.origin, Vec3::new(2.0, 0.5, 0.0));
}

#[test]
fn rotated_inertia_frame_is_inverted() {
    let mut graph = SceneGraph::new();
    let inertia = RigidTransform::new(Vec3d::ZERO, Quatd::from_rotation_z(std::f64::consts::FRAC_PI_2));
    let shape = make_shape(
        &UrdfShape::new("arm", UrdfGeometry::sphere(1.0))
            .with_frame(RigidTransform::from_origin(Vec3d::new(0.0, 1.0, 0.0))),
        &UrdfMaterial::default(),
        &inertia,
        UrdfFlags::NONE,
        &mut graph,
    );
    assert_vec3_eq(shape.pose.origin, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn texture_registered_once_per_filename() {
    let mut graph = SceneGraph::new();
    let material = UrdfMaterial::default().with_texture("checker.png");
    let a = make_shape(
        &UrdfShape::new("a", UrdfGeometry::sphere(1.0)),
        &material,
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
    );
    let b = make_shape(
        &UrdfShape::new("b", UrdfGeometry::cuboid(Vec3d::ONE)),
        &material,
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
    );

    let tex_a = a.material.as_ref().map(|m| m.diffuse_texture);
    let tex_b = b.material.as_ref().map(|m| m.diffuse_texture);
    assert_eq!(tex_a, Some(0));
    assert_eq!(tex_a, tex_b);
    assert_eq!(graph.textures().len(), 1);
    assert_eq!(graph.texture(0).map(|t| t.filename.as_str()), Some("checker.png"));
}

#[test]
fn texture_registered_for_unsupported_geometry() {
    let mut graph = SceneGraph::new();
    let shape = make_shape(
        &UrdfShape::new(
            "sdf",
            UrdfGeometry {
                geom_type: UrdfGeomType::Sdf,
                ..Default::default()
            },
        ),
        &UrdfMaterial::default().with_texture("lost.png"),
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
    );

    assert!(shape.is_empty());
    assert!(shape.material.is_none());
    assert_eq!(graph.texture_id("lost.png"), Some(0));
}

#[test]
fn plane_pose_carries_up_onto_normal() {
    let normals = [
        Vec3d::X,
        Vec3d::Y,
        Vec3d::new(0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        Vec3d::new(-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    ];
    for normal in normals {
        let mut graph = SceneGraph::new();
        let shape = make_shape(
            &UrdfShape::new("floor", UrdfGeometry::plane(normal)),
            &UrdfMaterial::default(),
            &RigidTransform::IDENTITY,
            UrdfFlags::NONE,
            &mut graph,
        );
        assert_eq!(shape.kind, ShapeKind::Plane);
        assert_eq!(shape.pose.scale, Vec3::ONE);
        assert_vec3_eq(up(shape.pose.rotation), normal.to_f32());
    }
}

#[test]
fn plane_near_up_keeps_frame() {
    let mut graph = SceneGraph::new();
    let normal = Vec3d::new(0.1, 0.0, 0.995).normalize();
    let shape = make_shape(
        &UrdfShape::new("floor", UrdfGeometry::plane(normal)),
        &UrdfMaterial::default(),
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
    );
    assert_eq!(shape.pose.rotation, Quat::IDENTITY);
}

#[test]
fn plane_threshold_is_configurable() {
    let mut graph = SceneGraph::new();
    let normal = Vec3d::new(0.1, 0.0, 0.995).normalize();
    let config = ConverterConfig::default().with_plane_alignment_threshold(1.0);
    let shape = make_shape_with(
        &UrdfShape::new("floor", UrdfGeometry::plane(normal)),
        &UrdfMaterial::default(),
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
        &config,
    );
    assert_vec3_eq(up(shape.pose.rotation), normal.to_f32());
}

#[test]
fn file_mesh_with_mtl_colors_has_no_material() {
    let mut graph = SceneGraph::new();
    let shape = make_shape(
        &UrdfShape::new(
            "body",
            UrdfGeometry::mesh_file("meshes/body.obj", MeshFileType::Obj, Vec3d::new(2.0, 2.0, 2.0)),
        ),
        &UrdfMaterial::default().with_texture("body.png"),
        &RigidTransform::IDENTITY,
        UrdfFlags::USE_MATERIAL_COLORS_FROM_MTL | UrdfFlags::ENABLE_CACHED_GRAPHICS_SHAPES,
        &mut graph,
    );

    assert_eq!(shape.kind, ShapeKind::Mesh);
    assert!(shape.material.is_none());
    assert_eq!(shape.pose.scale, Vec3::splat(2.0));
    let mesh = shape.mesh.as_ref().expect("mesh");
    assert_eq!(mesh.filename(), Some("meshes/body.obj"));
    // Registered even though the material is dropped.
    assert_eq!(graph.textures().len(), 1);
}

#[test]
fn mtl_flag_leaves_primitives_alone() {
    let mut graph = SceneGraph::new();
    let shape = make_shape(
        &UrdfShape::new("ball", UrdfGeometry::sphere(1.0)),
        &UrdfMaterial::default(),
        &RigidTransform::IDENTITY,
        UrdfFlags::USE_MATERIAL_COLORS_FROM_MTL,
        &mut graph,
    );
    assert!(shape.material.is_some());
}

#[test]
fn in_memory_mesh_is_flattened() {
    let mut graph = SceneGraph::new();
    let geometry = UrdfGeometry::mesh_vertices(
        vec![Vec3d::ZERO, Vec3d::X, Vec3d::Y],
        vec![0, 1, 2],
        Vec3d::ONE,
    )
    .with_uvs(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])
    .with_normals(vec![Vec3d::Z, Vec3d::Z, Vec3d::Z]);

    let shape = make_shape(
        &UrdfShape::new("tri", geometry),
        &UrdfMaterial::default(),
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
    );

    let data = shape.mesh.as_ref().and_then(|m| m.data()).expect("mesh data");
    assert_eq!(data.vertices, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(data.uvs.len(), 6);
    assert_eq!(data.normals.len(), 9);
    assert_eq!(data.indices, vec![0, 1, 2]);
    assert!(data.validate().is_ok());
}

#[test]
fn heightfield_has_unit_scale_and_data() {
    let mut graph = SceneGraph::new();
    let shape = make_shape(
        &UrdfShape::new(
            "terrain",
            UrdfGeometry::heightfield(vec![Vec3d::ZERO, Vec3d::X, Vec3d::Y], vec![0, 1, 2]),
        ),
        &UrdfMaterial::default(),
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut graph,
    );
    assert_eq!(shape.kind, ShapeKind::Heightfield);
    assert_eq!(shape.pose.scale, Vec3::ONE);
    assert_eq!(shape.mesh.as_ref().and_then(|m| m.data()).map(|d| d.triangle_count()), Some(1));
}

#[test]
fn shared_graph_as_registry() {
    let mut shared = SharedSceneGraph::default();
    let renderer_view = shared.clone();

    let material = UrdfMaterial::default().with_texture("wood.png");
    let a = make_shape(
        &UrdfShape::new("a", UrdfGeometry::sphere(1.0)),
        &material,
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut shared,
    );
    let b = make_shape(
        &UrdfShape::new("b", UrdfGeometry::sphere(1.0)),
        &material,
        &RigidTransform::IDENTITY,
        UrdfFlags::NONE,
        &mut *shared.write(),
    );

    assert_eq!(a.material.map(|m| m.diffuse_texture), Some(0));
    assert_eq!(b.material.map(|m| m.diffuse_texture), Some(0));
    assert_eq!(renderer_view.read().textures().len(), 1);
}

#[test]
fn query_record_is_independent_of_scene_shape() {
    let shape = UrdfShape::new(
        "wheel",
        UrdfGeometry::cylinder(0.3, 0.1),
    )
    .with_frame(RigidTransform::from_origin(Vec3d::new(5.0, 5.0, 5.0)));
    let material = UrdfMaterial::from_rgba([0.2, 0.4, 0.6, 0.8]).with_texture("rubber.png");
    let inertia = RigidTransform::from_origin(Vec3d::new(0.0, 0.0, 0.25));

    let data = make_visual_shape_data(&shape, &material, &inertia, 3, 2);

    assert_eq!(data.object_unique_id, 3);
    assert_eq!(data.link_index, 2);
    assert_eq!(data.visual_geometry_type, UrdfGeomType::Cylinder.raw());
    assert_eq!(data.local_visual_frame, [0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(data.rgba_color, [0.2, 0.4, 0.6, 0.8]);
    assert_eq!(data.mesh_asset_file_name(), "rubber.png");
    assert_eq!(data.dimensions, [1.0, 1.0, 1.0]);
    assert_eq!(data.as_bytes().len(), std::mem::size_of::<VisualShapeData>());
}

#[test]
fn converter_builds_a_robot() {
    let mut graph = SceneGraph::new();
    let converter = VisualConverter::new(ConverterConfig::default());
    let base = vec![
        UrdfVisual::new(
            UrdfShape::new("chassis", UrdfGeometry::cuboid(Vec3d::new(1.0, 0.5, 0.2))),
            UrdfMaterial::default().with_texture("paint.png"),
        ),
        UrdfVisual::new(
            UrdfShape::new("floor", UrdfGeometry::plane(Vec3d::Z)),
            UrdfMaterial::default(),
        ),
    ];
    let wheel = vec![UrdfVisual::new(
        UrdfShape::new("wheel", UrdfGeometry::cylinder(0.3, 0.1)),
        UrdfMaterial::default().with_texture("paint.png"),
    )];

    let base_link = converter.convert_link(&base, &RigidTransform::IDENTITY, UrdfFlags::NONE, 0, -1, &mut graph);
    let wheel_link = converter.convert_link(&wheel, &RigidTransform::IDENTITY, UrdfFlags::NONE, 0, 0, &mut graph);

    assert_eq!(graph.nodes_for_body(0).count(), 2);
    assert_eq!(graph.textures().len(), 1);
    assert_eq!(graph.node(base_link.node).map(|n| n.shapes.len()), Some(2));
    assert_eq!(wheel_link.visual_shapes[0].link_index, 0);

    assert_eq!(graph.remove_body(0), 2);
    assert_eq!(graph.texture_id("paint.png"), Some(0));
}

#[test]
fn config_from_json_drives_converter() {
    let config = ConverterConfig::from_json_str(r#"{ "per_axis_dimensions": true }"#).expect("config");
    let converter = VisualConverter::new(config);
    let visual = UrdfVisual::new(
        UrdfShape::new(
            "mesh",
            UrdfGeometry::mesh_file("m.stl", MeshFileType::Stl, Vec3d::new(1.0, 2.0, 3.0)),
        ),
        UrdfMaterial::default(),
    );
    let data = converter.convert_visual_shape_data(&visual, &RigidTransform::IDENTITY, 0, -1);
    assert_eq!(data.dimensions, [1.0, 2.0, 3.0]);
}
