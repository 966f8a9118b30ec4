//! Scene graph behaviour seen from outside the crate

use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use bridge_math::{Pose, Quat, Vec3};
use bridge_scene::prelude::*;

fn textured_material(graph: &mut SceneGraph, file: &str) -> Arc<Material> {
    let id = graph.register_texture(Texture::new(file));
    Arc::new(Material::new([1.0, 1.0, 1.0, 0.5], [0.0; 3], id))
}

#[test]
fn materials_and_meshes_are_shared_between_shapes() {
    let mut graph = SceneGraph::new();
    let material = textured_material(&mut graph, "grid.png");
    let mesh = Arc::new(Mesh::from_file("wheel.stl"));

    let shapes: Vec<Shape> = (0..4)
        .map(|i| {
            let pose = Pose::new(Vec3::new(i as f32, 0.0, 0.0), Quat::IDENTITY, Vec3::ONE);
            Shape::with_mesh(ShapeKind::Mesh, pose, Some(material.clone()), mesh.clone())
        })
        .collect();
    let node = graph.add_node(SceneNode::new(1, 0, shapes));

    assert_eq!(Arc::strong_count(&material), 5);
    assert_eq!(Arc::strong_count(&mesh), 5);
    assert!(material.is_transparent());
    assert_eq!(material.texture(), Some(0));

    graph.remove_body(1);
    assert!(graph.node(node).is_none());
    assert_eq!(Arc::strong_count(&material), 1);
}

#[test]
fn texture_ids_survive_body_removal() {
    let mut graph = SceneGraph::new();
    let first = graph.register_texture(Texture::new("a.png"));
    graph.add_node(SceneNode::new(7, -1, Vec::new()));
    graph.remove_body(7);

    let second = graph.register_texture(Texture::new("b.png"));
    assert_eq!(graph.register_texture(Texture::new("a.png")), first);
    assert_eq!(second, first + 1);
}

#[test]
fn shared_graph_across_threads() {
    let shared = SharedSceneGraph::default();

    let handles: Vec<_> = (0..4)
        .map(|body| {
            let mut shared = shared.clone();
            thread::spawn(move || {
                let id = TextureRegistry::register_texture(&mut shared, Texture::new("common.png"));
                shared.write().add_node(SceneNode::new(body, -1, vec![Shape::empty()]));
                id
            })
        })
        .collect();

    let ids: Vec<TextureId> = handles.into_iter().map(|h| h.join().expect("thread")).collect();
    assert!(ids.iter().all(|&id| id == 0));

    let graph = shared.read();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.textures().len(), 1);
}

#[test]
fn pose_places_primitive_vertices() {
    let pose = Pose::new(
        Vec3::new(0.0, 0.0, 1.0),
        Quat::new(0.0, 0.0, std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2),
        Vec3::new(2.0, 1.0, 1.0),
    );
    let p = pose.transform_point(Vec3::X);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
    assert_relative_eq!(p.z, 1.0, epsilon = 1e-6);
}

#[test]
fn mesh_data_validation_reports_first_problem() {
    let data = MeshData::new(vec![0.0; 9], vec![0.0; 5], Vec::new(), vec![0, 1, 2]);
    assert_eq!(
        data.validate(),
        Err(MeshDataError::StrideMismatch {
            array: "uvs",
            len: 5,
            stride: 2
        })
    );

    let data = MeshData::new(vec![0.0; 9], Vec::new(), Vec::new(), vec![0, 1, 3]);
    let err = data.validate().expect_err("out of bounds");
    assert_eq!(err.to_string(), "index 3 out of bounds for 3 vertices");
}
