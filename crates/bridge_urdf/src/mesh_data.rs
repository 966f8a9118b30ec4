//! Mesh data extraction from in-memory geometry

use bridge_scene::MeshData;

use crate::types::UrdfGeometry;

/// Flatten a geometry's vertex, uv, normal and index lists.
///
/// Element order is kept, so entry `i` of each output array still belongs
/// to vertex `i`. The lists are not checked against each other; use
/// [`MeshData::validate`] for that.
pub fn mesh_data(geometry: &UrdfGeometry) -> MeshData {
    let mut vertices = Vec::with_capacity(geometry.vertices.len() * 3);
    let mut uvs = Vec::with_capacity(geometry.uvs.len() * 2);
    let mut normals = Vec::with_capacity(geometry.normals.len() * 3);
    let mut indices = Vec::with_capacity(geometry.indices.len());

    for v in &geometry.vertices {
        vertices.extend_from_slice(&v.to_f32().to_array());
    }
    for uv in &geometry.uvs {
        uvs.extend_from_slice(&[uv[0] as f32, uv[1] as f32]);
    }
    for n in &geometry.normals {
        normals.extend_from_slice(&n.to_f32().to_array());
    }
    indices.extend_from_slice(&geometry.indices);

    MeshData::new(vertices, uvs, normals, indices)
}
