//! Mesh data blocks and mesh references

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MeshDataError, Result};

/// Floats per vertex position
pub const VERTEX_STRIDE: usize = 3;
/// Floats per texture coordinate
pub const UV_STRIDE: usize = 2;
/// Floats per normal
pub const NORMAL_STRIDE: usize = 3;

/// Flat, renderer-ready mesh arrays.
///
/// Index `i` of the vertex, uv and normal arrays describe the same vertex.
/// The uv and normal arrays may be empty when the source supplied none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Positions, 3 floats per vertex
    pub vertices: Vec<f32>,
    /// Texture coordinates, 2 floats per vertex
    pub uvs: Vec<f32>,
    /// Normals, 3 floats per vertex
    pub normals: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<i32>,
}

impl MeshData {
    pub fn new(vertices: Vec<f32>, uvs: Vec<f32>, normals: Vec<f32>, indices: Vec<i32>) -> Self {
        Self {
            vertices,
            uvs,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn uv_count(&self) -> usize {
        self.uvs.len() / UV_STRIDE
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len() / NORMAL_STRIDE
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Position of vertex `i`
    pub fn vertex(&self, i: usize) -> Option<[f32; 3]> {
        let start = i.checked_mul(VERTEX_STRIDE)?;
        let s = self.vertices.get(start..start.checked_add(VERTEX_STRIDE)?)?;
        Some([s[0], s[1], s[2]])
    }

    /// Texture coordinate of vertex `i`
    pub fn uv(&self, i: usize) -> Option<[f32; 2]> {
        let start = i.checked_mul(UV_STRIDE)?;
        let s = self.uvs.get(start..start.checked_add(UV_STRIDE)?)?;
        Some([s[0], s[1]])
    }

    /// Normal of vertex `i`
    pub fn normal(&self, i: usize) -> Option<[f32; 3]> {
        let start = i.checked_mul(NORMAL_STRIDE)?;
        let s = self.normals.get(start..start.checked_add(NORMAL_STRIDE)?)?;
        Some([s[0], s[1], s[2]])
    }

    /// Check stride multiples and index bounds.
    ///
    /// Conversion never calls this; callers that feed the data to a strict
    /// consumer can opt in.
    pub fn validate(&self) -> Result<()> {
        check_stride("vertices", self.vertices.len(), VERTEX_STRIDE)?;
        check_stride("uvs", self.uvs.len(), UV_STRIDE)?;
        check_stride("normals", self.normals.len(), NORMAL_STRIDE)?;
        check_stride("indices", self.indices.len(), 3)?;

        let vertex_count = self.vertex_count();
        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&i| i < 0 || i as usize >= vertex_count)
        {
            return Err(MeshDataError::IndexOutOfBounds {
                index,
                vertex_count,
            });
        }
        Ok(())
    }
}

fn check_stride(array: &'static str, len: usize, stride: usize) -> Result<()> {
    if len % stride != 0 {
        return Err(MeshDataError::StrideMismatch { array, len, stride });
    }
    Ok(())
}

/// Geometry behind a mesh-like shape
#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    /// Vertex data already in memory
    Data(Arc<MeshData>),
    /// A mesh file the renderer loads itself
    File(String),
}

impl Mesh {
    pub fn from_data(data: MeshData) -> Self {
        Self::Data(Arc::new(data))
    }

    pub fn from_file(filename: impl Into<String>) -> Self {
        Self::File(filename.into())
    }

    pub fn data(&self) -> Option<&Arc<MeshData>> {
        match self {
            Self::Data(data) => Some(data),
            Self::File(_) => None,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Data(_) => None,
            Self::File(name) => Some(name),
        }
    }
}
