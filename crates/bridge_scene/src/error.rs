//! Error types for scene data

use thiserror::Error;

/// Consistency violations reported by [`MeshData::validate`](crate::MeshData::validate)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshDataError {
    /// A flat array is not a whole number of elements
    #[error("{array} has {len} values, not a multiple of {stride}")]
    StrideMismatch {
        array: &'static str,
        len: usize,
        stride: usize,
    },

    /// A triangle index points outside the vertex array
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: i32, vertex_count: usize },
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, MeshDataError>;
