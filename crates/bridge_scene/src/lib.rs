//! Bridge Scene - Scene-graph data model
//!
//! The render-side half of the URDF visual bridge. Converted visuals land
//! here as [`Shape`]s grouped into [`SceneNode`]s, one node per simulated
//! link.
//!
//! # Ownership
//!
//! ```text
//! SceneGraph
//!  ├── textures: Vec<Texture>        (id = index, filename-deduplicated)
//!  └── nodes: NodeId -> SceneNode
//!                        └── shapes: Vec<Shape>
//!                                     ├── pose
//!                                     ├── material: Option<Arc<Material>>
//!                                     └── mesh:     Option<Arc<Mesh>>
//! ```
//!
//! Materials and meshes are reference counted so several shapes can alias
//! the same data.

pub mod error;
pub mod graph;
pub mod material;
pub mod mesh;
pub mod shape;
pub mod texture;

pub mod prelude {
    //! Common imports for scene-graph functionality
    pub use crate::error::{MeshDataError, Result};
    pub use crate::graph::{NodeId, SceneGraph, SceneNode, SharedSceneGraph};
    pub use crate::material::{Color3f, Color4f, Material};
    pub use crate::mesh::{Mesh, MeshData};
    pub use crate::shape::{Shape, ShapeKind};
    pub use crate::texture::{Texture, TextureId, TextureRegistry, NO_TEXTURE};
}

pub use prelude::*;
