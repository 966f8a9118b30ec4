//! Bridge URDF - Simulator visuals to scene shapes
//!
//! Converts the URDF visual records a physics simulator produces while
//! loading a robot into two unrelated outputs:
//!
//! ```text
//!               UrdfShape + UrdfMaterial + inertia frame
//!                              │
//!            ┌─────────────────┴──────────────────┐
//!            ▼                                    ▼
//!     make_shape()                      make_visual_shape_data()
//!   Pose / MeshData / Material            fixed-layout record for
//!   → bridge_scene::Shape                 the simulator's query API
//! ```
//!
//! Conversion never fails. Unsupported geometry becomes an empty shape,
//! double-precision values are narrowed silently and over-long file names
//! are truncated silently.
//!
//! # Example
//!
//! ```ignore
//! use bridge_urdf::prelude::*;
//! use bridge_scene::SceneGraph;
//!
//! let mut graph = SceneGraph::new();
//! let converter = VisualConverter::new(ConverterConfig::default());
//!
//! let visual = UrdfVisual::new(
//!     UrdfShape::new("base", UrdfGeometry::sphere(0.25)),
//!     UrdfMaterial::default(),
//! );
//! let link = converter.convert_link(
//!     &[visual],
//!     &RigidTransform::IDENTITY,
//!     UrdfFlags::NONE,
//!     0,
//!     -1,
//!     &mut graph,
//! );
//! assert_eq!(link.visual_shapes.len(), 1);
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod mesh_data;
pub mod pose;
pub mod shape;
pub mod types;
pub mod visual_shape;

pub mod prelude {
    //! Common imports for URDF conversion
    pub use crate::config::ConverterConfig;
    pub use crate::converter::{ConvertedLink, VisualConverter};
    pub use crate::error::{BridgeError, Result};
    pub use crate::mesh_data::mesh_data;
    pub use crate::pose::make_pose;
    pub use crate::shape::{make_shape, make_shape_with};
    pub use crate::types::{
        MeshFileType, UrdfFlags, UrdfGeomType, UrdfGeometry, UrdfMaterial, UrdfMaterialColor,
        UrdfShape, UrdfVisual,
    };
    pub use crate::visual_shape::{
        make_visual_shape_data, make_visual_shape_data_with, VisualShapeData,
        VISUAL_SHAPE_MAX_PATH_LEN,
    };
    pub use bridge_math::{Quatd, RigidTransform, Vec3d};
}

pub use prelude::*;
