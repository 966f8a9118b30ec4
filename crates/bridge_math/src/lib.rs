//! # bridge_math - Geometry primitives for the URDF visual bridge
//!
//! Two precisions live side by side:
//! - `f64` types (`Vec3d`, `Quatd`, `RigidTransform`) mirror the numeric
//!   types of the physics simulator that produces URDF records.
//! - `f32` types (`Vec3`, `Quat`, `Pose`) are what the scene graph and the
//!   renderer consume.
//!
//! Narrowing from the former to the latter is always silent.

pub mod vector;
pub mod quaternion;
pub mod transform;

pub use vector::*;
pub use quaternion::*;
pub use transform::*;

/// Common math constants
pub mod consts {
    pub const PI: f64 = core::f64::consts::PI;
    pub const FRAC_PI_2: f64 = PI / 2.0;
}

pub mod prelude {
    pub use crate::vector::{Vec3, Vec3d};
    pub use crate::quaternion::{Quat, Quatd};
    pub use crate::transform::{Pose, RigidTransform};
}
