//! Pose builder

use bridge_math::{Pose, RigidTransform, Vec3d};

/// Narrow a simulator frame and scale into a scene pose
pub fn make_pose(frame: &RigidTransform, scale: Vec3d) -> Pose {
    Pose::new(frame.origin.to_f32(), frame.rotation.to_f32(), scale.to_f32())
}
