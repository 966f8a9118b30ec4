//! Rigid transforms (simulator side) and scaled poses (renderer side)

use crate::quaternion::{Quat, Quatd};
use crate::vector::{Vec3, Vec3d};
use core::ops::Mul;

/// Double-precision rigid transform: rotation followed by translation.
///
/// Composition follows the simulator's convention: `a * b` applies `b`
/// first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RigidTransform {
    pub origin: Vec3d,
    pub rotation: Quatd,
}

impl RigidTransform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        origin: Vec3d::ZERO,
        rotation: Quatd::IDENTITY,
    };

    #[inline]
    pub const fn new(origin: Vec3d, rotation: Quatd) -> Self {
        Self { origin, rotation }
    }

    /// Pure translation
    #[inline]
    pub fn from_origin(origin: Vec3d) -> Self {
        Self::new(origin, Quatd::IDENTITY)
    }

    /// Pure rotation
    #[inline]
    pub fn from_rotation(rotation: Quatd) -> Self {
        Self::new(Vec3d::ZERO, rotation)
    }

    /// Compute the inverse transform
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.inverse();
        Self {
            origin: inv_rotation * (-self.origin),
            rotation: inv_rotation,
        }
    }

    /// Transform a point
    #[inline]
    pub fn transform_point(&self, point: Vec3d) -> Vec3d {
        self.origin + self.rotation * point
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for RigidTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            origin: self.origin + self.rotation * rhs.origin,
            rotation: self.rotation * rhs.rotation,
        }
    }
}

/// Single-precision placement of a shape: origin, rotation and a
/// per-axis scale. Non-uniform scale is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub origin: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Pose {
    /// Identity pose
    pub const IDENTITY: Self = Self {
        origin: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[inline]
    pub const fn new(origin: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { origin, rotation, scale }
    }

    /// Transform a point: scale, then rotate, then translate
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.origin + self.rotation * point.mul_elem(self.scale)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
