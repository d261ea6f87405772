//! Quaternion utilities for physics bodies
//!
//! Orientations are stored as plain `[x, y, z, w]` arrays on [`Body`](crate::Body);
//! this module converts them to `glam` types for the actual math.

use crate::types::Vec3;
use glam::{EulerRot, Quat, Vec3 as GlamVec3};

fn to_quat(orientation: [f32; 4]) -> Quat {
    Quat::from_array(orientation)
}

fn to_glam(v: Vec3) -> GlamVec3 {
    GlamVec3::new(v.x, v.y, v.z)
}

fn from_glam(v: GlamVec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Build an orientation from Euler angles in degrees.
///
/// Rotation order is Z, then X, then Y, the convention used by most game
/// engines for their inspector angles.
#[must_use]
pub fn from_euler_degrees(x: f32, y: f32, z: f32) -> [f32; 4] {
    Quat::from_euler(EulerRot::YXZ, y.to_radians(), x.to_radians(), z.to_radians())
        .normalize()
        .to_array()
}

/// Rotate a vector by an orientation.
#[must_use]
pub fn rotate(orientation: [f32; 4], v: Vec3) -> Vec3 {
    from_glam(to_quat(orientation) * to_glam(v))
}

/// Advance an orientation by a world-space angular velocity over `dt`.
#[must_use]
pub fn integrate_orientation(orientation: [f32; 4], angular_vel: Vec3, dt: f32) -> [f32; 4] {
    let w = to_glam(angular_vel);
    let speed = w.length();
    if speed * dt <= f32::EPSILON {
        return orientation;
    }
    let delta = Quat::from_axis_angle(w / speed, speed * dt);
    (delta * to_quat(orientation)).normalize().to_array()
}
