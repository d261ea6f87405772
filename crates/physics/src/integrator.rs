//! # Physics Integration
//!
//! Numerical integration of body state: torque to angular velocity,
//! angular velocity to orientation, and linear velocity to position.

use crate::transform::integrate_orientation;
use crate::types::{Body, BodyType, PhysParams, Vec3};

/// Integrate accumulated torques into angular velocity and clear them.
///
/// Uses explicit Euler, followed by drag of the form `1 / (1 + dt * drag)` and
/// a hard cap on angular speed.
pub fn apply_torques(bodies: &mut [Body], params: &PhysParams) {
    let dt = params.dt;
    let drag = 1.0 / (1.0 + dt * params.angular_damping);
    for body in bodies.iter_mut() {
        if body.body_type == BodyType::Dynamic {
            let inertia = body.inertia.max(f32::EPSILON);
            body.angular_vel += body.torque / inertia * dt;
            body.angular_vel *= drag;
            let speed = body.angular_vel.length();
            if speed > params.max_angular_speed {
                body.angular_vel *= params.max_angular_speed / speed;
            }
        }
        body.torque = Vec3::ZERO;
    }
}

/// Integrate orientations of dynamic bodies.
pub fn integrate_orientations(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut().filter(|b| b.body_type == BodyType::Dynamic) {
        body.orientation = integrate_orientation(body.orientation, body.angular_vel, dt);
    }
}

/// Integrate positions of dynamic bodies from their linear velocity.
///
/// Bodies driven by a kinematic chain are overwritten afterwards, so this only
/// matters for free bodies.
pub fn integrate_positions(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.prev_pos = body.pos;
        if body.body_type == BodyType::Dynamic {
            body.pos += body.vel * dt;
        }
    }
}
