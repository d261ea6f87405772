//! # Physics Simulation Builder
//!
//! Builder methods for adding bodies to the simulation.

use crate::types::{Body, BodyType, Vec3};
use crate::PhysicsSim;

impl PhysicsSim {
    /// Add a body and return its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Add a torque-driven body with the given moment of inertia.
    pub fn add_dynamic_body(&mut self, pos: Vec3, radius: f32, inertia: f32) -> usize {
        let mut body = Body::new(pos, radius, BodyType::Dynamic);
        body.inertia = inertia;
        self.add_body(body)
    }

    /// Add a body that only moves when explicitly posed.
    pub fn add_kinematic_body(&mut self, pos: Vec3, radius: f32) -> usize {
        self.add_body(Body::new(pos, radius, BodyType::Kinematic))
    }
}
