//! # Physics Simulation Core
//!
//! This module provides the main simulation container and its stepping
//! logic. A step runs the integrator passes, then re-solves every registered
//! kinematic chain so articulated bodies stay attached to their joints.

use crate::error::PhysicsError;
use crate::integrator::{apply_torques, integrate_orientations, integrate_positions};
use crate::rig::Chain;
use crate::types::{Body, PhysParams, Vec3};

/// Main physics simulation container
pub struct PhysicsSim {
    pub bodies: Vec<Body>,
    pub params: PhysParams,
    pub(crate) chains: Vec<Chain>,
    frame_count: u64,
}

impl Default for PhysicsSim {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsSim {
    /// Create a new empty simulation with default parameters
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(PhysParams::default())
    }

    #[must_use]
    pub fn with_params(params: PhysParams) -> Self {
        Self {
            bodies: Vec::new(),
            params,
            chains: Vec::new(),
            frame_count: 0,
        }
    }

    /// Number of completed steps since creation.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `idx` is out of range.
    pub fn body(&self, idx: usize) -> Result<&Body, PhysicsError> {
        self.bodies.get(idx).ok_or(PhysicsError::UnknownBody(idx))
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `idx` is out of range.
    pub fn body_mut(&mut self, idx: usize) -> Result<&mut Body, PhysicsError> {
        self.bodies.get_mut(idx).ok_or(PhysicsError::UnknownBody(idx))
    }

    /// Accumulate a world-space torque, consumed by the next [`step`](Self::step).
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `idx` is out of range.
    pub fn add_torque(&mut self, idx: usize, torque: Vec3) -> Result<(), PhysicsError> {
        self.body_mut(idx)?.torque += torque;
        Ok(())
    }

    /// Teleport a body. The previous position is reset too so the next step
    /// does not see a velocity spike.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `idx` is out of range.
    pub fn set_pose(&mut self, idx: usize, pos: Vec3, orientation: [f32; 4]) -> Result<(), PhysicsError> {
        let body = self.body_mut(idx)?;
        body.pos = pos;
        body.prev_pos = pos;
        body.orientation = orientation;
        Ok(())
    }

    /// Move a body without touching its orientation.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `idx` is out of range.
    pub fn set_position(&mut self, idx: usize, pos: Vec3) -> Result<(), PhysicsError> {
        let body = self.body_mut(idx)?;
        body.pos = pos;
        body.prev_pos = pos;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `idx` is out of range.
    pub fn set_velocity(&mut self, idx: usize, linear: Vec3, angular: Vec3) -> Result<(), PhysicsError> {
        let body = self.body_mut(idx)?;
        body.vel = linear;
        body.angular_vel = angular;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `idx` is out of range.
    pub fn set_scale(&mut self, idx: usize, scale: Vec3) -> Result<(), PhysicsError> {
        self.body_mut(idx)?.scale = scale;
        Ok(())
    }

    /// Whether the scaled collision spheres of two bodies intersect.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if either index is out of range.
    pub fn overlaps(&self, a: usize, b: usize) -> Result<bool, PhysicsError> {
        let body_a = self.body(a)?;
        let body_b = self.body(b)?;
        let reach = body_a.scaled_radius() + body_b.scaled_radius();
        Ok((body_b.pos - body_a.pos).length_squared() < reach * reach)
    }

    /// Snap every articulated body back onto its chain after links were
    /// posed directly. Derived velocities are zeroed.
    pub fn solve_chains(&mut self) {
        for chain in &self.chains {
            chain.settle(&mut self.bodies);
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        let dt = self.params.dt;
        apply_torques(&mut self.bodies, &self.params);
        integrate_orientations(&mut self.bodies, dt);
        integrate_positions(&mut self.bodies, dt);
        for chain in &self.chains {
            chain.solve(&mut self.bodies, dt);
        }
        self.frame_count += 1;
    }

    /// Advance the simulation by `steps` fixed steps.
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
        tracing::trace!(frame = self.frame_count, "simulation advanced {steps} steps");
    }
}
