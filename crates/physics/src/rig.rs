//! Two-link arm entity for reaching tasks
//!
//! This module provides a high-level arm entity that wraps the simulation
//! bodies for a shoulder link, an elbow link, a hand at the tip, a static base
//! marker at the shoulder, and a free-floating goal marker.

use crate::transform::{from_euler_degrees, rotate};
use crate::types::{Body, Vec3};
use crate::PhysicsSim;

/// One rigid segment of a kinematic chain.
#[derive(Clone, Debug)]
pub(crate) struct ChainLink {
    pub body: usize,
    pub length: f32,
}

/// Serial chain of links hanging off a fixed anchor.
///
/// Each link's orientation is owned by its body; positions are derived. The
/// local `+Y` axis of a link points from its joint towards its tip.
#[derive(Clone, Debug)]
pub(crate) struct Chain {
    pub anchor: Vec3,
    pub links: Vec<ChainLink>,
    pub tip: Option<usize>,
}

impl Chain {
    pub(crate) fn solve(&self, bodies: &mut [Body], dt: f32) {
        let mut joint = self.anchor;
        let mut tip_orientation = Body::IDENTITY;
        for link in &self.links {
            let Some(body) = bodies.get_mut(link.body) else {
                continue;
            };
            let axis = rotate(body.orientation, Vec3::new(0.0, link.length, 0.0));
            place(body, joint + axis * 0.5, dt);
            tip_orientation = body.orientation;
            joint += axis;
        }
        if let Some(tip) = self.tip.and_then(|idx| bodies.get_mut(idx)) {
            place(tip, joint, dt);
            tip.orientation = tip_orientation;
        }
    }

    /// Re-derive positions from orientations with zero velocity, as after a teleport.
    pub(crate) fn settle(&self, bodies: &mut [Body]) {
        self.solve(bodies, 0.0);
        let members = self.links.iter().map(|link| link.body).chain(self.tip);
        for idx in members {
            if let Some(body) = bodies.get_mut(idx) {
                body.prev_pos = body.pos;
            }
        }
    }
}

fn place(body: &mut Body, pos: Vec3, dt: f32) {
    body.pos = pos;
    body.vel = if dt > 0.0 { (pos - body.prev_pos) / dt } else { Vec3::ZERO };
}

/// Configuration for an arm entity
#[derive(Clone, Debug)]
pub struct ArmConfig {
    /// Upper link length, shoulder to elbow
    pub upper_length: f32,
    /// Lower link length, elbow to hand
    pub lower_length: f32,
    pub upper_inertia: f32,
    pub lower_inertia: f32,
    pub link_radius: f32,
    pub hand_radius: f32,
    /// Goal marker radius at unit scale
    pub goal_radius: f32,
    pub base_radius: f32,
    /// Initial link orientation in Euler degrees
    pub rest_euler: [f32; 3],
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            upper_length: 8.0,
            lower_length: 4.0,
            upper_inertia: 25.0,
            lower_inertia: 10.0,
            link_radius: 0.5,
            hand_radius: 0.5,
            goal_radius: 0.5,
            base_radius: 0.5,
            rest_euler: [180.0, 0.0, 0.0],
        }
    }
}

/// An arm entity in the physics simulation
#[derive(Clone, Debug)]
pub struct ArmRig {
    /// Shoulder anchor, also the reference position of the arm
    pub anchor: Vec3,
    pub upper: usize,
    pub lower: usize,
    pub hand: usize,
    /// Static marker at the shoulder
    pub base: usize,
    pub goal: usize,
    pub config: ArmConfig,
}

impl ArmRig {
    /// Create the arm bodies in their rest pose and register the chain.
    pub fn new(sim: &mut PhysicsSim, anchor: Vec3, config: ArmConfig) -> Self {
        let [ex, ey, ez] = config.rest_euler;
        let rest = from_euler_degrees(ex, ey, ez);

        let upper = sim.add_dynamic_body(anchor, config.link_radius, config.upper_inertia);
        let lower = sim.add_dynamic_body(anchor, config.link_radius, config.lower_inertia);
        let hand = sim.add_kinematic_body(anchor, config.hand_radius);
        let base = sim.add_kinematic_body(anchor, config.base_radius);
        let goal = sim.add_kinematic_body(anchor, config.goal_radius);
        for idx in [upper, lower] {
            sim.bodies[idx].orientation = rest;
        }

        let chain = Chain {
            anchor,
            links: vec![
                ChainLink { body: upper, length: config.upper_length },
                ChainLink { body: lower, length: config.lower_length },
            ],
            tip: Some(hand),
        };
        chain.settle(&mut sim.bodies);
        sim.chains.push(chain);

        tracing::debug!(?anchor, upper, lower, hand, goal, "arm rig created");
        Self { anchor, upper, lower, hand, base, goal, config }
    }

    /// Position of a body relative to the arm anchor.
    ///
    /// Returns `None` for an unknown body index.
    #[must_use]
    pub fn local_position(&self, sim: &PhysicsSim, idx: usize) -> Option<Vec3> {
        sim.bodies.get(idx).map(|b| b.pos - self.anchor)
    }

    /// Whether all of the rig's bodies exist in `sim`.
    #[must_use]
    pub fn is_bound(&self, sim: &PhysicsSim) -> bool {
        self.bodies().iter().all(|&idx| idx < sim.bodies.len())
    }

    #[must_use]
    pub fn bodies(&self) -> [usize; 5] {
        [self.upper, self.lower, self.hand, self.base, self.goal]
    }
}
