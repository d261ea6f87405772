//! The reacher episode controller.
//!
//! Torques on two arm links drive a hand towards a goal that orbits the
//! shoulder. After the hand touches the goal and [`RELOCATE_DELAY`] frames
//! pass, the goal jumps to a different quadrant. The only reward is a small
//! penalty proportional to how fast the links move.

use physics::transform::from_euler_degrees;
use physics::{ArmRig, PhysicsSim, Vec3};

use crate::agent::Agent;
use crate::error::AgentError;
use crate::goal::{goal_position, move_penalty, scaled_torque, TargetSlot, TouchState, RELOCATE_DELAY};
use crate::params::EnvironmentParameters;
use crate::sensor::VectorSensor;
use crate::stats::{SharedStats, StatAggregation};

/// Two links of pose, rotation, angular and linear velocity, then goal,
/// hand and the touch flag.
pub const OBSERVATION_SIZE: usize = 2 * (3 + 4 + 3 + 3) + 3 + 3 + 1;
pub const ACTION_SIZE: usize = 4;

/// Telemetry key for the base-to-hand distance sampled on every observation.
pub const DISTANCE_TO_BASE: &str = "Distance to base";

const UPPER_REST_OFFSET: Vec3 = Vec3::new(0.0, -4.0, 0.0);
const LOWER_REST_OFFSET: Vec3 = Vec3::new(0.0, -10.0, 0.0);
const REST_EULER: [f32; 3] = [180.0, 0.0, 0.0];

/// Episode configuration reloaded on every reset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResetParameters {
    /// Goal marker scale on all three axes.
    pub goal_size: f32,
    /// Degrees the goal advances per action, sign and magnitude randomised.
    pub goal_speed: f32,
    /// Amplitude of the vertical wobble.
    pub deviation: f32,
    /// Wobble cycles per revolution.
    pub deviation_freq: f32,
}

impl Default for ResetParameters {
    fn default() -> Self {
        Self { goal_size: 5.0, goal_speed: 0.0, deviation: 0.0, deviation_freq: 0.0 }
    }
}

pub struct ReacherAgent {
    rig: ArmRig,
    params: Box<dyn EnvironmentParameters>,
    stats: SharedStats,
    rng: fastrand::Rng,
    reset_params: ResetParameters,
    goal_degree: f32,
    slot: TargetSlot,
    touch: TouchState,
    move_speed: f32,
    step_reward: f32,
    cumulative_reward: f32,
    step_count: u32,
    relocations: u32,
}

impl ReacherAgent {
    #[must_use]
    pub fn new(rig: ArmRig, params: Box<dyn EnvironmentParameters>, stats: SharedStats, seed: u64) -> Self {
        Self {
            rig,
            params,
            stats,
            rng: fastrand::Rng::with_seed(seed),
            reset_params: ResetParameters::default(),
            goal_degree: 0.0,
            slot: TargetSlot::default(),
            touch: TouchState::default(),
            move_speed: 0.0,
            step_reward: 0.0,
            cumulative_reward: 0.0,
            step_count: 0,
            relocations: 0,
        }
    }

    /// Pull the episode configuration from the parameter source.
    pub fn set_reset_parameters(&mut self) {
        let p = &self.params;
        self.reset_params = ResetParameters {
            goal_size: p.get_with_default("goal_size", 5.0),
            goal_speed: (self.rng.f32() * 2.0 - 1.0) * p.get_with_default("goal_speed", 0.0),
            deviation: p.get_with_default("deviation", 0.0),
            deviation_freq: p.get_with_default("deviation_freq", 0.0),
        };
        tracing::debug!(params = ?self.reset_params, "reset parameters loaded");
    }

    /// Swap the parameter source. Takes effect at the next reset.
    pub fn set_parameters(&mut self, params: Box<dyn EnvironmentParameters>) {
        self.params = params;
    }

    /// Called by the contact collaborator when the hand reaches the goal.
    /// Returns `true` if this contact set the touch flag.
    pub fn notify_touch(&mut self, frame: u64) -> bool {
        let fresh = self.touch.touch(frame);
        if fresh {
            tracing::debug!(frame, slot = self.slot.index(), "goal touched");
        }
        fresh
    }

    pub fn add_reward(&mut self, delta: f32) {
        self.step_reward += delta;
        self.cumulative_reward += delta;
    }

    /// Reward gathered since the last call.
    pub fn take_step_reward(&mut self) -> f32 {
        std::mem::take(&mut self.step_reward)
    }

    #[must_use]
    pub fn cumulative_reward(&self) -> f32 {
        self.cumulative_reward
    }

    /// Actions received in the current episode.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Goal jumps in the current episode.
    #[must_use]
    pub fn relocations(&self) -> u32 {
        self.relocations
    }

    #[must_use]
    pub fn rig(&self) -> &ArmRig {
        &self.rig
    }

    #[must_use]
    pub fn goal_degree(&self) -> f32 {
        self.goal_degree
    }

    #[must_use]
    pub fn slot(&self) -> TargetSlot {
        self.slot
    }

    #[must_use]
    pub fn touch_state(&self) -> TouchState {
        self.touch
    }

    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    #[must_use]
    pub fn reset_parameters(&self) -> ResetParameters {
        self.reset_params
    }

    fn reference(&self) -> Vec3 {
        self.rig.anchor
    }

    fn update_goal_position(&mut self, sim: &mut PhysicsSim) -> Result<(), AgentError> {
        let frame = sim.frame_count();
        if self.touch.should_relocate(frame) {
            let previous = self.slot;
            self.slot = previous.reselect(&self.rng);
            self.goal_degree = self.slot.degrees();
            self.touch.activate(frame);
            self.relocations += 1;
            tracing::debug!(
                frame,
                from = previous.index(),
                to = self.slot.index(),
                delay = RELOCATE_DELAY,
                "goal relocated"
            );
        }

        let ResetParameters { deviation, deviation_freq, .. } = self.reset_params;
        let pos = goal_position(self.reference(), self.goal_degree, deviation, deviation_freq);
        sim.set_position(self.rig.goal, pos)?;

        self.add_reward(move_penalty(self.move_speed));
        Ok(())
    }
}

impl Agent for ReacherAgent {
    fn init(&mut self, sim: &PhysicsSim) -> Result<(), AgentError> {
        if let Some(&missing) = self.rig.bodies().iter().find(|&&idx| sim.body(idx).is_err()) {
            return Err(AgentError::MissingBody(missing));
        }
        self.set_reset_parameters();
        Ok(())
    }

    fn observe(&mut self, sim: &PhysicsSim, sensor: &mut VectorSensor) -> Result<(), AgentError> {
        let reference = self.reference();
        let upper = sim.body(self.rig.upper)?;
        let lower = sim.body(self.rig.lower)?;
        for link in [upper, lower] {
            sensor.add_vec3(link.pos - reference);
            sensor.add_quat(link.orientation);
            sensor.add_vec3(link.angular_vel);
            sensor.add_vec3(link.vel);
        }

        let goal = sim.body(self.rig.goal)?;
        let hand = sim.body(self.rig.hand)?;
        sensor.add_vec3(goal.pos - reference);
        sensor.add_vec3(hand.pos - reference);
        sensor.add_bool(self.touch.just_touched);

        self.move_speed = upper.vel.length() + lower.vel.length();

        tracing::debug!(offset = ?(goal.pos - reference), "goal offset");
        let base = sim.body(self.rig.base)?;
        self.stats
            .borrow_mut()
            .add(DISTANCE_TO_BASE, base.pos.distance(hand.pos), StatAggregation::Average);
        Ok(())
    }

    fn act(&mut self, sim: &mut PhysicsSim, actions: &[f32]) -> Result<(), AgentError> {
        let &[a0, a1, a2, a3] = actions else {
            return Err(AgentError::ActionSize { expected: ACTION_SIZE, actual: actions.len() });
        };
        self.step_count += 1;

        self.goal_degree += self.reset_params.goal_speed;
        self.update_goal_position(sim)?;

        sim.add_torque(self.rig.upper, Vec3::new(scaled_torque(a0), 0.0, scaled_torque(a1)))?;
        sim.add_torque(self.rig.lower, Vec3::new(scaled_torque(a2), 0.0, scaled_torque(a3)))?;
        Ok(())
    }

    fn reset(&mut self, sim: &mut PhysicsSim) -> Result<(), AgentError> {
        let reference = self.reference();
        let [ex, ey, ez] = REST_EULER;
        let rest = from_euler_degrees(ex, ey, ez);
        for (idx, offset) in [(self.rig.upper, UPPER_REST_OFFSET), (self.rig.lower, LOWER_REST_OFFSET)] {
            sim.set_pose(idx, reference + offset, rest)?;
            sim.set_velocity(idx, Vec3::ZERO, Vec3::ZERO)?;
        }
        sim.solve_chains();

        self.step_reward = 0.0;
        self.cumulative_reward = 0.0;
        self.step_count = 0;
        self.relocations = 0;

        self.slot = TargetSlot::random(&self.rng);
        self.goal_degree = self.slot.degrees();
        self.touch = TouchState { time_active: sim.frame_count(), ..TouchState::default() };

        self.update_goal_position(sim)?;
        self.set_reset_parameters();

        let size = self.reset_params.goal_size;
        sim.set_scale(self.rig.goal, Vec3::splat(size))?;
        tracing::debug!(slot = self.slot.index(), goal_size = size, "episode reset");
        Ok(())
    }

    fn observation_size(&self) -> usize {
        OBSERVATION_SIZE
    }

    fn action_size(&self) -> usize {
        ACTION_SIZE
    }
}
