use physics::PhysicsSim;

use crate::error::AgentError;
use crate::sensor::VectorSensor;

/// Reinforcement learning agent driven by an external loop.
///
/// The loop calls [`init`] once, then [`observe`] and [`act`] once per
/// simulation step, and [`reset`] at every episode boundary. All calls happen
/// on one thread and never overlap, so implementations may freely mutate the
/// simulation they are handed.
///
/// [`init`]: Agent::init
/// [`observe`]: Agent::observe
/// [`act`]: Agent::act
/// [`reset`]: Agent::reset
pub trait Agent {
    /// Bind to the simulation and read the initial configuration.
    ///
    /// # Errors
    ///
    /// Fails if a body the agent controls is missing from `sim`.
    fn init(&mut self, sim: &PhysicsSim) -> Result<(), AgentError>;

    /// Write the current observation into `sensor`.
    ///
    /// # Errors
    ///
    /// Fails if a body the agent reads is missing from `sim`.
    fn observe(&mut self, sim: &PhysicsSim, sensor: &mut VectorSensor) -> Result<(), AgentError>;

    /// Apply one action vector of length [`action_size`](Agent::action_size).
    ///
    /// # Errors
    ///
    /// Fails on a wrongly sized action vector or a missing body.
    fn act(&mut self, sim: &mut PhysicsSim, actions: &[f32]) -> Result<(), AgentError>;

    /// Start a new episode.
    ///
    /// # Errors
    ///
    /// Fails if a body the agent resets is missing from `sim`.
    fn reset(&mut self, sim: &mut PhysicsSim) -> Result<(), AgentError>;

    /// Size of the observation vector.
    fn observation_size(&self) -> usize;

    /// Size of the action vector.
    fn action_size(&self) -> usize;
}
