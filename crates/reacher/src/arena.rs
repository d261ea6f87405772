//! # Reacher Arena
//!
//! Owns the simulation, the agent, and the touch detector, and runs them in
//! the fixed per-step order the agent expects:
//!
//! 1. `observe` into the sensor,
//! 2. query the policy (every `decision_period` steps, otherwise the previous
//!    action is repeated),
//! 3. `act`,
//! 4. advance physics one step,
//! 5. report hand/goal contact.
//!
//! Episodes end after `max_steps` actions.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use physics::{ArmConfig, ArmRig, PhysParams, PhysicsSim, Vec3};
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::error::AgentError;
use crate::params::ParameterStore;
use crate::policy::Policy;
use crate::reacher::ReacherAgent;
use crate::sensor::VectorSensor;
use crate::stats::{SharedStats, StatAggregation, StatsCollector, StatsRecorder};
use crate::touch::GoalTouchDetector;

pub const CUMULATIVE_REWARD: &str = "Episode/Cumulative Reward";
pub const EPISODE_LENGTH: &str = "Episode/Length";
pub const EPISODE_TOUCHES: &str = "Episode/Touches";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Actions per episode.
    pub max_steps: u32,
    /// Steps between policy queries.
    pub decision_period: u32,
    /// Seed for the agent's own randomness.
    pub seed: u64,
    /// Shoulder position of the arm.
    pub anchor: [f32; 3],
    /// Physics time step in seconds.
    pub dt: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_steps: 4000,
            decision_period: 1,
            seed: 0,
            anchor: [0.0; 3],
            dt: PhysParams::default().dt,
        }
    }
}

/// Outcome of one simulation step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepResult {
    pub reward: f32,
    /// Whether the hand flagged a new touch this step.
    pub touched: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: u32,
    pub steps: u32,
    pub cumulative_reward: f32,
    pub touches: u32,
    pub relocations: u32,
}

pub struct Arena {
    sim: PhysicsSim,
    agent: ReacherAgent,
    detector: GoalTouchDetector,
    stats: Rc<RefCell<StatsCollector>>,
    sensor: VectorSensor,
    actions: Vec<f32>,
    config: ArenaConfig,
    episodes: u32,
}

impl Arena {
    /// Build the arm, bind the agent to it, run its `init`, and start the
    /// first episode so [`step`](Self::step) can be called right away.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidEpisodeLength`] for `max_steps == 0`,
    /// [`AgentError::InvalidParameter`] for a zero decision period or a
    /// non-positive time step, or any error from [`Agent::init`] or
    /// [`Agent::reset`].
    pub fn new(config: ArenaConfig, params: ParameterStore) -> Result<Self, AgentError> {
        if config.max_steps == 0 {
            return Err(AgentError::InvalidEpisodeLength);
        }
        if config.decision_period == 0 {
            return Err(AgentError::InvalidParameter("decision_period must be positive".into()));
        }
        if config.dt.is_nan() || config.dt <= 0.0 {
            return Err(AgentError::InvalidParameter(format!("dt must be positive, got {}", config.dt)));
        }

        let mut sim = PhysicsSim::with_params(PhysParams { dt: config.dt, ..PhysParams::default() });
        let rig = ArmRig::new(&mut sim, Vec3::from(config.anchor), ArmConfig::default());

        let stats = StatsCollector::shared();
        let shared: SharedStats = stats.clone();
        let mut agent = ReacherAgent::new(rig, Box::new(params), shared, config.seed);
        agent.init(&sim)?;

        let detector = GoalTouchDetector::for_agent(&agent);
        let sensor = VectorSensor::new(agent.observation_size());
        let actions = vec![0.0; agent.action_size()];
        let mut arena = Self { sim, agent, detector, stats, sensor, actions, config, episodes: 0 };
        arena.begin_episode()?;
        Ok(arena)
    }

    #[must_use]
    pub fn sim(&self) -> &PhysicsSim {
        &self.sim
    }

    #[must_use]
    pub fn agent(&self) -> &ReacherAgent {
        &self.agent
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> Ref<'_, StatsCollector> {
        self.stats.borrow()
    }

    /// Most recent observation.
    #[must_use]
    pub fn observation(&self) -> &[f32] {
        self.sensor.as_slice()
    }

    /// Episodes completed so far.
    #[must_use]
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    /// Replace the episode parameters; the agent picks them up on its next reset.
    pub fn update_parameters(&mut self, params: ParameterStore) {
        self.agent.set_parameters(Box::new(params));
    }

    /// Start a new episode without running it.
    ///
    /// # Errors
    ///
    /// Propagates [`Agent::reset`] failures.
    pub fn begin_episode(&mut self) -> Result<(), AgentError> {
        self.agent.reset(&mut self.sim)?;
        self.detector.reset_count();
        self.actions.fill(0.0);
        Ok(())
    }

    /// Run one observe/act/physics cycle of the current episode.
    ///
    /// # Errors
    ///
    /// Propagates agent and touch detection failures.
    pub fn step(&mut self, policy: &mut dyn Policy) -> Result<StepResult, AgentError> {
        self.sensor.reset();
        self.agent.observe(&self.sim, &mut self.sensor)?;
        if self.agent.step_count() % self.config.decision_period == 0 {
            policy.act(self.sensor.as_slice(), &mut self.actions);
        }
        self.agent.act(&mut self.sim, &self.actions)?;
        self.sim.step();
        let touched = self.detector.check(&self.sim, &mut self.agent)?;
        Ok(StepResult { reward: self.agent.take_step_reward(), touched })
    }

    /// Reset, then step until the episode's step budget is spent.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`begin_episode`](Self::begin_episode) or
    /// [`step`](Self::step).
    #[allow(clippy::cast_precision_loss)]
    pub fn run_episode(&mut self, policy: &mut dyn Policy) -> Result<EpisodeSummary, AgentError> {
        self.begin_episode()?;
        while self.agent.step_count() < self.config.max_steps {
            self.step(policy)?;
        }

        let summary = EpisodeSummary {
            episode: self.episodes,
            steps: self.agent.step_count(),
            cumulative_reward: self.agent.cumulative_reward(),
            touches: self.detector.contacts(),
            relocations: self.agent.relocations(),
        };
        {
            let mut stats = self.stats.borrow_mut();
            stats.add(CUMULATIVE_REWARD, summary.cumulative_reward, StatAggregation::Average);
            stats.add(EPISODE_LENGTH, summary.steps as f32, StatAggregation::Average);
            stats.add(EPISODE_TOUCHES, summary.touches as f32, StatAggregation::Sum);
        }
        tracing::info!(
            episode = summary.episode,
            steps = summary.steps,
            reward = summary.cumulative_reward,
            touches = summary.touches,
            relocations = summary.relocations,
            "episode finished"
        );
        self.episodes += 1;
        Ok(summary)
    }
}
