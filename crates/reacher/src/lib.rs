#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Reacher
//!
//! Episode controller for a two-link reaching arm, plus the pieces needed to
//! drive it outside a game engine.
//!
//! -   [`ReacherAgent`] implements the [`Agent`] callbacks: it observes arm
//!     state, turns actions into joint torques, moves the goal around the
//!     shoulder, and shapes reward with a movement penalty.
//! -   [`EnvironmentParameters`] and [`StatsRecorder`] are injected into the
//!     agent instead of being looked up globally.
//! -   [`Arena`] wires agent, physics, touch detection and a [`Policy`] into a
//!     complete episode loop.

pub mod agent;
pub mod arena;
pub mod error;
pub mod goal;
pub mod params;
pub mod policy;
pub mod reacher;
pub mod sensor;
pub mod stats;
pub mod touch;

pub use agent::Agent;
pub use arena::{Arena, ArenaConfig, EpisodeSummary, StepResult};
pub use error::AgentError;
pub use goal::{TargetSlot, TouchState};
pub use params::{EnvironmentParameters, ParameterStore};
pub use policy::{Policy, PolicyKind, RandomPolicy, ZeroPolicy};
pub use reacher::{ReacherAgent, ResetParameters, ACTION_SIZE, OBSERVATION_SIZE};
pub use sensor::VectorSensor;
pub use stats::{SharedStats, StatAggregation, StatSummary, StatsCollector, StatsRecorder};
pub use touch::GoalTouchDetector;
