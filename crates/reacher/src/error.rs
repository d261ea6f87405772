use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("expected {expected} actions, got {actual}")]
    ActionSize { expected: usize, actual: usize },
    #[error("body {0} is not present in the simulation")]
    MissingBody(usize),
    #[error("episode length must be positive")]
    InvalidEpisodeLength,
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
