use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    #[error("no body with index {0}")]
    UnknownBody(usize),
}
