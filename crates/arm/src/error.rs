use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArmError {
    #[error("expected {expected} joint values, got {actual}")]
    JointCount { expected: usize, actual: usize },
    #[error("joint {joint} received a non-finite value")]
    NonFinite { joint: usize },
}
