use arm::ArmError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },
    #[error("action has {actual} elements, expected {expected}")]
    Shape { expected: usize, actual: usize },
    #[error("simulation rejected the action: {0}")]
    Simulation(#[from] ArmError),
}

impl EnvError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        EnvError::Configuration { reason: reason.into() }
    }
}
