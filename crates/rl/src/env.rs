use std::collections::BTreeMap;

use crate::{BoxSpace, EnvError};

/// Auxiliary per-step diagnostics keyed by name.
pub type Info = BTreeMap<String, f32>;

/// Everything an environment reports after one action.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub observation: Vec<f32>,
    pub reward: f32,
    /// The episode reached a terminal state of the task.
    pub terminated: bool,
    /// The episode was cut short, e.g. by a step limit.
    pub truncated: bool,
    pub info: Info,
}

impl StepResult {
    #[must_use]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Options passed to [`Env::reset`]. Wrappers forward them untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetOptions {
    pub seed: Option<u64>,
    pub options: Info,
}

impl ResetOptions {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            options: Info::new(),
        }
    }
}

/// Reinforcement learning environment with a continuous action vector.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns a [`StepResult`].
///
/// [`step`]: Env::step
pub trait Env {
    /// Bounds of the action vector this environment accepts.
    fn action_space(&self) -> &BoxSpace;

    /// Size of the observation vector.
    fn observation_size(&self) -> usize;

    /// Reset the environment to a starting state and return the initial
    /// observation with its info.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f32>, Info), EnvError>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Implementations return [`EnvError::Shape`] when `action` does not
    /// match [`Env::action_space`], plus any simulation failure.
    fn step(&mut self, action: &[f32]) -> Result<StepResult, EnvError>;
}

impl<E: Env + ?Sized> Env for &mut E {
    fn action_space(&self) -> &BoxSpace {
        (**self).action_space()
    }

    fn observation_size(&self) -> usize {
        (**self).observation_size()
    }

    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f32>, Info), EnvError> {
        (**self).reset(options)
    }

    fn step(&mut self, action: &[f32]) -> Result<StepResult, EnvError> {
        (**self).step(action)
    }
}

impl<E: Env + ?Sized> Env for Box<E> {
    fn action_space(&self) -> &BoxSpace {
        (**self).action_space()
    }

    fn observation_size(&self) -> usize {
        (**self).observation_size()
    }

    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f32>, Info), EnvError> {
        (**self).reset(options)
    }

    fn step(&mut self, action: &[f32]) -> Result<StepResult, EnvError> {
        (**self).step(action)
    }
}
