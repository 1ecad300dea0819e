//! Degrees-of-freedom adapter.
//!
//! [`DofRemapper`] makes an `n`-dimensional environment present itself as an
//! `n - 1`-dimensional one. One axis of the full action vector is removed from
//! the public action space and held at a fixed value on every step. The
//! typical use is locking the redundant elbow joint of a 7-DOF arm so that
//! policies and baselines see a 6-DOF interface.
//!
//! Observations, rewards, flags and info pass through untouched.

use serde::{Deserialize, Serialize};

use crate::space::{insert_axis, BoxSpace};
use crate::{Env, EnvError, Info, ResetOptions, StepResult};

/// Construction-time options for [`DofRemapper`].
///
/// The index is signed so that a negative value coming from a config file or
/// the command line reaches validation instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DofConfig {
    /// Position in the full action vector that is removed.
    pub fixed_axis_index: i64,
    /// Value substituted at that position on every step.
    pub fixed_axis_value: f32,
}

impl Default for DofConfig {
    fn default() -> Self {
        Self {
            fixed_axis_index: 2,
            fixed_axis_value: 0.0,
        }
    }
}

impl DofConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Configuration`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, EnvError> {
        serde_json::from_str(json).map_err(|e| EnvError::configuration(e.to_string()))
    }
}

/// The axis held constant and the value it is held at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAxis {
    pub index: usize,
    pub value: f32,
}

impl FixedAxis {
    #[must_use]
    pub const fn new(index: usize, value: f32) -> Self {
        Self { index, value }
    }
}

impl TryFrom<&DofConfig> for FixedAxis {
    type Error = EnvError;

    fn try_from(config: &DofConfig) -> Result<Self, Self::Error> {
        let index = usize::try_from(config.fixed_axis_index).map_err(|_| {
            EnvError::configuration(format!(
                "fixed axis index {} is negative",
                config.fixed_axis_index
            ))
        })?;
        Ok(Self::new(index, config.fixed_axis_value))
    }
}

/// Wraps an environment and removes one action axis from its interface.
pub struct DofRemapper<E: Env> {
    env: E,
    fixed: FixedAxis,
    action_space: BoxSpace,
}

impl<E: Env> DofRemapper<E> {
    /// Wraps `env`, deriving the reduced action space once.
    ///
    /// The fixed value is not checked against the bounds of the removed axis.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Configuration`] if the wrapped environment's
    /// bounds have mismatched lengths or `fixed.index` is not a valid axis.
    pub fn new(env: E, fixed: FixedAxis) -> Result<Self, EnvError> {
        let full = env.action_space();
        let action_space = full.without_axis(fixed.index)?;

        tracing::info!(
            full_dim = full.dim(),
            reduced_dim = action_space.dim(),
            fixed_axis = fixed.index,
            fixed_value = fixed.value,
            "Reduced {}-DOF action space to {}-DOF",
            full.dim(),
            action_space.dim()
        );

        Ok(Self {
            env,
            fixed,
            action_space,
        })
    }

    /// Wraps `env` using a [`DofConfig`].
    ///
    /// # Errors
    ///
    /// See [`DofRemapper::new`]; a negative index is also rejected.
    pub fn from_config(env: E, config: &DofConfig) -> Result<Self, EnvError> {
        Self::new(env, FixedAxis::try_from(config)?)
    }

    #[must_use]
    pub fn fixed_axis(&self) -> FixedAxis {
        self.fixed
    }

    /// Action space of the wrapped environment.
    #[must_use]
    pub fn full_action_space(&self) -> &BoxSpace {
        self.env.action_space()
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.env
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    #[must_use]
    pub fn into_inner(self) -> E {
        self.env
    }

    /// Maps a reduced action to the full action vector.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Shape`] if `reduced` does not have exactly
    /// `n - 1` elements.
    pub fn expand(&self, reduced: &[f32]) -> Result<Vec<f32>, EnvError> {
        let expected = self.action_space.dim();
        if reduced.len() != expected {
            return Err(EnvError::Shape {
                expected,
                actual: reduced.len(),
            });
        }
        insert_axis(reduced, self.fixed.index, self.fixed.value)
    }
}

impl<E: Env> Env for DofRemapper<E> {
    fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    fn observation_size(&self) -> usize {
        self.env.observation_size()
    }

    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f32>, Info), EnvError> {
        self.env.reset(options)
    }

    fn step(&mut self, action: &[f32]) -> Result<StepResult, EnvError> {
        let full = self.expand(action)?;
        tracing::trace!(?full, "expanded action");
        self.env.step(&full)
    }
}
