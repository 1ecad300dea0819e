//! Continuous action-space descriptor and index-shifted copy helpers.

use serde::{Deserialize, Serialize};

use crate::EnvError;

/// Per-axis inclusive bounds for a continuous action vector.
///
/// Fields are public so an environment can expose whatever bounds it was
/// built with. Consumers that depend on the two sequences lining up should
/// check [`BoxSpace::is_consistent`] first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSpace {
    pub low: Vec<f32>,
    pub high: Vec<f32>,
}

impl BoxSpace {
    /// Builds a descriptor from lower and upper bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Configuration`] if the two sequences differ in length.
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Result<Self, EnvError> {
        if low.len() != high.len() {
            return Err(EnvError::configuration(format!(
                "lower bounds have {} elements but upper bounds have {}",
                low.len(),
                high.len()
            )));
        }
        Ok(Self { low, high })
    }

    /// Same bounds on every axis.
    #[must_use]
    pub fn uniform(dim: usize, low: f32, high: f32) -> Self {
        Self {
            low: vec![low; dim],
            high: vec![high; dim],
        }
    }

    /// Number of axes, taken from the lower bounds.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.low.len() == self.high.len()
    }

    /// True when `action` has one value per axis and each lies within its bounds.
    #[must_use]
    pub fn contains(&self, action: &[f32]) -> bool {
        self.is_consistent()
            && action.len() == self.dim()
            && action
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(a, (lo, hi))| *lo <= *a && *a <= *hi)
    }

    /// Draws a point uniformly from the box.
    #[must_use]
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec<f32> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(lo, hi)| lo + rng.f32() * (hi - lo))
            .collect()
    }

    /// Derives the descriptor with axis `index` removed from both bound sequences.
    ///
    /// Position `i` of the result maps to position `i` of `self` for
    /// `i < index` and to `i + 1` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Configuration`] if the bounds are inconsistent or
    /// `index` is not a valid axis.
    pub fn without_axis(&self, index: usize) -> Result<Self, EnvError> {
        if !self.is_consistent() {
            return Err(EnvError::configuration(format!(
                "lower bounds have {} elements but upper bounds have {}",
                self.low.len(),
                self.high.len()
            )));
        }
        Ok(Self {
            low: remove_axis(&self.low, index)?,
            high: remove_axis(&self.high, index)?,
        })
    }
}

/// Copies `values` without the element at `index`.
///
/// # Errors
///
/// Returns [`EnvError::Configuration`] if `index >= values.len()`.
pub fn remove_axis(values: &[f32], index: usize) -> Result<Vec<f32>, EnvError> {
    if index >= values.len() {
        return Err(EnvError::configuration(format!(
            "axis {index} is out of range for {} axes",
            values.len()
        )));
    }
    let mut out = Vec::with_capacity(values.len() - 1);
    out.extend_from_slice(&values[..index]);
    out.extend_from_slice(&values[index + 1..]);
    Ok(out)
}

/// Copies `values` with `value` placed at `index`; later elements shift right by one.
///
/// # Errors
///
/// Returns [`EnvError::Configuration`] if `index > values.len()`.
pub fn insert_axis(values: &[f32], index: usize, value: f32) -> Result<Vec<f32>, EnvError> {
    if index > values.len() {
        return Err(EnvError::configuration(format!(
            "cannot insert at axis {index} into {} axes",
            values.len()
        )));
    }
    let mut out = Vec::with_capacity(values.len() + 1);
    out.extend_from_slice(&values[..index]);
    out.push(value);
    out.extend_from_slice(&values[index..]);
    Ok(out)
}
