//! # Run configuration
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional JSON file, and explicit command-line flags.
//!
//! ```json
//! {
//!   "dof": { "fixed_axis_index": 2, "fixed_axis_value": 0.0 },
//!   "reach": { "max_episode_steps": 100 }
//! }
//! ```
//!
//! Every field is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rl::{DofConfig, ReachConfig};
use serde::{Deserialize, Serialize};

/// Drive the reaching task through a 6-DOF action interface.
#[derive(Parser, Debug, Clone)]
#[command(name = "sixdof", version, about)]
pub struct Args {
    /// Full-vector position removed from the action space [default: 2]
    #[arg(long, allow_negative_numbers = true)]
    pub fixed_axis_index: Option<i64>,

    /// Value substituted at the removed position on every step [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    pub fixed_axis_value: Option<f32>,

    /// JSON file with `dof` and `reach` sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of episodes to roll out
    #[arg(long, default_value_t = 3)]
    pub episodes: u32,

    /// Seed for goal sampling and the random policy
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = Policy::Zero)]
    pub policy: Policy,
}

/// Action source for rollouts.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Always command zero displacement.
    Zero,
    /// Sample uniformly from the reduced action space.
    Random,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub dof: DofConfig,
    pub reach: ReachConfig,
}

impl RunConfig {
    /// Loads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid JSON for this layout.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Resolves the effective configuration for `args`.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`RunConfig::load`].
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(index) = args.fixed_axis_index {
            config.dof.fixed_axis_index = index;
        }
        if let Some(value) = args.fixed_axis_value {
            config.dof.fixed_axis_value = value;
        }
        Ok(config)
    }
}
