#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # RL environment layer
//!
//! Environment interface and wrappers sitting between control policies and
//! the manipulator simulation.
//!
//! -   [`Env`] is the capability interface every environment and wrapper
//!     implements: an action space, `reset` and `step`.
//! -   [`BoxSpace`] describes per-axis bounds of a continuous action vector.
//! -   [`DofRemapper`] turns an `n`-DOF environment into an `n - 1`-DOF one by
//!     holding one action axis at a fixed value.
//! -   [`ReachEnv`] is a 7-DOF reaching task over [`arm::ArmSim`].
//!
//! ```rust
//! use rl::{DofRemapper, Env, FixedAxis, ReachEnv, ResetOptions};
//!
//! let mut env = DofRemapper::new(ReachEnv::default(), FixedAxis::new(2, 0.0))?;
//! assert_eq!(env.action_space().dim(), 6);
//! env.reset(&ResetOptions::seeded(1))?;
//! let result = env.step(&[0.0; 6])?;
//! assert!(result.reward <= 0.0);
//! # Ok::<(), rl::EnvError>(())
//! ```

pub mod dof;
pub mod env;
pub mod error;
pub mod reach;
pub mod space;

pub use dof::{DofConfig, DofRemapper, FixedAxis};
pub use env::{Env, Info, ResetOptions, StepResult};
pub use error::EnvError;
pub use reach::{ReachConfig, ReachEnv};
pub use space::BoxSpace;
