//! # sixdof
//!
//! Command-line rollout runner for the 6-DOF view of the reaching task.
//!
//! The binary parses [`config::Args`], merges them over an optional JSON
//! [`config::RunConfig`], and hands off to [`app::run`]. Progress is reported
//! through `tracing`; set `RUST_LOG` to change verbosity.

pub mod app;
pub mod config;
