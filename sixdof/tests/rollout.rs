//! End-to-end tests for argument parsing, config merging and rollouts.

use clap::Parser;
use rl::EnvError;
use sixdof::app::run;
use sixdof::config::{Args, Policy, RunConfig};
use std::path::PathBuf;

/// Config file in the temp directory, removed when dropped.
struct TempConfig(PathBuf);

impl TempConfig {
    fn write(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        Self(path)
    }

    fn path(&self) -> &str {
        self.0.to_str().unwrap()
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["sixdof"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn defaults_match_the_documented_configuration() {
    let parsed = args(&[]);
    assert_eq!(parsed.episodes, 3);
    assert_eq!(parsed.policy, Policy::Zero);
    let config = RunConfig::from_args(&parsed).unwrap();
    assert_eq!(config.dof.fixed_axis_index, 2);
    assert_eq!(config.dof.fixed_axis_value, 0.0);
}

#[test]
fn zero_policy_runs_to_truncation() {
    let summaries = run(&args(&["--episodes", "2"])).unwrap();
    assert_eq!(summaries.len(), 2);
    for summary in summaries {
        assert!(summary.steps >= 1 && summary.steps <= 50);
        assert!(summary.total_reward <= 0.0);
    }
}

#[test]
fn random_policy_is_reproducible_for_a_seed() {
    let a = run(&args(&["--episodes", "1", "--policy", "random", "--seed", "7"])).unwrap();
    let b = run(&args(&["--episodes", "1", "--policy", "random", "--seed", "7"])).unwrap();
    assert_eq!(a, b);
}

#[test]
fn negative_fixed_axis_index_is_rejected() {
    let err = run(&args(&["--fixed-axis-index", "-1"])).unwrap_err();
    let root = err.downcast_ref::<EnvError>().unwrap();
    assert!(matches!(root, EnvError::Configuration { .. }));
}

#[test]
fn out_of_range_fixed_axis_index_is_rejected() {
    let err = run(&args(&["--fixed-axis-index", "7"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EnvError>(),
        Some(EnvError::Configuration { .. })
    ));
}

#[test]
fn flags_override_config_file_values() {
    let config = TempConfig::write(
        "sixdof-config",
        r#"{
            "dof": { "fixed_axis_index": 5, "fixed_axis_value": 0.25 },
            "reach": { "max_episode_steps": 4 }
        }"#,
    );

    let from_file = RunConfig::from_args(&args(&["--config", config.path()])).unwrap();
    assert_eq!(from_file.dof.fixed_axis_index, 5);
    assert_eq!(from_file.dof.fixed_axis_value, 0.25);
    assert_eq!(from_file.reach.max_episode_steps, 4);

    let overridden = RunConfig::from_args(&args(&[
        "--config",
        config.path(),
        "--fixed-axis-index",
        "1",
    ]))
    .unwrap();
    assert_eq!(overridden.dof.fixed_axis_index, 1);
    assert_eq!(overridden.dof.fixed_axis_value, 0.25);

    let summaries = run(&args(&["--config", config.path(), "--episodes", "1"])).unwrap();
    assert!(summaries[0].steps <= 4);
}

#[test]
fn episode_seeds_wrap_at_the_largest_seed() {
    let summaries = run(&args(&["--seed", "18446744073709551615", "--episodes", "2"])).unwrap();
    assert_eq!(summaries.len(), 2);

    // the second episode wraps around to seed 0
    let wrapped = run(&args(&["--seed", "0", "--episodes", "1"])).unwrap();
    assert_eq!(summaries[1], wrapped[0]);
}

#[test]
fn missing_config_file_is_an_error() {
    let parsed = args(&["--config", "/nonexistent/sixdof.json"]);
    assert!(RunConfig::from_args(&parsed).is_err());
}
