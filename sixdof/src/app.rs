//! # Rollout loop
//!
//! Builds the 7-DOF reaching environment, hides one joint behind a
//! [`DofRemapper`], and steps episodes with the selected policy.

use anyhow::{Context, Result};
use rl::{DofRemapper, Env, ReachEnv, ResetOptions};

use crate::config::{Args, Policy, RunConfig};

/// Outcome of one episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    pub steps: u32,
    pub total_reward: f32,
    pub success: bool,
}

/// Runs every requested episode and returns their summaries.
///
/// Episode `i` is reset with seed `args.seed + i`, wrapping at `u64::MAX`.
///
/// # Errors
///
/// Returns configuration errors from building the wrapper and any error the
/// environment raises while stepping.
pub fn run(args: &Args) -> Result<Vec<EpisodeSummary>> {
    let config = RunConfig::from_args(args)?;
    let mut env = DofRemapper::from_config(ReachEnv::new(config.reach), &config.dof)
        .context("building the 6-DOF wrapper")?;
    let mut rng = fastrand::Rng::with_seed(args.seed);

    tracing::info!(
        "Running {} episodes with the {:?} policy over a {}-dimensional action space",
        args.episodes,
        args.policy,
        env.action_space().dim()
    );

    let mut summaries = Vec::with_capacity(args.episodes as usize);
    for episode in 0..args.episodes {
        let seed = args.seed.wrapping_add(u64::from(episode));
        let summary = run_episode(&mut env, args.policy, seed, &mut rng)
            .with_context(|| format!("episode {episode}"))?;
        tracing::info!(
            "Episode {} finished after {} steps. Return: {:.3}, success: {}",
            episode,
            summary.steps,
            summary.total_reward,
            summary.success
        );
        summaries.push(summary);
    }
    Ok(summaries)
}

fn run_episode<E: Env>(
    env: &mut E,
    policy: Policy,
    seed: u64,
    rng: &mut fastrand::Rng,
) -> Result<EpisodeSummary> {
    env.reset(&ResetOptions::seeded(seed))?;
    let dim = env.action_space().dim();
    let mut summary = EpisodeSummary {
        steps: 0,
        total_reward: 0.0,
        success: false,
    };
    loop {
        let action = match policy {
            Policy::Zero => vec![0.0; dim],
            Policy::Random => env.action_space().sample(rng),
        };
        let result = env.step(&action)?;
        summary.steps += 1;
        summary.total_reward += result.reward;
        if result.done() {
            summary.success = result.info.get("is_success").is_some_and(|s| *s > 0.5);
            return Ok(summary);
        }
    }
}
