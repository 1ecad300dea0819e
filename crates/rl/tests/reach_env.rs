//! Tests for the 7-DOF reaching environment, alone and behind the 6-DOF adapter.

use approx::assert_relative_eq;
use arm::{ArmError, NEUTRAL_POSE};
use rl::reach::OBSERVATION_SIZE;
use rl::{DofConfig, DofRemapper, Env, EnvError, ReachConfig, ReachEnv, ResetOptions};

#[test]
fn reset_returns_neutral_pose_and_goal_in_range() {
    let mut env = ReachEnv::default();
    let (obs, info) = env.reset(&ResetOptions::seeded(3)).unwrap();
    assert_eq!(obs.len(), OBSERVATION_SIZE);
    assert_eq!(&obs[..7], &NEUTRAL_POSE);

    let config = ReachConfig::default();
    let goal = env.goal();
    for axis in 0..3 {
        assert!(goal[axis] >= config.goal_low[axis] && goal[axis] <= config.goal_high[axis]);
        assert_eq!(obs[10 + axis], goal[axis]);
    }
    assert_eq!(info.get("elapsed_steps"), Some(&0.0));
}

#[test]
fn same_seed_gives_same_goal() {
    let mut a = ReachEnv::default();
    let mut b = ReachEnv::default();
    a.reset(&ResetOptions::seeded(11)).unwrap();
    b.reset(&ResetOptions::seeded(11)).unwrap();
    assert_eq!(a.goal(), b.goal());
}

#[test]
fn reward_is_negative_distance() {
    let mut env = ReachEnv::default();
    env.reset(&ResetOptions::seeded(5)).unwrap();
    let result = env.step(&[0.0; 7]).unwrap();
    let distance = result.info["distance"];
    assert_relative_eq!(result.reward, -distance);
    assert!(distance > 0.0);
}

#[test]
fn actions_are_scaled_and_clamped() {
    let mut env = ReachEnv::new(ReachConfig {
        joint_step: 0.1,
        ..ReachConfig::default()
    });
    env.reset(&ResetOptions::default()).unwrap();
    env.step(&[5.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    assert_relative_eq!(env.joints()[0], NEUTRAL_POSE[0] + 0.1, epsilon = 1e-6);
    assert_relative_eq!(env.joints()[1], NEUTRAL_POSE[1] - 0.05, epsilon = 1e-6);
}

#[test]
fn episode_truncates_at_step_limit() {
    let mut env = ReachEnv::new(ReachConfig {
        max_episode_steps: 3,
        ..ReachConfig::default()
    });
    env.reset(&ResetOptions::seeded(1)).unwrap();
    assert!(!env.step(&[0.0; 7]).unwrap().truncated);
    assert!(!env.step(&[0.0; 7]).unwrap().truncated);
    let last = env.step(&[0.0; 7]).unwrap();
    assert!(last.truncated);
    assert!(last.done());
}

#[test]
fn reaching_the_goal_terminates() {
    let mut env = ReachEnv::new(ReachConfig {
        distance_threshold: 10.0,
        ..ReachConfig::default()
    });
    env.reset(&ResetOptions::seeded(1)).unwrap();
    let result = env.step(&[0.0; 7]).unwrap();
    assert!(result.terminated);
    assert_eq!(result.info.get("is_success"), Some(&1.0));
}

#[test]
fn invalid_actions_are_rejected() {
    let mut env = ReachEnv::default();
    env.reset(&ResetOptions::default()).unwrap();
    assert_eq!(
        env.step(&[0.0; 6]).unwrap_err(),
        EnvError::Shape { expected: 7, actual: 6 }
    );
    let mut action = [0.0; 7];
    action[2] = f32::NAN;
    assert_eq!(
        env.step(&action).unwrap_err(),
        EnvError::Simulation(ArmError::NonFinite { joint: 2 })
    );
}

#[test]
fn six_dof_view_holds_the_elbow_joint() {
    let mut env = DofRemapper::from_config(ReachEnv::default(), &DofConfig::default()).unwrap();
    assert_eq!(env.action_space().dim(), 6);
    assert_eq!(env.observation_size(), OBSERVATION_SIZE);

    env.reset(&ResetOptions::seeded(9)).unwrap();
    for _ in 0..10 {
        env.step(&[1.0; 6]).unwrap();
    }
    // the held joint only ever receives a zero command
    assert_relative_eq!(env.inner().joints()[2], NEUTRAL_POSE[2]);
    assert!(env.inner().joints()[0] > NEUTRAL_POSE[0]);
}
