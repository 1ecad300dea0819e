use arm::{ArmSim, JOINT_COUNT, NEUTRAL_POSE};
use serde::{Deserialize, Serialize};

use crate::{BoxSpace, Env, EnvError, Info, ResetOptions, StepResult};

/// Joint positions, end-effector position, goal position.
pub const OBSERVATION_SIZE: usize = JOINT_COUNT + 3 + 3;

/// Tunables for [`ReachEnv`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReachConfig {
    /// Joint displacement in radians for a full-scale action.
    pub joint_step: f32,
    /// Goal counts as reached within this distance in meters.
    pub distance_threshold: f32,
    pub max_episode_steps: u32,
    /// Lower corner of the goal sampling box.
    pub goal_low: [f32; 3],
    pub goal_high: [f32; 3],
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            joint_step: 0.05,
            distance_threshold: 0.05,
            max_episode_steps: 50,
            goal_low: [0.2, -0.3, 0.2],
            goal_high: [0.6, 0.3, 0.6],
        }
    }
}

/// Reaching task for the 7-joint arm.
///
/// Actions are normalized joint displacements in `[-1, 1]`. The reward is the
/// negative distance between the end effector and the goal. Episodes end when
/// the goal is reached or after `max_episode_steps` steps.
pub struct ReachEnv {
    config: ReachConfig,
    sim: ArmSim,
    goal: [f32; 3],
    elapsed_steps: u32,
    action_space: BoxSpace,
    rng: fastrand::Rng,
}

impl Default for ReachEnv {
    fn default() -> Self {
        Self::new(ReachConfig::default())
    }
}

impl ReachEnv {
    #[must_use]
    pub fn new(config: ReachConfig) -> Self {
        let rng = fastrand::Rng::with_seed(0);
        let goal = config.goal_low;
        Self {
            config,
            sim: ArmSim::new(),
            goal,
            elapsed_steps: 0,
            action_space: BoxSpace::uniform(JOINT_COUNT, -1.0, 1.0),
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ReachConfig {
        &self.config
    }

    #[must_use]
    pub fn joints(&self) -> &[f32; JOINT_COUNT] {
        self.sim.joints()
    }

    #[must_use]
    pub fn goal(&self) -> [f32; 3] {
        self.goal
    }

    fn distance(&self) -> f32 {
        self.sim
            .end_effector()
            .distance(glam::Vec3::from_array(self.goal))
    }

    fn observe(&self) -> Vec<f32> {
        let mut obs = Vec::with_capacity(OBSERVATION_SIZE);
        obs.extend_from_slice(self.sim.joints());
        obs.extend_from_slice(&self.sim.end_effector().to_array());
        obs.extend_from_slice(&self.goal);
        obs
    }

    fn info(&self, distance: f32) -> Info {
        let mut info = Info::new();
        info.insert("distance".to_owned(), distance);
        let success = if distance < self.config.distance_threshold { 1.0 } else { 0.0 };
        info.insert("is_success".to_owned(), success);
        #[allow(clippy::cast_precision_loss)]
        info.insert("elapsed_steps".to_owned(), self.elapsed_steps as f32);
        info
    }
}

impl Env for ReachEnv {
    fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    fn observation_size(&self) -> usize {
        OBSERVATION_SIZE
    }

    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f32>, Info), EnvError> {
        if let Some(seed) = options.seed {
            self.rng.seed(seed);
        }
        self.sim.set_joints(&NEUTRAL_POSE)?;
        self.elapsed_steps = 0;
        let (low, high) = (self.config.goal_low, self.config.goal_high);
        for ((goal, lo), hi) in self.goal.iter_mut().zip(low).zip(high) {
            *goal = lo + self.rng.f32() * (hi - lo);
        }
        let distance = self.distance();
        Ok((self.observe(), self.info(distance)))
    }

    fn step(&mut self, action: &[f32]) -> Result<StepResult, EnvError> {
        if action.len() != JOINT_COUNT {
            return Err(EnvError::Shape {
                expected: JOINT_COUNT,
                actual: action.len(),
            });
        }
        let deltas: Vec<f32> = action
            .iter()
            .map(|a| a.clamp(-1.0, 1.0) * self.config.joint_step)
            .collect();
        self.sim.apply_deltas(&deltas)?;
        self.elapsed_steps += 1;

        let distance = self.distance();
        Ok(StepResult {
            observation: self.observe(),
            reward: -distance,
            terminated: distance < self.config.distance_threshold,
            truncated: self.elapsed_steps >= self.config.max_episode_steps,
            info: self.info(distance),
        })
    }
}
