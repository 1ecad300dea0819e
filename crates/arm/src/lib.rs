#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Arm
//!
//! A kinematic model of a 7-joint torque-free manipulator with the joint
//! limits and link geometry of a Franka Panda arm.
//!
//! There is no dynamics here: joints are position-controlled and move
//! exactly by the deltas they are given, clamped into their limits. That is
//! enough to drive a reaching task and to give the reinforcement learning
//! layer a real 7-dimensional actuator vector to work against.
//!
//! ## Usage
//!
//! ```rust
//! use arm::{ArmSim, JOINT_COUNT};
//!
//! let mut sim = ArmSim::new();
//! sim.apply_deltas(&[0.05; JOINT_COUNT]).unwrap();
//! let ee = sim.end_effector();
//! assert!(ee.z > 0.0);
//! ```

pub mod error;
pub mod kinematics;

pub use error::ArmError;
pub use kinematics::forward_kinematics;

/// Number of actuated joints.
pub const JOINT_COUNT: usize = 7;

/// Lower joint position limits in radians.
pub const JOINT_LOWER: [f32; JOINT_COUNT] =
    [-2.8973, -1.7628, -2.8973, -3.0718, -2.8973, -0.0175, -2.8973];

/// Upper joint position limits in radians.
pub const JOINT_UPPER: [f32; JOINT_COUNT] =
    [2.8973, 1.7628, 2.8973, -0.0698, 2.8973, 3.7525, 2.8973];

/// Ready pose: elbow bent, gripper pointing down.
pub const NEUTRAL_POSE: [f32; JOINT_COUNT] = [0.0, -0.785, 0.0, -2.356, 0.0, 1.571, 0.785];

/// Joint-space state of the manipulator.
#[derive(Clone, Debug, PartialEq)]
pub struct ArmSim {
    joints: [f32; JOINT_COUNT],
}

impl Default for ArmSim {
    fn default() -> Self {
        Self::new()
    }
}

impl ArmSim {
    /// Creates an arm resting in [`NEUTRAL_POSE`].
    #[must_use]
    pub fn new() -> Self {
        Self { joints: NEUTRAL_POSE }
    }

    /// Creates an arm at the given configuration, clamped into the joint limits.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the slice has the wrong length or contains a
    /// non-finite value.
    pub fn with_joints(joints: &[f32]) -> Result<Self, ArmError> {
        let mut sim = Self::new();
        sim.set_joints(joints)?;
        Ok(sim)
    }

    #[must_use]
    pub fn joints(&self) -> &[f32; JOINT_COUNT] {
        &self.joints
    }

    /// Overwrites every joint position, clamping into the joint limits.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] on a length mismatch or a non-finite value. The
    /// state is left untouched on error.
    pub fn set_joints(&mut self, joints: &[f32]) -> Result<(), ArmError> {
        check_input(joints)?;
        for (i, q) in joints.iter().enumerate() {
            self.joints[i] = q.clamp(JOINT_LOWER[i], JOINT_UPPER[i]);
        }
        Ok(())
    }

    /// Moves each joint by the matching delta and clamps into the joint limits.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] on a length mismatch or a non-finite value. The
    /// state is left untouched on error.
    pub fn apply_deltas(&mut self, deltas: &[f32]) -> Result<(), ArmError> {
        check_input(deltas)?;
        for (i, dq) in deltas.iter().enumerate() {
            self.joints[i] = (self.joints[i] + dq).clamp(JOINT_LOWER[i], JOINT_UPPER[i]);
        }
        Ok(())
    }

    /// World-space position of the flange.
    #[must_use]
    pub fn end_effector(&self) -> glam::Vec3 {
        forward_kinematics(&self.joints)
    }
}

fn check_input(values: &[f32]) -> Result<(), ArmError> {
    if values.len() != JOINT_COUNT {
        return Err(ArmError::JointCount {
            expected: JOINT_COUNT,
            actual: values.len(),
        });
    }
    if let Some(joint) = values.iter().position(|v| !v.is_finite()) {
        return Err(ArmError::NonFinite { joint });
    }
    Ok(())
}
