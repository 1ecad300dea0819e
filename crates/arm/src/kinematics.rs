//! Forward kinematics using the modified (Craig) Denavit-Hartenberg convention.

use glam::{Mat4, Vec3};

use crate::JOINT_COUNT;

/// Link offsets along the previous x axis.
const DH_A: [f32; JOINT_COUNT] = [0.0, 0.0, 0.0, 0.0825, -0.0825, 0.0, 0.088];
/// Link offsets along the joint z axis.
const DH_D: [f32; JOINT_COUNT] = [0.333, 0.0, 0.316, 0.0, 0.384, 0.0, 0.0];
/// Link twists about the previous x axis.
const DH_ALPHA: [f32; JOINT_COUNT] = [
    0.0,
    -std::f32::consts::FRAC_PI_2,
    std::f32::consts::FRAC_PI_2,
    std::f32::consts::FRAC_PI_2,
    -std::f32::consts::FRAC_PI_2,
    std::f32::consts::FRAC_PI_2,
    std::f32::consts::FRAC_PI_2,
];
/// Distance from the last joint frame to the flange.
const FLANGE_OFFSET: f32 = 0.107;

/// Computes the flange position for a joint configuration.
///
/// Each joint contributes `RotX(alpha) * TransX(a) * RotZ(q) * TransZ(d)`.
#[must_use]
pub fn forward_kinematics(joints: &[f32; JOINT_COUNT]) -> Vec3 {
    let mut transform = Mat4::IDENTITY;
    for (i, &q) in joints.iter().enumerate() {
        transform = transform
            * Mat4::from_rotation_x(DH_ALPHA[i])
            * Mat4::from_translation(Vec3::new(DH_A[i], 0.0, 0.0))
            * Mat4::from_rotation_z(q)
            * Mat4::from_translation(Vec3::new(0.0, 0.0, DH_D[i]));
    }
    transform.transform_point3(Vec3::new(0.0, 0.0, FLANGE_OFFSET))
}
