//! Forward-kinematics projection: joint angles to joint-position chains.
//!
//! Projection is pure and side-effect free. It serves rendering downstream
//! and doubles as the consistency check for the solvers: projecting any
//! solve result must reproduce the target within floating tolerance.

use crate::arm::{JointAngles2, JointAngles3, ThreeLinkArm, TwoLinkArm};
use glam::{DMat4, DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

impl TwoLinkArm {
    /// Projects joint angles into the chain `[base, elbow, end effector]`,
    /// rooted at the origin, accumulating link vectors at cumulative angles.
    pub fn joint_positions(&self, angles: &JointAngles2) -> [DVec2; 3] {
        let base = DVec2::ZERO;
        let elbow = base + DVec2::from_angle(angles.theta1) * self.l1();
        let effector = elbow + DVec2::from_angle(angles.theta1 + angles.theta2) * self.l2();
        [base, elbow, effector]
    }
}

impl ThreeLinkArm {
    /// Projects joint angles into the chain
    /// `[base, elbow, wrist, end effector]`, rooted at the origin.
    pub fn joint_positions(&self, angles: &JointAngles3) -> [DVec2; 4] {
        let base = DVec2::ZERO;
        let elbow = base + DVec2::from_angle(angles.theta1) * self.l1();
        let wrist = elbow + DVec2::from_angle(angles.theta1 + angles.theta2) * self.l2();
        let effector = wrist + DVec2::from_angle(angles.orientation()) * self.l3();
        [base, elbow, wrist, effector]
    }
}

/// Denavit-Hartenberg parameters of a single joint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DhParam {
    /// Link length along the common normal.
    pub a: f64,
    /// Link twist about the previous x-axis, radians.
    pub alpha: f64,
    /// Link offset along the previous z-axis.
    pub d: f64,
    /// Joint angle about the previous z-axis, radians.
    pub theta: f64,
}

impl DhParam {
    pub const fn new(a: f64, alpha: f64, d: f64, theta: f64) -> Self {
        Self { a, alpha, d, theta }
    }

    /// Homogeneous transform of this joint in the standard DH convention.
    pub fn transform(&self) -> DMat4 {
        let (st, ct) = self.theta.sin_cos();
        let (sa, ca) = self.alpha.sin_cos();
        DMat4::from_cols(
            DVec4::new(ct, st, 0.0, 0.0),
            DVec4::new(-st * ca, ct * ca, sa, 0.0),
            DVec4::new(st * sa, -ct * sa, ca, 0.0),
            DVec4::new(self.a * ct, self.a * st, self.d, 1.0),
        )
    }
}

/// An ordered Denavit-Hartenberg joint chain rooted at the world origin.
///
/// The chain is plain data so that planar and spatial manipulators share one
/// projector: a planar link of length `l` at joint angle `theta` is the row
/// `(l, 0, 0, theta)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DhChain {
    /// Per-joint parameters, base to end effector.
    pub params: Vec<DhParam>,
}

impl DhChain {
    pub fn new(params: Vec<DhParam>) -> Self {
        Self { params }
    }

    /// Accumulated joint frames, identity base frame included, so the result
    /// holds `params.len() + 1` entries.
    pub fn frames(&self) -> Vec<DMat4> {
        let mut frames = Vec::with_capacity(self.params.len() + 1);
        let mut transform = DMat4::IDENTITY;
        frames.push(transform);
        for param in &self.params {
            transform *= param.transform();
            frames.push(transform);
        }
        frames
    }

    /// Joint positions along the chain, base origin included.
    pub fn joint_positions(&self) -> Vec<DVec3> {
        self.frames()
            .iter()
            .map(|frame| frame.w_axis.truncate())
            .collect()
    }
}
