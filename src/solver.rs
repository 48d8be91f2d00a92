//! Closed-form inverse kinematics for 2- and 3-link planar arms.
//!
//! Both solvers enumerate every valid configuration instead of picking one:
//! the caller (or the path sampler's [`BranchStrategy`](crate::path::BranchStrategy))
//! decides between elbow branches. An unreachable target yields an empty
//! set; that is an expected geometric outcome, never a fault.

use crate::arm::{JointAngles2, JointAngles3, OrientedTarget, ThreeLinkArm, TwoLinkArm};
use crate::geometry::{BRANCH_TOLERANCE, REACH_TOLERANCE, acos_clamped};
use glam::DVec2;
use std::f64::consts::PI;

impl TwoLinkArm {
    /// Solves for every joint configuration placing the end effector at
    /// `target`.
    ///
    /// Returns up to two solutions, ordered with the `+acos` ("elbow up")
    /// branch first. The set is empty when `target` lies outside the
    /// reachable annulus and collapses to a single entry when the two
    /// branches describe the same configuration, which happens for a fully
    /// stretched or fully folded arm.
    pub fn solve(&self, target: DVec2) -> Vec<JointAngles2> {
        let r = target.length();
        if r > self.max_reach() + REACH_TOLERANCE || r < self.min_reach() - REACH_TOLERANCE {
            return Vec::new();
        }

        let (l1, l2) = (self.l1(), self.l2());
        let cos_elbow = (r * r - l1 * l1 - l2 * l2) / (2.0 * l1 * l2);
        // The reach check already bounds the cosine; anything further out of
        // domain than the tolerance is accumulated floating error and the
        // target is treated as unreachable after all.
        if cos_elbow.abs() > 1.0 + REACH_TOLERANCE {
            return Vec::new();
        }
        let (elbow, _clamped) = acos_clamped(cos_elbow);

        let bearing = target.y.atan2(target.x);
        let mut solutions = Vec::with_capacity(2);
        for theta2 in [elbow, -elbow] {
            let k1 = l1 + l2 * theta2.cos();
            let k2 = l2 * theta2.sin();
            let theta1 = bearing - k2.atan2(k1);
            solutions.push(JointAngles2 { theta1, theta2 });
            // An elbow at 0 or PI makes the two branches the same
            // configuration; keep a single entry instead of a near-duplicate.
            if elbow < BRANCH_TOLERANCE || PI - elbow < BRANCH_TOLERANCE {
                break;
            }
        }
        solutions
    }
}

impl ThreeLinkArm {
    /// Solves for every joint configuration placing the end effector at
    /// `target.position` with orientation `target.gamma`.
    ///
    /// The wrist link is peeled off first: its contribution at the requested
    /// orientation is subtracted from the target, reducing the problem to a
    /// 2-link solve for the wrist position. The wrist angle is then fully
    /// determined per branch by `theta3 = gamma - theta1 - theta2`, so
    /// branching stays confined to the shoulder/elbow pair and the solution
    /// ordering of [`TwoLinkArm::solve`] carries over. Unreachability of the
    /// reduced problem propagates as an empty set.
    pub fn solve(&self, target: &OrientedTarget) -> Vec<JointAngles3> {
        let wrist = target.position - DVec2::from_angle(target.gamma) * self.l3();
        self.shoulder_elbow()
            .solve(wrist)
            .into_iter()
            .map(|JointAngles2 { theta1, theta2 }| JointAngles3 {
                theta1,
                theta2,
                theta3: target.gamma - theta1 - theta2,
            })
            .collect()
    }
}
