//! Path sampling: linear target interpolation driving the solver per sample.
//!
//! Sampling is eager — downstream rendering wants random access to the
//! start, end and intermediate samples — and a single unreachable sample
//! never aborts a traversal; it is recorded as a gap and the walk continues.

use crate::arm::{JointAngles2, JointAngles3, OrientedTarget, ThreeLinkArm, TwoLinkArm};
use crate::error::KinematicsError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How to pick one configuration when the solver returns several.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchStrategy {
    /// Always the `+acos` elbow branch (first in solver order).
    #[default]
    ElbowUp,
    /// Always the `-acos` elbow branch (last in solver order).
    ElbowDown,
    /// The branch closest, by Euclidean distance in angle space, to the
    /// previously selected sample of the traversal; falls back to
    /// [`ElbowUp`](Self::ElbowUp) while no sample has been selected yet.
    /// Favors smooth joint trajectories along a path.
    ClosestToPrevious,
}

/// One sample of a 2-link path. Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSample2 {
    /// Interpolated target for this step.
    pub target: DVec2,
    /// Selected joint angles, `None` when the target was unreachable.
    pub angles: Option<JointAngles2>,
    /// Joint-position chain of the selected angles.
    pub joints: Option<[DVec2; 3]>,
}

/// One sample of a 3-link path. Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSample3 {
    /// Interpolated target for this step.
    pub target: OrientedTarget,
    /// Selected joint angles, `None` when the target was unreachable.
    pub angles: Option<JointAngles3>,
    /// Joint-position chain of the selected angles.
    pub joints: Option<[DVec2; 4]>,
}

impl TwoLinkArm {
    /// Samples a straight-line end-effector path and solves every sample.
    ///
    /// Produces `steps` evenly spaced targets between `start` and `end`;
    /// the endpoint samples equal `start` and `end` exactly, not merely
    /// within tolerance. Unreachable samples become gaps.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::TooFewSteps`] when `steps < 2`.
    pub fn sample_path(
        &self,
        start: DVec2,
        end: DVec2,
        steps: usize,
        strategy: BranchStrategy,
    ) -> Result<Vec<PathSample2>, KinematicsError> {
        check_steps(steps)?;
        let mut samples = Vec::with_capacity(steps);
        let mut previous: Option<JointAngles2> = None;
        for i in 0..steps {
            let t = i as f64 / (steps - 1) as f64;
            // Convex form: t = 0 and t = 1 reproduce the endpoints exactly.
            let target = start * (1.0 - t) + end * t;
            let solutions = self.solve(target);
            let selected = select(&solutions, strategy, previous, angle_distance2);
            match selected {
                Some(angles) => previous = Some(angles),
                None => debug!(sample = i, x = target.x, y = target.y, "unreachable sample, recording gap"),
            }
            samples.push(PathSample2 {
                target,
                angles: selected,
                joints: selected.map(|angles| self.joint_positions(&angles)),
            });
        }
        Ok(samples)
    }
}

impl ThreeLinkArm {
    /// Samples a straight-line end-effector path, interpolating position and
    /// orientation, and solves every sample.
    ///
    /// Endpoint samples equal `start` and `end` exactly; unreachable samples
    /// become gaps.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::TooFewSteps`] when `steps < 2`.
    pub fn sample_path(
        &self,
        start: &OrientedTarget,
        end: &OrientedTarget,
        steps: usize,
        strategy: BranchStrategy,
    ) -> Result<Vec<PathSample3>, KinematicsError> {
        check_steps(steps)?;
        let mut samples = Vec::with_capacity(steps);
        let mut previous: Option<JointAngles3> = None;
        for i in 0..steps {
            let t = i as f64 / (steps - 1) as f64;
            let target = OrientedTarget {
                position: start.position * (1.0 - t) + end.position * t,
                gamma: start.gamma * (1.0 - t) + end.gamma * t,
            };
            let solutions = self.solve(&target);
            let selected = select(&solutions, strategy, previous, angle_distance3);
            match selected {
                Some(angles) => previous = Some(angles),
                None => debug!(
                    sample = i,
                    x = target.position.x,
                    y = target.position.y,
                    "unreachable sample, recording gap"
                ),
            }
            samples.push(PathSample3 {
                target,
                angles: selected,
                joints: selected.map(|angles| self.joint_positions(&angles)),
            });
        }
        Ok(samples)
    }
}

fn check_steps(steps: usize) -> Result<(), KinematicsError> {
    if steps < 2 {
        Err(KinematicsError::TooFewSteps { steps })
    } else {
        Ok(())
    }
}

fn select<A: Copy>(
    solutions: &[A],
    strategy: BranchStrategy,
    previous: Option<A>,
    distance: impl Fn(&A, &A) -> f64,
) -> Option<A> {
    match strategy {
        BranchStrategy::ElbowUp => solutions.first().copied(),
        BranchStrategy::ElbowDown => solutions.last().copied(),
        BranchStrategy::ClosestToPrevious => match &previous {
            None => solutions.first().copied(),
            Some(prev) => solutions
                .iter()
                .copied()
                .min_by(|a, b| distance(a, prev).total_cmp(&distance(b, prev))),
        },
    }
}

fn angle_distance2(a: &JointAngles2, b: &JointAngles2) -> f64 {
    let d1 = a.theta1 - b.theta1;
    let d2 = a.theta2 - b.theta2;
    (d1 * d1 + d2 * d2).sqrt()
}

fn angle_distance3(a: &JointAngles3, b: &JointAngles3) -> f64 {
    let d1 = a.theta1 - b.theta1;
    let d2 = a.theta2 - b.theta2;
    let d3 = a.theta3 - b.theta3;
    (d1 * d1 + d2 * d2 + d3 * d3).sqrt()
}
