//! Arm configurations, target poses and joint-angle tuples.
//!
//! The arm types are the validated `LinkLengths` configuration values: they
//! are immutable once constructed and are the receivers for the solve,
//! sampling and projection operations defined in the sibling modules.

use crate::error::KinematicsError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2-link revolute planar arm, rooted at the origin of the plane.
///
/// Link lengths are validated at construction and never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TwoLinkArm {
    l1: f64,
    l2: f64,
}

impl TwoLinkArm {
    /// Creates a 2-link arm from its link lengths.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::NonPositiveLinkLength`] if either length
    /// is zero, negative or non-finite.
    pub fn new(l1: f64, l2: f64) -> Result<Self, KinematicsError> {
        validate_lengths(&[l1, l2])?;
        Ok(Self { l1, l2 })
    }

    /// Length of the shoulder link.
    pub fn l1(&self) -> f64 {
        self.l1
    }

    /// Length of the elbow link.
    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Outer radius of the reachable annulus (fully stretched arm).
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Inner radius of the reachable annulus (fully folded arm). Targets
    /// closer to the base than this sit in the arm's dead zone.
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }
}

/// A 3-link revolute planar arm with a controllable end-effector
/// orientation, rooted at the origin of the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreeLinkArm {
    l1: f64,
    l2: f64,
    l3: f64,
}

impl ThreeLinkArm {
    /// Creates a 3-link arm from its link lengths.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::NonPositiveLinkLength`] if any length is
    /// zero, negative or non-finite.
    pub fn new(l1: f64, l2: f64, l3: f64) -> Result<Self, KinematicsError> {
        validate_lengths(&[l1, l2, l3])?;
        Ok(Self { l1, l2, l3 })
    }

    /// Length of the shoulder link.
    pub fn l1(&self) -> f64 {
        self.l1
    }

    /// Length of the elbow link.
    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Length of the wrist link.
    pub fn l3(&self) -> f64 {
        self.l3
    }

    /// The 2-link subproblem formed by the first two links. Solving the full
    /// arm reduces to solving this arm for the wrist position.
    pub fn shoulder_elbow(&self) -> TwoLinkArm {
        TwoLinkArm {
            l1: self.l1,
            l2: self.l2,
        }
    }
}

fn validate_lengths(lengths: &[f64]) -> Result<(), KinematicsError> {
    for (index, &length) in lengths.iter().enumerate() {
        if !length.is_finite() || length <= 0.0 {
            return Err(KinematicsError::NonPositiveLinkLength { index, length });
        }
    }
    Ok(())
}

/// Target pose for the 3-link solver: an end-effector position plus the
/// desired end-effector orientation `gamma` in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientedTarget {
    /// Target end-effector position.
    pub position: DVec2,
    /// Desired end-effector orientation, radians.
    pub gamma: f64,
}

impl OrientedTarget {
    pub fn new(x: f64, y: f64, gamma: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            gamma,
        }
    }
}

/// Joint angles of a 2-link configuration, radians.
///
/// Angles are unbounded reals so that direction-of-rotation information
/// survives; see [`crate::geometry::normalize_angle`] for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointAngles2 {
    /// Shoulder angle, measured from the +x axis.
    pub theta1: f64,
    /// Elbow angle, relative to the shoulder link.
    pub theta2: f64,
}

/// Joint angles of a 3-link configuration, radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointAngles3 {
    /// Shoulder angle, measured from the +x axis.
    pub theta1: f64,
    /// Elbow angle, relative to the shoulder link.
    pub theta2: f64,
    /// Wrist angle, relative to the elbow link.
    pub theta3: f64,
}

impl JointAngles3 {
    /// World orientation of the last link. For solver output this equals the
    /// requested `gamma` by construction.
    pub fn orientation(&self) -> f64 {
        self.theta1 + self.theta2 + self.theta3
    }
}
