//! # planarm
//!
//! Closed-form kinematics for small planar manipulators.
//!
//! The crate solves the 2-link and 3-link planar inverse-kinematics problems
//! analytically, samples straight-line end-effector paths with a pluggable
//! branch-selection strategy, and projects joint angles back into
//! joint-position chains (planar, or spatial via Denavit-Hartenberg
//! parameter chains) for rendering and validation.
//!
//! Reachability is a geometric outcome, not an error: a target outside the
//! reachable annulus yields an empty solution set, and a path sample whose
//! solve comes up empty is recorded as a gap while the traversal continues.
//! Faults ([`KinematicsError`]) are reserved for invalid caller input such
//! as non-positive link lengths.

pub mod arm;
pub mod error;
pub mod fk;
pub mod geometry;
pub mod path;
pub mod solver;

pub use arm::*;
pub use error::*;
pub use fk::*;
pub use geometry::*;
pub use path::*;
