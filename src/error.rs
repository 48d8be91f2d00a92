//! Crate error type.

use thiserror::Error;

/// Faults caused by invalid caller input.
///
/// Unreachable targets are deliberately NOT represented here. Unreachability
/// is an expected geometric outcome and surfaces as an empty solution set
/// (or a gap sample on a path); this enum covers programming errors only.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KinematicsError {
    /// A link length was zero, negative or non-finite at arm construction.
    #[error("link {index} has non-positive length {length}")]
    NonPositiveLinkLength { index: usize, length: f64 },

    /// A path was requested with fewer than two samples, so the endpoints
    /// cannot both be represented.
    #[error("path sampling needs at least 2 steps, got {steps}")]
    TooFewSteps { steps: usize },
}
