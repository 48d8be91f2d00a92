//! Scalar geometry primitives shared by the solvers and projectors.

use std::f64::consts::PI;

/// Tolerance for reachable-annulus boundary checks and the defensive
/// law-of-cosines domain check. Bare `>` / `<` comparisons misclassify
/// targets sitting exactly on the boundary once floating error creeps in.
pub const REACH_TOLERANCE: f64 = 1e-9;

/// Angular tolerance below which the two elbow branches of a solve are
/// considered the same configuration.
pub const BRANCH_TOLERANCE: f64 = 1e-9;

/// Inverse cosine that clamps its argument into `[-1, 1]` first.
///
/// Returns the angle together with a flag that is `true` when the input lay
/// outside the domain and had to be clamped. Callers use the flag to tell
/// "exactly at the reach boundary" apart from "outside the domain by less
/// than the floating tolerance"; deciding whether an out-of-domain value is
/// an unreachability signal is the solver's job, not this primitive's.
pub fn acos_clamped(v: f64) -> (f64, bool) {
    if v > 1.0 {
        (0.0, true)
    } else if v < -1.0 {
        (PI, true)
    } else {
        (v.acos(), false)
    }
}

/// Wraps an angle into `(-PI, PI]`.
///
/// Solver output is left unbounded to preserve direction-of-rotation
/// information; wrapping is a presentation concern for consumers that want
/// a canonical range.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI { wrapped - 2.0 * PI } else { wrapped }
}
