// tests/planar_ik.rs
use glam::DVec2;
use planarm::{
    KinematicsError, OrientedTarget, ThreeLinkArm, TwoLinkArm, acos_clamped, normalize_angle,
};
use std::f64::consts::PI;

const TOL: f64 = 1e-6;

fn assert_close(actual: DVec2, expected: DVec2) {
    assert!(
        (actual - expected).length() < TOL,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn rejects_non_positive_link_lengths() {
    assert!(matches!(
        TwoLinkArm::new(0.0, 1.0),
        Err(KinematicsError::NonPositiveLinkLength { index: 0, .. })
    ));
    assert!(matches!(
        ThreeLinkArm::new(1.0, -2.0, 1.0),
        Err(KinematicsError::NonPositiveLinkLength { index: 1, .. })
    ));
    assert!(matches!(
        ThreeLinkArm::new(1.0, 1.0, f64::NAN),
        Err(KinematicsError::NonPositiveLinkLength { index: 2, .. })
    ));
}

#[test]
fn out_of_reach_yields_empty_set() {
    let arm = TwoLinkArm::new(1.0, 1.0).unwrap();
    assert!(arm.solve(DVec2::new(3.0, 0.0)).is_empty());
}

#[test]
fn inner_dead_zone_yields_empty_set() {
    let arm = TwoLinkArm::new(2.0, 1.0).unwrap();
    assert!(arm.solve(DVec2::new(0.5, 0.0)).is_empty());
}

#[test]
fn full_extension_collapses_to_one_solution() {
    let arm = TwoLinkArm::new(1.0, 1.0).unwrap();
    // Distance exactly max_reach: both elbow branches coincide at zero.
    let solutions = arm.solve(DVec2::new(2.0, 0.0));
    assert_eq!(solutions.len(), 1);
    assert!(solutions[0].theta1.abs() < TOL);
    assert!(solutions[0].theta2.abs() < TOL);
}

#[test]
fn interior_target_has_two_mirrored_branches() {
    let arm = TwoLinkArm::new(1.0, 1.0).unwrap();
    let target = DVec2::new(1.2, 0.7);
    let solutions = arm.solve(target);
    assert_eq!(solutions.len(), 2);
    // Elbow angles are sign mirrors of each other, +acos branch first.
    assert!(solutions[0].theta2 > 0.0);
    assert!((solutions[0].theta2 + solutions[1].theta2).abs() < TOL);
    // Both configurations land the end effector on the same target.
    for angles in &solutions {
        assert_close(arm.joint_positions(angles)[2], target);
    }
}

#[test]
fn two_link_round_trip() {
    let arm = TwoLinkArm::new(2.0, 1.5).unwrap();
    for target in [
        DVec2::new(3.0, 0.5),
        DVec2::new(-1.0, 2.0),
        DVec2::new(0.0, 1.0),
        DVec2::new(-2.5, -1.5),
    ] {
        let solutions = arm.solve(target);
        assert!(!solutions.is_empty(), "no solution for {target:?}");
        for angles in &solutions {
            assert_close(arm.joint_positions(angles)[2], target);
        }
    }
}

#[test]
fn known_three_link_example() {
    let arm = ThreeLinkArm::new(10.0, 7.0, 5.0).unwrap();
    let target = OrientedTarget::new(12.0, 8.0, 45f64.to_radians());
    let solutions = arm.solve(&target);
    assert!(!solutions.is_empty());
    for angles in &solutions {
        // Orientation is fully determined once the first two joints are
        // fixed, so every branch realizes the requested gamma.
        assert!((angles.orientation() - target.gamma).abs() < TOL);
        assert_close(arm.joint_positions(angles)[3], target.position);
    }
}

#[test]
fn three_link_unreachable_reduced_target() {
    let arm = ThreeLinkArm::new(10.0, 7.0, 5.0).unwrap();
    let target = OrientedTarget::new(100.0, 0.0, 0.0);
    assert!(arm.solve(&target).is_empty());
}

#[test]
fn acos_clamped_flags_out_of_domain_input() {
    let (angle, clamped) = acos_clamped(1.0 + 1e-12);
    assert_eq!(angle, 0.0);
    assert!(clamped);

    let (angle, clamped) = acos_clamped(-1.5);
    assert_eq!(angle, PI);
    assert!(clamped);

    let (angle, clamped) = acos_clamped(0.5);
    assert!((angle - 0.5f64.acos()).abs() < TOL);
    assert!(!clamped);
}

#[test]
fn normalize_wraps_into_half_open_range() {
    assert!((normalize_angle(3.0 * PI) - PI).abs() < TOL);
    assert!((normalize_angle(-PI) - PI).abs() < TOL);
    assert!((normalize_angle(-0.25) + 0.25).abs() < TOL);
    assert_eq!(normalize_angle(0.0), 0.0);
}
