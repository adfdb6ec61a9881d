// Host-side tests for spiral buffers.

use glam::Vec3;
use spiral_core::*;
use std::f32::consts::PI;

fn make_spiral(family: CurveFamily, negate: bool, divisor: SampleDivisor) -> SpiralInstance {
    let cfg = SpiralConfig::new(family, 250, 9.0 * PI, Color::from_hex(0x00ff00))
        .with_negate(negate)
        .with_divisor(divisor);
    SpiralInstance::build(cfg).expect("valid spiral")
}

#[test]
fn build_rejects_too_few_points() {
    for n in [0, 1] {
        let cfg = SpiralConfig::new(CurveFamily::Decay, n, PI, Color::from_hex(0));
        assert_eq!(
            SpiralInstance::build(cfg).unwrap_err(),
            ConfigError::TooFewPoints(n)
        );
    }
}

#[test]
fn build_rejects_bad_angular_span() {
    for max_theta in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let cfg = SpiralConfig::new(CurveFamily::Decay, 10, max_theta, Color::from_hex(0));
        assert!(matches!(
            SpiralInstance::build(cfg),
            Err(ConfigError::InvalidMaxTheta(_))
        ));
    }
}

#[test]
fn build_rejects_non_finite_scale() {
    let cfg = SpiralConfig::new(CurveFamily::Growth, 10, PI, Color::from_hex(0))
        .with_scale(CurveScale::new(1.0, f32::NAN));
    assert!(matches!(
        SpiralInstance::build(cfg),
        Err(ConfigError::InvalidScale { .. })
    ));
}

#[test]
fn inclusive_divisor_reaches_max_theta_exactly() {
    let s = make_spiral(CurveFamily::Decay, false, SampleDivisor::Inclusive);
    assert_eq!(s.theta_at(0), 0.0);
    assert_eq!(s.theta_at(249), 9.0 * PI);
}

#[test]
fn exclusive_divisor_stops_short_of_max_theta() {
    let s = make_spiral(CurveFamily::Decay, false, SampleDivisor::Exclusive);
    let last = s.theta_at(249);
    assert!(last < 9.0 * PI);
    assert!((last - 249.0 / 250.0 * 9.0 * PI).abs() < 1e-5);
}

#[test]
fn buffer_length_is_fixed_across_updates() {
    let mut s = make_spiral(CurveFamily::Growth, false, SampleDivisor::Inclusive);
    assert_eq!(s.len(), 250);
    let ptr = s.points().as_ptr();
    for a in [1.0, 1.5, 2.0, 1.25] {
        s.update(a);
        assert_eq!(s.len(), 250);
        assert_eq!(s.points().as_ptr(), ptr, "buffer was reallocated");
    }
}

#[test]
fn update_is_idempotent() {
    for family in CurveFamily::ALL {
        let mut s = make_spiral(family, false, SampleDivisor::Inclusive);
        s.update(1.73);
        let first: Vec<[u32; 3]> = s.points().iter().map(|p| p.to_array().map(f32::to_bits)).collect();
        s.update(1.73);
        let second: Vec<[u32; 3]> = s.points().iter().map(|p| p.to_array().map(f32::to_bits)).collect();
        assert_eq!(first, second, "{} not idempotent", family.name());
    }
}

#[test]
fn points_lie_in_the_xy_plane_at_curve_radius() {
    let mut s = make_spiral(CurveFamily::Decay, false, SampleDivisor::Inclusive);
    s.update(1.5);
    for (i, p) in s.points().iter().enumerate() {
        assert_eq!(p.z, 0.0);
        let expected = evaluate(CurveFamily::Decay, CurveScale::default(), 1.5, s.theta_at(i));
        assert!((p.truncate().length() - expected.abs()).abs() < 1e-5);
    }
}

#[test]
fn decay_at_unit_a_traces_a_unit_circle() {
    let mut s = make_spiral(CurveFamily::Decay, false, SampleDivisor::Inclusive);
    s.update(1.0);
    for p in s.points() {
        assert!((p.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn negate_flips_xy_for_every_family() {
    for family in CurveFamily::ALL {
        let mut plain = make_spiral(family, false, SampleDivisor::Inclusive);
        let mut flipped = make_spiral(family, true, SampleDivisor::Inclusive);
        plain.update(1.6);
        flipped.update(1.6);
        for (p, q) in plain.points().iter().zip(flipped.points()) {
            assert_eq!(*q, Vec3::new(-p.x, -p.y, 0.0), "{}", family.name());
        }
    }
}

#[test]
fn reflected_growth_is_growth_through_the_origin() {
    let mut growth = make_spiral(CurveFamily::Growth, false, SampleDivisor::Inclusive);
    let mut reflected = make_spiral(CurveFamily::ReflectedGrowth, false, SampleDivisor::Inclusive);
    growth.update(1.9);
    reflected.update(1.9);
    for (p, q) in growth.points().iter().zip(reflected.points()) {
        assert_eq!(q.x, -p.x);
        assert_eq!(q.y, -p.y);
    }
}

#[test]
fn dirty_flag_tracks_updates() {
    let mut s = make_spiral(CurveFamily::Decay, false, SampleDivisor::Inclusive);
    assert!(s.take_dirty(), "fresh buffers need an upload");
    assert!(!s.is_dirty());
    s.update(1.2);
    assert!(s.is_dirty());
    assert!(s.take_dirty());
    assert!(!s.take_dirty());
}
