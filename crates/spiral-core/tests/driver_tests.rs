// Host-side tests for the animation driver state machine.

use spiral_core::*;
use std::f32::consts::PI;

fn make_driver() -> AnimationDriver {
    let mut driver = AnimationDriver::new(DriverConfig::default()).expect("default config");
    for (family, hex) in CurveFamily::ALL.into_iter().zip(SPIRAL_COLORS) {
        let cfg = SpiralConfig::new(family, 250, 9.0 * PI, Color::from_hex(hex));
        driver.register(SpiralInstance::build(cfg).expect("valid spiral"));
    }
    driver
}

#[test]
fn starts_forward_and_running_at_configured_a() {
    let driver = make_driver();
    assert_eq!(driver.a(), 1.5);
    assert_eq!(driver.direction(), Direction::Forward);
    assert!(driver.is_running());
    assert_eq!(driver.ticks(), 0);
}

#[test]
fn a_stays_within_bounds_over_many_ticks() {
    let mut driver = make_driver();
    let cfg = driver.config().clone();
    for _ in 0..20_000 {
        assert!(driver.a() >= cfg.a_min && driver.a() <= cfg.a_max);
        driver.tick();
        assert!(driver.a() >= cfg.a_min && driver.a() <= cfg.a_max);
    }
}

#[test]
fn reverses_direction_at_a_max() {
    let mut driver = make_driver();
    let mut guard = 0;
    while driver.a() < 2.0 {
        assert_eq!(driver.direction(), Direction::Forward);
        driver.tick();
        guard += 1;
        assert!(guard < 10_000, "never reached a_max");
    }
    assert_eq!(driver.a(), 2.0);
    assert_eq!(driver.direction(), Direction::Backward);

    driver.tick();
    assert!(driver.a() < 2.0, "a should start decreasing");
    assert_eq!(driver.direction(), Direction::Backward);
}

#[test]
fn reverses_direction_at_a_min() {
    let mut driver = AnimationDriver::new(DriverConfig {
        a_start: 1.0005,
        speed: 0.001,
        ..DriverConfig::default()
    })
    .expect("valid config");
    // up to a_max, then back down
    let mut saw_min = false;
    for _ in 0..5_000 {
        driver.tick();
        if driver.a() == 1.0 {
            saw_min = true;
            assert_eq!(driver.direction(), Direction::Forward);
            driver.tick();
            assert!(driver.a() > 1.0);
            break;
        }
    }
    assert!(saw_min, "never reached a_min");
}

#[test]
fn tick_refreshes_every_spiral() {
    let mut driver = make_driver();
    for s in driver.spirals_mut() {
        s.take_dirty();
    }
    assert!(driver.tick());
    let a = driver.a();
    for s in driver.spirals() {
        assert!(s.is_dirty());
        let mut fresh = SpiralInstance::build(s.config().clone()).expect("valid spiral");
        fresh.update(a);
        assert_eq!(fresh.points(), s.points());
    }
}

#[test]
fn register_primes_the_buffer() {
    let mut driver = AnimationDriver::new(DriverConfig::default()).expect("default config");
    let cfg = SpiralConfig::new(CurveFamily::Decay, 16, PI, Color::from_hex(0xffffff));
    let idx = driver.register(SpiralInstance::build(cfg).expect("valid spiral"));
    assert_eq!(idx, 0);
    let first = driver.spirals()[0].points()[0];
    assert_eq!(first.x, 1.0, "theta=0 decay sample sits at radius k");
}

#[test]
fn paused_driver_freezes_state() {
    let mut driver = make_driver();
    driver.tick();
    assert!(!driver.toggle_running());
    for s in driver.spirals_mut() {
        s.take_dirty();
    }
    let (a, dir, rot, ticks) = (
        driver.a(),
        driver.direction(),
        driver.companion_rotation(),
        driver.ticks(),
    );
    for _ in 0..100 {
        assert!(!driver.tick());
    }
    assert_eq!(driver.a(), a);
    assert_eq!(driver.direction(), dir);
    assert_eq!(driver.companion_rotation(), rot);
    assert_eq!(driver.ticks(), ticks);
    assert!(driver.spirals().iter().all(|s| !s.is_dirty()));

    assert!(driver.toggle_running());
    assert!(driver.tick());
    assert_ne!(driver.a(), a);
}

#[test]
fn companion_rotation_advances_per_tick() {
    let mut driver = make_driver();
    for _ in 0..4 {
        driver.tick();
    }
    let expected = 4.0 * ROTATION_SPEED;
    assert!((driver.companion_rotation() - expected).abs() < 1e-7);
}

#[test]
fn rejects_inverted_range() {
    let err = AnimationDriver::new(DriverConfig {
        a_min: 2.0,
        a_max: 1.0,
        ..DriverConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange { .. }));
}

#[test]
fn rejects_start_outside_range() {
    let err = AnimationDriver::new(DriverConfig {
        a_start: 2.5,
        ..DriverConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::StartOutOfRange { .. }));
}

#[test]
fn rejects_non_positive_speed() {
    for speed in [0.0, -0.1, f32::NAN] {
        let err = AnimationDriver::new(DriverConfig {
            speed,
            ..DriverConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpeed(_)));
    }
}
