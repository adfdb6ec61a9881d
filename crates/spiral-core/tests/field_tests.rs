// Host-side tests for presets, companion geometry and shared state types.

use spiral_core::*;
use std::f32::consts::PI;

#[test]
fn every_preset_builds_a_driver() {
    for preset in FieldPreset::ALL {
        let cfg = FieldConfig::preset(preset);
        let driver = cfg.build_driver().expect("preset should validate");
        assert_eq!(driver.spirals().len(), 4, "{preset}");
        assert_eq!(driver.a(), A_START);
    }
}

#[test]
fn oscillating_preset_matches_defaults() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg, FieldConfig::preset(FieldPreset::Oscillating));
    assert!(cfg.driver.start_running);
    assert!(cfg.companion.is_some());
    for (s, family) in cfg.spirals.iter().zip(CurveFamily::ALL) {
        assert_eq!(s.family, family);
        assert_eq!(s.num_points, DEFAULT_NUM_POINTS);
        assert_eq!(s.max_theta, 9.0 * PI);
        assert_eq!(s.divisor, SampleDivisor::Inclusive);
        assert!(!s.negate);
    }
}

#[test]
fn scaled_preset_reflects_through_the_negate_flag() {
    let scaled = FieldConfig::preset(FieldPreset::Scaled)
        .build_driver()
        .expect("valid preset");
    let plain = FieldConfig::preset(FieldPreset::Oscillating);
    let mut reflected = SpiralInstance::build(
        plain.spirals[3]
            .clone()
            .with_scale(CurveScale::new(DECAY_SCALE_WIDE, GROWTH_SCALE)),
    )
    .expect("valid spiral");
    reflected.update(scaled.a());
    assert_eq!(scaled.spirals()[3].points(), reflected.points());
    assert_eq!(scaled.spirals()[0].points()[0].x, DECAY_SCALE_WIDE);
}

#[test]
fn static_preset_starts_paused_with_exclusive_sampling() {
    let cfg = FieldConfig::preset(FieldPreset::Static);
    assert!(cfg.companion.is_none());
    let mut driver = cfg.build_driver().expect("valid preset");
    assert!(!driver.is_running());
    assert!(!driver.tick());
    let s = &driver.spirals()[0];
    assert_eq!(s.len(), STATIC_NUM_POINTS);
    assert!(s.theta_at(s.len() - 1) < STATIC_MAX_THETA);
}

#[test]
fn preset_names_round_trip() {
    for preset in FieldPreset::ALL {
        assert_eq!(preset.name().parse::<FieldPreset>(), Ok(preset));
    }
    assert_eq!(" Static ".parse::<FieldPreset>(), Ok(FieldPreset::Static));
    assert_eq!(
        "spiro".parse::<FieldPreset>(),
        Err(ConfigError::UnknownPreset("spiro".into()))
    );
}

#[test]
fn preset_from_query_string() {
    assert_eq!(FieldPreset::from_query(""), None);
    assert_eq!(FieldPreset::from_query("?debug=1"), None);
    assert_eq!(
        FieldPreset::from_query("?preset=scaled"),
        Some(Ok(FieldPreset::Scaled))
    );
    assert_eq!(
        FieldPreset::from_query("debug=1&preset=static"),
        Some(Ok(FieldPreset::Static))
    );
    assert!(matches!(
        FieldPreset::from_query("?preset=nope"),
        Some(Err(ConfigError::UnknownPreset(_)))
    ));
}

#[test]
fn field_validation_catches_bad_parts() {
    let mut cfg = FieldConfig::default();
    cfg.spirals[2].num_points = 1;
    assert_eq!(cfg.build_driver().unwrap_err(), ConfigError::TooFewPoints(1));

    let mut cfg = FieldConfig::default();
    if let Some(c) = cfg.companion.as_mut() {
        c.radius = 0.0;
    }
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvalidCompanionRadius(0.0))
    );

    let mut cfg = FieldConfig::default();
    cfg.camera_z = -1.0;
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidCameraDistance(-1.0)));
}

#[test]
fn icosahedron_counts_match_subdivision() {
    let base = icosahedron_wireframe(1.0, 0);
    assert_eq!(base.positions.len(), 12);
    assert_eq!(base.edge_count(), 30);

    let detailed = icosahedron_wireframe(COMPANION_RADIUS, COMPANION_DETAIL);
    assert_eq!(detailed.positions.len(), 42);
    assert_eq!(detailed.edge_count(), 120);
}

#[test]
fn icosahedron_vertices_sit_on_the_sphere() {
    let w = icosahedron_wireframe(5.0, 2);
    for p in &w.positions {
        assert!((p.length() - 5.0).abs() < 1e-4);
    }
    for &i in &w.indices {
        assert!((i as usize) < w.positions.len());
    }
}

#[test]
fn color_channels_decode_from_hex() {
    let orange = Color::from_hex(0xffa500);
    assert_eq!(orange.srgb(), [1.0, 165.0 / 255.0, 0.0]);
    let lin = orange.linear_rgba();
    assert!((lin[0] - 1.0).abs() < 1e-6);
    assert_eq!(lin[2], 0.0);
    assert_eq!(lin[3], 1.0);
    assert!(lin[1] < 165.0 / 255.0);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let mut cam = Camera::looking_at_origin(CAMERA_Z, 1.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(0, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    let m = cam.view_proj();
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
}
