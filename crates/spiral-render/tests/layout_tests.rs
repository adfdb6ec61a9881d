// Host-side checks of GPU-facing data layouts (no adapter required).

use glam::Vec3;
use spiral_core::{FieldConfig, FieldPreset};
use spiral_render::{LineUniforms, LINES_WGSL};

#[test]
fn uniform_block_is_sixteen_byte_aligned() {
    assert_eq!(std::mem::size_of::<LineUniforms>(), 80);
    assert_eq!(std::mem::size_of::<LineUniforms>() % 16, 0);
}

#[test]
fn spiral_points_upload_as_tightly_packed_xyz() {
    let driver = FieldConfig::preset(FieldPreset::Oscillating)
        .build_driver()
        .expect("valid preset");
    let points = driver.spirals()[0].points();
    let bytes: &[u8] = bytemuck::cast_slice(points);
    assert_eq!(bytes.len(), points.len() * 12);
    let floats: &[f32] = bytemuck::cast_slice(points);
    assert_eq!(Vec3::from_slice(&floats[3..6]), points[1]);
}

#[test]
fn shader_exposes_expected_entry_points() {
    assert!(LINES_WGSL.contains("fn vs_main"));
    assert!(LINES_WGSL.contains("fn fs_main"));
    assert!(LINES_WGSL.contains("@location(0) pos: vec3<f32>"));
}
