//! Named field configurations and the glue that turns them into a driver.

use crate::constants::*;
use crate::curve::{CurveFamily, CurveScale};
use crate::driver::{AnimationDriver, DriverConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::spiral::{SampleDivisor, SpiralConfig, SpiralInstance};
use crate::state::Color;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldPreset {
    /// Unit-scale spirals oscillating around a rotating icosahedron.
    #[default]
    Oscillating,
    /// Same motion with the decaying curves scaled by 500.
    Scaled,
    /// Dense, paused field at a = 1.5 with exclusive sampling.
    Static,
}

impl FieldPreset {
    pub const ALL: [FieldPreset; 3] = [
        FieldPreset::Oscillating,
        FieldPreset::Scaled,
        FieldPreset::Static,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldPreset::Oscillating => "oscillating",
            FieldPreset::Scaled => "scaled",
            FieldPreset::Static => "static",
        }
    }

    /// Pick the preset named by a `preset=` pair in a URL query string.
    ///
    /// Accepts the string with or without its leading `?`. Returns `None` when
    /// the key is absent; unknown names are reported as errors.
    pub fn from_query(query: &str) -> Option<ConfigResult<FieldPreset>> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "preset")
            .map(|(_, value)| value.parse())
    }
}

impl fmt::Display for FieldPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Wireframe icosahedron drawn behind the spirals.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanionConfig {
    pub radius: f32,
    pub detail: u32,
    pub color: Color,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            radius: COMPANION_RADIUS,
            detail: COMPANION_DETAIL,
            color: Color::from_hex(COMPANION_COLOR),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub driver: DriverConfig,
    pub spirals: Vec<SpiralConfig>,
    pub companion: Option<CompanionConfig>,
    pub camera_z: f32,
    pub background: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig::preset(FieldPreset::default())
    }
}

impl FieldConfig {
    pub fn preset(preset: FieldPreset) -> Self {
        match preset {
            FieldPreset::Oscillating => Self {
                driver: DriverConfig::default(),
                spirals: four_spirals(
                    DEFAULT_NUM_POINTS,
                    DEFAULT_MAX_THETA,
                    CurveScale::default(),
                    SPIRAL_COLORS,
                    SampleDivisor::Inclusive,
                ),
                companion: Some(CompanionConfig::default()),
                camera_z: CAMERA_Z,
                background: Color::from_hex(BACKGROUND_COLOR),
            },
            FieldPreset::Scaled => {
                let scale = CurveScale::new(DECAY_SCALE_WIDE, GROWTH_SCALE);
                let mut spirals = four_spirals(
                    DEFAULT_NUM_POINTS,
                    DEFAULT_MAX_THETA,
                    scale,
                    SPIRAL_COLORS,
                    SampleDivisor::Inclusive,
                );
                // reflection via the negate flag rather than the family
                spirals[3].family = CurveFamily::Growth;
                spirals[3].negate = true;
                Self {
                    driver: DriverConfig::default(),
                    spirals,
                    companion: Some(CompanionConfig::default()),
                    camera_z: CAMERA_Z_WIDE,
                    background: Color::from_hex(BACKGROUND_COLOR),
                }
            }
            FieldPreset::Static => Self {
                driver: DriverConfig {
                    start_running: false,
                    ..DriverConfig::default()
                },
                spirals: four_spirals(
                    STATIC_NUM_POINTS,
                    STATIC_MAX_THETA,
                    CurveScale::default(),
                    STATIC_SPIRAL_COLORS,
                    SampleDivisor::Exclusive,
                ),
                companion: None,
                camera_z: CAMERA_Z,
                background: Color::from_hex(BACKGROUND_COLOR),
            },
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.driver.validate()?;
        for s in &self.spirals {
            s.validate()?;
        }
        if let Some(c) = &self.companion {
            if !(c.radius.is_finite() && c.radius > 0.0) {
                return Err(ConfigError::InvalidCompanionRadius(c.radius));
            }
        }
        if !(self.camera_z.is_finite() && self.camera_z > 0.0) {
            return Err(ConfigError::InvalidCameraDistance(self.camera_z));
        }
        Ok(())
    }

    /// Validate everything, then build a driver with all spirals registered.
    pub fn build_driver(&self) -> ConfigResult<AnimationDriver> {
        self.validate()?;
        let mut driver = AnimationDriver::new(self.driver.clone())?;
        for cfg in &self.spirals {
            driver.register(SpiralInstance::build(cfg.clone())?);
        }
        log::info!(
            "[field] built driver: spirals={} a={} running={}",
            driver.spirals().len(),
            driver.a(),
            driver.is_running()
        );
        Ok(driver)
    }
}

fn four_spirals(
    num_points: usize,
    max_theta: f32,
    scale: CurveScale,
    colors: [u32; 4],
    divisor: SampleDivisor,
) -> Vec<SpiralConfig> {
    CurveFamily::ALL
        .into_iter()
        .zip(colors)
        .map(|(family, hex)| {
            SpiralConfig::new(family, num_points, max_theta, Color::from_hex(hex))
                .with_scale(scale)
                .with_divisor(divisor)
        })
        .collect()
}
