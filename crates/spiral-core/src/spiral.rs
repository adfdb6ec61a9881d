use crate::curve::{CurveFamily, CurveScale};
use crate::error::{ConfigError, ConfigResult};
use crate::state::Color;
use glam::Vec3;

/// How sample angles are spread over `[0, max_theta]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleDivisor {
    /// Divide by `num_points - 1`: the last sample lands exactly on `max_theta`.
    #[default]
    Inclusive,
    /// Divide by `num_points`: sampling stops one step short of `max_theta`.
    Exclusive,
}

impl SampleDivisor {
    #[inline]
    pub fn divisor(self, num_points: usize) -> f32 {
        match self {
            SampleDivisor::Inclusive => (num_points - 1) as f32,
            SampleDivisor::Exclusive => num_points as f32,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpiralConfig {
    pub family: CurveFamily,
    pub scale: CurveScale,
    pub num_points: usize,
    pub max_theta: f32,
    pub color: Color,
    pub negate: bool,
    pub divisor: SampleDivisor,
}

impl SpiralConfig {
    pub fn new(family: CurveFamily, num_points: usize, max_theta: f32, color: Color) -> Self {
        Self {
            family,
            scale: CurveScale::default(),
            num_points,
            max_theta,
            color,
            negate: false,
            divisor: SampleDivisor::default(),
        }
    }

    pub fn with_scale(mut self, scale: CurveScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    pub fn with_divisor(mut self, divisor: SampleDivisor) -> Self {
        self.divisor = divisor;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_points < 2 {
            return Err(ConfigError::TooFewPoints(self.num_points));
        }
        if !(self.max_theta.is_finite() && self.max_theta > 0.0) {
            return Err(ConfigError::InvalidMaxTheta(self.max_theta));
        }
        if !self.scale.is_finite() {
            return Err(ConfigError::InvalidScale {
                k: self.scale.k,
                k2: self.scale.k2,
            });
        }
        Ok(())
    }
}

/// One spiral: a fixed-size point buffer refreshed in place from its curve.
///
/// The buffer is allocated once in [`SpiralInstance::build`]; `update` only
/// overwrites its contents.
#[derive(Clone, Debug)]
pub struct SpiralInstance {
    config: SpiralConfig,
    points: Vec<Vec3>,
    dirty: bool,
}

impl SpiralInstance {
    pub fn build(config: SpiralConfig) -> ConfigResult<Self> {
        config.validate()?;
        let points = vec![Vec3::ZERO; config.num_points];
        Ok(Self {
            config,
            points,
            dirty: true,
        })
    }

    /// Angle of sample `index` under the configured divisor policy.
    #[inline]
    pub fn theta_at(&self, index: usize) -> f32 {
        let d = self.config.divisor.divisor(self.config.num_points);
        (index as f32 / d) * self.config.max_theta
    }

    /// Recompute every point for shape parameter `a` and flag the buffer dirty.
    pub fn update(&mut self, a: f32) {
        let family = self.config.family;
        let scale = self.config.scale;
        let flip = family.reflects() ^ self.config.negate;
        let d = self.config.divisor.divisor(self.config.num_points);
        let max_theta = self.config.max_theta;
        for (i, p) in self.points.iter_mut().enumerate() {
            let theta = (i as f32 / d) * max_theta;
            let r = family.radius(scale, a, theta);
            let mut x = r * theta.cos();
            let mut y = r * theta.sin();
            if flip {
                x = -x;
                y = -y;
            }
            *p = Vec3::new(x, y, 0.0);
        }
        self.dirty = true;
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    pub fn family(&self) -> CurveFamily {
        self.config.family
    }

    pub fn color(&self) -> Color {
        self.config.color
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return whether the buffer changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
