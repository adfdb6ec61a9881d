//! Closed-form polar radius formulas.
//!
//! Every family maps a shape factor `a` and an angle `theta` (radians) to a
//! radius. The functions are pure: identical inputs always give bit-identical
//! outputs, and no input panics. Degenerate inputs (`a <= 0`, `a == 1`,
//! `theta == 0`) simply produce whatever the arithmetic yields.

use crate::constants::{DECAY_SCALE, GROWTH_SCALE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// r = K * a^(-theta)
    Decay,
    /// r = -K * a^(-theta)
    MirroredDecay,
    /// r = max(0, K2 * a^theta - K2)
    Growth,
    /// Radius of [`CurveFamily::Growth`], point-reflected through the origin.
    ReflectedGrowth,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 4] = [
        CurveFamily::Decay,
        CurveFamily::MirroredDecay,
        CurveFamily::Growth,
        CurveFamily::ReflectedGrowth,
    ];

    #[inline]
    pub fn radius(self, scale: CurveScale, a: f32, theta: f32) -> f32 {
        match self {
            CurveFamily::Decay => scale.k * a.powf(-theta),
            CurveFamily::MirroredDecay => -(scale.k * a.powf(-theta)),
            // f32::max returns the non-NaN operand, so the floor holds for NaN powers too
            CurveFamily::Growth | CurveFamily::ReflectedGrowth => {
                (scale.k2 * a.powf(theta) - scale.k2).max(0.0)
            }
        }
    }

    /// Whether the family negates (x, y) after the polar conversion.
    #[inline]
    pub fn reflects(self) -> bool {
        matches!(self, CurveFamily::ReflectedGrowth)
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveFamily::Decay => "decay",
            CurveFamily::MirroredDecay => "mirrored-decay",
            CurveFamily::Growth => "growth",
            CurveFamily::ReflectedGrowth => "reflected-growth",
        }
    }
}

/// Fixed scale constants of one curve instantiation.
///
/// `k` scales the decaying families, `k2` the growing ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveScale {
    pub k: f32,
    pub k2: f32,
}

impl Default for CurveScale {
    fn default() -> Self {
        Self {
            k: DECAY_SCALE,
            k2: GROWTH_SCALE,
        }
    }
}

impl CurveScale {
    pub fn new(k: f32, k2: f32) -> Self {
        Self { k, k2 }
    }

    pub fn is_finite(&self) -> bool {
        self.k.is_finite() && self.k2.is_finite()
    }
}

/// Evaluate the radius of `family` at (`a`, `theta`).
#[inline]
pub fn evaluate(family: CurveFamily, scale: CurveScale, a: f32, theta: f32) -> f32 {
    family.radius(scale, a, theta)
}
