use crate::constants::{A_MAX, A_MIN, A_START, ANIMATION_SPEED, ROTATION_SPEED};
use crate::error::{ConfigError, ConfigResult};
use crate::spiral::SpiralInstance;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    pub a_start: f32,
    pub a_min: f32,
    pub a_max: f32,
    pub speed: f32,
    pub rotation_speed: f32,
    pub start_running: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            a_start: A_START,
            a_min: A_MIN,
            a_max: A_MAX,
            speed: ANIMATION_SPEED,
            rotation_speed: ROTATION_SPEED,
            start_running: true,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.a_min.is_finite() && self.a_max.is_finite() && self.a_min < self.a_max) {
            return Err(ConfigError::InvalidRange {
                a_min: self.a_min,
                a_max: self.a_max,
            });
        }
        if !(self.a_start >= self.a_min && self.a_start <= self.a_max) {
            return Err(ConfigError::StartOutOfRange {
                a_start: self.a_start,
                a_min: self.a_min,
                a_max: self.a_max,
            });
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.rotation_speed.is_finite() {
            return Err(ConfigError::InvalidRotationSpeed(self.rotation_speed));
        }
        Ok(())
    }
}

/// Owns the oscillating shape parameter and every spiral it drives.
///
/// `a` always stays within `[a_min, a_max]`: each tick clamps at a bound and
/// reverses direction there.
#[derive(Debug)]
pub struct AnimationDriver {
    config: DriverConfig,
    a: f32,
    direction: Direction,
    running: bool,
    spirals: SmallVec<[SpiralInstance; 4]>,
    companion_rotation: f32,
    ticks: u64,
}

impl AnimationDriver {
    pub fn new(config: DriverConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            a: config.a_start,
            direction: Direction::Forward,
            running: config.start_running,
            spirals: SmallVec::new(),
            companion_rotation: 0.0,
            ticks: 0,
            config,
        })
    }

    /// Add a spiral, filling its buffer for the current `a`. Returns its index.
    pub fn register(&mut self, mut spiral: SpiralInstance) -> usize {
        spiral.update(self.a);
        log::debug!(
            "[driver] register spiral {} family={} points={}",
            self.spirals.len(),
            spiral.family().name(),
            spiral.len()
        );
        self.spirals.push(spiral);
        self.spirals.len() - 1
    }

    /// Advance one frame. Returns `false` (and changes nothing) while paused.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.a += self.direction.sign() * self.config.speed;
        if self.a >= self.config.a_max {
            self.a = self.config.a_max;
            if self.direction != Direction::Backward {
                log::debug!("[driver] reached a_max={} at tick {}", self.a, self.ticks);
            }
            self.direction = Direction::Backward;
        } else if self.a <= self.config.a_min {
            self.a = self.config.a_min;
            if self.direction != Direction::Forward {
                log::debug!("[driver] reached a_min={} at tick {}", self.a, self.ticks);
            }
            self.direction = Direction::Forward;
        }

        let a = self.a;
        for spiral in self.spirals.iter_mut() {
            spiral.update(a);
        }
        self.companion_rotation += self.config.rotation_speed;
        self.ticks += 1;
        true
    }

    pub fn toggle_running(&mut self) -> bool {
        self.set_running(!self.running);
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if running != self.running {
            log::info!(
                "[driver] animation {} at a={:.4}",
                if running { "resumed" } else { "paused" },
                self.a
            );
        }
        self.running = running;
    }

    pub fn a(&self) -> f32 {
        self.a
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn spirals(&self) -> &[SpiralInstance] {
        &self.spirals
    }

    pub fn spirals_mut(&mut self) -> &mut [SpiralInstance] {
        &mut self.spirals
    }

    /// Rotation of the companion object about z, in radians.
    pub fn companion_rotation(&self) -> f32 {
        self.companion_rotation
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
