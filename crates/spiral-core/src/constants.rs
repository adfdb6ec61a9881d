use std::f32::consts::PI;

// Shared tuning constants used by both web and native frontends.

// Spiral sampling
pub const DEFAULT_NUM_POINTS: usize = 250;
pub const DEFAULT_MAX_THETA: f32 = 9.0 * PI;

// Shape parameter oscillation
pub const A_START: f32 = 1.5;
pub const A_MIN: f32 = 1.0;
pub const A_MAX: f32 = 2.0;
pub const ANIMATION_SPEED: f32 = 0.00025; // change in `a` per tick
pub const ROTATION_SPEED: f32 = 0.00025; // companion z-rotation per tick (radians)

// Curve scales
pub const DECAY_SCALE: f32 = 1.0; // K for the decaying families
pub const DECAY_SCALE_WIDE: f32 = 500.0; // K used by the scaled field
pub const GROWTH_SCALE: f32 = 0.33; // K2 for the growing families

// Static field (no animation, denser sampling)
pub const STATIC_NUM_POINTS: usize = 2000;
pub const STATIC_MAX_THETA: f32 = 30.0 * PI;

// Companion wireframe
pub const COMPANION_RADIUS: f32 = 5.0;
pub const COMPANION_DETAIL: u32 = 1;
pub const COMPANION_COLOR: u32 = 0x003030;

// Default palette for the four spirals
pub const SPIRAL_COLORS: [u32; 4] = [
    0x00ff00, // green
    0x00ffff, // cyan
    0xff0000, // red
    0xffa500, // orange
];
pub const STATIC_SPIRAL_COLORS: [u32; 4] = [0x00ff00, 0x0000ff, 0xff0000, 0xffa500];

// Camera
pub const CAMERA_Z: f32 = 0.7;
pub const CAMERA_Z_WIDE: f32 = 600.0;
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 1000.0;

pub const BACKGROUND_COLOR: u32 = 0x000000;
