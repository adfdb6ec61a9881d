// Web front-end constants. Field parameters live in spiral-core.

/// DOM id of the WebGPU canvas.
pub const CANVAS_ID: &str = "app-canvas";

/// Cap on devicePixelRatio when sizing the canvas backing store.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

/// Seconds between frame-rate log lines.
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;
