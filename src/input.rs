// Pure input helpers, kept free of web-sys so they can be tested on the host.

/// True when a `KeyboardEvent.key` value should pause or resume the field.
/// Auto-repeat events never toggle.
pub fn is_toggle_key(key: &str, repeat: bool) -> bool {
    !repeat && matches!(key, " " | "Spacebar")
}

/// Backing-store size in physical pixels for a canvas of the given CSS size.
/// The pixel ratio is clamped to `[1, max_dpr]` and each side is at least 1.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() { dpr.clamp(1.0, max_dpr.max(1.0)) } else { 1.0 };
    let px = |css: f64| {
        if css.is_finite() && css > 0.0 {
            ((css * dpr).round() as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

/// Frames per second over a window, or 0 when no time has elapsed.
pub fn frames_per_second(frames: u32, elapsed_sec: f32) -> f32 {
    if elapsed_sec > 0.0 {
        frames as f32 / elapsed_sec
    } else {
        0.0
    }
}
