/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Quadratic ease-in-out: slow start, fast middle, slow finish.
///
/// Continuous at `t = 0.5` where both branches evaluate to 0.5.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Elapsed time as a fraction of `duration_ms`, clamped to `[0, 1]`.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0) as f32
}
