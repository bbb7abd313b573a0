//! Time math shared by the animators.

/// Cubic ease-out: `1 - (1 - p)^3`. Fast start, decelerates into the target.
///
/// Monotonic on `[0, 1]` with `f(0) = 0` and `f(1) = 1`.
#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let inv = 1.0 - progress;
    1.0 - inv * inv * inv
}

/// Normalized progress of an animation that started at `start` and lasts `duration`,
/// clamped to `[0, 1]`. A non-positive duration is already complete.
#[inline]
pub fn progress(now: f64, start: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    let p = (now - start) / duration;
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0)
}
