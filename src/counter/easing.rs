/// Exponential ease-out: quick start, long soft landing.
///
/// `t == 1` is answered exactly so the last frame can't land a hair short of
/// the target through `2^-10` rounding.
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Fraction of the run that has elapsed, clamped to `[0, 1]`.
///
/// A non-positive duration counts as already finished.
pub fn progress(elapsed_ms: f64, duration_ms: i64) -> f64 {
    if duration_ms <= 0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms as f64).clamp(0.0, 1.0)
}

/// Value shown for a given progress, floored and never above `target`.
pub fn value_at(progress: f64, target: u64) -> u64 {
    let eased = (ease_out_expo(progress) * target as f64).floor() as u64;
    eased.min(target)
}
