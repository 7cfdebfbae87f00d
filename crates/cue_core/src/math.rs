//! Math utilities
//!
//! Re-exports glam with the interpolation helpers used by timed behaviors

pub use glam::*;

/// Linear interpolation written as `(1 - t) * from + t * to`.
///
/// This form lands exactly on `to` at `t == 1.0` and exactly on the midpoint
/// at `t == 0.5` for representable endpoints.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (1.0 - t) * from + t * to
}

/// Slack allowed when comparing accumulated tick deltas against a duration.
///
/// Summing fixed deltas such as 0.1 or 1/60 falls just short of whole seconds.
pub const TIME_EPSILON: f64 = 1e-9;

/// Whether `elapsed` has reached `duration`, within [`TIME_EPSILON`].
#[inline]
pub fn reached(elapsed: f64, duration: f64) -> bool {
    elapsed + TIME_EPSILON >= duration
}

/// Progress of `elapsed` through `duration`, clamped to `[0, 1]`.
///
/// A non-positive duration, or one reached within [`TIME_EPSILON`], counts as
/// finished.
#[inline]
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 || reached(elapsed, duration) {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}
