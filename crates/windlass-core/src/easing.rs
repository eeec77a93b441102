#![forbid(unsafe_code)]

//! Easing curves and the damped pull transform.
//!
//! Normalized curves map `t` in [0, 1] to [0, 1]. [`PullDamping`] applies
//! the sine deceleration curve to a raw drag distance, producing the
//! rubber-band pull height: near-linear growth early in the drag,
//! diminishing returns as the drag approaches the maximum travel distance.

use std::f32::consts::FRAC_PI_2;

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Sinusoidal ease-out (fast start, decelerating end).
#[inline]
pub fn ease_out_sine(t: f32) -> f32 {
    (t.clamp(0.0, 1.0) * FRAC_PI_2).sin()
}

/// Ratio between the maximum travel distance and the asymptotic cap on the
/// produced pull height.
pub const TRAVEL_CAP_RATIO: f32 = 3.5;

/// Damped pull transform.
///
/// Maps a raw drag distance to a visual pull height bounded by
/// `max_travel / TRAVEL_CAP_RATIO`. Pure and side-effect free; safe to call
/// on every pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullDamping {
    max_travel: f32,
}

impl PullDamping {
    /// Create a damping curve for the given maximum travel distance,
    /// typically the device screen height. Travel is floored at 1.0 to keep
    /// the transform well-defined.
    #[must_use]
    pub fn new(max_travel: f32) -> Self {
        Self {
            max_travel: max_travel.max(1.0),
        }
    }

    /// The maximum travel distance.
    #[inline]
    #[must_use]
    pub fn max_travel(&self) -> f32 {
        self.max_travel
    }

    /// Asymptotic cap on the produced pull height.
    #[inline]
    #[must_use]
    pub fn cap(&self) -> f32 {
        self.max_travel / TRAVEL_CAP_RATIO
    }

    /// Damped pull height for a raw drag distance.
    ///
    /// Monotonic non-decreasing for `distance >= 0`; returns 0 for
    /// `distance <= 0`. Input beyond `max_travel` saturates at the cap.
    #[must_use]
    pub fn apply(&self, distance: f32) -> f32 {
        if distance <= 0.0 {
            return 0.0;
        }
        self.cap() * ease_out_sine(distance / self.max_travel)
    }
}
