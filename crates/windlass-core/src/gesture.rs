#![forbid(unsafe_code)]

//! Pull-gesture recognition: transforms raw pointer events into pull
//! distances.
//!
//! [`PullTracker`] is a stateful recognizer fed with the pointer lifecycle
//! (`down` → `move`* → `up`/`cancel`). It captures the touch reference at
//! gesture start and derives the clamped pull distance on every move; the
//! widget layer runs the distance through the damping curve and the state
//! machine.
//!
//! # Invariants
//!
//! 1. Only the first concurrent pointer is tracked: a gesture begun while
//!    other pointers are already down is ignored, though pointer-count
//!    bookkeeping still runs so up/down pairs stay balanced.
//! 2. A move produces a distance only while the surface is at its top
//!    boundary and the raw delta is downward; anything else is ordinary
//!    scrolling, not a pull.
//! 3. The produced distance is never negative. When the recorded origin
//!    scroll offset overshoots the raw delta (a transient misread when a
//!    gesture begins mid-momentum-scroll), the origin is corrected in place
//!    and the distance clamps to zero.
//! 4. After [`reset`](PullTracker::reset), the tracker returns to its idle
//!    state with no pointers registered.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Outcome |
//! |---------|-------|---------|
//! | Down while busy | refresh/load in flight | pointer counted, gesture not engaged |
//! | Second pointer down | multi-touch | first gesture keeps its reference |
//! | Move without down | host delivered out of order | ignored |
//! | Spurious up | host delivered out of order | count saturates at zero |

use crate::geometry::ViewportGeometry;

/// Reference point captured once at gesture start and consumed throughout
/// the gesture. Overwritten at the next gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchReference {
    /// Pointer y coordinate at gesture start.
    pub origin_y: f32,
    /// Scroll offset read at gesture start.
    pub origin_scroll: f32,
}

/// Stateful pull-gesture tracker.
#[derive(Debug, Clone, Default)]
pub struct PullTracker {
    active_pointers: u32,
    touch: Option<TouchReference>,
}

impl PullTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer-down. `permitted` is the busy-guard verdict from the
    /// state machine; tracking begins only when this is the first concurrent
    /// pointer and the guard allows a new gesture.
    pub fn on_down(&mut self, y: f32, geometry: ViewportGeometry, permitted: bool) {
        self.active_pointers += 1;
        if permitted && self.active_pointers == 1 {
            #[cfg(feature = "tracing")]
            tracing::trace!(origin_y = y, origin_scroll = geometry.scroll_offset, "pull engaged");
            self.touch = Some(TouchReference {
                origin_y: y,
                origin_scroll: geometry.scroll_offset,
            });
        }
    }

    /// Handle a pointer-move, returning the clamped pull distance when the
    /// move belongs to an engaged pull gesture.
    pub fn on_move(&mut self, y: f32, geometry: ViewportGeometry) -> Option<f32> {
        let touch = self.touch.as_mut()?;
        let delta = y - touch.origin_y;
        if delta <= 0.0 || !geometry.at_top() {
            return None;
        }
        let mut distance = delta - touch.origin_scroll;
        if distance < 0.0 {
            distance = 0.0;
            touch.origin_scroll = delta;
        }
        Some(distance)
    }

    /// Handle a pointer-up or cancel. Returns `true` when this ended an
    /// engaged gesture.
    pub fn on_up(&mut self) -> bool {
        self.active_pointers = self.active_pointers.saturating_sub(1);
        let engaged = self.touch.take().is_some();
        #[cfg(feature = "tracing")]
        if engaged {
            tracing::trace!("pull released");
        }
        engaged
    }

    /// Whether a pull gesture is currently engaged.
    #[inline]
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.touch.is_some()
    }

    /// Number of pointers currently down.
    #[inline]
    #[must_use]
    pub fn active_pointers(&self) -> u32 {
        self.active_pointers
    }

    /// Reset to the idle state, dropping any engaged gesture.
    pub fn reset(&mut self) {
        self.active_pointers = 0;
        self.touch = None;
    }
}
