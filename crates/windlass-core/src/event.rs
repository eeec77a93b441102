#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the events a host feeds into the widget layer. All
//! types derive `Clone`, `Copy`, and `PartialEq` for use in tests and
//! pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are in scroll-surface pixels, single vertical axis
//!   (horizontal gestures are not recognized).
//! - `Modifiers` use bitflags for easy combination.
//! - Geometry does not travel with the event; hosts snapshot the surface and
//!   pass both into the handler so a single read backs the whole callback.

use bitflags::bitflags;
use std::time::Duration;

/// Canonical surface event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A pointer (touch/mouse) event on the scroll surface.
    Pointer(PointerEvent),

    /// The scroll surface scrolled. The accompanying geometry snapshot
    /// carries the new offset.
    Scroll,

    /// The pull-height collapse transition finished.
    ///
    /// Hosts that animate the snap-back must deliver this when the animation
    /// ends; hosts without transitions deliver it immediately after the
    /// render that zeroed the pull height.
    TransitionEnd,

    /// Cooperative timer tick with the elapsed duration since the last tick.
    Tick(Duration),
}

bitflags! {
    /// Modifier keys that can be held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The pointer lifecycle stage.
    pub kind: PointerKind,

    /// Vertical coordinate in surface pixels.
    pub y: f32,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, y: f32) -> Self {
        Self {
            kind,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Pointer pressed down at `y`.
    #[must_use]
    pub const fn down(y: f32) -> Self {
        Self::new(PointerKind::Down, y)
    }

    /// Pointer moved to `y` while pressed.
    #[must_use]
    pub const fn moved(y: f32) -> Self {
        Self::new(PointerKind::Move, y)
    }

    /// Pointer released at `y`.
    #[must_use]
    pub const fn up(y: f32) -> Self {
        Self::new(PointerKind::Up, y)
    }

    /// Pointer interaction cancelled by the platform.
    #[must_use]
    pub const fn cancel(y: f32) -> Self {
        Self::new(PointerKind::Cancel, y)
    }
}

/// The pointer lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer pressed down.
    Down,

    /// Pointer moved while pressed.
    Move,

    /// Pointer released.
    Up,

    /// Interaction cancelled by the platform (focus loss, system gesture).
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_constructors() {
        let down = PointerEvent::down(42.0);
        assert_eq!(down.kind, PointerKind::Down);
        assert_eq!(down.y, 42.0);
        assert_eq!(down.modifiers, Modifiers::NONE);

        assert_eq!(PointerEvent::moved(1.0).kind, PointerKind::Move);
        assert_eq!(PointerEvent::up(1.0).kind, PointerKind::Up);
        assert_eq!(PointerEvent::cancel(1.0).kind, PointerKind::Cancel);
    }

    #[test]
    fn pointer_with_modifiers() {
        let ev = PointerEvent::down(0.0).with_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        assert!(ev.modifiers.contains(Modifiers::SHIFT));
        assert!(ev.modifiers.contains(Modifiers::CTRL));
        assert!(!ev.modifiers.contains(Modifiers::ALT));
    }

    #[test]
    fn events_compare() {
        assert_eq!(Event::Scroll, Event::Scroll);
        assert_ne!(Event::Scroll, Event::TransitionEnd);
        assert_eq!(
            Event::Tick(Duration::from_millis(16)),
            Event::Tick(Duration::from_millis(16))
        );
    }
}
