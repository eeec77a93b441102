#![forbid(unsafe_code)]

//! Substrate-agnostic primitives for the windlass list engine.
//!
//! This crate holds everything below the widget layer: scroll-surface
//! geometry snapshots, canonical pointer/surface event types, the damped
//! pull easing, and the stateful pull-gesture recognizer. Nothing in here
//! knows about rows, windows, or refresh operations; that lives in
//! `windlass-widgets`.

pub mod easing;
pub mod event;
pub mod geometry;
pub mod gesture;
