#![forbid(unsafe_code)]

//! Render projection: state → layout instructions.
//!
//! [`project`] converts the current pull/window state into a [`ViewPlan`] of
//! translation offsets and affordance visibility. A window change moves a
//! single content translation and a pull moves a single body translation;
//! sibling rows are never re-flowed, which is what keeps re-render cost
//! constant.

use crate::loader::Phase;
use std::ops::Range;

/// The collapsed header affordance expands to at least this height while a
/// pull is in progress.
pub const MIN_HEADER_HEIGHT: f32 = 48.0;

/// Cosmetic progress styling hint. Never affects state logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progress {
    /// No progress styling.
    #[default]
    Disable,
    /// Progress styling active.
    Start,
    /// Progress styling in its completed form.
    Done,
}

/// What the list body should contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyContent {
    /// Render the rows in this index window (slice saturates at data end).
    Rows(Range<usize>),
    /// Data is empty and no more is expected: show the placeholder.
    Placeholder,
    /// Data is empty but more may arrive: show nothing.
    Empty,
}

/// Layout instructions for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPlan {
    /// Interaction phase, for affordance styling.
    pub phase: Phase,
    /// Header affordance height; `None` while collapsed.
    pub header_height: Option<f32>,
    /// Vertical translation applied to the list body.
    pub body_offset: f32,
    /// Minimum body height covering the full, unwindowed content extent.
    pub body_min_height: f32,
    /// Vertical translation applied to the rendered row window.
    pub content_offset: f32,
    /// Body contents.
    pub body: BodyContent,
    /// Whether the load-more footer affordance is shown.
    pub footer: bool,
    /// Cosmetic progress hint.
    pub progress: Progress,
}

/// Project the current state into layout instructions. Pure.
#[must_use]
pub fn project(
    phase: Phase,
    pull_height: f32,
    window: Range<usize>,
    row_height: f32,
    data_len: usize,
    has_more: bool,
    progress: Progress,
) -> ViewPlan {
    let header_height = (pull_height > 0.0).then(|| pull_height.max(MIN_HEADER_HEIGHT));
    let body = if data_len > 0 {
        BodyContent::Rows(window.clone())
    } else if has_more {
        BodyContent::Empty
    } else {
        BodyContent::Placeholder
    };

    ViewPlan {
        phase,
        header_height,
        body_offset: pull_height,
        body_min_height: data_len as f32 * row_height,
        content_offset: window.start as f32 * row_height,
        body,
        footer: has_more,
        progress,
    }
}
