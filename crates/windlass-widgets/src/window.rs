#![forbid(unsafe_code)]

//! Visible-window calculation for virtualized rendering.
//!
//! Rendering cost stays independent of list length by only materializing the
//! index window that intersects the viewport. Overscan pads the window in
//! both directions to hide pop-in during fast scroll, and one extra row
//! covers partial-row visibility at the viewport's trailing edge.
//!
//! The window is deliberately not clamped against the data length: slicing
//! with an out-of-bounds end is a saturating truncation (see
//! [`clamped_slice`]), never an error.

use std::ops::Range;
use windlass_core::geometry::ViewportGeometry;

/// Tracks the rendered index window and suppresses redundant updates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewWindow {
    range: Range<usize>,
}

impl ViewWindow {
    /// Create an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self { range: 0..0 }
    }

    /// The current index window.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Compute the index window for the given geometry.
    ///
    /// # Panics
    ///
    /// Panics if `row_height` is not strictly positive.
    #[must_use]
    pub fn compute(geometry: ViewportGeometry, row_height: f32, overscan: usize) -> Range<usize> {
        assert!(row_height > 0.0, "row_height must be positive");

        let first_row = (geometry.scroll_offset / row_height).floor() as i64;
        let start = (first_row - overscan as i64).max(0) as usize;
        let visible = (geometry.client_height / row_height).ceil().max(0.0) as usize;
        let end = start + visible + overscan + 1;

        start..end
    }

    /// Recompute and store the window, reporting whether it changed.
    ///
    /// Identical consecutive windows return `false` so hosts can skip the
    /// re-render entirely.
    pub fn update(&mut self, geometry: ViewportGeometry, row_height: f32, overscan: usize) -> bool {
        let next = Self::compute(geometry, row_height, overscan);
        if next == self.range {
            false
        } else {
            self.range = next;
            true
        }
    }
}

/// Slice `data` by `range`, truncating out-of-bounds ends instead of
/// panicking.
#[must_use]
pub fn clamped_slice<T>(data: &[T], range: Range<usize>) -> &[T] {
    let start = range.start.min(data.len());
    let end = range.end.clamp(start, data.len());
    &data[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(scroll_offset: f32, client_height: f32) -> ViewportGeometry {
        ViewportGeometry::new(scroll_offset, client_height, f32::MAX)
    }

    #[test]
    fn window_mid_scroll() {
        // rowHeight=50, clientHeight=500, overscan=1, scrollOffset=120:
        // start = max(0, floor(120/50) - 1) = 1
        // end   = 1 + ceil(500/50) + 1 + 1  = 13
        let range = ViewWindow::compute(geometry(120.0, 500.0), 50.0, 1);
        assert_eq!(range, 1..13);
    }

    #[test]
    fn window_at_origin_clamps_start() {
        let range = ViewWindow::compute(geometry(0.0, 500.0), 50.0, 2);
        assert_eq!(range.start, 0);
        assert_eq!(range.end, 13);
    }

    #[test]
    fn window_negative_offset_clamps_start() {
        // Rubber-banded past the top.
        let range = ViewWindow::compute(geometry(-35.0, 500.0), 50.0, 1);
        assert_eq!(range.start, 0);
    }

    #[test]
    fn window_covers_viewport_plus_overscan() {
        for overscan in 0..4usize {
            let range = ViewWindow::compute(geometry(400.0, 500.0), 50.0, overscan);
            // 10 visible rows, overscan padding, plus the partial-row slot.
            assert_eq!(range.end - range.start, 10 + overscan + 1);
            assert_eq!(range.start, 8 - overscan.min(8));
        }
    }

    #[test]
    fn window_zero_viewport_still_non_empty() {
        let range = ViewWindow::compute(geometry(0.0, 0.0), 50.0, 0);
        assert_eq!(range, 0..1);
    }

    #[test]
    fn window_partial_rows_round_up() {
        // 501px viewport spans 11 row slots.
        let range = ViewWindow::compute(geometry(0.0, 501.0), 50.0, 0);
        assert_eq!(range, 0..12);
    }

    #[test]
    #[should_panic(expected = "row_height must be positive")]
    fn window_zero_row_height_panics() {
        let _ = ViewWindow::compute(geometry(0.0, 500.0), 0.0, 1);
    }

    #[test]
    fn update_reports_change_once() {
        let mut window = ViewWindow::new();
        assert!(window.update(geometry(120.0, 500.0), 50.0, 1));
        // Same geometry: no change, no re-render.
        assert!(!window.update(geometry(120.0, 500.0), 50.0, 1));
        // Sub-row scroll that lands in the same window: still no change.
        assert!(!window.update(geometry(130.0, 500.0), 50.0, 1));
        // Crossing a row boundary moves the window.
        assert!(window.update(geometry(160.0, 500.0), 50.0, 1));
        assert_eq!(window.range(), 2..14);
    }

    #[test]
    fn clamped_slice_truncates() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(clamped_slice(&data, 1..3), &[2, 3]);
        assert_eq!(clamped_slice(&data, 3..99), &[4, 5]);
        assert_eq!(clamped_slice(&data, 7..99), &[] as &[i32]);
        assert_eq!(clamped_slice(&data, 0..0), &[] as &[i32]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn window_is_well_formed(
                scroll_offset in -1000.0f32..1_000_000.0,
                client_height in 0.0f32..5000.0,
                row_height in 1.0f32..500.0,
                overscan in 0usize..8,
            ) {
                let range = ViewWindow::compute(
                    geometry(scroll_offset, client_height),
                    row_height,
                    overscan,
                );
                prop_assert!(range.end > range.start);
                let visible = (client_height / row_height).ceil() as usize;
                prop_assert!(range.end - range.start >= visible + overscan + 1);
            }

            #[test]
            fn slice_never_panics(
                len in 0usize..64,
                start in 0usize..1000,
                span in 0usize..1000,
            ) {
                let data: Vec<usize> = (0..len).collect();
                let slice = clamped_slice(&data, start..start + span);
                prop_assert!(slice.len() <= len);
            }
        }
    }
}
