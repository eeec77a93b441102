#![forbid(unsafe_code)]

//! Windlass public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use windlass_core::easing::{EasingFn, PullDamping, TRAVEL_CAP_RATIO, ease_out_sine, linear};
pub use windlass_core::event::{Event, Modifiers, PointerEvent, PointerKind};
pub use windlass_core::geometry::ViewportGeometry;
pub use windlass_core::gesture::{PullTracker, TouchReference};

// --- Widget re-exports -----------------------------------------------------

pub use windlass_widgets::layout::{BodyContent, MIN_HEADER_HEIGHT, Progress, ViewPlan};
pub use windlass_widgets::loader::{
    Command, Completion, LoaderConfig, LoaderCore, OpToken, Phase, RefreshError, SETTLE_DELAY,
};
pub use windlass_widgets::pull_list::{PullList, PullListState, Update};
pub use windlass_widgets::window::{ViewWindow, clamped_slice};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        BodyContent, Command, Event, Phase, PointerEvent, Progress, PullList, PullListState,
        RefreshError, Update, ViewPlan, ViewportGeometry,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_assembles_a_working_list() {
        let data: Vec<u32> = (0..50).collect();
        let list = PullList::new(&data, 50.0).with_refresh().has_more(true);
        let mut state = PullListState::new(800.0);

        let geometry = ViewportGeometry::new(0.0, 500.0, 2500.0);
        let update = list.mount(&mut state, geometry);
        assert!(update.needs_render);
        assert_eq!(state.phase(), Phase::Init);

        let plan = list.view_plan(&state);
        assert_eq!(plan.body, BodyContent::Rows(0..12));
    }
}
