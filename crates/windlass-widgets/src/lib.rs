#![forbid(unsafe_code)]

//! Widget layer for the windlass list engine.
//!
//! Composes the `windlass-core` primitives into a headless pull-to-refresh
//! windowed list: the window calculator, the refresh/load state machine, the
//! render projector, and the assembled [`PullList`] widget.

pub mod layout;
pub mod loader;
pub mod pull_list;
pub mod window;

pub use layout::{BodyContent, MIN_HEADER_HEIGHT, Progress, ViewPlan};
pub use loader::{
    Command, Completion, LoaderConfig, LoaderCore, OpToken, Phase, RefreshError, SETTLE_DELAY,
};
pub use pull_list::{PullList, PullListState, Update};
pub use window::{ViewWindow, clamped_slice};
