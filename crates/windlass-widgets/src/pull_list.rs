#![forbid(unsafe_code)]

//! The assembled pull-to-refresh windowed list widget.
//!
//! [`PullList`] is the per-render view half: it borrows the data slice and
//! carries the caller-supplied configuration. [`PullListState`] is the
//! retained half owning the gesture tracker, the visible window, and the
//! state machine. A host drives the pair like this:
//!
//! 1. call [`PullList::mount`] when the scroll surface becomes available,
//! 2. route surface events through [`PullList::handle_event`], suppressing
//!    native scrolling whenever an [`Update`] says it consumed the event,
//! 3. execute emitted [`Command`]s and resolve them on the state,
//! 4. render from [`PullList::view_plan`] / [`PullList::visible_items`],
//! 5. call [`PullListState::unmount`] on teardown, unconditionally, even
//!    with an operation in flight; its completion will read as stale.

use crate::layout::{self, Progress, ViewPlan};
use crate::loader::{Command, Completion, LoaderConfig, LoaderCore, OpToken, Phase, RefreshError};
use crate::window::{self, ViewWindow};
use std::ops::Range;
use std::time::Duration;
use windlass_core::easing::PullDamping;
use windlass_core::event::{Event, PointerKind};
use windlass_core::geometry::ViewportGeometry;
use windlass_core::gesture::PullTracker;

/// Result of routing one event or completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Update {
    /// Side effect for the host to execute, if any.
    pub command: Option<Command>,
    /// Whether rendered state changed. Identical state must not re-render.
    pub needs_render: bool,
    /// Whether the host must suppress the platform's native scroll handling
    /// for the event that produced this update.
    pub consumed: bool,
}

impl Update {
    fn none() -> Self {
        Self::default()
    }

    fn render() -> Self {
        Self {
            needs_render: true,
            ..Self::default()
        }
    }

    fn command(command: Option<Command>, needs_render: bool) -> Self {
        Self {
            command,
            needs_render,
            consumed: false,
        }
    }
}

/// The view half of the widget: borrowed data plus configuration.
#[derive(Debug, Clone)]
pub struct PullList<'a, T> {
    data: &'a [T],
    row_height: f32,
    overscan: usize,
    refresh_threshold: f32,
    scroll_threshold: f32,
    auto_load_more: bool,
    has_more: bool,
    has_refresh: bool,
    has_load_more: bool,
    op_timeout: Option<Duration>,
    progress: Progress,
}

impl<'a, T> PullList<'a, T> {
    /// Create a list over `data` with a fixed per-row pixel height.
    ///
    /// `row_height` must be strictly positive; window computation panics
    /// otherwise.
    #[must_use]
    pub fn new(data: &'a [T], row_height: f32) -> Self {
        Self {
            data,
            row_height,
            overscan: 1,
            refresh_threshold: 72.0,
            scroll_threshold: 0.0,
            auto_load_more: true,
            has_more: false,
            has_refresh: false,
            has_load_more: false,
            op_timeout: None,
            progress: Progress::Disable,
        }
    }

    /// Extra rows rendered beyond the visible window.
    #[must_use]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Pull height at which release triggers a refresh.
    #[must_use]
    pub fn refresh_threshold(mut self, threshold: f32) -> Self {
        self.refresh_threshold = threshold;
        self
    }

    /// Distance from the content bottom at which auto-load fires.
    #[must_use]
    pub fn scroll_threshold(mut self, threshold: f32) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    /// Enable or disable the scroll-proximity auto-load trigger.
    #[must_use]
    pub fn auto_load_more(mut self, auto: bool) -> Self {
        self.auto_load_more = auto;
        self
    }

    /// Whether more data may exist. Gates auto-load, tap-load, and the
    /// footer affordance.
    #[must_use]
    pub fn has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    /// Declare that a refresh collaborator is wired up. Without it, pull
    /// gestures are ignored.
    #[must_use]
    pub fn with_refresh(mut self) -> Self {
        self.has_refresh = true;
        self
    }

    /// Declare that a load-more collaborator is wired up.
    #[must_use]
    pub fn with_load_more(mut self) -> Self {
        self.has_load_more = true;
        self
    }

    /// Snap back operations that have not resolved within `timeout`.
    #[must_use]
    pub fn op_timeout(mut self, timeout: Duration) -> Self {
        self.op_timeout = Some(timeout);
        self
    }

    /// Cosmetic progress styling hint.
    #[must_use]
    pub fn progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            refresh_threshold: self.refresh_threshold,
            scroll_threshold: self.scroll_threshold,
            auto_load_more: self.auto_load_more,
            has_refresh: self.has_refresh,
            has_load_more: self.has_load_more,
            op_timeout: self.op_timeout,
        }
    }

    /// Attach to a live scroll surface: compute the initial window and run
    /// the mount-time load trigger.
    pub fn mount(&self, state: &mut PullListState, geometry: ViewportGeometry) -> Update {
        let config = self.loader_config();
        state.mounted = true;
        let changed = state.window.update(geometry, self.row_height, self.overscan);
        let command = state.loader.on_mount(&config, self.has_more);
        Update::command(command, changed || command.is_some())
    }

    /// Route one surface event.
    ///
    /// Events arriving while unmounted are ignored: the host should have
    /// detached its listeners, but a straggler must not corrupt state.
    pub fn handle_event(
        &self,
        state: &mut PullListState,
        event: Event,
        geometry: ViewportGeometry,
    ) -> Update {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("pull_list_event", phase = ?state.loader.phase()).entered();

        if !state.mounted {
            return Update::none();
        }
        let config = self.loader_config();

        match event {
            Event::Pointer(pointer) => match pointer.kind {
                PointerKind::Down => {
                    let permitted = state.loader.can_refresh(&config);
                    state.tracker.on_down(pointer.y, geometry, permitted);
                    Update::none()
                }
                PointerKind::Move => {
                    if !state.loader.can_refresh(&config) {
                        return Update::none();
                    }
                    let Some(distance) = state.tracker.on_move(pointer.y, geometry) else {
                        return Update::none();
                    };
                    let height = state.damping.apply(distance);
                    let changed = state.loader.on_pull(height, &config);
                    Update {
                        command: None,
                        needs_render: changed,
                        consumed: height > 0.0,
                    }
                }
                PointerKind::Up | PointerKind::Cancel => {
                    let engaged = state.tracker.on_up();
                    if engaged && state.loader.can_refresh(&config) {
                        let changed = state.loader.on_release(geometry.scroll_offset == 0.0);
                        Update::command(None, changed)
                    } else {
                        Update::none()
                    }
                }
            },
            Event::Scroll => {
                let window_changed = state.window.update(geometry, self.row_height, self.overscan);
                let command = state.loader.on_scroll(geometry, &config, self.has_more);
                Update::command(command, window_changed || command.is_some())
            }
            Event::TransitionEnd => {
                let (command, changed) = state.loader.on_transition_end(&config);
                Update::command(command, changed)
            }
            Event::Tick(dt) => {
                if state.loader.tick(dt) {
                    Update::render()
                } else {
                    Update::none()
                }
            }
        }
    }

    /// Footer tap: explicit load-more request, gated by the busy predicate
    /// but not by `auto_load_more`.
    pub fn tap_load_more(&self, state: &mut PullListState) -> Update {
        let command = state.loader.tap_load_more(&self.loader_config(), self.has_more);
        Update::command(command, command.is_some())
    }

    /// Start index plus the currently visible slice, saturating at the data
    /// end.
    #[must_use]
    pub fn visible_items(&self, state: &PullListState) -> (usize, &'a [T]) {
        let range = state.window.range();
        (range.start, window::clamped_slice(self.data, range))
    }

    /// Project the current state into layout instructions.
    #[must_use]
    pub fn view_plan(&self, state: &PullListState) -> ViewPlan {
        layout::project(
            state.loader.phase(),
            state.loader.pull_height(),
            state.window.range(),
            self.row_height,
            self.data.len(),
            self.has_more,
            self.progress,
        )
    }
}

/// The retained half of the widget.
///
/// Owns the gesture tracker, visible window, state machine, and damping
/// curve. Exclusively owned by the widget instance; reset at gesture start
/// and teardown.
#[derive(Debug, Clone)]
pub struct PullListState {
    tracker: PullTracker,
    window: ViewWindow,
    loader: LoaderCore,
    damping: PullDamping,
    mounted: bool,
}

impl PullListState {
    /// Create a detached state. `max_travel` is the device-derived maximum
    /// drag distance (typically the screen height) fed to the damping curve.
    #[must_use]
    pub fn new(max_travel: f32) -> Self {
        Self {
            tracker: PullTracker::new(),
            window: ViewWindow::new(),
            loader: LoaderCore::new(),
            damping: PullDamping::new(max_travel),
            mounted: false,
        }
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.loader.phase()
    }

    /// Current damped pull height.
    #[must_use]
    pub fn pull_height(&self) -> f32 {
        self.loader.pull_height()
    }

    /// The currently rendered index window.
    #[must_use]
    pub fn window(&self) -> Range<usize> {
        self.window.range()
    }

    /// Whether the state is attached to a surface.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Resolve a refresh operation. Stale tokens are ignored.
    pub fn complete_refresh(&mut self, token: OpToken, result: Result<(), RefreshError>) -> Update {
        match self.loader.complete_refresh(token, result) {
            Completion::Accepted => Update::render(),
            Completion::Stale => Update::none(),
        }
    }

    /// Resolve a load-more operation. Stale tokens are ignored.
    pub fn complete_load_more(&mut self, token: OpToken) -> Update {
        match self.loader.complete_load_more(token) {
            Completion::Accepted => Update::render(),
            Completion::Stale => Update::none(),
        }
    }

    /// Detach from the scroll surface. Always succeeds; in-flight operations
    /// are invalidated and their late completions ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.tracker.reset();
        self.loader.detach();
    }
}
