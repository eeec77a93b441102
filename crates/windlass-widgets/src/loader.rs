#![forbid(unsafe_code)]

//! Refresh / load-more state machine.
//!
//! [`LoaderCore`] sequences the pull-to-refresh and load-more lifecycles
//! against asynchronous host operations. It owns the interaction [`Phase`]
//! and the damped pull height, emits [`Command`]s for the host to execute,
//! and consumes token-guarded completions.
//!
//! # Invariants
//!
//! 1. At most one operation is ever in flight: refresh, auto-load, tap-load,
//!    and new pull gestures are all gated by the same busy predicate
//!    ([`is_busy`](LoaderCore::is_busy)).
//! 2. `pull_height` is non-zero only while the phase is `Pulling` or
//!    `Enough`; every transition away zeroes it.
//! 3. A completion is honored at most once: the outstanding token is cleared
//!    on first resolution, and stale tokens (double resolution, post-detach
//!    arrival, post-timeout arrival) are ignored.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Outcome |
//! |---------|-------|---------|
//! | Operation never resolves | host contract violation | machine stays busy, or snaps back when `op_timeout` is set |
//! | Completion after detach | teardown raced an in-flight op | ignored, [`Completion::Stale`] |
//! | Duplicate completion | host resolved twice | second ignored |
//! | Duplicate transition-end while refreshing | host signal glitch | operation not re-issued |

use std::time::Duration;
use windlass_core::geometry::ViewportGeometry;

/// How long the success affordance stays visible before snapping back.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Interaction phase of the pull/load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Idle, steady state.
    #[default]
    Init,
    /// Dragging below the refresh threshold.
    Pulling,
    /// Dragging at or above the refresh threshold; release will refresh.
    Enough,
    /// Refresh operation in flight.
    Refreshing,
    /// Refresh completed; transient success affordance showing.
    Refreshed,
    /// Transient snap-back state used to re-arm the collapse transition.
    Reset,
    /// Load-more operation in flight.
    Loading,
}

/// Token tying an emitted [`Command`] to its completion.
///
/// Tokens are issued per operation and never reused within a
/// [`LoaderCore`]'s lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpToken(u64);

/// Side effects for the host to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the external refresh operation and resolve it via
    /// [`LoaderCore::complete_refresh`] with the carried token.
    StartRefresh(OpToken),
    /// Run the external load-more operation and resolve it via
    /// [`LoaderCore::complete_load_more`] with the carried token.
    StartLoadMore(OpToken),
}

impl Command {
    /// The token carried by this command.
    #[must_use]
    pub fn token(&self) -> OpToken {
        match self {
            Self::StartRefresh(token) | Self::StartLoadMore(token) => *token,
        }
    }
}

/// Opaque failure marker reported by a refresh operation.
///
/// Carries no diagnostics: a failed refresh renders as a silent snap-back,
/// and callers wanting visible failure feedback implement it outside this
/// core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshError;

/// Verdict on a host-reported completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The completion matched the outstanding operation and was applied.
    Accepted,
    /// The token did not match any outstanding operation; nothing changed.
    Stale,
}

/// Collaborator wiring and tuning for the state machine.
///
/// Immutable for the widget's lifetime apart from what the host re-derives
/// per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderConfig {
    /// Pull height at which release triggers a refresh.
    pub refresh_threshold: f32,
    /// Distance from the content bottom at which auto-load fires.
    pub scroll_threshold: f32,
    /// Whether scrolling near the bottom loads more automatically.
    pub auto_load_more: bool,
    /// Whether a refresh collaborator is registered.
    pub has_refresh: bool,
    /// Whether a load-more collaborator is registered.
    pub has_load_more: bool,
    /// Optional watchdog for operations that never resolve. `None` preserves
    /// the legacy behavior of waiting forever.
    pub op_timeout: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            refresh_threshold: 72.0,
            scroll_threshold: 0.0,
            auto_load_more: true,
            has_refresh: false,
            has_load_more: false,
            op_timeout: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpKind {
    Refresh,
    LoadMore,
}

/// The refresh/load state machine.
#[derive(Debug, Clone, Default)]
pub struct LoaderCore {
    phase: Phase,
    pull_height: f32,
    next_token: u64,
    in_flight: Option<(OpToken, OpKind)>,
    settle: Option<Duration>,
    watchdog: Option<Duration>,
}

impl LoaderCore {
    /// Create an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interaction phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current damped pull height.
    #[inline]
    #[must_use]
    pub fn pull_height(&self) -> f32 {
        self.pull_height
    }

    /// Busy predicate shared by every operation trigger.
    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Refreshing | Phase::Loading)
    }

    /// Whether a new pull gesture (and eventual refresh) may begin.
    #[must_use]
    pub fn can_refresh(&self, config: &LoaderConfig) -> bool {
        config.has_refresh && !self.is_busy()
    }

    /// Whether a load-more operation may begin.
    #[must_use]
    pub fn can_load_more(&self, config: &LoaderConfig, has_more: bool) -> bool {
        has_more && config.has_load_more && !self.is_busy()
    }

    fn set_phase(&mut self, phase: Phase) {
        #[cfg(feature = "tracing")]
        tracing::trace!(from = ?self.phase, to = ?phase, "loader transition");
        if !matches!(phase, Phase::Pulling | Phase::Enough) {
            self.pull_height = 0.0;
        }
        self.phase = phase;
    }

    fn issue(&mut self, kind: OpKind, config: &LoaderConfig) -> OpToken {
        self.next_token += 1;
        let token = OpToken(self.next_token);
        self.in_flight = Some((token, kind));
        self.watchdog = config.op_timeout;
        token
    }

    /// Apply a damped pull sample from an active gesture.
    ///
    /// Returns whether the rendered state changed (identical samples must
    /// not trigger a render).
    pub fn on_pull(&mut self, height: f32, config: &LoaderConfig) -> bool {
        let phase = if height >= config.refresh_threshold {
            Phase::Enough
        } else {
            Phase::Pulling
        };
        let changed = phase != self.phase || height != self.pull_height;
        self.set_phase(phase);
        self.pull_height = height;
        changed
    }

    /// Apply a gesture release. `at_rest_top` is whether the surface reads
    /// exactly zero scroll offset at release.
    ///
    /// An `Enough` release arms the refresh; the operation itself is issued
    /// by the transition-completion signal so the collapse animation and the
    /// operation never race.
    pub fn on_release(&mut self, at_rest_top: bool) -> bool {
        let next = match self.phase {
            Phase::Enough => Phase::Refreshing,
            _ if at_rest_top => Phase::Reset,
            _ => Phase::Init,
        };
        let changed = next != self.phase || self.pull_height != 0.0;
        self.set_phase(next);
        changed
    }

    /// Transition-completion signal from the render layer.
    ///
    /// Returns the command to execute (if any) and whether rendered state
    /// changed.
    pub fn on_transition_end(&mut self, config: &LoaderConfig) -> (Option<Command>, bool) {
        match self.phase {
            Phase::Refreshing if self.in_flight.is_none() => {
                let token = self.issue(OpKind::Refresh, config);
                (Some(Command::StartRefresh(token)), false)
            }
            Phase::Reset => {
                self.set_phase(Phase::Init);
                (None, true)
            }
            _ => (None, false),
        }
    }

    /// Scroll-proximity auto-load trigger.
    pub fn on_scroll(
        &mut self,
        geometry: ViewportGeometry,
        config: &LoaderConfig,
        has_more: bool,
    ) -> Option<Command> {
        if config.auto_load_more
            && self.can_load_more(config, has_more)
            && geometry.scroll_bottom() <= config.scroll_threshold
        {
            Some(self.start_load_more(config))
        } else {
            None
        }
    }

    /// Mount-time trigger: same preconditions as the scroll trigger minus
    /// proximity, covering an initially under-filled viewport.
    pub fn on_mount(&mut self, config: &LoaderConfig, has_more: bool) -> Option<Command> {
        if config.auto_load_more && self.can_load_more(config, has_more) {
            Some(self.start_load_more(config))
        } else {
            None
        }
    }

    /// Footer tap trigger: gated by the busy predicate but not by
    /// `auto_load_more`.
    pub fn tap_load_more(&mut self, config: &LoaderConfig, has_more: bool) -> Option<Command> {
        if self.can_load_more(config, has_more) {
            Some(self.start_load_more(config))
        } else {
            None
        }
    }

    fn start_load_more(&mut self, config: &LoaderConfig) -> Command {
        self.set_phase(Phase::Loading);
        Command::StartLoadMore(self.issue(OpKind::LoadMore, config))
    }

    /// Resolve a refresh operation. Stale tokens are ignored.
    pub fn complete_refresh(
        &mut self,
        token: OpToken,
        result: Result<(), RefreshError>,
    ) -> Completion {
        if self.in_flight != Some((token, OpKind::Refresh)) {
            return Completion::Stale;
        }
        self.in_flight = None;
        self.watchdog = None;
        match result {
            Ok(()) => {
                self.set_phase(Phase::Refreshed);
                self.settle = Some(SETTLE_DELAY);
            }
            Err(RefreshError) => self.set_phase(Phase::Reset),
        }
        Completion::Accepted
    }

    /// Resolve a load-more operation. Stale tokens are ignored.
    pub fn complete_load_more(&mut self, token: OpToken) -> Completion {
        if self.in_flight != Some((token, OpKind::LoadMore)) {
            return Completion::Stale;
        }
        self.in_flight = None;
        self.watchdog = None;
        self.set_phase(Phase::Init);
        Completion::Accepted
    }

    /// Advance cooperative timers by `dt`. Returns whether rendered state
    /// changed.
    ///
    /// Drives the success-affordance settle delay and, when configured, the
    /// operation watchdog.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut changed = false;

        if let Some(remaining) = self.settle {
            let remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.settle = None;
                // A new gesture may have begun during the success window;
                // only a still-showing affordance snaps back.
                if self.phase == Phase::Refreshed {
                    self.set_phase(Phase::Init);
                    changed = true;
                }
            } else {
                self.settle = Some(remaining);
            }
        }

        if let Some(remaining) = self.watchdog {
            let remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.watchdog = None;
                if let Some((_, kind)) = self.in_flight.take() {
                    match kind {
                        OpKind::Refresh => self.set_phase(Phase::Reset),
                        OpKind::LoadMore => self.set_phase(Phase::Init),
                    }
                    changed = true;
                }
            } else {
                self.watchdog = Some(remaining);
            }
        }

        changed
    }

    /// Detach: invalidate any outstanding operation and return to the idle
    /// steady state. Completions arriving afterwards read as stale.
    pub fn detach(&mut self) {
        self.in_flight = None;
        self.settle = None;
        self.watchdog = None;
        self.set_phase(Phase::Init);
    }
}
