#![forbid(unsafe_code)]

//! The per-flow coordinator.
//!
//! A [`FlowCoordinator`] owns one [`NavigationStack`], one
//! [`PresentationStack`], and one [`ViewModelCache`] for a single root flow.
//! It is the only place that mutates them, which is what makes the lifecycle
//! deterministic: every stack mutation evicts exactly the view-models whose
//! screens left a stack.
//!
//! # Timed dismissal
//!
//! Bottom sheets and popups animate out before their entry is removed.
//! `back()` on such an entry sets the matching `is_dismissing_*` flag and
//! schedules the removal on the coordinator's [`TimerQueue`]; the flag lets
//! the presentation layer suppress re-renders during the window, and a
//! re-entrant `back()` inside the window is absorbed as a no-op. The host
//! drains due operations with [`run_pending`](FlowCoordinator::run_pending)
//! each turn.
//!
//! Navigating while a bottom sheet or popup is topmost never stacks a second
//! overlay on it: the coordinator dismisses first and chains the requested
//! navigation [`CHAINED_NAVIGATION_DELAY`] later on the same queue.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use flownav_core::{
    Destination, NavigationStack, NavigationStyle, PresentationEntry, PresentationStack, Screen,
};

use crate::app::{AppCoordinator, Navigator};
use crate::cache::{ViewModelCache, removal_keys};
use crate::clock::Clock;
use crate::timer::TimerQueue;

/// Delay between dismissing a bottom sheet or popup and performing a chained
/// navigation request. Fixed regardless of which modal kind was dismissed.
pub const CHAINED_NAVIGATION_DELAY: Duration = Duration::from_millis(500);

/// Collaborator notified when the user drives navigation backwards.
///
/// Implemented by the session idle tracker; anything resetting an inactivity
/// deadline fits.
pub trait InteractionSink {
    fn user_interaction(&self);
}

/// Context handed to a [`ScreenRenderer`] while resolving a destination.
///
/// Gives the renderer the flow's view-model cache (for lazy construction
/// keyed by screen id) and a [`Navigator`] to inject into view-models.
pub struct RenderContext<'a, S: Screen, V> {
    pub cache: &'a mut ViewModelCache,
    pub nav: Navigator<S, V>,
}

/// Maps screens to renderable view descriptions for one flow.
///
/// Implementations should be total over every variant reachable from their
/// flow. The default body returns [`Destination::NotImplemented`], so an
/// unrouted screen surfaces as a visible diagnostic placeholder instead of a
/// silent failure.
pub trait ScreenRenderer {
    type Screen: Screen;
    type View;

    fn destination(
        &mut self,
        screen: &Self::Screen,
        _ctx: &mut RenderContext<'_, Self::Screen, Self::View>,
    ) -> Destination<Self::View> {
        Destination::not_implemented(screen.id())
    }
}

/// Which timed-dismissal flag a deferred removal must clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DismissKind {
    BottomSheet,
    Popup,
}

/// Deferred operations on the flow's timer queue.
enum DeferredOp<S: Screen> {
    /// Remove the topmost presentation entry after its exit animation.
    FinishDismissal { kind: DismissKind, screen_id: String },
    /// A navigation chained behind a dismissal.
    Navigate { screen: S, style: NavigationStyle },
}

/// Owns the stacks, cache, and deferred work for a single root flow.
pub struct FlowCoordinator<S: Screen, V> {
    nav: NavigationStack<S>,
    presentation: PresentationStack<S>,
    cache: ViewModelCache,
    renderer: Box<dyn ScreenRenderer<Screen = S, View = V>>,
    timers: TimerQueue<DeferredOp<S>>,
    clock: Rc<dyn Clock>,
    interaction: Option<Rc<dyn InteractionSink>>,
    // Back-reference to the owning app coordinator, for handing view-models
    // a Navigator. Dangling when the flow is used standalone.
    pub(crate) app: Weak<RefCell<AppCoordinator<S, V>>>,
    is_dismissing_bottom_sheet: bool,
    is_dismissing_popup: bool,
}

impl<S: Screen, V> FlowCoordinator<S, V> {
    /// Create a coordinator whose back-stack holds `initial_screen`.
    pub fn new(
        initial_screen: S,
        renderer: Box<dyn ScreenRenderer<Screen = S, View = V>>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            nav: NavigationStack::new(initial_screen),
            presentation: PresentationStack::new(),
            cache: ViewModelCache::new(),
            renderer,
            timers: TimerQueue::new(),
            clock,
            interaction: None,
            app: Weak::new(),
            is_dismissing_bottom_sheet: false,
            is_dismissing_popup: false,
        }
    }

    /// Attach the collaborator notified on back/pop interactions.
    #[must_use]
    pub fn with_interaction_sink(mut self, sink: Rc<dyn InteractionSink>) -> Self {
        self.interaction = Some(sink);
        self
    }

    // ── Snapshots for the presentation layer ────────────────────────────

    /// Read-only back-stack snapshot.
    #[must_use]
    pub fn nav_stack(&self) -> &[S] {
        self.nav.items()
    }

    /// Read-only modal-stack snapshot, outermost first.
    #[must_use]
    pub fn presentation_stack(&self) -> &[PresentationEntry<S>] {
        self.presentation.entries()
    }

    #[must_use]
    pub fn is_dismissing_bottom_sheet(&self) -> bool {
        self.is_dismissing_bottom_sheet
    }

    #[must_use]
    pub fn is_dismissing_popup(&self) -> bool {
        self.is_dismissing_popup
    }

    /// Style of the topmost surface: the top modal's style if any, `Push`
    /// when only the back-stack has depth, `None` at the bare root.
    #[must_use]
    pub fn topmost_style(&self) -> Option<NavigationStyle> {
        if let Some(entry) = self.presentation.top() {
            return Some(entry.style.clone());
        }
        if self.nav.len() > 1 {
            return Some(NavigationStyle::Push);
        }
        None
    }

    /// The screen currently in front of the user, with its presentation
    /// style (`None` style at the bare root).
    #[must_use]
    pub fn top_view_info(&self) -> Option<(S, Option<NavigationStyle>)> {
        if let Some(entry) = self.presentation.top() {
            return Some((entry.screen.clone(), Some(entry.style.clone())));
        }
        let top = self.nav.top()?;
        let style = (self.nav.len() > 1).then_some(NavigationStyle::Push);
        Some((top.clone(), style))
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Present `screen` with `style`: modal kinds layer onto the
    /// presentation stack, `Push` appends to the back-stack.
    ///
    /// If the topmost presentation is a bottom sheet or popup, it is
    /// dismissed first (with its exit animation) and the requested navigation
    /// is chained [`CHAINED_NAVIGATION_DELAY`] later, so a new overlay is
    /// never stacked directly on one of those.
    pub fn navigate(&mut self, screen: S, style: NavigationStyle) {
        let top_needs_dismissal = self
            .presentation
            .top()
            .is_some_and(|e| e.style.is_bottom_sheet() || e.style.is_popup());

        if top_needs_dismissal {
            tracing::debug!(
                id = %screen.id(),
                style = style.label(),
                "dismissing topmost overlay before navigating"
            );
            self.back();
            let deadline = self.clock.now() + CHAINED_NAVIGATION_DELAY;
            self.timers
                .schedule(deadline, DeferredOp::Navigate { screen, style });
            return;
        }

        self.apply_navigation(screen, style);
    }

    fn apply_navigation(&mut self, screen: S, style: NavigationStyle) {
        tracing::debug!(id = %screen.id(), style = style.label(), "navigate");
        if style.is_push() {
            self.nav.push(screen);
        } else {
            self.presentation.push(screen, style);
        }
    }

    /// Pop the topmost surface: presentation stack first, then back-stack.
    ///
    /// Bottom sheets and popups are removed after their exit-animation delay;
    /// every other kind immediately. Signals user interaction.
    pub fn back(&mut self) {
        self.signal_interaction();

        if self.presentation.is_empty() {
            if self.nav.len() > 1 {
                self.pop();
            }
            return;
        }

        let (screen_id, delay, is_bottom_sheet) = {
            let Some(top) = self.presentation.top() else {
                return;
            };
            (
                top.screen.id(),
                top.style.dismissal_delay(),
                top.style.is_bottom_sheet(),
            )
        };

        if let Some(delay) = delay {
            let kind = if is_bottom_sheet {
                DismissKind::BottomSheet
            } else {
                DismissKind::Popup
            };
            self.begin_timed_dismissal(kind, delay, screen_id);
        } else if let Some(entry) = self.presentation.pop() {
            self.evict_for(&entry.screen.id());
        }
    }

    fn begin_timed_dismissal(&mut self, kind: DismissKind, delay: Duration, screen_id: String) {
        let flag = match kind {
            DismissKind::BottomSheet => &mut self.is_dismissing_bottom_sheet,
            DismissKind::Popup => &mut self.is_dismissing_popup,
        };
        // A second back() inside the dismissal window must not double-remove.
        if *flag {
            tracing::trace!(id = %screen_id, "dismissal already in flight; ignoring");
            return;
        }
        *flag = true;
        tracing::debug!(id = %screen_id, ?kind, delay_ms = delay.as_millis() as u64, "timed dismissal started");
        let deadline = self.clock.now() + delay;
        self.timers
            .schedule(deadline, DeferredOp::FinishDismissal { kind, screen_id });
    }

    /// Remove the top back-stack entry. No-op at the root. Signals user
    /// interaction only when the stack actually shrinks.
    pub fn pop(&mut self) {
        if let Some(removed) = self.nav.pop() {
            self.signal_interaction();
            self.evict_for(&removed.id());
        }
    }

    /// Truncate the back-stack at the occurrence of `target` nearest the
    /// top; degrade to a single [`pop`](Self::pop) when `target` is absent.
    pub fn pop_to(&mut self, target: &S) {
        match self.nav.pop_to(target) {
            Some(removed) => {
                if !removed.is_empty() {
                    self.signal_interaction();
                }
                for screen in removed {
                    self.evict_for(&screen.id());
                }
            }
            None => {
                tracing::debug!(id = %target.id(), "pop target not on stack; popping once");
                self.pop();
            }
        }
    }

    /// Remove everything above the root.
    pub fn pop_to_root(&mut self) {
        let removed = self.nav.pop_to_root();
        if !removed.is_empty() {
            self.signal_interaction();
        }
        for screen in removed {
            self.evict_for(&screen.id());
        }
    }

    // ── Deferred execution ──────────────────────────────────────────────

    /// Drain and apply every deferred operation whose deadline has passed.
    ///
    /// Call once per turn of the host event loop; tests call it after
    /// advancing a manual clock.
    pub fn run_pending(&mut self) {
        for op in self.timers.pop_due(self.clock.now()) {
            match op {
                DeferredOp::FinishDismissal { kind, screen_id } => {
                    self.finish_dismissal(kind, &screen_id);
                }
                DeferredOp::Navigate { screen, style } => {
                    self.apply_navigation(screen, style);
                }
            }
        }
    }

    fn finish_dismissal(&mut self, kind: DismissKind, screen_id: &str) {
        // The stack may have been emptied (teardown) while the removal was
        // pending; removal is best-effort, eviction uses the recorded id.
        if self.presentation.pop().is_some() {
            tracing::debug!(id = %screen_id, ?kind, "timed dismissal finished");
        }
        self.evict_for(screen_id);
        match kind {
            DismissKind::BottomSheet => self.is_dismissing_bottom_sheet = false,
            DismissKind::Popup => self.is_dismissing_popup = false,
        }
    }

    /// Earliest pending deadline, for hosts that sleep between turns.
    #[must_use]
    pub fn next_deadline(&self) -> Option<std::time::Instant> {
        self.timers.next_deadline()
    }

    // ── Rendering ───────────────────────────────────────────────────────

    /// Resolve the renderable view description for `screen`.
    pub fn destination(&mut self, screen: &S) -> Destination<V> {
        let mut ctx = RenderContext {
            cache: &mut self.cache,
            nav: Navigator::from_weak(self.app.clone()),
        };
        self.renderer.destination(screen, &mut ctx)
    }

    // ── View-model storage ──────────────────────────────────────────────

    /// Shared access to the flow's view-model cache.
    #[must_use]
    pub fn cache(&self) -> &ViewModelCache {
        &self.cache
    }

    #[must_use]
    pub fn cache_mut(&mut self) -> &mut ViewModelCache {
        &mut self.cache
    }

    fn evict_for(&mut self, id: &str) {
        for key in removal_keys(id) {
            self.cache.evict(&key);
        }
    }

    // ── Teardown ────────────────────────────────────────────────────────

    /// Evict every cached view-model, then empty both stacks, clear the
    /// dismissal flags, and drop pending deferred operations. Used only
    /// during coordinator teardown.
    ///
    /// Eviction drains the whole cache rather than walking the stacks:
    /// renderers may cache under keys the stack ids do not map to, and every
    /// cleanup hook must still run.
    pub fn perform_full_cleanup(&mut self) {
        tracing::debug!(
            nav_depth = self.nav.len(),
            modal_depth = self.presentation.len(),
            "full cleanup"
        );
        self.cache.evict_all();
        self.nav.clear();
        self.presentation.clear();
        self.is_dismissing_bottom_sheet = false;
        self.is_dismissing_popup = false;
        // A pending removal must not fire into a successor flow's stacks.
        self.timers.clear();
    }

    fn signal_interaction(&self) {
        if let Some(sink) = &self.interaction {
            sink.user_interaction();
        }
    }
}
