#![forbid(unsafe_code)]

//! The app-level coordinator: root switching and global reset.
//!
//! An [`AppCoordinator`] owns the single active [`FlowCoordinator`] plus the
//! current root screen. Switching root with `reset` tears the flow down
//! (modal surfaces dismissed, full cache cleanup) and lets a fresh one be
//! built lazily on next access; without `reset` only the displayed root
//! changes and the flow survives.
//!
//! # Handles, not singletons
//!
//! The coordinator is constructed once at startup and reached through
//! explicit handles rather than a process-wide static. [`NavHandle`] is the
//! strong, host-owned handle; [`Navigator`] is the weak handle injected into
//! view-models and renderers (view-models live inside the coordinator's own
//! cache, so a strong handle there would cycle). A [`Navigator`] whose
//! coordinator is gone silently no-ops.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use flownav_core::{NavigationStyle, Screen};

use crate::clock::Clock;
use crate::coordinator::{FlowCoordinator, InteractionSink, ScreenRenderer};
use crate::timer::TimerQueue;

/// Externally-presented modal surfaces torn down on root switch and global
/// reset (platform dialogs, system sheets — whatever the host presents
/// outside the coordinator's own presentation stack).
pub trait ModalSurface {
    fn dismiss_all(&self);
}

/// Builds a fresh renderer for each flow coordinator the app constructs.
pub type RendererFactory<S, V> = Box<dyn Fn() -> Box<dyn ScreenRenderer<Screen = S, View = V>>>;

/// Deferred app-level operations (global reset's next-tick root switch).
enum AppDeferredOp<S: Screen> {
    SwitchRoot { root: S, reset: bool },
}

/// Owns the active flow coordinator and the current root screen.
pub struct AppCoordinator<S: Screen, V> {
    root: S,
    initial_root: S,
    flow: Option<FlowCoordinator<S, V>>,
    renderer_factory: RendererFactory<S, V>,
    clock: Rc<dyn Clock>,
    interaction: Option<Rc<dyn InteractionSink>>,
    modal_surface: Option<Box<dyn ModalSurface>>,
    pending: TimerQueue<AppDeferredOp<S>>,
    // Set by NavHandle::new; lets lazily-built flows hand out Navigators.
    self_ref: Weak<RefCell<AppCoordinator<S, V>>>,
}

impl<S: Screen, V> AppCoordinator<S, V> {
    /// Create an app coordinator whose designated initial root (the global
    /// reset target) is `initial_root`.
    pub fn new(initial_root: S, renderer_factory: RendererFactory<S, V>, clock: Rc<dyn Clock>) -> Self {
        Self {
            root: initial_root.clone(),
            initial_root,
            flow: None,
            renderer_factory,
            clock,
            interaction: None,
            modal_surface: None,
            pending: TimerQueue::new(),
            self_ref: Weak::new(),
        }
    }

    /// Attach the collaborator notified on back/pop interactions; forwarded
    /// to every flow coordinator this app constructs.
    #[must_use]
    pub fn with_interaction_sink(mut self, sink: Rc<dyn InteractionSink>) -> Self {
        self.interaction = Some(sink);
        self
    }

    /// Attach the external modal-surface teardown hook.
    #[must_use]
    pub fn with_modal_surface(mut self, surface: Box<dyn ModalSurface>) -> Self {
        self.modal_surface = Some(surface);
        self
    }

    /// The currently displayed root screen.
    #[must_use]
    pub fn root(&self) -> &S {
        &self.root
    }

    /// Whether `screen` is the currently displayed root.
    #[must_use]
    pub fn is_root(&self, screen: &S) -> bool {
        self.root == *screen
    }

    /// The single live flow coordinator, constructed on first access with
    /// the current root as its initial screen.
    pub fn coordinator(&mut self) -> &mut FlowCoordinator<S, V> {
        if self.flow.is_none() {
            tracing::debug!(root = %self.root.id(), "constructing flow coordinator");
            let mut flow = FlowCoordinator::new(
                self.root.clone(),
                (self.renderer_factory)(),
                self.clock.clone(),
            );
            if let Some(sink) = &self.interaction {
                flow = flow.with_interaction_sink(sink.clone());
            }
            flow.app = self.self_ref.clone();
            self.flow = Some(flow);
        }
        self.flow
            .as_mut()
            .expect("flow coordinator constructed above")
    }

    /// Whether a flow coordinator is currently live.
    #[must_use]
    pub fn has_coordinator(&self) -> bool {
        self.flow.is_some()
    }

    // ── Root switching ──────────────────────────────────────────────────

    /// Display `root`. With `reset`, external modal surfaces are dismissed,
    /// the active flow coordinator is fully cleaned up and discarded, and a
    /// fresh one is built lazily on next access; without `reset` the flow
    /// and its stacks survive, only the displayed root changes.
    ///
    /// The root-level transition itself is the presentation layer's concern.
    pub fn switch_root(&mut self, root: S, reset: bool) {
        tracing::info!(from = %self.root.id(), to = %root.id(), reset, "switch root");
        if reset {
            self.dismiss_external_modals();
            if let Some(flow) = &mut self.flow {
                flow.perform_full_cleanup();
            }
            self.flow = None;
        }
        self.root = root;
    }

    /// Tear down modal surfaces and the flow coordinator, then switch to the
    /// designated initial root with `reset` on the next scheduling tick.
    pub fn perform_global_reset(&mut self) {
        tracing::info!(initial = %self.initial_root.id(), "global reset");
        self.dismiss_external_modals();
        self.flow = None;
        self.pending.schedule(
            self.clock.now() + Duration::ZERO,
            AppDeferredOp::SwitchRoot {
                root: self.initial_root.clone(),
                reset: true,
            },
        );
    }

    fn dismiss_external_modals(&self) {
        if let Some(surface) = &self.modal_surface {
            surface.dismiss_all();
        }
    }

    // ── Deferred execution ──────────────────────────────────────────────

    /// Drain due app-level operations, then the flow's. Call once per turn
    /// of the host event loop.
    pub fn run_pending(&mut self) {
        for op in self.pending.pop_due(self.clock.now()) {
            match op {
                AppDeferredOp::SwitchRoot { root, reset } => self.switch_root(root, reset),
            }
        }
        if let Some(flow) = &mut self.flow {
            flow.run_pending();
        }
    }

    // ── Navigation surface (delegates to the active flow) ───────────────

    pub fn navigate(&mut self, screen: S, style: NavigationStyle) {
        self.coordinator().navigate(screen, style);
    }

    pub fn back(&mut self) {
        self.coordinator().back();
    }

    pub fn pop_to(&mut self, target: &S) {
        self.coordinator().pop_to(target);
    }

    pub fn pop_to_root(&mut self) {
        self.coordinator().pop_to_root();
    }
}

/// Strong, host-owned handle to the app coordinator.
pub struct NavHandle<S: Screen, V> {
    app: Rc<RefCell<AppCoordinator<S, V>>>,
}

impl<S: Screen, V> Clone for NavHandle<S, V> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
        }
    }
}

impl<S: Screen, V> NavHandle<S, V> {
    /// Wrap a freshly-built coordinator. Exactly one strong handle chain
    /// should exist per app session.
    #[must_use]
    pub fn new(app: AppCoordinator<S, V>) -> Self {
        let app = Rc::new(RefCell::new(app));
        app.borrow_mut().self_ref = Rc::downgrade(&app);
        Self { app }
    }

    /// Weak handle for injection into view-models and renderers.
    #[must_use]
    pub fn navigator(&self) -> Navigator<S, V> {
        Navigator {
            app: Rc::downgrade(&self.app),
        }
    }

    /// Run `f` with mutable access to the coordinator.
    ///
    /// Must not be called re-entrantly (e.g. from inside a renderer); the
    /// single-threaded discipline is borrow-checked at runtime by `RefCell`.
    pub fn with<R>(&self, f: impl FnOnce(&mut AppCoordinator<S, V>) -> R) -> R {
        f(&mut self.app.borrow_mut())
    }

    pub fn run_pending(&self) {
        self.app.borrow_mut().run_pending();
    }
}

/// Weak handle through which view-models navigate.
///
/// Every method silently no-ops once the coordinator is gone, mirroring the
/// lifetime-tolerant behavior expected of detached UI state.
pub struct Navigator<S: Screen, V> {
    app: Weak<RefCell<AppCoordinator<S, V>>>,
}

impl<S: Screen, V> Clone for Navigator<S, V> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
        }
    }
}

impl<S: Screen, V> Navigator<S, V> {
    pub(crate) fn from_weak(app: Weak<RefCell<AppCoordinator<S, V>>>) -> Self {
        Self { app }
    }

    /// A navigator with no coordinator behind it; every call no-ops. Useful
    /// for tests and previews.
    #[must_use]
    pub fn detached() -> Self {
        Self { app: Weak::new() }
    }

    fn with_app(&self, f: impl FnOnce(&mut AppCoordinator<S, V>)) {
        if let Some(app) = self.app.upgrade() {
            f(&mut app.borrow_mut());
        }
    }

    pub fn navigate(&self, screen: S, style: NavigationStyle) {
        self.with_app(|app| app.navigate(screen, style));
    }

    /// Convenience for `navigate(screen, Push)`.
    pub fn push(&self, screen: S) {
        self.navigate(screen, NavigationStyle::Push);
    }

    pub fn back(&self) {
        self.with_app(AppCoordinator::back);
    }

    /// Alias for [`back`](Self::back), matching the call sites that think in
    /// back-stack terms.
    pub fn pop(&self) {
        self.back();
    }

    pub fn pop_to(&self, target: &S) {
        self.with_app(|app| app.pop_to(target));
    }

    pub fn pop_to_root(&self) {
        self.with_app(AppCoordinator::pop_to_root);
    }

    pub fn switch_root(&self, root: S, reset: bool) {
        self.with_app(|app| app.switch_root(root, reset));
    }

    pub fn perform_global_reset(&self) {
        self.with_app(AppCoordinator::perform_global_reset);
    }

    /// Whether `screen` is the currently displayed root. `false` once the
    /// coordinator is gone.
    #[must_use]
    pub fn is_root(&self, screen: &S) -> bool {
        self.app
            .upgrade()
            .is_some_and(|app| app.borrow().is_root(screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use flownav_core::Destination;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum S {
        Splash,
        Login,
        Home,
    }

    impl Screen for S {
        fn id(&self) -> String {
            match self {
                S::Splash => "app-splash".into(),
                S::Login => "app-login".into(),
                S::Home => "app-home".into(),
            }
        }
    }

    struct NoRoutes;
    impl ScreenRenderer for NoRoutes {
        type Screen = S;
        type View = ();
    }

    fn app(clock: Rc<ManualClock>) -> AppCoordinator<S, ()> {
        AppCoordinator::new(S::Splash, Box::new(|| Box::new(NoRoutes)), clock)
    }

    #[test]
    fn coordinator_is_built_lazily_with_the_current_root() {
        let clock = ManualClock::new();
        let mut app = app(clock);
        assert!(!app.has_coordinator());
        app.switch_root(S::Home, false);
        assert_eq!(app.coordinator().nav_stack(), &[S::Home]);
        assert!(app.has_coordinator());
    }

    #[test]
    fn switch_root_without_reset_preserves_the_flow() {
        let clock = ManualClock::new();
        let mut app = app(clock);
        app.navigate(S::Login, NavigationStyle::Push);
        app.switch_root(S::Home, false);
        // Same flow, same stacks; only the displayed root changed.
        assert_eq!(app.coordinator().nav_stack(), &[S::Splash, S::Login]);
        assert!(app.is_root(&S::Home));
    }

    #[test]
    fn switch_root_with_reset_discards_the_flow() {
        let clock = ManualClock::new();
        let mut app = app(clock);
        app.navigate(S::Login, NavigationStyle::Push);
        app.switch_root(S::Home, true);
        assert!(!app.has_coordinator());
        assert_eq!(app.coordinator().nav_stack(), &[S::Home]);
    }

    #[test]
    fn global_reset_switches_on_the_next_tick() {
        let clock = ManualClock::new();
        let mut app = app(clock.clone());
        app.switch_root(S::Home, true);
        app.navigate(S::Login, NavigationStyle::Push);

        app.perform_global_reset();
        // Root not yet switched; the op is queued for the next tick.
        assert!(app.is_root(&S::Home));
        assert!(!app.has_coordinator());

        app.run_pending();
        assert!(app.is_root(&S::Splash));
        assert_eq!(app.coordinator().nav_stack(), &[S::Splash]);
    }

    #[test]
    fn modal_surface_is_dismissed_on_reset_switch() {
        use std::cell::Cell;

        #[derive(Default)]
        struct Spy(Rc<Cell<u32>>);
        impl ModalSurface for Spy {
            fn dismiss_all(&self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let clock = ManualClock::new();
        let calls = Rc::new(Cell::new(0u32));
        let mut app = app(clock).with_modal_surface(Box::new(Spy(calls.clone())));

        app.switch_root(S::Home, false);
        assert_eq!(calls.get(), 0);
        app.switch_root(S::Login, true);
        assert_eq!(calls.get(), 1);
        app.perform_global_reset();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn detached_navigator_noops() {
        let nav: Navigator<S, ()> = Navigator::detached();
        nav.push(S::Home);
        nav.back();
        assert!(!nav.is_root(&S::Splash));
    }

    #[test]
    fn navigator_drives_the_coordinator() {
        let clock = ManualClock::new();
        let handle = NavHandle::new(app(clock));
        let nav = handle.navigator();

        nav.push(S::Login);
        handle.with(|app| {
            assert_eq!(app.coordinator().nav_stack(), &[S::Splash, S::Login]);
        });
        nav.back();
        handle.with(|app| {
            assert_eq!(app.coordinator().nav_stack(), &[S::Splash]);
        });
        assert!(nav.is_root(&S::Splash));
    }

    #[test]
    fn flows_built_through_a_handle_hand_out_live_navigators() {
        // A renderer must only capture the navigator during render (calling
        // it there would re-enter the coordinator borrow); this verifies the
        // navigator captured into a view-model is live afterwards.
        struct CapturedNav(Navigator<S, ()>);
        impl crate::cache::ViewModel for CapturedNav {}

        struct Probe;
        impl ScreenRenderer for Probe {
            type Screen = S;
            type View = ();
            fn destination(
                &mut self,
                _screen: &S,
                ctx: &mut crate::coordinator::RenderContext<'_, S, ()>,
            ) -> Destination<()> {
                let nav = ctx.nav.clone();
                ctx.cache.get_or_create("app-probe", move || CapturedNav(nav));
                Destination::View(())
            }
        }

        let clock = ManualClock::new();
        let app = AppCoordinator::new(S::Splash, Box::new(|| Box::new(Probe)), clock);
        let handle = NavHandle::new(app);
        let vm = handle.with(|app| {
            let root = app.root().clone();
            app.coordinator().destination(&root);
            app.coordinator()
                .cache()
                .get::<CapturedNav>("app-probe")
                .expect("probe cached its navigator")
        });
        vm.0.push(S::Login);
        handle.with(|app| {
            assert_eq!(app.coordinator().nav_stack(), &[S::Splash, S::Login]);
        });
    }
}
