#![forbid(unsafe_code)]

//! FlowNav Runtime
//!
//! This crate provides the coordinators that tie the core data model into a
//! working navigation system: per-flow stack orchestration with timed modal
//! dismissal, deterministic view-model lifecycle, root switching, and the
//! collaborator seams (session tracking, request deduplication).
//!
//! # Key Components
//!
//! - [`FlowCoordinator`] - Owns one back-stack + one modal-stack + one
//!   view-model cache for a single root flow
//! - [`AppCoordinator`] - Owns the single active flow coordinator and the
//!   root-switch / global-reset operations
//! - [`NavHandle`] / [`Navigator`] - Strong and weak handles to the app
//!   coordinator; view-models navigate through [`Navigator`]
//! - [`ViewModelCache`] - Explicit ownership map with dual-key eviction
//! - [`Clock`] / [`TimerQueue`] - The injectable time seam behind timed
//!   dismissal; tests advance a [`ManualClock`] instead of sleeping
//! - [`SessionManager`] - Idle-timeout tracker notified on navigation
//! - [`RequestGate`] - Per-key in-flight request deduplication
//!
//! # Concurrency model
//! Single-threaded cooperative: every coordinator mutation happens on one
//! context, timed paths are one-shot entries in a coordinator-owned
//! [`TimerQueue`] drained via `run_pending()` each turn of the host's event
//! loop. The types are `Rc`-based and deliberately `!Send`.

pub mod app;
pub mod cache;
pub mod clock;
pub mod coordinator;
pub mod gate;
pub mod session;
pub mod timer;

pub use app::{AppCoordinator, ModalSurface, NavHandle, Navigator};
pub use cache::{ViewModel, ViewModelCache, removal_keys};
pub use clock::{Clock, ManualClock, SystemClock};
pub use coordinator::{
    CHAINED_NAVIGATION_DELAY, FlowCoordinator, InteractionSink, RenderContext, ScreenRenderer,
};
pub use gate::{InFlightGuard, RequestError, RequestGate, RequestResult};
pub use session::{SessionConfig, SessionManager, SessionState};
pub use timer::TimerQueue;
