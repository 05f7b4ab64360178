#![forbid(unsafe_code)]

//! FlowNav public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use flownav_core::destination::Destination;
pub use flownav_core::screen::{Color, DynamicColor, NavAppearance, NavBarVisibility, Screen};
pub use flownav_core::stack::{EntryId, NavigationStack, PresentationEntry, PresentationStack};
pub use flownav_core::style::{Detent, NavigationStyle, PopupPosition};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use flownav_runtime::{
    AppCoordinator, CHAINED_NAVIGATION_DELAY, Clock, FlowCoordinator, InFlightGuard,
    InteractionSink, ManualClock, ModalSurface, NavHandle, Navigator, RenderContext, RequestError,
    RequestGate, RequestResult, ScreenRenderer, SessionConfig, SessionManager, SessionState,
    SystemClock, TimerQueue, ViewModel, ViewModelCache,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{Destination, NavAppearance, NavigationStyle, PopupPosition, Screen};

    #[cfg(feature = "runtime")]
    pub use crate::{
        AppCoordinator, NavHandle, Navigator, RenderContext, ScreenRenderer, ViewModel,
    };

    pub use crate::core;
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use flownav_core as core;
#[cfg(feature = "runtime")]
pub use flownav_runtime as runtime;
