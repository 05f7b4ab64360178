#![forbid(unsafe_code)]

//! FlowNav demo showcase.
//!
//! A complete small app built on the coordinator runtime: five screen
//! families (splash, auth, home, example, generics) with their routers,
//! view-models, and a mock post service. The binary drives a scripted
//! navigation walk on a manual clock; the integration tests exercise the
//! same wiring.

pub mod router;
pub mod screens;
pub mod service;
pub mod views;

use std::rc::Rc;

use flownav_runtime::{
    AppCoordinator, Clock, NavHandle, ScreenRenderer, SessionConfig, SessionManager,
};

use crate::router::MainRouter;
use crate::screens::AppScreens;
use crate::service::{MockPostService, PostService};
use crate::views::DemoView;

/// Everything the binary and the tests need to run the app.
pub struct DemoApp {
    pub handle: NavHandle<AppScreens, DemoView>,
    pub session: Rc<SessionManager>,
}

/// Wire the coordinator, router, session tracker, and mock service together.
#[must_use]
pub fn build_app(clock: Rc<dyn Clock>) -> DemoApp {
    let session = Rc::new(SessionManager::new(clock.clone(), SessionConfig::default()));
    let service: Rc<dyn PostService> = Rc::new(MockPostService::new());

    let factory = {
        let service = service.clone();
        Box::new(move || {
            Box::new(MainRouter::new(service.clone()))
                as Box<dyn ScreenRenderer<Screen = AppScreens, View = DemoView>>
        })
    };

    let app = AppCoordinator::new(AppScreens::initial(), factory, clock)
        .with_interaction_sink(session.clone());
    DemoApp {
        handle: NavHandle::new(app),
        session,
    }
}
