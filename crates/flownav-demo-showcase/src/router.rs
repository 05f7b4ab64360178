#![forbid(unsafe_code)]

//! The demo's single screen router.
//!
//! Resolves every [`AppScreens`] variant to a [`DemoView`], lazily creating
//! view-models in the flow's cache. Cache keys are the *inner* family ids
//! (`"example-postList"`), not the composite stack ids
//! (`"example-example-postList"`); the runtime's eviction strips the
//! self-referential prefix so both registrations are cleaned up together.

use std::rc::Rc;

use flownav_core::{Destination, Screen};
use flownav_runtime::{RenderContext, RequestGate, ScreenRenderer};

use crate::screens::auth::LoginViewModel;
use crate::screens::example::{ExampleScreens, PostDetailViewModel, PostListViewModel};
use crate::screens::generics::GenericsScreens;
use crate::screens::home::{HomeDetailViewModel, HomeScreens, HomeViewModel};
use crate::screens::splash::SplashViewModel;
use crate::screens::AppScreens;
use crate::service::PostService;
use crate::views::DemoView;

pub struct MainRouter {
    service: Rc<dyn PostService>,
    gate: RequestGate,
}

impl MainRouter {
    #[must_use]
    pub fn new(service: Rc<dyn PostService>) -> Self {
        Self {
            service,
            gate: RequestGate::new(),
        }
    }
}

impl ScreenRenderer for MainRouter {
    type Screen = AppScreens;
    type View = DemoView;

    fn destination(
        &mut self,
        screen: &AppScreens,
        ctx: &mut RenderContext<'_, AppScreens, DemoView>,
    ) -> Destination<DemoView> {
        match screen {
            AppScreens::Splash(inner) => {
                let nav = ctx.nav.clone();
                let vm = ctx
                    .cache
                    .get_or_create(&inner.id(), move || SplashViewModel::new(nav));
                Destination::View(DemoView::Splash(vm))
            }
            AppScreens::Auth(inner) => {
                let nav = ctx.nav.clone();
                let vm = ctx
                    .cache
                    .get_or_create(&inner.id(), move || LoginViewModel::new(nav));
                Destination::View(DemoView::Login(vm))
            }
            AppScreens::Home(inner @ HomeScreens::Main) => {
                let nav = ctx.nav.clone();
                let vm = ctx
                    .cache
                    .get_or_create(&inner.id(), move || HomeViewModel::new(nav));
                Destination::View(DemoView::HomeMain(vm))
            }
            AppScreens::Home(inner @ HomeScreens::Detail) => {
                let nav = ctx.nav.clone();
                let vm = ctx
                    .cache
                    .get_or_create(&inner.id(), move || HomeDetailViewModel::new(nav));
                Destination::View(DemoView::HomeDetail(vm))
            }
            AppScreens::Example(inner @ ExampleScreens::PostList) => {
                let nav = ctx.nav.clone();
                let service = self.service.clone();
                let gate = self.gate.clone();
                let vm = ctx.cache.get_or_create(&inner.id(), move || {
                    PostListViewModel::new(nav, service, gate)
                });
                Destination::View(DemoView::PostList(vm))
            }
            AppScreens::Example(inner @ ExampleScreens::PostDetail(id)) => {
                let nav = ctx.nav.clone();
                let service = self.service.clone();
                let gate = self.gate.clone();
                let post_id = *id;
                let vm = ctx.cache.get_or_create(&inner.id(), move || {
                    PostDetailViewModel::new(nav, service, gate, post_id)
                });
                Destination::View(DemoView::PostDetail(vm))
            }
            AppScreens::Generics(GenericsScreens::Popup) => Destination::View(DemoView::Popup),
            AppScreens::Generics(GenericsScreens::Sheet) => Destination::View(DemoView::Sheet),
            AppScreens::Generics(GenericsScreens::SideMenu) => {
                Destination::View(DemoView::SideMenu)
            }
        }
    }
}
