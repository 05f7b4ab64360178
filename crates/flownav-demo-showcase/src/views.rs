#![forbid(unsafe_code)]

//! The demo's renderable view descriptions.
//!
//! [`DemoView`] is the closed set of surfaces the presentation layer knows
//! how to draw. Each screen-bound variant holds the shared view-model the
//! router resolved for it; the generic overlays carry nothing.

use std::rc::Rc;

use flownav_runtime::Navigator;

use crate::screens::AppScreens;
use crate::screens::auth::LoginViewModel;
use crate::screens::example::{PostDetailViewModel, PostListViewModel};
use crate::screens::home::{HomeDetailViewModel, HomeViewModel};
use crate::screens::splash::SplashViewModel;

/// The weak navigation handle injected into every demo view-model.
pub type DemoNavigator = Navigator<AppScreens, DemoView>;

pub enum DemoView {
    Splash(Rc<SplashViewModel>),
    Login(Rc<LoginViewModel>),
    HomeMain(Rc<HomeViewModel>),
    HomeDetail(Rc<HomeDetailViewModel>),
    PostList(Rc<PostListViewModel>),
    PostDetail(Rc<PostDetailViewModel>),
    Popup,
    Sheet,
    SideMenu,
}

impl DemoView {
    /// Short label for logs and the scripted walk's narration.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DemoView::Splash(_) => "splash",
            DemoView::Login(_) => "login",
            DemoView::HomeMain(_) => "home",
            DemoView::HomeDetail(_) => "home detail",
            DemoView::PostList(_) => "post list",
            DemoView::PostDetail(_) => "post detail",
            DemoView::Popup => "popup",
            DemoView::Sheet => "sheet",
            DemoView::SideMenu => "side menu",
        }
    }
}
