#![forbid(unsafe_code)]

//! Home family: the signed-in landing screen and a plain pushed detail.

use flownav_core::{NavAppearance, NavigationStyle, Screen};
use flownav_runtime::ViewModel;

use crate::screens::{AppScreens, ExampleScreens, GenericsScreens};
use crate::views::DemoNavigator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HomeScreens {
    Main,
    Detail,
}

impl Screen for HomeScreens {
    fn id(&self) -> String {
        match self {
            HomeScreens::Main => "home-main".into(),
            HomeScreens::Detail => "home-detail".into(),
        }
    }

    fn appearance(&self) -> NavAppearance {
        match self {
            HomeScreens::Main => NavAppearance::new()
                .title("Home")
                .icon("house")
                .hide_back_button(),
            HomeScreens::Detail => NavAppearance::new().title("Detail"),
        }
    }
}

pub struct HomeViewModel {
    nav: DemoNavigator,
}

impl HomeViewModel {
    #[must_use]
    pub fn new(nav: DemoNavigator) -> Self {
        Self { nav }
    }

    pub fn open_detail(&self) {
        self.nav.push(AppScreens::Home(HomeScreens::Detail));
    }

    pub fn open_posts(&self) {
        self.nav.push(AppScreens::Example(ExampleScreens::PostList));
    }

    /// Quick actions render as a centered popup over the current screen.
    pub fn open_quick_actions(&self) {
        self.nav.navigate(
            AppScreens::Generics(GenericsScreens::Popup),
            NavigationStyle::popup(flownav_core::PopupPosition::Center),
        );
    }

    pub fn open_side_menu(&self) {
        self.nav.navigate(
            AppScreens::Generics(GenericsScreens::SideMenu),
            NavigationStyle::SideMenu,
        );
    }

    /// Sign out: tear everything down and land on the splash next tick.
    pub fn logout(&self) {
        tracing::info!("logout requested");
        self.nav.perform_global_reset();
    }
}

impl ViewModel for HomeViewModel {}

pub struct HomeDetailViewModel {
    nav: DemoNavigator,
}

impl HomeDetailViewModel {
    #[must_use]
    pub fn new(nav: DemoNavigator) -> Self {
        Self { nav }
    }

    pub fn close(&self) {
        self.nav.back();
    }
}

impl ViewModel for HomeDetailViewModel {}
