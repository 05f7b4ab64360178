#![forbid(unsafe_code)]

//! Splash family: the chrome-less launch screen that decides the first real
//! root.

use flownav_core::{NavAppearance, Screen};
use flownav_runtime::ViewModel;

use crate::screens::{AppScreens, AuthScreens, HomeScreens};
use crate::views::DemoNavigator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SplashScreens {
    Splash,
}

impl Screen for SplashScreens {
    fn id(&self) -> String {
        "splash".into()
    }

    fn appearance(&self) -> NavAppearance {
        NavAppearance::bare()
    }
}

pub struct SplashViewModel {
    nav: DemoNavigator,
}

impl SplashViewModel {
    #[must_use]
    pub fn new(nav: DemoNavigator) -> Self {
        Self { nav }
    }

    /// Leave the splash once startup work is done: straight home when a
    /// session exists, otherwise through auth. Both replace the root.
    pub fn finish(&self, authenticated: bool) {
        let root = if authenticated {
            AppScreens::Home(HomeScreens::Main)
        } else {
            AppScreens::Auth(AuthScreens::Login)
        };
        tracing::info!(authenticated, "splash finished");
        self.nav.switch_root(root, true);
    }
}

impl ViewModel for SplashViewModel {}
