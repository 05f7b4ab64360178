#![forbid(unsafe_code)]

//! Auth family: the login screen.

use std::cell::RefCell;

use flownav_core::{NavAppearance, Screen};
use flownav_runtime::ViewModel;

use crate::screens::{AppScreens, HomeScreens};
use crate::views::DemoNavigator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthScreens {
    Login,
}

impl Screen for AuthScreens {
    fn id(&self) -> String {
        "auth-login".into()
    }

    fn appearance(&self) -> NavAppearance {
        NavAppearance::new().title("Sign In").hide_back_button()
    }
}

pub struct LoginViewModel {
    nav: DemoNavigator,
    username: RefCell<String>,
}

impl LoginViewModel {
    #[must_use]
    pub fn new(nav: DemoNavigator) -> Self {
        Self {
            nav,
            username: RefCell::new(String::new()),
        }
    }

    pub fn set_username(&self, name: &str) {
        *self.username.borrow_mut() = name.to_string();
    }

    #[must_use]
    pub fn username(&self) -> String {
        self.username.borrow().clone()
    }

    /// Successful sign-in replaces the root with the home flow, wiping the
    /// auth stack and its view-models.
    pub fn submit(&self) {
        tracing::info!(user = %self.username.borrow(), "signed in");
        self.nav
            .switch_root(AppScreens::Home(HomeScreens::Main), true);
    }
}

impl ViewModel for LoginViewModel {}
