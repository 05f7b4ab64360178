#![forbid(unsafe_code)]

//! The demo's screen space: five families composed into one app-level enum.
//!
//! Each family module carries its screen enum, appearances, and the
//! view-models behind those screens. The composite [`AppScreens`] id joins
//! the family name onto the inner screen's own id, so a post list lands on
//! the navigation stack as `"example-example-postList"` while its router
//! caches the view-model under the inner `"example-postList"`.

pub mod auth;
pub mod example;
pub mod generics;
pub mod home;
pub mod splash;

use flownav_core::{NavAppearance, Screen};

pub use auth::AuthScreens;
pub use example::ExampleScreens;
pub use generics::GenericsScreens;
pub use home::HomeScreens;
pub use splash::SplashScreens;

/// Every screen reachable in the demo app.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppScreens {
    Splash(SplashScreens),
    Auth(AuthScreens),
    Home(HomeScreens),
    Example(ExampleScreens),
    Generics(GenericsScreens),
}

impl AppScreens {
    /// The designated initial root, also the global-reset target.
    #[must_use]
    pub fn initial() -> Self {
        Self::Splash(SplashScreens::Splash)
    }
}

impl Screen for AppScreens {
    fn id(&self) -> String {
        match self {
            Self::Splash(s) => format!("splash-{}", s.id()),
            Self::Auth(s) => format!("auth-{}", s.id()),
            Self::Home(s) => format!("home-{}", s.id()),
            Self::Example(s) => format!("example-{}", s.id()),
            Self::Generics(s) => format!("generics-{}", s.id()),
        }
    }

    fn appearance(&self) -> NavAppearance {
        match self {
            Self::Splash(s) => s.appearance(),
            Self::Auth(s) => s.appearance(),
            Self::Home(s) => s.appearance(),
            Self::Example(s) => s.appearance(),
            Self::Generics(s) => s.appearance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_ids_prefix_the_family() {
        assert_eq!(AppScreens::initial().id(), "splash-splash");
        assert_eq!(
            AppScreens::Auth(AuthScreens::Login).id(),
            "auth-auth-login"
        );
        assert_eq!(AppScreens::Home(HomeScreens::Main).id(), "home-home-main");
        assert_eq!(
            AppScreens::Example(ExampleScreens::PostList).id(),
            "example-example-postList"
        );
        assert_eq!(
            AppScreens::Example(ExampleScreens::PostDetail(42)).id(),
            "example-example-postDetail-42"
        );
        assert_eq!(
            AppScreens::Generics(GenericsScreens::Popup).id(),
            "generics-generics-popup"
        );
    }

    #[test]
    fn appearance_delegates_to_the_family() {
        use flownav_core::NavBarVisibility;
        assert_eq!(
            AppScreens::initial().appearance().visibility,
            NavBarVisibility::Hidden
        );
        assert_eq!(
            AppScreens::Home(HomeScreens::Main).appearance().title,
            Some("Home")
        );
    }
}
