#![forbid(unsafe_code)]

//! Generics family: reusable chrome-less surfaces (popup, bottom sheet,
//! side menu) that other families present over their own screens. They carry
//! no view-model; closing is a plain `back()` from the presenting context.

use flownav_core::{NavAppearance, Screen};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenericsScreens {
    Popup,
    Sheet,
    SideMenu,
}

impl Screen for GenericsScreens {
    fn id(&self) -> String {
        match self {
            GenericsScreens::Popup => "generics-popup".into(),
            GenericsScreens::Sheet => "generics-sheet".into(),
            GenericsScreens::SideMenu => "generics-sideMenu".into(),
        }
    }

    fn appearance(&self) -> NavAppearance {
        NavAppearance::bare()
    }
}
