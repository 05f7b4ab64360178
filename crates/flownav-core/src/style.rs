#![forbid(unsafe_code)]

//! Navigation styles: how a destination is placed on screen.
//!
//! [`NavigationStyle`] is the tagged union paired with a screen whenever it
//! enters the presentation stack. `Push` is the only non-modal kind; every
//! other variant layers a modal surface on top of the back-stack. Bottom
//! sheets and popups carry exit animations, so removing them is a timed
//! operation — [`NavigationStyle::dismissal_delay`] is the single source of
//! truth for those delays.

use std::time::Duration;

use crate::screen::{Color, DynamicColor};

/// How long a bottom sheet's exit animation runs before the entry is removed.
pub const BOTTOM_SHEET_DISMISS_DELAY: Duration = Duration::from_millis(500);
/// How long a popup's exit animation runs before the entry is removed.
pub const POPUP_DISMISS_DELAY: Duration = Duration::from_millis(300);

/// Resting heights a bottom sheet can snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detent {
    /// Roughly half the container height.
    Medium,
    /// Full available height.
    Large,
    /// Fixed height in presentation-layer units.
    Height(u16),
}

/// Vertical anchor for popup content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupPosition {
    Top,
    Center,
    Bottom,
}

/// How a destination is presented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigationStyle {
    /// Append to the linear back-stack.
    Push,
    /// Standard sheet over the current content.
    Sheet,
    /// Draggable sheet anchored to the bottom edge.
    BottomSheet {
        detents: Vec<Detent>,
        draggable: bool,
        scrim: Option<Color>,
    },
    /// Opaque cover over the full container.
    FullScreenCover,
    /// Floating popup over a scrim.
    Popup {
        background: Option<DynamicColor>,
        position: PopupPosition,
        dismissable: bool,
    },
    /// Edge-anchored side menu.
    SideMenu,
}

impl NavigationStyle {
    /// Bottom sheet with the default configuration: no explicit detents,
    /// draggable, no scrim override.
    #[must_use]
    pub const fn bottom_sheet() -> Self {
        Self::BottomSheet {
            detents: Vec::new(),
            draggable: true,
            scrim: None,
        }
    }

    /// Popup with the default configuration: no background override, not
    /// dismissable by tapping the scrim.
    #[must_use]
    pub const fn popup(position: PopupPosition) -> Self {
        Self::Popup {
            background: None,
            position,
            dismissable: false,
        }
    }

    #[must_use]
    pub const fn is_push(&self) -> bool {
        matches!(self, Self::Push)
    }

    /// Every style except `Push` targets the presentation stack.
    #[must_use]
    pub const fn is_modal(&self) -> bool {
        !self.is_push()
    }

    #[must_use]
    pub const fn is_bottom_sheet(&self) -> bool {
        matches!(self, Self::BottomSheet { .. })
    }

    #[must_use]
    pub const fn is_popup(&self) -> bool {
        matches!(self, Self::Popup { .. })
    }

    /// Exit-animation delay for timed dismissal, if this kind has one.
    ///
    /// `Some` for bottom sheets and popups; `None` for everything else
    /// (removal is immediate).
    #[must_use]
    pub const fn dismissal_delay(&self) -> Option<Duration> {
        match self {
            Self::BottomSheet { .. } => Some(BOTTOM_SHEET_DISMISS_DELAY),
            Self::Popup { .. } => Some(POPUP_DISMISS_DELAY),
            _ => None,
        }
    }

    /// Short label for logging and diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Sheet => "sheet",
            Self::BottomSheet { .. } => "bottom-sheet",
            Self::FullScreenCover => "full-screen-cover",
            Self::Popup { .. } => "popup",
            Self::SideMenu => "side-menu",
        }
    }
}
