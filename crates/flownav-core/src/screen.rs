#![forbid(unsafe_code)]

//! Screen identity and navigation appearance metadata.
//!
//! Every reachable destination in an application implements [`Screen`]: a
//! stable string identifier plus pure appearance metadata for the navigation
//! chrome. Identifiers are hyphen-segmented and hierarchical (family prefix
//! joined to a per-screen id), which is what makes them usable as view-model
//! cache keys downstream.

use std::fmt::Debug;
use std::hash::Hash;

/// A solid RGB color used in navigation appearance metadata.
///
/// The core deliberately carries only a color *value*; resolving it against a
/// platform palette is the presentation layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default accent used for navigation tint when a screen does not
    /// override it.
    pub const ACCENT: Color = Color::rgb(0x0a, 0x84, 0xff);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color pair resolved per appearance mode (light/dark).
///
/// Used for popup scrims and backgrounds where a single value would be wrong
/// in one of the two modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynamicColor {
    pub light: Color,
    pub dark: Color,
}

impl DynamicColor {
    #[must_use]
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }
}

/// Whether the navigation bar is rendered for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavBarVisibility {
    /// No navigation bar (splash, auth, full-bleed screens).
    Hidden,
    /// Navigation bar always visible.
    #[default]
    Always,
}

/// Navigation-chrome appearance for one screen.
///
/// A pure description; the coordinator never interprets these fields, it only
/// exposes them to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavAppearance {
    /// Title shown in the navigation bar, if any.
    pub title: Option<&'static str>,
    /// Title foreground override.
    pub title_color: Option<Color>,
    /// Symbol name shown next to the title, if any.
    pub icon: Option<&'static str>,
    /// Tint for bar controls. Defaults to [`Color::ACCENT`].
    pub tint_color: Option<Color>,
    /// Whether the navigation bar is shown at all.
    pub visibility: NavBarVisibility,
    /// Whether the back button is suppressed on this screen.
    pub back_button_hidden: bool,
}

impl NavAppearance {
    /// The defaults every screen starts from: no title, accent tint, visible
    /// bar, back button shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            title_color: None,
            icon: None,
            tint_color: Some(Color::ACCENT),
            visibility: NavBarVisibility::Always,
            back_button_hidden: false,
        }
    }

    /// Appearance for chrome-less screens: hidden bar, no back button.
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            visibility: NavBarVisibility::Hidden,
            back_button_hidden: true,
            ..Self::new()
        }
    }

    #[must_use]
    pub const fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub const fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    #[must_use]
    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub const fn tint_color(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    #[must_use]
    pub const fn hide_back_button(mut self) -> Self {
        self.back_button_hidden = true;
        self
    }

    #[must_use]
    pub const fn hide_nav_bar(mut self) -> Self {
        self.visibility = NavBarVisibility::Hidden;
        self
    }
}

impl Default for NavAppearance {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity and appearance for a reachable destination.
///
/// # Identity contract
///
/// [`Screen::id`] must be stable and collision-free: two values produce the
/// same id iff they are equal. Ids are hyphen-segmented; composite screens
/// join an outer family prefix to an inner screen id (for example
/// `"example-postDetail-42"` nested under the `example` family becomes
/// `"example-example-postDetail-42"`). The eviction logic in the runtime
/// relies on that segment structure, so implementors should not use hyphens
/// inside a single segment.
///
/// `Eq`/`Hash` implementations must agree with id equality; for enums whose
/// ids are derived mechanically from variant + parameters, the derived
/// implementations already do.
pub trait Screen: Clone + Eq + Hash + Debug + 'static {
    /// Stable unique identifier for this (variant, parameters) pair.
    fn id(&self) -> String;

    /// Appearance metadata for the navigation chrome. Pure.
    fn appearance(&self) -> NavAppearance {
        NavAppearance::new()
    }
}
