#![forbid(unsafe_code)]

//! Renderable view descriptions.
//!
//! The coordinator maps screens to views through a closed sum type instead of
//! type-erased view objects: an application defines one view enum `V` and the
//! coordinator hands the presentation layer a [`Destination<V>`]. Routes the
//! renderer does not handle come back as [`Destination::NotImplemented`] — a
//! visible diagnostic placeholder rather than a silent failure, so a
//! misconfigured route is obvious in development without taking the flow
//! down.

/// A renderable view description for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination<V> {
    /// A resolved application view.
    View(V),
    /// Diagnostic placeholder for an unrouted screen.
    NotImplemented {
        /// Identifier of the screen no route matched, for display.
        screen_id: String,
    },
}

impl<V> Destination<V> {
    /// Placeholder for a screen the renderer does not handle.
    #[must_use]
    pub fn not_implemented(screen_id: impl Into<String>) -> Self {
        Self::NotImplemented {
            screen_id: screen_id.into(),
        }
    }

    #[must_use]
    pub const fn is_implemented(&self) -> bool {
        matches!(self, Self::View(_))
    }

    /// The resolved view, if any.
    #[must_use]
    pub const fn view(&self) -> Option<&V> {
        match self {
            Self::View(v) => Some(v),
            Self::NotImplemented { .. } => None,
        }
    }

    /// Consume into the resolved view, if any.
    #[must_use]
    pub fn into_view(self) -> Option<V> {
        match self {
            Self::View(v) => Some(v),
            Self::NotImplemented { .. } => None,
        }
    }

    /// Map the view payload, preserving placeholders.
    #[must_use]
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Destination<W> {
        match self {
            Self::View(v) => Destination::View(f(v)),
            Self::NotImplemented { screen_id } => Destination::NotImplemented { screen_id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_carries_the_screen_id() {
        let dest: Destination<()> = Destination::not_implemented("home-home-main");
        assert!(!dest.is_implemented());
        match dest {
            Destination::NotImplemented { screen_id } => {
                assert_eq!(screen_id, "home-home-main");
            }
            Destination::View(()) => panic!("expected placeholder"),
        }
    }

    #[test]
    fn map_preserves_placeholders() {
        let dest: Destination<u8> = Destination::not_implemented("x");
        let mapped = dest.map(|n| n as u16);
        assert!(!mapped.is_implemented());

        let dest = Destination::View(3u8);
        assert_eq!(dest.map(|n| n + 1).into_view(), Some(4));
    }
}
