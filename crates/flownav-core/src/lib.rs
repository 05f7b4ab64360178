#![forbid(unsafe_code)]

//! Core: screen identity, navigation styles, and the two navigation stacks.
//!
//! `flownav-core` holds the pure data model of the coordinator framework.
//! Nothing in this crate schedules work or owns view state; it describes
//! destinations and mutates ordered stacks of them.
//!
//! # Key Components
//!
//! - [`Screen`] - Identity and appearance metadata for a reachable destination
//! - [`NavigationStyle`] - How a destination is presented (push or modal)
//! - [`NavigationStack`] - The linear push/pop back-stack
//! - [`PresentationStack`] - The layered stack of modal overlays
//! - [`Destination`] - Closed sum type for renderable view descriptions
//!
//! # Role in FlowNav
//! `flownav-core` is the leaf crate. `flownav-runtime` builds coordinators on
//! top of these types; applications define their own screen enums against the
//! [`Screen`] trait.

pub mod destination;
pub mod screen;
pub mod stack;
pub mod style;

pub use destination::Destination;
pub use screen::{Color, DynamicColor, NavAppearance, NavBarVisibility, Screen};
pub use stack::{EntryId, NavigationStack, PresentationEntry, PresentationStack};
pub use style::{Detent, NavigationStyle, PopupPosition};
