#![forbid(unsafe_code)]

//! The two navigational stacks.
//!
//! [`NavigationStack`] is the linear back-stack: while a flow is active it
//! always holds at least the root, and pop operations clamp there. The stack
//! only becomes empty through [`NavigationStack::clear`] during coordinator
//! teardown.
//!
//! [`PresentationStack`] is the layered modal stack: index 0 is the outermost
//! modal directly on top of the back-stack, later indices stack on top of
//! earlier ones. Entries carry a system-generated [`EntryId`] so two
//! presentations of the same screen remain distinguishable; the id is used
//! only for entry equality, never as a cache key.
//!
//! Both types are pure mutation: eviction, interaction signalling, and timed
//! dismissal live in the runtime coordinator.

use crate::screen::Screen;
use crate::style::NavigationStyle;

/// The linear push/pop back-stack for one flow.
#[derive(Debug, Clone)]
pub struct NavigationStack<S: Screen> {
    items: Vec<S>,
}

impl<S: Screen> NavigationStack<S> {
    /// Create a stack holding just the flow's root screen.
    #[must_use]
    pub fn new(root: S) -> Self {
        Self { items: vec![root] }
    }

    /// Append a screen on top of the stack.
    pub fn push(&mut self, screen: S) {
        #[cfg(feature = "tracing")]
        tracing::trace!(id = %screen.id(), depth = self.items.len() + 1, "nav push");
        self.items.push(screen);
    }

    /// Remove and return the top screen, unless only the root remains.
    ///
    /// Popping at depth 1 is a no-op and returns `None`.
    pub fn pop(&mut self) -> Option<S> {
        if self.items.len() > 1 {
            let removed = self.items.pop();
            #[cfg(feature = "tracing")]
            if let Some(ref screen) = removed {
                tracing::trace!(id = %screen.id(), depth = self.items.len(), "nav pop");
            }
            removed
        } else {
            None
        }
    }

    /// Truncate the stack so it ends at `target`, returning the removed tail
    /// (top-most last).
    ///
    /// When `target` occurs more than once, the occurrence nearest the top is
    /// the cut point. Returns `None` (and leaves the stack untouched) when
    /// `target` is absent; callers degrade to a single [`pop`](Self::pop).
    pub fn pop_to(&mut self, target: &S) -> Option<Vec<S>> {
        let cut = self.items.iter().rposition(|s| s == target)?;
        Some(self.items.split_off(cut + 1))
    }

    /// Remove everything above the root, returning the removed tail.
    pub fn pop_to_root(&mut self) -> Vec<S> {
        if self.items.len() > 1 {
            self.items.split_off(1)
        } else {
            Vec::new()
        }
    }

    /// The flow's root screen. `None` only after [`clear`](Self::clear).
    #[must_use]
    pub fn root(&self) -> Option<&S> {
        self.items.first()
    }

    /// The screen currently on top.
    #[must_use]
    pub fn top(&self) -> Option<&S> {
        self.items.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, screen: &S) -> bool {
        self.items.contains(screen)
    }

    /// Read-only snapshot for the presentation layer.
    #[must_use]
    pub fn items(&self) -> &[S] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.items.iter()
    }

    /// Empty the stack entirely. Teardown only: afterwards the flow is no
    /// longer active and the ≥1 invariant does not apply.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Unique identity of one presentation-stack entry.
///
/// Distinct from the screen identifier: presenting the same screen twice
/// yields two entries with different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

/// One layered modal: a screen, its presentation style, and its entry id.
#[derive(Debug, Clone)]
pub struct PresentationEntry<S: Screen> {
    pub id: EntryId,
    pub screen: S,
    pub style: NavigationStyle,
}

impl<S: Screen> PartialEq for PresentationEntry<S> {
    /// Entries are equal iff their entry ids are equal.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: Screen> Eq for PresentationEntry<S> {}

/// The layered stack of modal overlays for one flow. May be empty.
#[derive(Debug, Clone)]
pub struct PresentationStack<S: Screen> {
    entries: Vec<PresentationEntry<S>>,
    next_id: u64,
}

impl<S: Screen> PresentationStack<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Layer a new modal on top, returning its entry id.
    pub fn push(&mut self, screen: S, style: NavigationStyle) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            id = %screen.id(),
            style = style.label(),
            depth = self.entries.len() + 1,
            "presentation push"
        );
        self.entries.push(PresentationEntry { id, screen, style });
        id
    }

    /// Remove and return the topmost modal. No-op on an empty stack.
    pub fn pop(&mut self) -> Option<PresentationEntry<S>> {
        let removed = self.entries.pop();
        #[cfg(feature = "tracing")]
        if let Some(ref entry) = removed {
            tracing::trace!(
                id = %entry.screen.id(),
                style = entry.style.label(),
                depth = self.entries.len(),
                "presentation pop"
            );
        }
        removed
    }

    /// The topmost modal.
    #[must_use]
    pub fn top(&self) -> Option<&PresentationEntry<S>> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only snapshot for the presentation layer, outermost first.
    #[must_use]
    pub fn entries(&self) -> &[PresentationEntry<S>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PresentationEntry<S>> {
        self.entries.iter()
    }

    /// Drain every entry (outermost first). Teardown only.
    pub fn clear(&mut self) -> Vec<PresentationEntry<S>> {
        self.entries.drain(..).collect()
    }
}

impl<S: Screen> Default for PresentationStack<S> {
    fn default() -> Self {
        Self::new()
    }
}
