#![forbid(unsafe_code)]

//! Per-screen view-model storage with explicit eviction.
//!
//! The cache is a plain ownership map from screen identifier to view-model
//! handle. There is no weak-reference magic: an entry lives until the
//! coordinator evicts it, which happens exactly when its screen leaves both
//! stacks. Eviction invokes the [`ViewModel::cancel_pending_requests`]
//! cleanup capability before dropping the handle, so in-flight collaborator
//! work is cancelled deterministically.
//!
//! # Eviction-key matching
//!
//! Identifiers are hyphen-segmented. Certain composite screens are registered
//! under two related keys at once: the stack holds the composite id (outer
//! family prefix + inner id, e.g. `"example-example-postList"`) while the
//! router caches the view-model under the inner id
//! (`"example-postList"`). Such composites are recognizable by their
//! self-referential prefix — the first two segments are identical — and
//! [`removal_keys`] returns both the exact id and the stripped twin so both
//! registrations are cleaned up together.

use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

/// Capability interface for cached per-screen state objects.
///
/// `cancel_pending_requests` is invoked once, immediately before the cache
/// drops its handle. The default does nothing; view-models that own in-flight
/// collaborator work override it.
pub trait ViewModel: 'static {
    fn cancel_pending_requests(&self) {}
}

/// All cache keys to evict when the entry identified by `id` leaves a stack.
///
/// Always contains `id` itself. When `id` has at least three hyphen segments
/// and the first two are identical, the id with its first segment removed is
/// appended — the inner registration of a composite screen.
#[must_use]
pub fn removal_keys(id: &str) -> Vec<String> {
    let mut keys = vec![id.to_string()];
    let parts: Vec<&str> = id.split('-').collect();
    if parts.len() >= 3 && parts[0] == parts[1] {
        keys.push(parts[1..].join("-"));
    }
    keys
}

// One stored view-model, reachable through two vtables: `Any` for typed
// retrieval, `ViewModel` for the eviction hook. Both point at the same
// allocation.
struct Slot {
    any: Rc<dyn Any>,
    hook: Rc<dyn ViewModel>,
}

/// Owned, lazily-populated view-model store for one flow coordinator.
#[derive(Default)]
pub struct ViewModelCache {
    slots: HashMap<String, Slot>,
}

impl ViewModelCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a view-model under `key`, replacing any previous entry.
    ///
    /// Replacement does not run the cleanup hook; only eviction does.
    pub fn store<T: ViewModel>(&mut self, key: impl Into<String>, vm: Rc<T>) {
        let key = key.into();
        tracing::trace!(key = %key, "view-model stored");
        self.slots.insert(
            key,
            Slot {
                any: vm.clone(),
                hook: vm,
            },
        );
    }

    /// Typed retrieval. `None` when absent or stored under a different type.
    #[must_use]
    pub fn get<T: ViewModel>(&self, key: &str) -> Option<Rc<T>> {
        let slot = self.slots.get(key)?;
        slot.any.clone().downcast::<T>().ok()
    }

    /// Return the cached view-model for `key`, constructing it via `create`
    /// on first access.
    pub fn get_or_create<T: ViewModel>(&mut self, key: &str, create: impl FnOnce() -> T) -> Rc<T> {
        if let Some(existing) = self.get::<T>(key) {
            return existing;
        }
        let vm = Rc::new(create());
        self.store(key, vm.clone());
        vm
    }

    /// Remove the entry for `key`, invoking its cleanup hook first.
    ///
    /// Returns whether an entry was present.
    pub fn evict(&mut self, key: &str) -> bool {
        match self.slots.remove(key) {
            Some(slot) => {
                tracing::debug!(key = %key, "view-model evicted");
                slot.hook.cancel_pending_requests();
                true
            }
            None => false,
        }
    }

    /// Evict every entry, invoking each cleanup hook. Teardown only.
    pub fn evict_all(&mut self) {
        for (key, slot) in self.slots.drain() {
            tracing::debug!(key = %key, "view-model evicted");
            slot.hook.cancel_pending_requests();
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Plain;
    impl ViewModel for Plain {}

    struct Cancelling {
        cancelled: Rc<Cell<u32>>,
    }

    impl ViewModel for Cancelling {
        fn cancel_pending_requests(&self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn removal_keys_plain_id() {
        assert_eq!(removal_keys("home-detail"), vec!["home-detail"]);
    }

    #[test]
    fn removal_keys_strips_self_referential_prefix() {
        assert_eq!(
            removal_keys("example-example-postList"),
            vec!["example-example-postList", "example-postList"]
        );
        assert_eq!(
            removal_keys("example-example-postDetail-42"),
            vec!["example-example-postDetail-42", "example-postDetail-42"]
        );
    }

    #[test]
    fn removal_keys_two_equal_segments_is_not_enough() {
        // Needs at least three segments for the stripped twin to exist.
        assert_eq!(removal_keys("splash-splash"), vec!["splash-splash"]);
    }

    #[test]
    fn removal_keys_distinct_prefix_is_untouched() {
        assert_eq!(
            removal_keys("auth-example-login"),
            vec!["auth-example-login"]
        );
    }

    #[test]
    fn get_or_create_constructs_once() {
        let mut cache = ViewModelCache::new();
        let calls = Rc::new(Cell::new(0u32));

        for _ in 0..3 {
            let calls = calls.clone();
            cache.get_or_create("auth-login", move || {
                calls.set(calls.get() + 1);
                Plain
            });
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn eviction_runs_the_cleanup_hook() {
        let mut cache = ViewModelCache::new();
        let cancelled = Rc::new(Cell::new(0u32));
        cache.store(
            "example-postList",
            Rc::new(Cancelling {
                cancelled: cancelled.clone(),
            }),
        );

        assert!(cache.evict("example-postList"));
        assert_eq!(cancelled.get(), 1);
        assert!(!cache.contains("example-postList"));
        // Evicting again is a no-op.
        assert!(!cache.evict("example-postList"));
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn typed_get_rejects_mismatched_types() {
        let mut cache = ViewModelCache::new();
        cache.store("home-main", Rc::new(Plain));
        assert!(cache.get::<Plain>("home-main").is_some());
        assert!(cache.get::<Cancelling>("home-main").is_none());
    }

    #[test]
    fn store_replacement_does_not_run_the_hook() {
        let mut cache = ViewModelCache::new();
        let cancelled = Rc::new(Cell::new(0u32));
        cache.store(
            "k",
            Rc::new(Cancelling {
                cancelled: cancelled.clone(),
            }),
        );
        cache.store("k", Rc::new(Plain));
        assert_eq!(cancelled.get(), 0);
    }
}
