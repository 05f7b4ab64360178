#![forbid(unsafe_code)]

//! One-shot deferred operations on the single-threaded context.
//!
//! A [`TimerQueue`] holds operations stamped with a deadline. The owner
//! drains due entries with [`pop_due`](TimerQueue::pop_due) on each turn of
//! its event loop; nothing here spawns threads or sleeps. Entries with equal
//! deadlines fire in scheduling order, which the coordinator relies on when a
//! dismissal and its chained navigation land on the same tick.
//!
//! There is no cancellation of individual entries: once scheduled, a deferred
//! operation fires unless the whole queue is cleared during teardown.

use std::time::Instant;

#[derive(Debug)]
struct TimerEntry<T> {
    deadline: Instant,
    op: T,
}

/// An ordered queue of one-shot deferred operations.
#[derive(Debug)]
pub struct TimerQueue<T> {
    // Sorted by deadline; entries with equal deadlines keep insertion order.
    entries: Vec<TimerEntry<T>>,
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `op` to fire once `now >= deadline`.
    ///
    /// Inserted after every entry with the same deadline, so equal deadlines
    /// fire in scheduling order.
    pub fn schedule(&mut self, deadline: Instant, op: T) {
        let at = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(at, TimerEntry { deadline, op });
    }

    /// Remove and return every operation whose deadline has passed, in
    /// deadline-then-scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let due = self.entries.partition_point(|e| e.deadline <= now);
        self.entries.drain(..due).map(|e| e.op).collect()
    }

    /// Earliest pending deadline, if any. Lets a host sleep until the next
    /// piece of work instead of polling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.first().map(|e| e.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending operation. Teardown only.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
