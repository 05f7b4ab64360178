#![forbid(unsafe_code)]

//! The injectable time source.
//!
//! Timed dismissal must be testable without real sleeps, so every coordinator
//! reads time through a [`Clock`] handle. Production wiring uses
//! [`SystemClock`]; tests share a [`ManualClock`] with the coordinator and
//! advance it explicitly.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock-backed monotonic time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Share one instance (via `Rc`) between the coordinator and the test, then
/// step virtual time with [`advance`](ManualClock::advance) and drain due
/// work with the coordinator's `run_pending()`.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            now: Cell::new(Instant::now()),
        })
    }

    /// Move virtual time forward.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
