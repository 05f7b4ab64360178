#![forbid(unsafe_code)]

//! Session idle tracking.
//!
//! The session manager watches for user inactivity: every navigation
//! interaction pushes two deadlines forward (warning, then expiry). There
//! are no background timers — the host polls
//! [`SessionManager::poll`] on its event loop, the same way the coordinators
//! drain their timer queues, and reads the [`SessionState`] transitions.
//!
//! The manager implements [`InteractionSink`] so it can be attached directly
//! to an [`AppCoordinator`](crate::AppCoordinator) and be notified on every
//! back/pop that changes stack depth.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::coordinator::InteractionSink;

/// Inactivity state of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// User recently active.
    Active,
    /// Warning window: expiry is imminent unless the user interacts.
    Warning,
    /// Session ended (explicitly or by idle timeout).
    Expired,
}

/// Idle-timeout configuration.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Inactivity span after which the warning state is entered.
    pub warning_after: Duration,
    /// Inactivity span after which the session expires.
    pub expire_after: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            warning_after: Duration::from_secs(4 * 60),
            expire_after: Duration::from_secs(5 * 60),
        }
    }
}

/// Polled idle-timeout tracker for one user session.
pub struct SessionManager {
    clock: Rc<dyn Clock>,
    config: SessionConfig,
    state: Cell<SessionState>,
    active: Cell<bool>,
    warning_deadline: Cell<Option<Instant>>,
    expiry_deadline: Cell<Option<Instant>>,
}

impl SessionManager {
    #[must_use]
    pub fn new(clock: Rc<dyn Clock>, config: SessionConfig) -> Self {
        Self {
            clock,
            config,
            state: Cell::new(SessionState::Active),
            active: Cell::new(false),
            warning_deadline: Cell::new(None),
            expiry_deadline: Cell::new(None),
        }
    }

    /// Begin a session: state becomes `Active` and the idle deadlines start
    /// counting.
    pub fn start_session(&self) {
        tracing::debug!("session started");
        self.active.set(true);
        self.state.set(SessionState::Active);
        self.reset_deadlines();
    }

    /// End the session: state becomes `Expired`, deadlines are dropped, and
    /// further interactions are ignored until the next start.
    pub fn end_session(&self) {
        tracing::debug!("session ended");
        self.active.set(false);
        self.state.set(SessionState::Expired);
        self.warning_deadline.set(None);
        self.expiry_deadline.set(None);
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Whether the presentation layer should show the expiry warning.
    #[must_use]
    pub fn show_warning(&self) -> bool {
        self.state.get() == SessionState::Warning
    }

    /// Advance the state machine against the clock. Call once per turn of
    /// the host event loop; returns the state after the transition.
    pub fn poll(&self) -> SessionState {
        if !self.active.get() {
            return self.state.get();
        }
        let now = self.clock.now();
        if self.expiry_deadline.get().is_some_and(|d| now >= d) {
            tracing::info!("session expired after idle timeout");
            self.end_session();
        } else if self.warning_deadline.get().is_some_and(|d| now >= d)
            && self.state.get() == SessionState::Active
        {
            tracing::debug!("session idle warning");
            self.state.set(SessionState::Warning);
        }
        self.state.get()
    }

    fn reset_deadlines(&self) {
        let now = self.clock.now();
        self.warning_deadline.set(Some(now + self.config.warning_after));
        self.expiry_deadline.set(Some(now + self.config.expire_after));
    }
}

impl InteractionSink for SessionManager {
    /// Reset the idle deadlines; a warning in progress is withdrawn.
    fn user_interaction(&self) {
        if !self.active.get() {
            return;
        }
        self.reset_deadlines();
        if self.state.get() == SessionState::Warning {
            self.state.set(SessionState::Active);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manager() -> (SessionManager, Rc<ManualClock>) {
        let clock = ManualClock::new();
        let config = SessionConfig {
            warning_after: Duration::from_secs(40),
            expire_after: Duration::from_secs(60),
        };
        let manager = SessionManager::new(clock.clone(), config);
        manager.start_session();
        (manager, clock)
    }

    #[test]
    fn idle_session_warns_then_expires() {
        let (manager, clock) = manager();
        assert_eq!(manager.poll(), SessionState::Active);

        clock.advance(Duration::from_secs(40));
        assert_eq!(manager.poll(), SessionState::Warning);
        assert!(manager.show_warning());

        clock.advance(Duration::from_secs(20));
        assert_eq!(manager.poll(), SessionState::Expired);
        assert!(!manager.show_warning());
    }

    #[test]
    fn interaction_withdraws_the_warning() {
        let (manager, clock) = manager();
        clock.advance(Duration::from_secs(45));
        assert_eq!(manager.poll(), SessionState::Warning);

        manager.user_interaction();
        assert_eq!(manager.poll(), SessionState::Active);

        // Deadlines restarted from the interaction.
        clock.advance(Duration::from_secs(39));
        assert_eq!(manager.poll(), SessionState::Active);
        clock.advance(Duration::from_secs(1));
        assert_eq!(manager.poll(), SessionState::Warning);
    }

    #[test]
    fn interactions_after_expiry_are_ignored() {
        let (manager, clock) = manager();
        clock.advance(Duration::from_secs(61));
        assert_eq!(manager.poll(), SessionState::Expired);

        manager.user_interaction();
        assert_eq!(manager.poll(), SessionState::Expired);
    }

    #[test]
    fn inactive_manager_never_transitions() {
        let clock = ManualClock::new();
        let manager = SessionManager::new(clock.clone(), SessionConfig::default());
        clock.advance(Duration::from_secs(3600));
        assert_eq!(manager.poll(), SessionState::Active);
    }
}
