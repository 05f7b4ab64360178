#![forbid(unsafe_code)]

//! Duplicate-request suppression.
//!
//! Services register a key with the [`RequestGate`] before starting work and
//! hold the returned [`InFlightGuard`] for the duration. A second attempt to
//! begin the same key fails fast with [`RequestError::AlreadyInFlight`]
//! instead of issuing redundant work. Dropping the guard (completion,
//! cancellation, or an early return on error) releases the key.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Failure modes of a gated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The same request key is already running; the caller should wait for
    /// the existing attempt rather than retry.
    AlreadyInFlight { key: String },
    /// The request never produced a response.
    Transport(String),
    /// The far side answered with a failure status.
    Server { status: u16, message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInFlight { key } => {
                write!(f, "request '{key}' is already in flight")
            }
            Self::Transport(message) => write!(f, "transport failure: {message}"),
            Self::Server { status, message } => {
                write!(f, "server error {status}: {message}")
            }
        }
    }
}

impl std::error::Error for RequestError {}

pub type RequestResult<T> = Result<T, RequestError>;

#[derive(Default)]
struct GateInner {
    keys: HashSet<String>,
    // Bumped on clear() so guards handed out earlier become inert.
    generation: u64,
}

/// Tracks which request keys are currently running.
///
/// Cloning shares the underlying set, so a service and its guards can outlive
/// each other freely.
#[derive(Clone, Default)]
pub struct RequestGate {
    inner: Rc<RefCell<GateInner>>,
}

impl RequestGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key` for the duration of the returned guard.
    ///
    /// Fails with [`RequestError::AlreadyInFlight`] if the key is taken.
    pub fn try_begin(&self, key: impl Into<String>) -> RequestResult<InFlightGuard> {
        let key = key.into();
        let mut inner = self.inner.borrow_mut();
        if !inner.keys.insert(key.clone()) {
            tracing::debug!(key = %key, "duplicate request suppressed");
            return Err(RequestError::AlreadyInFlight { key });
        }
        tracing::trace!(key = %key, "request began");
        Ok(InFlightGuard {
            gate: self.inner.clone(),
            generation: inner.generation,
            key,
        })
    }

    #[must_use]
    pub fn is_in_flight(&self, key: &str) -> bool {
        self.inner.borrow().keys.contains(key)
    }

    /// Forget every claimed key. Guards already handed out become inert;
    /// dropping them will not disturb keys claimed after the clear.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.keys.clear();
        inner.generation += 1;
    }
}

/// Releases its request key when dropped.
pub struct InFlightGuard {
    gate: Rc<RefCell<GateInner>>,
    generation: u64,
    key: String,
}

impl InFlightGuard {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut inner = self.gate.borrow_mut();
        if inner.generation == self.generation {
            inner.keys.remove(&self.key);
            tracing::trace!(key = %self.key, "request finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_while_the_guard_lives() {
        let gate = RequestGate::new();
        let guard = gate.try_begin("posts").expect("first claim");
        assert_eq!(guard.key(), "posts");

        // InFlightGuard carries no Debug impl, so destructure instead of
        // unwrap_err.
        let Err(err) = gate.try_begin("posts") else {
            panic!("duplicate claim must be rejected");
        };
        assert_eq!(
            err,
            RequestError::AlreadyInFlight {
                key: "posts".into()
            }
        );
        // A different key is unaffected.
        assert!(gate.try_begin("profile").is_ok());
    }

    #[test]
    fn dropping_the_guard_releases_the_key() {
        let gate = RequestGate::new();
        drop(gate.try_begin("posts").expect("first claim"));
        assert!(!gate.is_in_flight("posts"));
        assert!(gate.try_begin("posts").is_ok());
    }

    #[test]
    fn clear_forgets_claimed_keys() {
        let gate = RequestGate::new();
        let stale = gate.try_begin("posts").expect("claim");
        gate.clear();
        assert!(!gate.is_in_flight("posts"));

        // New claim after the clear survives the stale guard's drop.
        let _fresh = gate.try_begin("posts").expect("reclaim");
        drop(stale);
        assert!(gate.is_in_flight("posts"));
    }

    #[test]
    fn error_messages_name_the_failure() {
        let already = RequestError::AlreadyInFlight {
            key: "posts".into(),
        };
        assert_eq!(already.to_string(), "request 'posts' is already in flight");
        assert_eq!(
            RequestError::Transport("connection reset".into()).to_string(),
            "transport failure: connection reset"
        );
        assert_eq!(
            RequestError::Server {
                status: 503,
                message: "unavailable".into()
            }
            .to_string(),
            "server error 503: unavailable"
        );
    }
}
