//! Request lifecycle state shared by all controllers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lifecycle of one asynchronous request.
///
/// Created `Idle`, moves to `InFlight` on submission, terminates in
/// `Succeeded` or `Failed`, and returns to `Idle` only via reset. A fresh
/// submission discards the prior terminal state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    InFlight,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    /// The result, if the request succeeded.
    pub fn succeeded(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if the request failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Single-flight guard around a [`RequestState`].
///
/// Every submission takes a ticket from a strictly increasing counter; a
/// resolving call may apply its result only while its ticket is still the
/// most recent one issued. A slow response superseded by a newer submission
/// (or by a reset) is dropped on the floor, so stale results can never
/// overwrite newer state.
pub(crate) struct SingleFlight<T> {
    state: Mutex<RequestState<T>>,
    seq: AtomicU64,
}

impl<T: Clone> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RequestState::Idle),
            seq: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RequestState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state, cloned out of the cell.
    pub fn snapshot(&self) -> RequestState<T> {
        self.lock().clone()
    }

    /// Mark a new submission in flight and return its ticket.
    pub fn begin(&self) -> u64 {
        let mut state = self.lock();
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *state = RequestState::InFlight;
        ticket
    }

    /// Apply a terminal state if `ticket` is still current. Returns whether
    /// the result landed; a `false` return means it was superseded.
    pub fn finish(&self, ticket: u64, next: RequestState<T>) -> bool {
        let mut state = self.lock();
        if self.seq.load(Ordering::SeqCst) != ticket {
            return false;
        }
        *state = next;
        true
    }

    /// Return to `Idle`, invalidating any in-flight ticket.
    pub fn reset(&self) {
        let mut state = self.lock();
        self.seq.fetch_add(1, Ordering::SeqCst);
        *state = RequestState::Idle;
    }
}
