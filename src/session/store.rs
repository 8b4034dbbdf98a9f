//! Session store keyed by session id
//!
//! Owns every player's `GameSession` and tracks when each was last used so
//! idle sessions can be expired.

use super::GameSession;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Opaque handle to a stored session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Entry {
    session: GameSession,
    last_touched: Instant,
}

/// In-memory session store
///
/// No internal locking: callers serialize access to a given session.
#[derive(Default)]
pub struct SessionStore {
    sessions: FxHashMap<SessionId, Entry>,
    next_id: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session and return its id
    pub fn create(&mut self) -> SessionId {
        self.create_at(Instant::now())
    }

    fn create_at(&mut self, now: Instant) -> SessionId {
        self.next_id += 1;
        let id = SessionId(self.next_id);
        self.sessions.insert(
            id,
            Entry {
                session: GameSession::new(),
                last_touched: now,
            },
        );
        debug!(%id, "session created");
        id
    }

    /// Read a session without refreshing it
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&GameSession> {
        self.sessions.get(&id).map(|entry| &entry.session)
    }

    /// Borrow a session for mutation and mark it as used
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut GameSession> {
        self.get_mut_at(id, Instant::now())
    }

    fn get_mut_at(&mut self, id: SessionId, now: Instant) -> Option<&mut GameSession> {
        self.sessions.get_mut(&id).map(|entry| {
            entry.last_touched = now;
            &mut entry.session
        })
    }

    /// Remove a session, returning it if it existed
    pub fn remove(&mut self, id: SessionId) -> Option<GameSession> {
        let removed = self.sessions.remove(&id).map(|entry| entry.session);
        if removed.is_some() {
            debug!(%id, "session removed");
        }
        removed
    }

    /// Drop every session idle for longer than `max_idle`
    ///
    /// Returns how many sessions were removed.
    pub fn expire_idle(&mut self, max_idle: Duration) -> usize {
        self.expire_idle_at(max_idle, Instant::now())
    }

    fn expire_idle_at(&mut self, max_idle: Duration, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.saturating_duration_since(entry.last_touched) <= max_idle);
        let expired = before - self.sessions.len();
        if expired > 0 {
            debug!(expired, "idle sessions expired");
        }
        expired
    }

    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
