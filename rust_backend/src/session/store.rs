//! In-memory session storage.
//!
//! Sessions are isolated from each other; the engine itself is pure, so the
//! store map is the only shared state in the crate. A process-wide store
//! behind a `OnceCell` serves embedders that cannot carry a handle around.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use super::error::{SessionError, SessionResult};
use super::session::Session;
use crate::engine::FilterPolicy;

/// Strongly-typed identifier for a stored session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SessionId {
    fn from(value: u64) -> Self {
        SessionId(value)
    }
}

/// Thread-safe collection of sessions keyed by id.
#[derive(Clone)]
pub struct SessionStore {
    data: Arc<RwLock<StoreData>>,
}

struct StoreData {
    sessions: HashMap<SessionId, Session>,
    next_session_id: SessionId,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
            next_session_id: SessionId(1),
        }
    }
}

impl SessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData::default())),
        }
    }

    /// Create a session with the default filter policy and return its id.
    pub fn create(&self) -> SessionId {
        self.create_with_policy(FilterPolicy::default())
    }

    /// Create a session with an explicit filter policy and return its id.
    pub fn create_with_policy(&self, policy: FilterPolicy) -> SessionId {
        let mut data = self.data.write().unwrap();
        let session_id = data.next_session_id;
        data.next_session_id = SessionId(session_id.0 + 1);
        data.sessions.insert(session_id, Session::new(policy));
        session_id
    }

    /// Run a read-only closure against a session.
    pub fn with_session<T>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&Session) -> SessionResult<T>,
    ) -> SessionResult<T> {
        let data = self.data.read().unwrap();
        let session = data
            .sessions
            .get(&session_id)
            .ok_or(SessionError::NotFound(session_id))?;
        f(session)
    }

    /// Run a mutating closure against a session.
    pub fn update_session<T>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&mut Session) -> SessionResult<T>,
    ) -> SessionResult<T> {
        let mut data = self.data.write().unwrap();
        let session = data
            .sessions
            .get_mut(&session_id)
            .ok_or(SessionError::NotFound(session_id))?;
        f(session)
    }

    /// Remove a session. Returns true when it existed.
    pub fn remove(&self, session_id: SessionId) -> bool {
        self.data
            .write()
            .unwrap()
            .sessions
            .remove(&session_id)
            .is_some()
    }

    /// Number of live sessions.
    pub fn count(&self) -> usize {
        self.data.read().unwrap().sessions.len()
    }

    /// Remove all sessions. Ids are not reused afterwards.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.sessions.clear();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

static SESSION_STORE: OnceCell<SessionStore> = OnceCell::new();

/// Get the process-wide session store.
pub fn global() -> &'static SessionStore {
    SESSION_STORE.get_or_init(SessionStore::new)
}
