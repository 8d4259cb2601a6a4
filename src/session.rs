//! Session store
//!
//! Holds the bearer token and user id for the lifetime of the process.
//! Nothing is written to disk: a restart always starts logged out.
//!
//! The store is a cheap-to-clone handle. The gateway and the front ends hold
//! clones of the same handle, so a logout in one place is seen everywhere.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// An authenticated session
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Process-scoped session storage shared between gateway and UI
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that starts out authenticated
    pub fn with_session(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(token, user_id);
        store
    }

    /// Replace the current session. An empty token leaves the store cleared.
    pub fn set(&self, token: impl Into<String>, user_id: impl Into<String>) {
        let token = token.into();
        let mut guard = self.inner.write();
        if token.is_empty() {
            *guard = None;
            return;
        }
        *guard = Some(Session {
            token,
            user_id: user_id.into(),
        });
    }

    /// Drop token and user id together
    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.user_id.clone())
    }

    /// True when a token is present. No expiry check is made here.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    pub fn snapshot(&self) -> Option<Session> {
        self.inner.read().clone()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.inner.read())
            .finish()
    }
}
