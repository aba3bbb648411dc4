//! Client-side session state
//!
//! The session is the triple (access token, refresh token, cached user). It
//! lives behind a [`SessionStore`] so the same client logic runs against any
//! persistence backend: [`MemorySessionStore`] for tests and short-lived
//! processes, [`FileSessionStore`] for the command-line shell.
//!
//! The cached user is advisory. Nothing in this crate uses it to decide
//! whether a call is authorized.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::types::User;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key for the serialized user record
pub const USER_KEY: &str = "user";

/// String-keyed persistence backend for session fields.
///
/// Implementations must not panic or fail on reads; a backend that cannot
/// reach its storage behaves as if the key were absent.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);

    /// Write several entries at once. Backends that persist on every write
    /// should override this to persist once.
    fn set_many(&self, entries: &[(&str, &str)]) {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Remove several entries at once
    fn remove_many(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}

/// Coarse authentication state derived from the stored tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Handle over the session fields of a [`SessionStore`].
///
/// Cloning is cheap and clones share the same backing store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store, starting logged out
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Cached user record. A record that no longer parses reads as `None`.
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("Ignoring unreadable cached user: {err}");
                None
            }
        }
    }

    /// Overwrite both tokens
    pub fn set_tokens(&self, access: &str, refresh: &str) {
        self.store
            .set_many(&[(ACCESS_TOKEN_KEY, access), (REFRESH_TOKEN_KEY, refresh)]);
    }

    /// Overwrite the cached user
    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.store.set(USER_KEY, &raw),
            Err(err) => warn!("Failed to serialize user for caching: {err}"),
        }
    }

    /// Remove both tokens and the cached user
    pub fn clear(&self) {
        self.store
            .remove_many(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY]);
    }

    pub fn state(&self) -> SessionState {
        if self.refresh_token().is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
