//! # Session store: the cached signed-in user
//!
//! A single slot (`"user"`) holding the [`User`] record returned by signup or
//! login. There is no token and no expiry: whoever is in the slot is signed in
//! until [`SessionStore::clear`] runs.
//!
//! Decoding never fails outward. Missing, truncated, or foreign data in the slot
//! reads as "no session" and the page guard sends the visitor back to the
//! landing page.

use crate::kv::KeyValueStore;
use crate::models::User;

/// Storage key of the session record.
pub const SESSION_KEY: &str = "user";

#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the cached user, or `None` if absent or malformed.
    pub fn load(&self) -> Option<User> {
        let raw = self.store.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring malformed session record: {}", e);
                None
            }
        }
    }

    /// Persist `user`, replacing any previous session.
    pub fn save(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => {
                self.store.set(SESSION_KEY, &json);
                tracing::info!("Session saved for user {} ({})", user.id, user.role());
            }
            Err(e) => tracing::warn!("Failed to encode session record: {}", e),
        }
    }

    /// Drop the cached user. Navigation back to `/` is up to the caller.
    pub fn clear(&self) {
        self.store.remove(SESSION_KEY);
        tracing::info!("Session cleared");
    }

    pub fn backend(&self) -> &S {
        &self.store
    }
}
