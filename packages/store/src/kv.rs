//! # Key/value persistence seam
//!
//! Everything the client keeps between page loads is a JSON string stored
//! under a well-known key (`"user"`, `"favorites"`). [`KeyValueStore`] is the
//! interface the typed stores ([`crate::SessionStore`], [`crate::FavoritesStore`])
//! are written against, so the same logic runs on:
//!
//! | Backend | Used by |
//! |---------|---------|
//! | [`crate::LocalStorage`] | the browser (WASM + `web` feature) |
//! | [`crate::FileStore`] | native builds, one JSON file per key |
//! | [`crate::MemoryStore`] | tests and fixtures |
//!
//! Backends never fail loudly. A read that cannot be served is `None`; a
//! write that cannot be performed is logged and dropped.

/// Synchronous string store keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
