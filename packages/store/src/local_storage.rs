//! # Browser `localStorage` store
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes the origin's `window.localStorage`, which is where the
//! session record (`"user"`) and the favorites list (`"favorites"`) live.
//!
//! ## Error handling
//!
//! Storage can be missing (no window, private browsing) or full. Reads then
//! return `None` and writes are logged and dropped, so a broken storage area
//! degrades to "signed out, nothing saved" instead of crashing the page.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn area() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::area()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(area) = Self::area() else {
            tracing::warn!("localStorage unavailable, dropping write to {}", key);
            return;
        };
        if let Err(e) = area.set_item(key, value) {
            tracing::warn!("Failed to write {} to localStorage: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(area) = Self::area() {
            let _ = area.remove_item(key);
        }
    }
}
