//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as a JSON file on the local filesystem. It stands in for browser
//! `localStorage` on native builds so a cached session survives restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── user.json          # cached session record
//! └── favorites.json     # saved trial/publication snapshots
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) to obtain a platform-appropriate
//! base, e.g. `~/.local/share/curalink/` on Linux.

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create store directory {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Failed to write {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}
