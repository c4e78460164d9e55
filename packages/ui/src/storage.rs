//! Platform key/value store for the session and favorites.
//!
//! - **Web** (WASM + `web` feature): the browser's `localStorage`
//! - **Native**: JSON files under `<data_dir>/curalink/`
//! - **WASM without `web`**: in memory, nothing survives a reload

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStorage;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = store::FileStore;

/// Create the platform-appropriate store.
pub fn make_store() -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        tracing::warn!("built without the web feature, session will not persist");
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::new(data_dir())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("curalink")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use store::KeyValueStore;

    fn assert_store<S: KeyValueStore + Clone + 'static>() {}

    #[test]
    fn test_native_store_lives_under_data_dir() {
        assert_store::<AppStore>();
        assert!(data_dir().ends_with("curalink"));
    }
}
