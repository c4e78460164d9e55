pub mod favorites;
pub mod kv;
pub mod models;
pub mod session;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use kv::KeyValueStore;
pub use models::{
    PatientProfile, Profile, ResearcherProfile, Role, SavedItem, SavedKind, User,
};
pub use session::{SessionStore, SESSION_KEY};
