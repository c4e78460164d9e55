//! App-wide context: the API client and the platform store, shared by every
//! view through Dioxus context.

use api::ApiClient;
use dioxus::prelude::*;
use store::{FavoritesStore, SessionStore};

use crate::pages::Services;
use crate::storage::{make_store, AppStore};

#[derive(Clone, Debug)]
pub struct AppContext {
    pub api: ApiClient,
    pub store: AppStore,
}

impl AppContext {
    pub fn new() -> Self {
        let api = ApiClient::from_env();
        tracing::debug!("API base URL: {}", api.base_url());
        Self {
            api,
            store: make_store(),
        }
    }

    pub fn session(&self) -> SessionStore<AppStore> {
        SessionStore::new(self.store.clone())
    }

    pub fn favorites(&self) -> FavoritesStore<AppStore> {
        FavoritesStore::new(self.store.clone())
    }

    /// Services handed to a page controller.
    pub fn services(&self) -> Services<ApiClient, AppStore> {
        Services::new(self.api.clone(), self.store.clone())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provide [`AppContext`] to the whole tree.
#[component]
pub fn AppProvider(children: Element) -> Element {
    use_context_provider(AppContext::new);

    rsx! {
        {children}
    }
}
