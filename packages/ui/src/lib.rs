//! # UI crate: page controllers and shared components for the CuraLink client
//!
//! Everything between the views and the `api`/`store` crates lives here:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`guard`] | `require_session`: the session and role gate every page runs first |
//! | [`notify`] | Single-slot notices that auto-dismiss after three seconds |
//! | [`batch`] | Outcome of fetches started together, with an explicit commit policy |
//! | [`catalog`] | Internal and external trials/publications normalised into cards |
//! | [`pages`] | One controller per page, generic over the resource traits it uses |
//! | [`page`] | Running controller actions from Dioxus signals |
//! | [`components`] | Card, Navbar, Toast and Loader |
//! | [`context`] | `AppProvider` and the shared API client and store |

pub mod batch;
pub mod catalog;
pub mod components;
pub mod context;
pub mod guard;
pub mod notify;
pub mod page;
pub mod pages;

mod storage;
pub use storage::{make_store, AppStore};

#[cfg(test)]
mod testing;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use components::{Card, CardContent, Loader, LoaderSize, Navbar, Toast};
pub use context::{use_app, AppContext, AppProvider};
pub use guard::{require_session, Access, Redirect};
pub use notify::{Level, Notice, Notifier};
pub use page::{use_page, LoadState, Page, PageHandle};
pub use pages::Services;
