//! # Page controllers
//!
//! One controller per page. A controller owns everything the page shows
//! (session user, fetched records, form fields, the notice slot, the
//! [`LoadState`]) and exposes async actions that mutate it. Controllers are
//! generic over the resource traits they call and over the key/value store
//! backing the session, so tests drive them with a fake backend and a
//! [`store::MemoryStore`].
//!
//! Every gated page starts with [`admit`]: no session or the wrong role moves
//! the page to [`LoadState::Redirected`] and nothing is fetched.

use api::AiApi;
use store::{FavoritesStore, KeyValueStore, Role, SavedItem, SessionStore, User};

use crate::guard::{require_session, Access};
use crate::notify::Notifier;
use crate::page::LoadState;

pub mod collaborators;
pub mod favorites;
pub mod forum;
pub mod health_experts;
pub mod landing;
pub mod onboard;
pub mod patient_dashboard;
pub mod researcher_dashboard;

pub use collaborators::Collaborators;
pub use favorites::Favorites;
pub use forum::Forum;
pub use health_experts::HealthExperts;
pub use landing::Landing;
pub use onboard::{PatientOnboard, ResearcherOnboard};
pub use patient_dashboard::PatientDashboard;
pub use researcher_dashboard::ResearcherDashboard;

pub mod routes {
    pub const LANDING: &str = "/";
    pub const PATIENT_ONBOARD: &str = "/patient/onboard";
    pub const RESEARCHER_ONBOARD: &str = "/researcher/onboard";
    pub const PATIENT_DASHBOARD: &str = "/patient/dashboard";
    pub const HEALTH_EXPERTS: &str = "/patient/experts";
    pub const RESEARCHER_DASHBOARD: &str = "/researcher/dashboard";
    pub const COLLABORATORS: &str = "/researcher/collaborators";
    pub const FORUM: &str = "/forum";
    pub const FAVORITES: &str = "/favorites";
}

/// Landing route of each role after signup or login.
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Patient => routes::PATIENT_DASHBOARD,
        Role::Researcher => routes::RESEARCHER_DASHBOARD,
    }
}

/// Backend client plus the two local stores, handed to every controller.
#[derive(Clone, Debug)]
pub struct Services<A, S: KeyValueStore> {
    pub api: A,
    pub session: SessionStore<S>,
    pub favorites: FavoritesStore<S>,
}

impl<A, S: KeyValueStore + Clone> Services<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            session: SessionStore::new(store.clone()),
            favorites: FavoritesStore::new(store),
        }
    }
}

/// Run the session gate for a page.
///
/// On rejection `state` becomes [`LoadState::Redirected`] and `None` is
/// returned; the caller must stop there.
pub fn admit<A, S: KeyValueStore>(
    services: &Services<A, S>,
    access: Access,
    state: &mut LoadState,
) -> Option<User> {
    match require_session(&services.session, access) {
        Ok(user) => Some(user),
        Err(redirect) => {
            *state = LoadState::Redirected(redirect.to);
            None
        }
    }
}

/// Summary text for a card, or the fixed failure line.
pub async fn summarize<A: AiApi>(api: &A, text: &str) -> String {
    match api.summarize(text).await {
        Ok(summary) => summary.summary,
        Err(e) => {
            tracing::warn!("summarize failed: {}", e);
            "Failed to generate summary".to_string()
        }
    }
}

/// Append a card snapshot to favorites and report the outcome.
pub fn save_favorite<A, S: KeyValueStore>(
    services: &Services<A, S>,
    notifier: &mut Notifier,
    item: SavedItem,
) {
    if services.favorites.add(item) {
        notifier.success("Saved to favorites");
    } else {
        notifier.info("Already in favorites");
    }
}

/// Trimmed text, or `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Implements [`Page`](crate::page::Page) for a controller.
///
/// `fields` are merged back whole when an action changed them, `maps` are
/// merged per key. Fields left out (the services, the pending route) are
/// never written back from an action.
macro_rules! impl_page {
    ($page:ident, fields: [$($field:ident),* $(,)?] $(, maps: [$($map:ident),* $(,)?])? $(,)?) => {
        impl<A, S> $crate::page::Page for $page<A, S>
        where
            A: Clone + 'static,
            S: store::KeyValueStore + Clone + 'static,
        {
            fn notifier(&self) -> &$crate::notify::Notifier {
                &self.notifier
            }

            fn notifier_mut(&mut self) -> &mut $crate::notify::Notifier {
                &mut self.notifier
            }

            fn load_state(&self) -> $crate::page::LoadState {
                self.state
            }

            fn take_route(&mut self) -> Option<&'static str> {
                self.route.take()
            }

            fn absorb(&mut self, before: &Self, after: Self) {
                let Self {
                    $($field,)*
                    $($($map,)*)?
                    state,
                    notifier,
                    ..
                } = after;
                $(
                    if $field != before.$field {
                        self.$field = $field;
                    }
                )*
                $($(
                    $crate::page::absorb_map(&mut self.$map, &before.$map, $map);
                )*)?
                if state != before.state {
                    self.state = state;
                }
                self.notifier.absorb(&before.notifier, notifier);
            }
        }
    };
}

pub(crate) use impl_page;
