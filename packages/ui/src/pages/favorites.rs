//! Saved cards, read from local storage. No backend calls.

use store::{KeyValueStore, SavedItem, SavedKind, User};

use super::{admit, dashboard_route, impl_page, Services};
use crate::guard::Access;
use crate::notify::Notifier;
use crate::page::LoadState;

#[derive(Clone)]
pub struct Favorites<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub user: Option<User>,
    pub items: Vec<SavedItem>,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(Favorites, fields: [user, items]);

impl<A, S: KeyValueStore> Favorites<A, S> {
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            user: None,
            items: Vec::new(),
            state: LoadState::Initializing,
            notifier: Notifier::new(),
            route: None,
        }
    }

    pub fn activate(&mut self) {
        let Some(user) = admit(&self.services, Access::SignedIn, &mut self.state) else {
            return;
        };
        self.user = Some(user);
        self.items = self.services.favorites.list();
        self.state = LoadState::Ready;
    }

    pub fn of_kind(&self, kind: SavedKind) -> impl Iterator<Item = &SavedItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// Where the empty-state "browse" button leads.
    pub fn browse_route(&self) -> &'static str {
        self.user
            .as_ref()
            .map(|u| dashboard_route(u.role()))
            .unwrap_or(super::routes::LANDING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{researcher, services, FakeApi};
    use store::{MemoryStore, FAVORITES_KEY};

    fn saved(id: &str, kind: SavedKind) -> SavedItem {
        SavedItem {
            id: id.to_string(),
            kind,
            title: format!("Saved {id}"),
            description: None,
            url: None,
            external: false,
        }
    }

    #[test]
    fn test_lists_saved_items_in_order() {
        let api = FakeApi::new();
        let services = services(&api, Some(researcher()));
        services.favorites.add(saved("1", SavedKind::Trial));
        services.favorites.add(saved("ext-pub-9", SavedKind::Publication));

        let mut page = Favorites::new(services);
        page.activate();

        let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "ext-pub-9"]);
        assert_eq!(page.of_kind(SavedKind::Publication).count(), 1);
        assert_eq!(page.browse_route(), "/researcher/dashboard");
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_malformed_storage_is_empty() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "not json");
        let services = Services::new(FakeApi::new(), store);
        services.session.save(&researcher());

        let mut page = Favorites::new(services);
        page.activate();
        assert!(page.items.is_empty());
        assert_eq!(page.state, LoadState::Ready);
    }

    #[test]
    fn test_requires_session() {
        let api = FakeApi::new();
        let mut page = Favorites::new(services(&api, None));
        page.activate();
        assert_eq!(page.state, LoadState::Redirected("/"));
        assert_eq!(page.browse_route(), "/");
    }
}
