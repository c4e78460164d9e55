//! Running page controllers from Dioxus components.
//!
//! A controller is plain data plus async methods. Components keep it in a
//! signal and run actions through [`PageHandle::run`]. The action works on a
//! copy; when it finishes, only what it changed is merged into the signal's
//! current value ([`Page::absorb`]), so edits made and actions finished in
//! the meantime are kept. The handle then follows a gate redirect or a route
//! and schedules the dismissal of any notice the action raised.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::notify::{Notifier, NOTICE_DURATION};

/// Where a page is in its activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Initializing,
    /// The gate rejected the session. Terminal: nothing is fetched.
    Redirected(&'static str),
    Loading,
    Ready,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Initializing | LoadState::Loading)
    }
}

/// What [`PageHandle::run`] needs from a controller.
pub trait Page: Clone + 'static {
    fn notifier(&self) -> &Notifier;
    fn notifier_mut(&mut self) -> &mut Notifier;
    fn load_state(&self) -> LoadState;
    /// Route to move to after an action, e.g. a dashboard after signup.
    fn take_route(&mut self) -> Option<&'static str> {
        None
    }
    /// Merge into `self` what an action changed between `before`, the copy
    /// it started from, and `after`, the copy it returned.
    fn absorb(&mut self, before: &Self, after: Self);
}

/// Per-key merge for map fields: keys the action added, changed or removed
/// are applied; every other key keeps its current value.
pub fn absorb_map<K: Eq + Hash, V: PartialEq>(
    current: &mut HashMap<K, V>,
    before: &HashMap<K, V>,
    after: HashMap<K, V>,
) {
    current.retain(|key, _| !before.contains_key(key) || after.contains_key(key));
    for (key, value) in after {
        if before.get(&key) != Some(&value) {
            current.insert(key, value);
        }
    }
}

/// What a finished action asks of the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Settled {
    /// Gate redirect; nothing else is done when set.
    pub redirect: Option<&'static str>,
    pub route: Option<&'static str>,
    /// Id of a notice the action raised, to be dismissed later.
    pub raised: Option<u64>,
}

/// Merge a finished action into the live controller.
pub(crate) fn settle<C: Page>(current: &mut C, before: &C, mut after: C) -> Settled {
    let route = after.take_route();
    let redirect = match after.load_state() {
        LoadState::Redirected(to) => Some(to),
        _ => None,
    };

    let prior = notice_id(current);
    current.absorb(before, after);

    Settled {
        redirect,
        route: if redirect.is_some() { None } else { route },
        raised: raised_since(prior, current),
    }
}

fn notice_id<C: Page>(page: &C) -> Option<u64> {
    page.notifier().current().map(|n| n.id)
}

fn raised_since<C: Page>(prior: Option<u64>, page: &C) -> Option<u64> {
    notice_id(page).filter(|id| Some(*id) != prior)
}

/// Wait out [`NOTICE_DURATION`], then dismiss notice `id`.
async fn expire(id: u64, dismiss: impl FnOnce(u64) -> bool) -> bool {
    sleep(NOTICE_DURATION).await;
    dismiss(id)
}

pub struct PageHandle<C: 'static> {
    pub state: Signal<C>,
    nav: Navigator,
}

impl<C: 'static> Clone for PageHandle<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: 'static> Copy for PageHandle<C> {}

pub fn use_page<C: Page>(init: impl FnOnce() -> C) -> PageHandle<C> {
    let state = use_signal(init);
    let nav = use_navigator();
    PageHandle { state, nav }
}

impl<C: Page> PageHandle<C> {
    /// Run `action` on a copy of the controller and merge its changes back.
    pub fn run<F, Fut>(self, action: F)
    where
        F: FnOnce(C) -> Fut + 'static,
        Fut: Future<Output = C> + 'static,
    {
        let mut state = self.state;
        let nav = self.nav;
        spawn(async move {
            let before = state.peek().clone();
            let after = action(before.clone()).await;
            let settled = settle(&mut *state.write(), &before, after);

            if let Some(to) = settled.redirect {
                nav.replace(to);
                return;
            }
            if let Some(to) = settled.route {
                nav.push(to);
            }
            if let Some(id) = settled.raised {
                self.expire_later(id);
            }
        });
    }

    /// Apply a synchronous change, e.g. a form field edit or a local save.
    pub fn update(self, change: impl FnOnce(&mut C)) {
        let mut state = self.state;
        let raised = {
            let mut page = state.write();
            let prior = notice_id(&*page);
            change(&mut page);
            raised_since(prior, &*page)
        };
        if let Some(id) = raised {
            self.expire_later(id);
        }
    }

    pub fn navigate(self, to: &str) {
        self.nav.push(to);
    }

    fn expire_later(self, id: u64) {
        let mut state = self.state;
        spawn(async move {
            expire(id, move |id| state.write().notifier_mut().dismiss(id)).await;
        });
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::pages::{Forum, PatientDashboard, PatientOnboard};
    use crate::testing::{patient, services, trial, FakeApi};

    #[tokio::test]
    async fn test_edit_during_load_survives() {
        let api = FakeApi::new();
        api.with(|s| s.trials = vec![trial(1, 7)]);
        let mut live = PatientDashboard::new(services(&api, Some(patient())));

        let before = live.clone();
        let mut after = before.clone();
        after.activate().await;
        live.age = "42".to_string();

        let settled = settle(&mut live, &before, after);
        assert_eq!(live.age, "42");
        assert_eq!(live.trials.len(), 1);
        assert_eq!(live.state, LoadState::Ready);
        assert_eq!(settled, Settled::default());
    }

    #[tokio::test]
    async fn test_overlapping_summaries_both_kept() {
        let api = FakeApi::new();
        api.with(|s| s.trials = vec![trial(1, 7), trial(2, 7)]);
        let mut live = PatientDashboard::new(services(&api, Some(patient())));
        live.activate().await;

        let first_before = live.clone();
        let second_before = live.clone();
        let mut first = first_before.clone();
        let mut second = second_before.clone();
        first.summarize_trial("1").await;
        second.summarize_trial("2").await;

        settle(&mut live, &second_before, second);
        settle(&mut live, &first_before, first);
        assert_eq!(live.summaries.len(), 2);
        assert!(live.summaries["1"].starts_with("Summary of"));
        assert!(live.summarizing.is_none());
    }

    #[tokio::test]
    async fn test_notice_raised_during_load_is_kept() {
        let api = FakeApi::new();
        api.with(|s| s.trials = vec![trial(1, 7)]);
        let mut live = PatientDashboard::new(services(&api, Some(patient())));
        live.activate().await;

        let before = live.clone();
        let mut after = before.clone();
        after.load().await;
        live.save_trial("1");
        let saved = live.notifier.current().map(|n| n.id);

        let settled = settle(&mut live, &before, after);
        assert_eq!(live.notifier.current().unwrap().message, "Saved to favorites");
        assert_eq!(live.notifier.current().map(|n| n.id), saved);
        assert_eq!(settled.raised, None);
    }

    #[tokio::test]
    async fn test_redirect_wins_over_everything() {
        let api = FakeApi::new();
        let mut live = Forum::new(services(&api, None));

        let before = live.clone();
        let mut after = before.clone();
        after.activate().await;

        let settled = settle(&mut live, &before, after);
        assert_eq!(settled.redirect, Some("/"));
        assert_eq!(settled.route, None);
        assert_eq!(live.state, LoadState::Redirected("/"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_route_and_raised_notice() {
        let api = FakeApi::new();
        let mut live = PatientOnboard::new(services(&api, None));
        live.contact.name = "Ana".to_string();
        live.condition = "Diabetes".to_string();

        let before = live.clone();
        let mut after = before.clone();
        after.submit().await;

        let settled = settle(&mut live, &before, after);
        assert_eq!(settled.route, Some("/patient/dashboard"));
        assert_eq!(settled.raised, live.notifier.current().map(|n| n.id));
        assert_eq!(live.notifier.current().unwrap().message, "Welcome to CuraLink!");
    }

    #[test]
    fn test_map_merge_is_per_key() {
        let before: HashMap<i64, String> = [(1, "draft".to_string())].into();
        let mut current = before.clone();
        current.insert(2, "typed meanwhile".to_string());
        let mut after = before.clone();
        after.remove(&1);
        after.insert(3, "added".to_string());

        absorb_map(&mut current, &before, after);
        assert!(!current.contains_key(&1));
        assert_eq!(current[&2], "typed meanwhile");
        assert_eq!(current[&3], "added");
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_expires_after_duration() {
        let mut notifier = Notifier::new();
        let id = notifier.success("Post created successfully!");
        let notifier = RefCell::new(notifier);

        let start = tokio::time::Instant::now();
        assert!(expire(id, |id| notifier.borrow_mut().dismiss(id)).await);
        assert!(start.elapsed() >= NOTICE_DURATION);
        assert!(notifier.borrow().current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_expiry_keeps_newer_notice() {
        let mut notifier = Notifier::new();
        let stale = notifier.success("Reply posted!");
        let newer = notifier.error("Failed to load replies");
        let notifier = RefCell::new(notifier);

        assert!(!expire(stale, |id| notifier.borrow_mut().dismiss(id)).await);
        assert_eq!(notifier.borrow().current().map(|n| n.id), Some(newer));
    }
}
