//! Patient dashboard: trials and publications for the patient's condition.
//!
//! One load cycle runs four fetches together: platform trials filtered by
//! condition, recruiting registry trials, platform publications and PubMed
//! results. Internal and external items are merged into cards. Summaries and
//! eligibility checks are per-card side requests that never touch the load
//! state.

use std::collections::HashMap;

use api::models::{Eligibility, EligibilityQuery};
use api::{AiApi, ExternalApi, PublicationsApi, TrialsApi};
use store::{KeyValueStore, User};

use super::{admit, impl_page, save_favorite, summarize, Services};
use crate::batch::{BatchPolicy, BatchReport};
use crate::catalog::{merge_publications, merge_trials, PublicationCard, TrialCard};
use crate::guard::Access;
use crate::notify::Notifier;
use crate::page::LoadState;

/// Registry status filter for recommended trials.
pub const RECRUITING: &str = "Recruiting";
/// Results requested from each external registry.
pub const EXTERNAL_LIMIT: u32 = 6;
/// Publications shown on the dashboard.
pub const PUBLICATIONS_SHOWN: usize = 6;

#[derive(Clone)]
pub struct PatientDashboard<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub user: Option<User>,
    pub trials: Vec<TrialCard>,
    pub publications: Vec<PublicationCard>,
    /// Card id to summary text, including the failure line.
    pub summaries: HashMap<String, String>,
    pub summarizing: Option<String>,
    pub eligibility: HashMap<String, Eligibility>,
    /// Age entered for eligibility checks.
    pub age: String,
    pub policy: BatchPolicy,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    PatientDashboard,
    fields: [user, trials, publications, summarizing, age, policy],
    maps: [summaries, eligibility],
);

impl<A, S> PatientDashboard<A, S>
where
    A: TrialsApi + PublicationsApi + ExternalApi + AiApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            user: None,
            trials: Vec::new(),
            publications: Vec::new(),
            summaries: HashMap::new(),
            summarizing: None,
            eligibility: HashMap::new(),
            age: String::new(),
            policy: BatchPolicy::default(),
            state: LoadState::Initializing,
            notifier: Notifier::new(),
            route: None,
        }
    }

    pub async fn activate(&mut self) {
        let Some(user) = admit(&self.services, Access::PATIENT, &mut self.state) else {
            return;
        };
        self.user = Some(user);
        self.load().await;
    }

    pub async fn load(&mut self) {
        let Some(user) = &self.user else {
            return;
        };
        let condition = user.condition().unwrap_or_default().to_string();
        self.state = LoadState::Loading;

        let api = &self.services.api;
        let (trials, registry, publications, pubmed) = futures::join!(
            api.list_trials(Some(condition.as_str()), None),
            api.search_clinical_trials(&condition, Some(RECRUITING), Some(EXTERNAL_LIMIT)),
            api.list_publications(None),
            api.search_pubmed(&condition, Some(EXTERNAL_LIMIT)),
        );

        let mut report = BatchReport::new();
        let trials = report.take("trials", trials);
        let registry = report.take("registry trials", registry);
        let publications = report.take("publications", publications);
        let pubmed = report.take("PubMed results", pubmed);

        if report.commit(self.policy) {
            if trials.is_some() || registry.is_some() {
                self.trials = merge_trials(
                    &trials.unwrap_or_default(),
                    &registry.unwrap_or_default(),
                );
            }
            if publications.is_some() || pubmed.is_some() {
                self.publications = merge_publications(
                    &publications.unwrap_or_default(),
                    &pubmed.unwrap_or_default(),
                );
            }
        }
        if let Some(message) = report.summary() {
            self.notifier.error(message);
        }
        self.state = LoadState::Ready;
    }

    pub fn visible_publications(&self) -> &[PublicationCard] {
        let shown = self.publications.len().min(PUBLICATIONS_SHOWN);
        &self.publications[..shown]
    }

    pub async fn summarize_trial(&mut self, id: &str) {
        let Some(text) = self.trial(id).map(TrialCard::summary_text) else {
            return;
        };
        self.summarizing = Some(id.to_string());
        let summary = summarize(&self.services.api, &text).await;
        self.summaries.insert(id.to_string(), summary);
        self.summarizing = None;
    }

    pub async fn summarize_publication(&mut self, id: &str) {
        let Some(text) = self.publication(id).map(PublicationCard::summary_text) else {
            return;
        };
        self.summarizing = Some(id.to_string());
        let summary = summarize(&self.services.api, &text).await;
        self.summaries.insert(id.to_string(), summary);
        self.summarizing = None;
    }

    /// Ask the AI whether the patient fits the trial's description.
    pub async fn check_eligibility(&mut self, id: &str) {
        let Ok(age) = self.age.trim().parse::<u32>() else {
            self.notifier.error("Please enter your age");
            return;
        };
        let Some(query) = self.eligibility_query(id, age) else {
            return;
        };

        match self.services.api.analyze_eligibility(&query).await {
            Ok(result) => {
                self.eligibility.insert(id.to_string(), result);
            }
            Err(e) => {
                tracing::warn!("eligibility analysis failed: {}", e);
                self.notifier.info("Eligibility analysis unavailable");
            }
        }
    }

    fn eligibility_query(&self, id: &str, age: u32) -> Option<EligibilityQuery> {
        let user = self.user.as_ref()?;
        let card = self.trial(id)?;
        Some(EligibilityQuery {
            patient_age: age,
            patient_condition: user.condition().unwrap_or_default().to_string(),
            patient_symptoms: user.symptoms().unwrap_or_default().to_string(),
            trial_criteria: card.description.clone().unwrap_or_else(|| card.title.clone()),
        })
    }

    pub fn save_trial(&mut self, id: &str) {
        if let Some(item) = self.trial(id).map(TrialCard::to_saved) {
            save_favorite(&self.services, &mut self.notifier, item);
        }
    }

    pub fn save_publication(&mut self, id: &str) {
        if let Some(item) = self.publication(id).map(PublicationCard::to_saved) {
            save_favorite(&self.services, &mut self.notifier, item);
        }
    }

    fn trial(&self, id: &str) -> Option<&TrialCard> {
        self.trials.iter().find(|t| t.id == id)
    }

    fn publication(&self, id: &str) -> Option<&PublicationCard> {
        self.publications.iter().find(|p| p.id == id)
    }
}
