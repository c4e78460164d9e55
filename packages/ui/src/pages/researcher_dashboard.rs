//! Researcher dashboard: the researcher's own trials and publications, the
//! meeting requests addressed to them, and an ORCID works preview.
//!
//! Every mutation (create, delete, answering a meeting request, importing an
//! ORCID work) ends with a full reload on success.

use api::models::{
    MeetingRequest, NewPublication, NewTrial, OrcidWorks, Phase, Publication, RequestStatus,
    Trial,
};
use api::{ExternalApi, MeetingsApi, PublicationsApi, TrialsApi};
use store::{KeyValueStore, User};

use super::{admit, impl_page, non_blank, Services};
use crate::batch::{BatchPolicy, BatchReport};
use crate::guard::Access;
use crate::notify::Notifier;
use crate::page::LoadState;

const REQUIRED_FIELDS: &str = "Please fill in all required fields";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrialForm {
    pub title: String,
    pub condition: String,
    pub phase: Phase,
    pub location: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PublicationForm {
    pub title: String,
    pub summary: String,
}

#[derive(Clone)]
pub struct ResearcherDashboard<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub user: Option<User>,
    pub trials: Vec<Trial>,
    pub publications: Vec<Publication>,
    /// Meeting requests received as an expert.
    pub meetings: Vec<MeetingRequest>,
    pub orcid: Option<OrcidWorks>,
    pub trial_form: TrialForm,
    pub publication_form: PublicationForm,
    pub show_trial_form: bool,
    pub show_publication_form: bool,
    pub policy: BatchPolicy,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    ResearcherDashboard,
    fields: [
        user,
        trials,
        publications,
        meetings,
        orcid,
        trial_form,
        publication_form,
        show_trial_form,
        show_publication_form,
        policy,
    ],
);

impl<A, S> ResearcherDashboard<A, S>
where
    A: TrialsApi + PublicationsApi + MeetingsApi + ExternalApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            user: None,
            trials: Vec::new(),
            publications: Vec::new(),
            meetings: Vec::new(),
            orcid: None,
            trial_form: TrialForm::default(),
            publication_form: PublicationForm::default(),
            show_trial_form: false,
            show_publication_form: false,
            policy: BatchPolicy::default(),
            state: LoadState::Initializing,
            notifier: Notifier::new(),
            route: None,
        }
    }

    pub async fn activate(&mut self) {
        let Some(user) = admit(&self.services, Access::RESEARCHER, &mut self.state) else {
            return;
        };
        self.user = Some(user);
        self.load().await;
    }

    pub async fn load(&mut self) {
        let Some(user_id) = self.user_id() else {
            return;
        };
        self.state = LoadState::Loading;

        let api = &self.services.api;
        let (trials, publications, meetings) = futures::join!(
            api.list_trials(None, None),
            api.list_publications(None),
            api.list_received_meeting_requests(user_id),
        );

        let mut report = BatchReport::new();
        let trials = report.take("trials", trials);
        let publications = report.take("publications", publications);
        let meetings = report.take("meeting requests", meetings);

        if report.commit(self.policy) {
            if let Some(trials) = trials {
                self.trials = trials
                    .into_iter()
                    .filter(|t| t.researcher_id == user_id)
                    .collect();
            }
            if let Some(publications) = publications {
                self.publications = publications
                    .into_iter()
                    .filter(|p| p.researcher_id == user_id)
                    .collect();
            }
            if let Some(meetings) = meetings {
                self.meetings = meetings;
            }
        }
        if let Some(message) = report.summary() {
            self.notifier.error(message);
        }
        self.state = LoadState::Ready;
    }

    pub async fn create_trial(&mut self) {
        let Some(user_id) = self.user_id() else {
            return;
        };
        let form = &self.trial_form;
        let (Some(title), Some(condition), Some(location)) = (
            non_blank(&form.title),
            non_blank(&form.condition),
            non_blank(&form.location),
        ) else {
            self.notifier.error(REQUIRED_FIELDS);
            return;
        };
        let trial = NewTrial {
            title,
            condition,
            phase: form.phase.clone(),
            location,
            description: non_blank(&form.description),
            researcher_id: user_id,
        };

        match self.services.api.create_trial(&trial).await {
            Ok(_) => {
                self.notifier.success("Trial created successfully!");
                self.trial_form = TrialForm::default();
                self.show_trial_form = false;
                self.load().await;
            }
            Err(e) => {
                tracing::error!("create trial failed: {}", e);
                self.notifier.error("Failed to create trial");
            }
        }
    }

    pub async fn create_publication(&mut self) {
        let Some(user_id) = self.user_id() else {
            return;
        };
        let (Some(title), Some(summary)) = (
            non_blank(&self.publication_form.title),
            non_blank(&self.publication_form.summary),
        ) else {
            self.notifier.error(REQUIRED_FIELDS);
            return;
        };
        let publication = NewPublication {
            title,
            summary,
            researcher_id: user_id,
        };

        match self.services.api.create_publication(&publication).await {
            Ok(_) => {
                self.notifier.success("Publication created successfully!");
                self.publication_form = PublicationForm::default();
                self.show_publication_form = false;
                self.load().await;
            }
            Err(e) => {
                tracing::error!("create publication failed: {}", e);
                self.notifier.error("Failed to create publication");
            }
        }
    }

    /// Delete one of the researcher's own trials.
    pub async fn delete_trial(&mut self, id: i64) {
        let user_id = self.user_id();
        let own = self
            .trials
            .iter()
            .any(|t| t.id == id && Some(t.researcher_id) == user_id);
        if !own {
            return;
        }
        match self.services.api.delete_trial(id).await {
            Ok(_) => {
                self.notifier.success("Trial deleted");
                self.load().await;
            }
            Err(e) => {
                tracing::error!("delete trial {} failed: {}", id, e);
                self.notifier.error("Failed to delete trial");
            }
        }
    }

    pub async fn delete_publication(&mut self, id: i64) {
        let user_id = self.user_id();
        let own = self
            .publications
            .iter()
            .any(|p| p.id == id && Some(p.researcher_id) == user_id);
        if !own {
            return;
        }
        match self.services.api.delete_publication(id).await {
            Ok(_) => {
                self.notifier.success("Publication deleted");
                self.load().await;
            }
            Err(e) => {
                tracing::error!("delete publication {} failed: {}", id, e);
                self.notifier.error("Failed to delete publication");
            }
        }
    }

    /// Accept or reject a meeting request addressed to this researcher.
    pub async fn answer_meeting(&mut self, id: i64, accept: bool) {
        let status = if accept {
            RequestStatus::Accepted
        } else {
            RequestStatus::Rejected
        };
        let message = format!("Meeting request {}", status);
        match self.services.api.update_meeting_request(id, status).await {
            Ok(_) => {
                self.notifier.success(message);
                self.load().await;
            }
            Err(e) => {
                tracing::error!("update meeting request {} failed: {}", id, e);
                self.notifier.error("Failed to update meeting request");
            }
        }
    }

    /// Fetch the works listed under the profile's ORCID iD.
    pub async fn load_orcid(&mut self) {
        let orcid = self
            .user
            .as_ref()
            .and_then(User::researcher)
            .and_then(|r| r.orcid.as_deref())
            .and_then(non_blank);
        let Some(orcid) = orcid else {
            self.notifier.info("Add your ORCID iD to your profile to import publications");
            return;
        };

        match self.services.api.orcid_works(&orcid).await {
            Ok(works) => self.orcid = Some(works),
            Err(e) => {
                tracing::warn!("ORCID lookup for {} failed: {}", orcid, e);
                self.notifier.error(e.message_or("Failed to fetch ORCID works"));
            }
        }
    }

    /// Create a platform publication from one previewed ORCID work.
    pub async fn import_orcid_work(&mut self, index: usize) {
        let Some(user_id) = self.user_id() else {
            return;
        };
        let Some(work) = self.orcid.as_ref().and_then(|o| o.publications.get(index)) else {
            return;
        };
        let venue = match (&work.journal, &work.year) {
            (Some(journal), Some(year)) => format!("Published in {journal} ({year})"),
            (Some(journal), None) => format!("Published in {journal}"),
            (None, Some(year)) => format!("Published {year}"),
            (None, None) => "Imported from ORCID".to_string(),
        };
        let publication = NewPublication {
            title: work.title.clone(),
            summary: venue,
            researcher_id: user_id,
        };

        match self.services.api.create_publication(&publication).await {
            Ok(_) => {
                self.notifier.success("Publication imported from ORCID");
                self.load().await;
            }
            Err(e) => {
                tracing::error!("ORCID import failed: {}", e);
                self.notifier.error("Failed to import publication");
            }
        }
    }

    pub fn pending_meetings(&self) -> impl Iterator<Item = &MeetingRequest> {
        self.meetings.iter().filter(|m| m.status.is_pending())
    }

    fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}
