//! Health experts directory for patients.
//!
//! Experts are researchers matched against the patient's condition, or
//! against a search term. Patients can follow an expert, or request a meeting
//! with experts who accept meetings.

use api::models::{ConnectionType, Expert, ExpertMatch, NewConnection, NewMeetingRequest};
use api::{AiApi, ConnectionsApi, MeetingsApi};
use store::{KeyValueStore, User};

use super::{admit, impl_page, non_blank, Services};
use crate::guard::Access;
use crate::notify::Notifier;
use crate::page::LoadState;

/// Meeting request being written for one expert.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeetingForm {
    pub expert_id: i64,
    pub message: String,
    pub contact_info: String,
}

#[derive(Clone)]
pub struct HealthExperts<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub user: Option<User>,
    pub experts: Vec<Expert>,
    pub search: String,
    /// Condition filter of the last load.
    pub query: Option<String>,
    pub recommendation: Option<ExpertMatch>,
    pub matching: bool,
    /// Open meeting form, if any.
    pub meeting_form: Option<MeetingForm>,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    HealthExperts,
    fields: [user, experts, search, query, recommendation, matching, meeting_form],
);

impl<A, S> HealthExperts<A, S>
where
    A: ConnectionsApi + MeetingsApi + AiApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            user: None,
            experts: Vec::new(),
            search: String::new(),
            query: None,
            recommendation: None,
            matching: false,
            meeting_form: None,
            state: LoadState::Initializing,
            notifier: Notifier::new(),
            route: None,
        }
    }

    pub async fn activate(&mut self) {
        let Some(user) = admit(&self.services, Access::PATIENT, &mut self.state) else {
            return;
        };
        let condition = user.condition().map(str::to_string);
        self.user = Some(user);
        self.load(condition).await;
    }

    async fn load(&mut self, condition: Option<String>) {
        self.state = LoadState::Loading;
        self.query = condition;
        match self
            .services
            .api
            .list_experts(self.query.as_deref(), None)
            .await
        {
            Ok(experts) => self.experts = experts,
            Err(e) => {
                tracing::warn!("loading experts failed: {}", e);
                self.notifier.error("Failed to load experts");
            }
        }
        self.state = LoadState::Ready;
    }

    /// Reload with the search box as the condition filter.
    pub async fn search(&mut self) {
        if self.user.is_none() {
            return;
        }
        let term = non_blank(&self.search);
        self.load(term).await;
    }

    /// Reload with the filter of the last load.
    pub async fn reload(&mut self) {
        if self.user.is_none() {
            return;
        }
        self.load(self.query.clone()).await;
    }

    /// Ask the AI which specialties fit the patient's condition.
    pub async fn match_specialties(&mut self) {
        let Some(user) = &self.user else {
            return;
        };
        let Some(condition) = user.condition().map(str::to_string) else {
            self.notifier.error("Please set your condition in profile");
            return;
        };
        let symptoms = user.symptoms().unwrap_or_default().to_string();

        self.matching = true;
        match self.services.api.match_experts(&condition, Some(&symptoms)).await {
            Ok(result) => {
                self.recommendation = Some(result);
                self.notifier.success("AI generated specialty recommendations!");
            }
            Err(e) => {
                tracing::warn!("expert matching failed: {}", e);
                self.notifier.info("AI matching unavailable");
            }
        }
        self.matching = false;
    }

    pub async fn follow(&mut self, expert_id: i64) {
        let Some(user_id) = self.user.as_ref().map(|u| u.id) else {
            return;
        };
        let connection = NewConnection {
            requester_id: user_id,
            receiver_id: expert_id,
            connection_type: ConnectionType::Follow,
        };
        match self.services.api.create_connection(&connection).await {
            Ok(_) => {
                self.notifier.success("Follow request sent!");
                self.reload().await;
            }
            Err(e) => {
                tracing::error!("follow {} failed: {}", expert_id, e);
                self.notifier.error("Failed to send follow request");
            }
        }
    }

    /// Whether the meeting action is offered for this expert.
    pub fn can_request_meeting(&self, expert_id: i64) -> bool {
        self.expert(expert_id)
            .is_some_and(|expert| expert.meeting_availability)
    }

    /// Open the meeting form. Ignored for experts not taking meetings.
    pub fn open_meeting_form(&mut self, expert_id: i64) {
        if self.can_request_meeting(expert_id) {
            self.meeting_form = Some(MeetingForm {
                expert_id,
                ..Default::default()
            });
        }
    }

    pub fn close_meeting_form(&mut self) {
        self.meeting_form = None;
    }

    pub async fn request_meeting(&mut self) {
        let Some(user_id) = self.user.as_ref().map(|u| u.id) else {
            return;
        };
        let Some(form) = &self.meeting_form else {
            return;
        };
        if !self.can_request_meeting(form.expert_id) {
            return;
        }
        let request = NewMeetingRequest {
            requester_id: user_id,
            expert_id: form.expert_id,
            message: non_blank(&form.message),
            contact_info: non_blank(&form.contact_info),
        };

        match self.services.api.create_meeting_request(&request).await {
            Ok(_) => {
                self.notifier.success("Meeting request sent!");
                self.meeting_form = None;
                self.reload().await;
            }
            Err(e) => {
                tracing::error!("meeting request to {} failed: {}", request.expert_id, e);
                self.notifier.error(e.message_or("Failed to send meeting request"));
            }
        }
    }

    fn expert(&self, id: i64) -> Option<&Expert> {
        self.experts.iter().find(|e| e.id == id)
    }
}
