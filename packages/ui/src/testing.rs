//! In-memory backend for controller tests.
//!
//! [`FakeApi`] implements every resource trait over shared state, records each
//! call, and fails any operation named with [`FakeApi::fail`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use api::models::*;
use api::{
    AiApi, ApiError, ConnectionsApi, ExternalApi, ForumApi, MeetingsApi, PublicationsApi,
    TrialsApi, UsersApi,
};
use store::{MemoryStore, PatientProfile, Profile, ResearcherProfile, Role, User};

use crate::pages::Services;

#[derive(Clone, Debug)]
pub struct Call {
    pub op: &'static str,
    pub args: String,
}

#[derive(Default)]
pub struct FakeState {
    pub users: Vec<User>,
    pub trials: Vec<Trial>,
    pub external_trials: Vec<ExternalTrial>,
    pub publications: Vec<Publication>,
    pub external_publications: Vec<ExternalPublication>,
    pub posts: Vec<ForumPost>,
    pub replies: Vec<ForumPost>,
    pub categories: Vec<String>,
    pub experts: Vec<Expert>,
    pub collaborators: Vec<Collaborator>,
    pub connections: Vec<Connection>,
    pub meetings: Vec<MeetingRequest>,
    pub orcid: OrcidWorks,
    pub extraction: ConditionExtraction,
    pub expert_match: ExpertMatch,
    pub eligibility: Eligibility,
    pub failing: HashMap<&'static str, (u16, Option<String>)>,
    pub calls: Vec<Call>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(&self, setup: impl FnOnce(&mut FakeState)) -> &Self {
        setup(&mut self.state.borrow_mut());
        self
    }

    pub fn fail(&self, op: &'static str) -> &Self {
        self.fail_with(op, 500, None)
    }

    pub fn fail_with(&self, op: &'static str, status: u16, detail: Option<&str>) -> &Self {
        self.state
            .borrow_mut()
            .failing
            .insert(op, (status, detail.map(str::to_string)));
        self
    }

    pub fn heal(&self, op: &'static str) {
        self.state.borrow_mut().failing.remove(op);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.iter().map(|c| c.op).collect()
    }

    pub fn count(&self, op: &str) -> usize {
        self.state.borrow().calls.iter().filter(|c| c.op == op).count()
    }

    /// Arguments of the most recent call to `op`.
    pub fn last_args(&self, op: &str) -> Option<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .rev()
            .find(|c| c.op == op)
            .map(|c| c.args.clone())
    }

    pub fn state(&self) -> std::cell::Ref<'_, FakeState> {
        self.state.borrow()
    }

    fn respond<T>(
        &self,
        op: &'static str,
        args: String,
        reply: impl FnOnce(&mut FakeState) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call { op, args });
        if let Some((status, detail)) = state.failing.get(op).cloned() {
            return Err(ApiError::Http { status, detail });
        }
        reply(&mut state)
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::Http {
        status: 404,
        detail: Some(format!("{what} not found")),
    }
}

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl UsersApi for FakeApi {
    async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.respond("create_user", json(user), |s| {
            let created = User {
                id: s.users.len() as i64 + 1,
                name: user.name.clone(),
                email: user.email.clone(),
                location: user.location.clone(),
                city: user.city.clone(),
                country: user.country.clone(),
                latitude: user.latitude,
                longitude: user.longitude,
                created_at: None,
                profile: user.profile.clone(),
            };
            s.users.push(created.clone());
            Ok(created)
        })
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.respond("get_user", id.to_string(), |s| {
            s.users.iter().find(|u| u.id == id).cloned().ok_or_else(|| not_found("User"))
        })
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.respond("update_user", json(update), |s| {
            let user = s
                .users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| not_found("User"))?;
            if let Some(name) = &update.name {
                user.name = name.clone();
            }
            if let Profile::Researcher(r) = &mut user.profile {
                if let Some(available) = update.meeting_availability {
                    r.meeting_availability = available;
                }
            }
            Ok(user.clone())
        })
    }

    async fn login(&self, email: Option<&str>, name: Option<&str>) -> Result<User, ApiError> {
        let args = format!("{email:?} {name:?}");
        self.respond("login", args, |s| {
            s.users
                .iter()
                .find(|u| match (email, name) {
                    (Some(e), _) => u.email.as_deref() == Some(e),
                    (None, Some(n)) => u.name == n,
                    (None, None) => false,
                })
                .cloned()
                .ok_or_else(|| not_found("User"))
        })
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, ApiError> {
        self.respond("list_users", format!("{role:?}"), |s| {
            Ok(s.users
                .iter()
                .filter(|u| role.is_none_or(|r| u.role() == r))
                .cloned()
                .collect())
        })
    }
}

impl TrialsApi for FakeApi {
    async fn create_trial(&self, trial: &NewTrial) -> Result<Trial, ApiError> {
        self.respond("create_trial", json(trial), |s| {
            let created = Trial {
                id: s.trials.len() as i64 + 100,
                title: trial.title.clone(),
                condition: trial.condition.clone(),
                phase: trial.phase.clone(),
                location: trial.location.clone(),
                description: trial.description.clone(),
                researcher_id: trial.researcher_id,
                created_at: None,
            };
            s.trials.push(created.clone());
            Ok(created)
        })
    }

    async fn list_trials(
        &self,
        condition: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Trial>, ApiError> {
        let args = format!("{condition:?} {location:?}");
        self.respond("list_trials", args, |s| Ok(s.trials.clone()))
    }

    async fn get_trial(&self, id: i64) -> Result<Trial, ApiError> {
        self.respond("get_trial", id.to_string(), |s| {
            s.trials.iter().find(|t| t.id == id).cloned().ok_or_else(|| not_found("Trial"))
        })
    }

    async fn update_trial(&self, id: i64, trial: &NewTrial) -> Result<Trial, ApiError> {
        self.respond("update_trial", json(trial), |s| {
            let existing = s
                .trials
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| not_found("Trial"))?;
            existing.title = trial.title.clone();
            Ok(existing.clone())
        })
    }

    async fn delete_trial(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.respond("delete_trial", id.to_string(), |s| {
            s.trials.retain(|t| t.id != id);
            Ok(Acknowledgement::default())
        })
    }
}

impl PublicationsApi for FakeApi {
    async fn create_publication(&self, publication: &NewPublication) -> Result<Publication, ApiError> {
        self.respond("create_publication", json(publication), |s| {
            let created = Publication {
                id: s.publications.len() as i64 + 100,
                title: publication.title.clone(),
                summary: publication.summary.clone(),
                researcher_id: publication.researcher_id,
                created_at: None,
            };
            s.publications.push(created.clone());
            Ok(created)
        })
    }

    async fn list_publications(&self, researcher_id: Option<i64>) -> Result<Vec<Publication>, ApiError> {
        self.respond("list_publications", format!("{researcher_id:?}"), |s| {
            Ok(s.publications
                .iter()
                .filter(|p| researcher_id.is_none_or(|r| p.researcher_id == r))
                .cloned()
                .collect())
        })
    }

    async fn get_publication(&self, id: i64) -> Result<Publication, ApiError> {
        self.respond("get_publication", id.to_string(), |s| {
            s.publications
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| not_found("Publication"))
        })
    }

    async fn update_publication(
        &self,
        id: i64,
        publication: &NewPublication,
    ) -> Result<Publication, ApiError> {
        self.respond("update_publication", json(publication), |s| {
            let existing = s
                .publications
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| not_found("Publication"))?;
            existing.title = publication.title.clone();
            existing.summary = publication.summary.clone();
            Ok(existing.clone())
        })
    }

    async fn delete_publication(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.respond("delete_publication", id.to_string(), |s| {
            s.publications.retain(|p| p.id != id);
            Ok(Acknowledgement::default())
        })
    }
}

impl ForumApi for FakeApi {
    async fn create_post(&self, post: &NewForumPost) -> Result<ForumPost, ApiError> {
        self.respond("create_post", json(post), |s| {
            let created = ForumPost {
                id: s.posts.len() as i64 + 1,
                content: post.content.clone(),
                title: post.title.clone(),
                category: post.category.clone(),
                is_question: post.is_question,
                parent_id: post.parent_id,
                author_id: post.author_id,
                created_at: None,
            };
            if created.parent_id.is_some() {
                s.replies.push(created.clone());
            } else {
                s.posts.insert(0, created.clone());
            }
            Ok(created)
        })
    }

    async fn list_posts(&self, filter: &ForumFilter) -> Result<Vec<ForumPost>, ApiError> {
        self.respond("list_posts", format!("{filter:?}"), |s| {
            Ok(s.posts
                .iter()
                .filter(|p| filter.category.is_none() || p.category == filter.category)
                .filter(|p| filter.is_question.is_none_or(|q| p.is_question == q))
                .cloned()
                .collect())
        })
    }

    async fn get_post(&self, id: i64) -> Result<ForumPost, ApiError> {
        self.respond("get_post", id.to_string(), |s| {
            s.posts.iter().find(|p| p.id == id).cloned().ok_or_else(|| not_found("Post"))
        })
    }

    async fn delete_post(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.respond("delete_post", id.to_string(), |s| {
            s.posts.retain(|p| p.id != id);
            Ok(Acknowledgement::default())
        })
    }

    async fn list_replies(&self, id: i64) -> Result<Vec<ForumPost>, ApiError> {
        self.respond("list_replies", id.to_string(), |s| {
            Ok(s.replies.iter().filter(|r| r.parent_id == Some(id)).cloned().collect())
        })
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        self.respond("list_categories", String::new(), |s| Ok(s.categories.clone()))
    }
}

impl ConnectionsApi for FakeApi {
    async fn create_connection(&self, connection: &NewConnection) -> Result<Connection, ApiError> {
        self.respond("create_connection", json(connection), |s| {
            let created = Connection {
                id: s.connections.len() as i64 + 1,
                requester_id: connection.requester_id,
                receiver_id: connection.receiver_id,
                connection_type: connection.connection_type,
                status: RequestStatus::Pending,
                created_at: None,
                updated_at: None,
            };
            s.connections.push(created.clone());
            Ok(created)
        })
    }

    async fn list_connections(
        &self,
        user_id: Option<i64>,
        status: Option<&RequestStatus>,
    ) -> Result<Vec<Connection>, ApiError> {
        let args = format!("{user_id:?} {status:?}");
        self.respond("list_connections", args, |s| {
            Ok(s.connections
                .iter()
                .filter(|c| user_id.is_none_or(|u| c.requester_id == u || c.receiver_id == u))
                .filter(|c| status.is_none_or(|st| &c.status == st))
                .cloned()
                .collect())
        })
    }

    async fn update_connection(&self, id: i64, status: RequestStatus) -> Result<Connection, ApiError> {
        self.respond("update_connection", format!("{id} {status}"), |s| {
            let existing = s
                .connections
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| not_found("Connection"))?;
            existing.status = status;
            Ok(existing.clone())
        })
    }

    async fn delete_connection(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.respond("delete_connection", id.to_string(), |s| {
            s.connections.retain(|c| c.id != id);
            Ok(Acknowledgement::default())
        })
    }

    async fn list_sent_connections(&self, user_id: i64) -> Result<Vec<Connection>, ApiError> {
        self.respond("list_sent_connections", user_id.to_string(), |s| {
            Ok(s.connections.iter().filter(|c| c.requester_id == user_id).cloned().collect())
        })
    }

    async fn list_received_connections(&self, user_id: i64) -> Result<Vec<Connection>, ApiError> {
        self.respond("list_received_connections", user_id.to_string(), |s| {
            Ok(s.connections.iter().filter(|c| c.receiver_id == user_id).cloned().collect())
        })
    }

    async fn list_collaborators(
        &self,
        user_id: i64,
        specialty: Option<&str>,
    ) -> Result<Vec<Collaborator>, ApiError> {
        let args = format!("{user_id} {specialty:?}");
        self.respond("list_collaborators", args, |s| Ok(s.collaborators.clone()))
    }

    async fn list_experts(
        &self,
        condition: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Expert>, ApiError> {
        let args = format!("{condition:?} {location:?}");
        self.respond("list_experts", args, |s| Ok(s.experts.clone()))
    }
}

impl MeetingsApi for FakeApi {
    async fn create_meeting_request(
        &self,
        request: &NewMeetingRequest,
    ) -> Result<MeetingRequest, ApiError> {
        self.respond("create_meeting_request", json(request), |s| {
            let created = MeetingRequest {
                id: s.meetings.len() as i64 + 1,
                requester_id: request.requester_id,
                expert_id: request.expert_id,
                message: request.message.clone(),
                contact_info: request.contact_info.clone(),
                status: RequestStatus::Pending,
                created_at: None,
                updated_at: None,
            };
            s.meetings.push(created.clone());
            Ok(created)
        })
    }

    async fn list_meeting_requests(
        &self,
        user_id: Option<i64>,
        status: Option<&RequestStatus>,
    ) -> Result<Vec<MeetingRequest>, ApiError> {
        let args = format!("{user_id:?} {status:?}");
        self.respond("list_meeting_requests", args, |s| Ok(s.meetings.clone()))
    }

    async fn update_meeting_request(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> Result<MeetingRequest, ApiError> {
        self.respond("update_meeting_request", format!("{id} {status}"), |s| {
            let existing = s
                .meetings
                .iter_mut()
                .find(|m| m.id == id)
                .ok_or_else(|| not_found("Meeting request"))?;
            existing.status = status;
            Ok(existing.clone())
        })
    }

    async fn delete_meeting_request(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.respond("delete_meeting_request", id.to_string(), |s| {
            s.meetings.retain(|m| m.id != id);
            Ok(Acknowledgement::default())
        })
    }

    async fn list_sent_meeting_requests(&self, user_id: i64) -> Result<Vec<MeetingRequest>, ApiError> {
        self.respond("list_sent_meeting_requests", user_id.to_string(), |s| {
            Ok(s.meetings.iter().filter(|m| m.requester_id == user_id).cloned().collect())
        })
    }

    async fn list_received_meeting_requests(
        &self,
        user_id: i64,
    ) -> Result<Vec<MeetingRequest>, ApiError> {
        self.respond("list_received_meeting_requests", user_id.to_string(), |s| {
            Ok(s.meetings.iter().filter(|m| m.expert_id == user_id).cloned().collect())
        })
    }
}

impl AiApi for FakeApi {
    async fn summarize(&self, text: &str) -> Result<Summary, ApiError> {
        self.respond("summarize", text.to_string(), |_| {
            Ok(Summary {
                summary: format!("Summary of {} chars", text.len()),
            })
        })
    }

    async fn extract_conditions(&self, symptoms: &str) -> Result<ConditionExtraction, ApiError> {
        self.respond("extract_conditions", symptoms.to_string(), |s| Ok(s.extraction.clone()))
    }

    async fn match_experts(
        &self,
        condition: &str,
        symptoms: Option<&str>,
    ) -> Result<ExpertMatch, ApiError> {
        let args = format!("{condition} {symptoms:?}");
        self.respond("match_experts", args, |s| Ok(s.expert_match.clone()))
    }

    async fn analyze_eligibility(&self, query: &EligibilityQuery) -> Result<Eligibility, ApiError> {
        self.respond("analyze_eligibility", format!("{query:?}"), |s| Ok(s.eligibility.clone()))
    }

    async fn ai_health(&self) -> Result<AiHealth, ApiError> {
        self.respond("ai_health", String::new(), |_| Ok(AiHealth::default()))
    }
}

impl ExternalApi for FakeApi {
    async fn search_pubmed(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> Result<Vec<ExternalPublication>, ApiError> {
        let args = format!("{query} {max_results:?}");
        self.respond("search_pubmed", args, |s| Ok(s.external_publications.clone()))
    }

    async fn search_clinical_trials(
        &self,
        condition: &str,
        status: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<Vec<ExternalTrial>, ApiError> {
        let args = format!("{condition} {status:?} {max_results:?}");
        self.respond("search_clinical_trials", args, |s| Ok(s.external_trials.clone()))
    }

    async fn orcid_works(&self, orcid_id: &str) -> Result<OrcidWorks, ApiError> {
        self.respond("orcid_works", orcid_id.to_string(), |s| Ok(s.orcid.clone()))
    }

    async fn external_health(&self) -> Result<ServiceHealth, ApiError> {
        self.respond("external_health", String::new(), |_| Ok(ServiceHealth::default()))
    }
}

/// Services over `api` and a fresh memory store, signed in as `user` if given.
pub fn services(api: &FakeApi, user: Option<User>) -> Services<FakeApi, MemoryStore> {
    let services = Services::new(api.clone(), MemoryStore::new());
    if let Some(user) = user {
        services.session.save(&user);
    }
    services
}

pub fn patient() -> User {
    User {
        id: 5,
        name: "Ana".to_string(),
        email: Some("ana@example.org".to_string()),
        location: Some("Lisbon".to_string()),
        city: None,
        country: None,
        latitude: None,
        longitude: None,
        created_at: None,
        profile: Profile::Patient(PatientProfile {
            condition: Some("Diabetes".to_string()),
            symptoms: Some("thirst".to_string()),
        }),
    }
}

pub fn researcher() -> User {
    User {
        id: 7,
        name: "Dr. Reyes".to_string(),
        email: Some("reyes@example.org".to_string()),
        location: Some("Boston".to_string()),
        city: None,
        country: None,
        latitude: None,
        longitude: None,
        created_at: None,
        profile: Profile::Researcher(ResearcherProfile {
            specialties: Some("Endocrinology".to_string()),
            orcid: Some("0000-0002-1825-0097".to_string()),
            meeting_availability: true,
            ..Default::default()
        }),
    }
}

pub fn trial(id: i64, researcher_id: i64) -> Trial {
    Trial {
        id,
        title: format!("Trial {id}"),
        condition: "Diabetes".to_string(),
        phase: Phase::II,
        location: "Boston".to_string(),
        description: Some("Closed loop".to_string()),
        researcher_id,
        created_at: None,
    }
}

pub fn external_trial(nct_id: Option<&str>) -> ExternalTrial {
    ExternalTrial {
        nct_id: nct_id.map(str::to_string),
        title: "Registry trial".to_string(),
        ..Default::default()
    }
}

pub fn publication(id: i64, researcher_id: i64) -> Publication {
    Publication {
        id,
        title: format!("Publication {id}"),
        summary: "Findings".to_string(),
        researcher_id,
        created_at: None,
    }
}

pub fn expert(id: i64, meeting_availability: bool) -> Expert {
    Expert {
        id,
        name: format!("Dr. {id}"),
        specialties: Some("Endocrinology".to_string()),
        research_interests: None,
        bio: None,
        location: Some("Oslo".to_string()),
        meeting_availability,
    }
}

pub fn post(id: i64, content: &str) -> ForumPost {
    ForumPost {
        id,
        content: content.to_string(),
        title: None,
        category: None,
        is_question: false,
        parent_id: None,
        author_id: 5,
        created_at: None,
    }
}
