//! Signup forms for both roles.
//!
//! Neither page is gated. A successful signup stores the returned user as the
//! session and moves on to the role's dashboard.

use api::models::NewUser;
use api::{AiApi, UsersApi};
use store::{KeyValueStore, PatientProfile, Profile, ResearcherProfile};

use super::{impl_page, non_blank, routes, Services};
use crate::notify::Notifier;
use crate::page::LoadState;

const REQUIRED_FIELDS: &str = "Please fill in all required fields";
const SIGNUP_FAILED: &str = "Failed to create account";
const WELCOME: &str = "Welcome to CuraLink!";

/// Symptom descriptions shorter than this are not sent for analysis.
pub const MIN_SYMPTOMS_LEN: usize = 10;

/// Fields both signup forms share.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub location: String,
    pub city: String,
    pub country: String,
}

impl ContactForm {
    fn to_new_user(&self, profile: Profile) -> NewUser {
        NewUser {
            email: non_blank(&self.email),
            location: non_blank(&self.location),
            city: non_blank(&self.city),
            country: non_blank(&self.country),
            ..NewUser::new(self.name.trim(), profile)
        }
    }
}

#[derive(Clone)]
pub struct PatientOnboard<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub contact: ContactForm,
    pub condition: String,
    pub symptoms: String,
    /// Conditions the AI read from the symptoms.
    pub suggestion: Option<String>,
    pub analyzing: bool,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    PatientOnboard,
    fields: [contact, condition, symptoms, suggestion, analyzing],
);

impl<A, S> PatientOnboard<A, S>
where
    A: UsersApi + AiApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            contact: ContactForm::default(),
            condition: String::new(),
            symptoms: String::new(),
            suggestion: None,
            analyzing: false,
            state: LoadState::Ready,
            notifier: Notifier::new(),
            route: None,
        }
    }

    /// Suggest a condition from the free-text symptoms.
    pub async fn analyze_symptoms(&mut self) {
        if self.symptoms.trim().chars().count() < MIN_SYMPTOMS_LEN {
            self.notifier.error("Please describe your symptoms in more detail");
            return;
        }

        self.analyzing = true;
        match self.services.api.extract_conditions(&self.symptoms).await {
            Ok(result) => {
                if self.condition.trim().is_empty() && !result.conditions.is_empty() {
                    self.condition = result.conditions.clone();
                }
                self.notifier.success(format!("AI detected: {}", result.conditions));
                self.suggestion = Some(result.conditions);
            }
            Err(e) => {
                tracing::warn!("condition extraction failed: {}", e);
                self.notifier
                    .info("AI analysis unavailable. Please enter condition manually.");
            }
        }
        self.analyzing = false;
    }

    pub async fn submit(&mut self) {
        if self.contact.name.trim().is_empty() || self.condition.trim().is_empty() {
            self.notifier.error(REQUIRED_FIELDS);
            return;
        }

        let profile = Profile::Patient(PatientProfile {
            condition: non_blank(&self.condition),
            symptoms: non_blank(&self.symptoms),
        });
        let new_user = self.contact.to_new_user(profile);
        match self.services.api.create_user(&new_user).await {
            Ok(user) => {
                self.services.session.save(&user);
                self.notifier.success(WELCOME);
                self.route = Some(routes::PATIENT_DASHBOARD);
            }
            Err(e) => {
                tracing::error!("patient signup failed: {}", e);
                self.notifier.error(SIGNUP_FAILED);
            }
        }
    }
}

#[derive(Clone)]
pub struct ResearcherOnboard<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub contact: ContactForm,
    pub specialties: String,
    pub research_interests: String,
    pub orcid: String,
    pub researchgate_url: String,
    pub bio: String,
    pub meeting_availability: bool,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    ResearcherOnboard,
    fields: [
        contact,
        specialties,
        research_interests,
        orcid,
        researchgate_url,
        bio,
        meeting_availability,
    ],
);

impl<A, S> ResearcherOnboard<A, S>
where
    A: UsersApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            contact: ContactForm::default(),
            specialties: String::new(),
            research_interests: String::new(),
            orcid: String::new(),
            researchgate_url: String::new(),
            bio: String::new(),
            meeting_availability: false,
            state: LoadState::Ready,
            notifier: Notifier::new(),
            route: None,
        }
    }

    pub async fn submit(&mut self) {
        let required = [
            &self.contact.name,
            &self.contact.email,
            &self.specialties,
            &self.research_interests,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            self.notifier.error(REQUIRED_FIELDS);
            return;
        }

        let profile = Profile::Researcher(ResearcherProfile {
            specialties: non_blank(&self.specialties),
            research_interests: non_blank(&self.research_interests),
            orcid: non_blank(&self.orcid),
            researchgate_url: non_blank(&self.researchgate_url),
            bio: non_blank(&self.bio),
            meeting_availability: self.meeting_availability,
        });
        let new_user = self.contact.to_new_user(profile);
        match self.services.api.create_user(&new_user).await {
            Ok(user) => {
                self.services.session.save(&user);
                self.notifier.success(WELCOME);
                self.route = Some(routes::RESEARCHER_DASHBOARD);
            }
            Err(e) => {
                tracing::error!("researcher signup failed: {}", e);
                self.notifier.error(e.message_or(SIGNUP_FAILED));
            }
        }
    }
}
