//! Entry page: role selection for new visitors, login for returning ones,
//! and a status line for the backend's AI and registry services.

use api::models::{AiHealth, ServiceHealth};
use api::{AiApi, ExternalApi, UsersApi};
use store::{KeyValueStore, User};

use super::{dashboard_route, impl_page, non_blank, Services};
use crate::notify::Notifier;
use crate::page::LoadState;

#[derive(Clone)]
pub struct Landing<A, S: KeyValueStore> {
    services: Services<A, S>,
    /// Session found on arrival, if any.
    pub user: Option<User>,
    pub email: String,
    pub name: String,
    pub ai_health: Option<AiHealth>,
    pub service_health: Option<ServiceHealth>,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    Landing,
    fields: [user, email, name, ai_health, service_health],
);

impl<A, S> Landing<A, S>
where
    A: UsersApi + AiApi + ExternalApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            user: None,
            email: String::new(),
            name: String::new(),
            ai_health: None,
            service_health: None,
            state: LoadState::Initializing,
            notifier: Notifier::new(),
            route: None,
        }
    }

    pub fn activate(&mut self) {
        self.user = self.services.session.load();
        self.state = LoadState::Ready;
    }

    /// Sign in by email, or by name when no email is given.
    pub async fn login(&mut self) {
        let email = non_blank(&self.email);
        let name = non_blank(&self.name);
        if email.is_none() && name.is_none() {
            self.notifier.error("Please enter your email or name");
            return;
        }

        let result = self
            .services
            .api
            .login(email.as_deref(), name.as_deref())
            .await;
        match result {
            Ok(user) => {
                self.services.session.save(&user);
                self.notifier.success(format!("Welcome back, {}!", user.name));
                self.route = Some(dashboard_route(user.role()));
                self.user = Some(user);
            }
            Err(e) => {
                tracing::error!("login failed: {}", e);
                self.notifier.error(e.message_or("Login failed"));
            }
        }
    }

    /// Fetch both health endpoints. A failure only marks the status unknown.
    pub async fn check_services(&mut self) {
        let api = &self.services.api;
        let (ai, external) = futures::join!(api.ai_health(), api.external_health());
        self.ai_health = ai
            .inspect_err(|e| tracing::warn!("AI health check failed: {}", e))
            .ok();
        self.service_health = external
            .inspect_err(|e| tracing::warn!("external health check failed: {}", e))
            .ok();
    }
}
