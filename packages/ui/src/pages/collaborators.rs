//! Collaborator search for researchers, with the researcher's own
//! connection requests in both directions.

use api::models::{Collaborator, Connection, ConnectionType, NewConnection, RequestStatus};
use api::ConnectionsApi;
use store::{KeyValueStore, User};

use super::{admit, impl_page, non_blank, Services};
use crate::batch::{BatchPolicy, BatchReport};
use crate::guard::Access;
use crate::notify::Notifier;
use crate::page::LoadState;

#[derive(Clone)]
pub struct Collaborators<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub user: Option<User>,
    pub collaborators: Vec<Collaborator>,
    /// Connections where the user is either side.
    pub connections: Vec<Connection>,
    pub search: String,
    pub policy: BatchPolicy,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    Collaborators,
    fields: [user, collaborators, connections, search, policy],
);

impl<A, S> Collaborators<A, S>
where
    A: ConnectionsApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            user: None,
            collaborators: Vec::new(),
            connections: Vec::new(),
            search: String::new(),
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
        let (collaborators, connections) = futures::join!(
            api.list_collaborators(user_id, None),
            api.list_connections(Some(user_id), None),
        );

        let mut report = BatchReport::new();
        let collaborators = report.take("collaborators", collaborators);
        let connections = report.take("connections", connections);

        if report.commit(self.policy) {
            if let Some(collaborators) = collaborators {
                self.collaborators = collaborators;
            }
            if let Some(connections) = connections {
                self.connections = connections;
            }
        }
        if !report.is_ok() {
            self.notifier.error("Failed to load collaborators");
        }
        self.state = LoadState::Ready;
    }

    /// Replace the list with researchers matching the specialty search.
    pub async fn search(&mut self) {
        let Some(user_id) = self.user_id() else {
            return;
        };
        let specialty = non_blank(&self.search);

        self.state = LoadState::Loading;
        match self
            .services
            .api
            .list_collaborators(user_id, specialty.as_deref())
            .await
        {
            Ok(collaborators) => self.collaborators = collaborators,
            Err(e) => {
                tracing::warn!("collaborator search failed: {}", e);
                self.notifier.error("Search failed");
            }
        }
        self.state = LoadState::Ready;
    }

    pub async fn connect(&mut self, collaborator_id: i64) {
        let Some(user_id) = self.user_id() else {
            return;
        };
        let connection = NewConnection {
            requester_id: user_id,
            receiver_id: collaborator_id,
            connection_type: ConnectionType::Collaborate,
        };
        match self.services.api.create_connection(&connection).await {
            Ok(_) => {
                self.notifier.success("Connection request sent!");
                self.load().await;
            }
            Err(e) => {
                tracing::error!("connect to {} failed: {}", collaborator_id, e);
                self.notifier.error("Failed to send request");
            }
        }
    }

    /// Accept or reject a request someone sent to this researcher.
    pub async fn answer(&mut self, connection_id: i64, accept: bool) {
        let status = if accept {
            RequestStatus::Accepted
        } else {
            RequestStatus::Rejected
        };
        let message = format!("Connection request {}", status);
        match self
            .services
            .api
            .update_connection(connection_id, status)
            .await
        {
            Ok(_) => {
                self.notifier.success(message);
                self.load().await;
            }
            Err(e) => {
                tracing::error!("update connection {} failed: {}", connection_id, e);
                self.notifier.error("Failed to update request");
            }
        }
    }

    /// Withdraw a request or drop a connection.
    pub async fn remove(&mut self, connection_id: i64) {
        match self.services.api.delete_connection(connection_id).await {
            Ok(_) => {
                self.notifier.success("Connection removed");
                self.load().await;
            }
            Err(e) => {
                tracing::error!("delete connection {} failed: {}", connection_id, e);
                self.notifier.error("Failed to remove connection");
            }
        }
    }

    /// Status of the connection with `collaborator_id`, from either side.
    pub fn status_with(&self, collaborator_id: i64) -> Option<&RequestStatus> {
        self.connections
            .iter()
            .find(|c| c.requester_id == collaborator_id || c.receiver_id == collaborator_id)
            .map(|c| &c.status)
            .or_else(|| {
                self.collaborators
                    .iter()
                    .find(|c| c.id == collaborator_id)
                    .and_then(|c| c.connection_status.as_ref())
            })
    }

    /// Pending requests addressed to this researcher.
    pub fn incoming(&self) -> impl Iterator<Item = &Connection> {
        let user_id = self.user_id();
        self.connections
            .iter()
            .filter(move |c| Some(c.receiver_id) == user_id && c.status.is_pending())
    }

    /// Requests this researcher sent.
    pub fn outgoing(&self) -> impl Iterator<Item = &Connection> {
        let user_id = self.user_id();
        self.connections
            .iter()
            .filter(move |c| Some(c.requester_id) == user_id)
    }

    fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}
