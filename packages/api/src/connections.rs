//! `/connections` resource, plus the researcher directories that hang off it.

use std::future::Future;

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{
    Acknowledgement, Collaborator, Connection, Expert, NewConnection, RequestStatus, StatusUpdate,
};

pub trait ConnectionsApi {
    /// `POST /connections/`; 400 if the pair is already connected.
    fn create_connection(
        &self,
        connection: &NewConnection,
    ) -> impl Future<Output = Result<Connection, ApiError>>;
    /// `GET /connections/?user_id=&status=`; `user_id` matches either side.
    fn list_connections(
        &self,
        user_id: Option<i64>,
        status: Option<&RequestStatus>,
    ) -> impl Future<Output = Result<Vec<Connection>, ApiError>>;
    /// `PUT /connections/{id}`
    fn update_connection(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> impl Future<Output = Result<Connection, ApiError>>;
    /// `DELETE /connections/{id}`
    fn delete_connection(&self, id: i64)
        -> impl Future<Output = Result<Acknowledgement, ApiError>>;
    /// `GET /connections/sent/{user_id}`
    fn list_sent_connections(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Vec<Connection>, ApiError>>;
    /// `GET /connections/received/{user_id}`
    fn list_received_connections(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Vec<Connection>, ApiError>>;
    /// `GET /connections/collaborators/{user_id}?specialty=`: every other researcher.
    fn list_collaborators(
        &self,
        user_id: i64,
        specialty: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Collaborator>, ApiError>>;
    /// `GET /connections/experts?condition=&location=`
    fn list_experts(
        &self,
        condition: Option<&str>,
        location: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Expert>, ApiError>>;
}

impl ConnectionsApi for ApiClient {
    async fn create_connection(&self, connection: &NewConnection) -> Result<Connection, ApiError> {
        self.post("/connections/", Some(connection), &Query::new())
            .await
    }

    async fn list_connections(
        &self,
        user_id: Option<i64>,
        status: Option<&RequestStatus>,
    ) -> Result<Vec<Connection>, ApiError> {
        let query = Query::new()
            .with_opt("user_id", user_id)
            .with_opt("status", status);
        self.get("/connections/", &query).await
    }

    async fn update_connection(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> Result<Connection, ApiError> {
        self.put(&format!("/connections/{id}"), &StatusUpdate { status })
            .await
    }

    async fn delete_connection(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/connections/{id}")).await
    }

    async fn list_sent_connections(&self, user_id: i64) -> Result<Vec<Connection>, ApiError> {
        self.get(&format!("/connections/sent/{user_id}"), &Query::new())
            .await
    }

    async fn list_received_connections(&self, user_id: i64) -> Result<Vec<Connection>, ApiError> {
        self.get(&format!("/connections/received/{user_id}"), &Query::new())
            .await
    }

    async fn list_collaborators(
        &self,
        user_id: i64,
        specialty: Option<&str>,
    ) -> Result<Vec<Collaborator>, ApiError> {
        self.get(
            &format!("/connections/collaborators/{user_id}"),
            &Query::new().with_opt("specialty", specialty),
        )
        .await
    }

    async fn list_experts(
        &self,
        condition: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Expert>, ApiError> {
        let query = Query::new()
            .with_opt("condition", condition)
            .with_opt("location", location);
        self.get("/connections/experts", &query).await
    }
}
