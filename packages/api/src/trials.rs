//! `/trials` resource.

use std::future::Future;

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{Acknowledgement, NewTrial, Trial};

pub trait TrialsApi {
    /// `POST /trials/`
    fn create_trial(&self, trial: &NewTrial) -> impl Future<Output = Result<Trial, ApiError>>;
    /// `GET /trials/?condition=&location=`
    fn list_trials(
        &self,
        condition: Option<&str>,
        location: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Trial>, ApiError>>;
    /// `GET /trials/{id}`
    fn get_trial(&self, id: i64) -> impl Future<Output = Result<Trial, ApiError>>;
    /// `PUT /trials/{id}` replaces the whole record.
    fn update_trial(
        &self,
        id: i64,
        trial: &NewTrial,
    ) -> impl Future<Output = Result<Trial, ApiError>>;
    /// `DELETE /trials/{id}`
    fn delete_trial(&self, id: i64) -> impl Future<Output = Result<Acknowledgement, ApiError>>;
}

impl TrialsApi for ApiClient {
    async fn create_trial(&self, trial: &NewTrial) -> Result<Trial, ApiError> {
        self.post("/trials/", Some(trial), &Query::new()).await
    }

    async fn list_trials(
        &self,
        condition: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Trial>, ApiError> {
        let query = Query::new()
            .with_opt("condition", condition)
            .with_opt("location", location);
        self.get("/trials/", &query).await
    }

    async fn get_trial(&self, id: i64) -> Result<Trial, ApiError> {
        self.get(&format!("/trials/{id}"), &Query::new()).await
    }

    async fn update_trial(&self, id: i64, trial: &NewTrial) -> Result<Trial, ApiError> {
        self.put(&format!("/trials/{id}"), trial).await
    }

    async fn delete_trial(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/trials/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;
    use crate::test_server::TestServer;
    use serde_json::json;

    fn trial_row() -> serde_json::Value {
        json!({
            "id": 1, "title": "Insulin pump study", "condition": "Diabetes",
            "phase": "Phase III", "location": "Boston", "description": "Closed loop",
            "researcher_id": 7, "created_at": "2024-05-02T09:15:00"
        })
    }

    #[tokio::test]
    async fn test_list_omits_absent_filters() {
        let server = TestServer::start(vec![("/trials/", 200, json!([trial_row()]))]).await;
        let client = server.client();

        let trials = client.list_trials(Some("Diabetes"), None).await.unwrap();
        assert_eq!(trials[0].phase, Phase::III);
        assert_eq!(server.last().query.as_deref(), Some("condition=Diabetes"));

        client.list_trials(None, Some("")).await.unwrap();
        assert!(server.last().query.is_none());
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let server = TestServer::start(vec![
            ("POST /trials/", 201, trial_row()),
            ("PUT /trials/1", 200, trial_row()),
            ("DELETE /trials/1", 200, json!({"message": "Trial deleted successfully"})),
        ])
        .await;
        let client = server.client();
        let body = NewTrial {
            title: "Insulin pump study".into(),
            condition: "Diabetes".into(),
            phase: Phase::III,
            location: "Boston".into(),
            description: None,
            researcher_id: 7,
        };

        let created = client.create_trial(&body).await.unwrap();
        assert_eq!(server.last().body.unwrap()["phase"], "Phase III");

        client.update_trial(created.id, &NewTrial::from(&created)).await.unwrap();
        assert_eq!(server.last().body.unwrap()["description"], "Closed loop");

        let ack = client.delete_trial(created.id).await.unwrap();
        assert_eq!(ack.message, "Trial deleted successfully");
        assert_eq!(server.last().method, "DELETE");
    }

    #[tokio::test]
    async fn test_get_missing_trial() {
        let server = TestServer::start(vec![(
            "/trials/99",
            404,
            json!({"detail": "Trial not found"}),
        )])
        .await;
        let err = server.client().get_trial(99).await.unwrap_err();
        assert_eq!(err.message_or("Failed to load trial"), "Trial not found");
    }
}
