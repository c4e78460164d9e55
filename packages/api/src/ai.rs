//! `/ai` resource. Every operation is advisory: callers treat failures as
//! informational and fall back to manual input.

use std::future::Future;

use serde_json::json;

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{AiHealth, ConditionExtraction, Eligibility, EligibilityQuery, ExpertMatch, Summary};

pub trait AiApi {
    /// `POST /ai/summarize` with body `{"text": ...}`
    fn summarize(&self, text: &str) -> impl Future<Output = Result<Summary, ApiError>>;
    /// `POST /ai/extract-conditions?symptoms=`
    fn extract_conditions(
        &self,
        symptoms: &str,
    ) -> impl Future<Output = Result<ConditionExtraction, ApiError>>;
    /// `POST /ai/match-experts?condition=&symptoms=`
    fn match_experts(
        &self,
        condition: &str,
        symptoms: Option<&str>,
    ) -> impl Future<Output = Result<ExpertMatch, ApiError>>;
    /// `POST /ai/analyze-eligibility?patient_age=&patient_condition=&patient_symptoms=&trial_criteria=`
    fn analyze_eligibility(
        &self,
        query: &EligibilityQuery,
    ) -> impl Future<Output = Result<Eligibility, ApiError>>;
    /// `GET /ai/health`
    fn ai_health(&self) -> impl Future<Output = Result<AiHealth, ApiError>>;
}

impl AiApi for ApiClient {
    async fn summarize(&self, text: &str) -> Result<Summary, ApiError> {
        self.post("/ai/summarize", Some(&json!({ "text": text })), &Query::new())
            .await
    }

    async fn extract_conditions(&self, symptoms: &str) -> Result<ConditionExtraction, ApiError> {
        let query = Query::new().with("symptoms", symptoms);
        self.post("/ai/extract-conditions", None::<&()>, &query).await
    }

    async fn match_experts(
        &self,
        condition: &str,
        symptoms: Option<&str>,
    ) -> Result<ExpertMatch, ApiError> {
        let query = Query::new()
            .with("condition", condition)
            .with_opt("symptoms", symptoms);
        self.post("/ai/match-experts", None::<&()>, &query).await
    }

    async fn analyze_eligibility(&self, query: &EligibilityQuery) -> Result<Eligibility, ApiError> {
        self.post("/ai/analyze-eligibility", None::<&()>, &query.to_query())
            .await
    }

    async fn ai_health(&self) -> Result<AiHealth, ApiError> {
        self.get("/ai/health", &Query::new()).await
    }
}
