//! `/external` resource: literature, registry and ORCID lookups proxied by the backend.

use std::future::Future;

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{ExternalPublication, ExternalTrial, OrcidWorks, ServiceHealth};

pub trait ExternalApi {
    /// `GET /external/pubmed/search?query=&max_results=`
    fn search_pubmed(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> impl Future<Output = Result<Vec<ExternalPublication>, ApiError>>;
    /// `GET /external/clinicaltrials/search?condition=&status=&max_results=`
    fn search_clinical_trials(
        &self,
        condition: &str,
        status: Option<&str>,
        max_results: Option<u32>,
    ) -> impl Future<Output = Result<Vec<ExternalTrial>, ApiError>>;
    /// `GET /external/orcid/{orcid_id}`
    fn orcid_works(&self, orcid_id: &str) -> impl Future<Output = Result<OrcidWorks, ApiError>>;
    /// `GET /external/health`
    fn external_health(&self) -> impl Future<Output = Result<ServiceHealth, ApiError>>;
}

impl ExternalApi for ApiClient {
    async fn search_pubmed(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> Result<Vec<ExternalPublication>, ApiError> {
        let query = Query::new()
            .with("query", query)
            .with_opt("max_results", max_results);
        self.get("/external/pubmed/search", &query).await
    }

    async fn search_clinical_trials(
        &self,
        condition: &str,
        status: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<Vec<ExternalTrial>, ApiError> {
        let query = Query::new()
            .with("condition", condition)
            .with_opt("status", status)
            .with_opt("max_results", max_results);
        self.get("/external/clinicaltrials/search", &query).await
    }

    async fn orcid_works(&self, orcid_id: &str) -> Result<OrcidWorks, ApiError> {
        self.get(&format!("/external/orcid/{}", orcid_id.trim()), &Query::new())
            .await
    }

    async fn external_health(&self) -> Result<ServiceHealth, ApiError> {
        self.get("/external/health", &Query::new()).await
    }
}
