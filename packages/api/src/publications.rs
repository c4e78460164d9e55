//! `/publications` resource.

use std::future::Future;

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{Acknowledgement, NewPublication, Publication};

pub trait PublicationsApi {
    /// `POST /publications/`
    fn create_publication(
        &self,
        publication: &NewPublication,
    ) -> impl Future<Output = Result<Publication, ApiError>>;
    /// `GET /publications/?researcher_id=`
    fn list_publications(
        &self,
        researcher_id: Option<i64>,
    ) -> impl Future<Output = Result<Vec<Publication>, ApiError>>;
    /// `GET /publications/{id}`
    fn get_publication(&self, id: i64) -> impl Future<Output = Result<Publication, ApiError>>;
    /// `PUT /publications/{id}` replaces the whole record.
    fn update_publication(
        &self,
        id: i64,
        publication: &NewPublication,
    ) -> impl Future<Output = Result<Publication, ApiError>>;
    /// `DELETE /publications/{id}`
    fn delete_publication(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Acknowledgement, ApiError>>;
}

impl PublicationsApi for ApiClient {
    async fn create_publication(
        &self,
        publication: &NewPublication,
    ) -> Result<Publication, ApiError> {
        self.post("/publications/", Some(publication), &Query::new())
            .await
    }

    async fn list_publications(
        &self,
        researcher_id: Option<i64>,
    ) -> Result<Vec<Publication>, ApiError> {
        self.get(
            "/publications/",
            &Query::new().with_opt("researcher_id", researcher_id),
        )
        .await
    }

    async fn get_publication(&self, id: i64) -> Result<Publication, ApiError> {
        self.get(&format!("/publications/{id}"), &Query::new()).await
    }

    async fn update_publication(
        &self,
        id: i64,
        publication: &NewPublication,
    ) -> Result<Publication, ApiError> {
        self.put(&format!("/publications/{id}"), publication).await
    }

    async fn delete_publication(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/publications/{id}")).await
    }
}
