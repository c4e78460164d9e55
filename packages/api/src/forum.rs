//! `/forum` resource.

use std::future::Future;

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{Acknowledgement, ForumFilter, ForumPost, NewForumPost};

pub trait ForumApi {
    /// `POST /forum/`
    fn create_post(&self, post: &NewForumPost) -> impl Future<Output = Result<ForumPost, ApiError>>;
    /// `GET /forum/?author_id=&category=&is_question=`, newest first, top-level only.
    fn list_posts(
        &self,
        filter: &ForumFilter,
    ) -> impl Future<Output = Result<Vec<ForumPost>, ApiError>>;
    /// `GET /forum/{id}`
    fn get_post(&self, id: i64) -> impl Future<Output = Result<ForumPost, ApiError>>;
    /// `DELETE /forum/{id}`
    fn delete_post(&self, id: i64) -> impl Future<Output = Result<Acknowledgement, ApiError>>;
    /// `GET /forum/{id}/replies`, oldest first.
    fn list_replies(&self, id: i64) -> impl Future<Output = Result<Vec<ForumPost>, ApiError>>;
    /// `GET /forum/categories`
    fn list_categories(&self) -> impl Future<Output = Result<Vec<String>, ApiError>>;
}

impl ForumApi for ApiClient {
    async fn create_post(&self, post: &NewForumPost) -> Result<ForumPost, ApiError> {
        self.post("/forum/", Some(post), &Query::new()).await
    }

    async fn list_posts(&self, filter: &ForumFilter) -> Result<Vec<ForumPost>, ApiError> {
        self.get("/forum/", &filter.to_query()).await
    }

    async fn get_post(&self, id: i64) -> Result<ForumPost, ApiError> {
        self.get(&format!("/forum/{id}"), &Query::new()).await
    }

    async fn delete_post(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/forum/{id}")).await
    }

    async fn list_replies(&self, id: i64) -> Result<Vec<ForumPost>, ApiError> {
        self.get(&format!("/forum/{id}/replies"), &Query::new()).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get("/forum/categories", &Query::new()).await
    }
}
