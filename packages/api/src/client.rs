//! # Transport client
//!
//! [`ApiClient`] is the only place that speaks HTTP. It prefixes every path
//! with the configured base URL, always sends `Content-Type: application/json`,
//! and turns the response into either the decoded body or an [`ApiError`]
//! tagged with the status code.
//!
//! There is deliberately nothing else here: no retries, no timeouts beyond the
//! platform defaults, no auth header. Who the caller is travels in the request
//! itself (a `user_id` filter, a `requester_id` field) and the backend decides.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Query-string builder that leaves out absent filters.
///
/// `with_opt` skips `None` and empty values, so `?location=` is never sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that is always sent.
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Add a parameter only when `value` is present and non-empty.
    pub fn with_opt<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key, value));
            }
        }
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// HTTP client bound to one backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Client for the process-wide configured backend.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T, ApiError> {
        self.send(Method::GET, path, None::<&()>, query).await
    }

    pub async fn post<B, T>(&self, path: &str, body: Option<&B>, query: &Query) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, body, query).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body), &Query::new()).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::DELETE, path, None::<&()>, &Query::new()).await
    }

    async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &Query,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("{} {}", method, path);

        let mut request = self
            .http
            .request(method.clone(), format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &bytes);
            tracing::debug!("{} {} failed: {}", method, path, err);
            return Err(err);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::TestServer;
    use serde_json::{json, Value};

    #[test]
    fn test_query_omits_absent_and_empty() {
        let query = Query::new()
            .with_opt("condition", Some("Diabetes"))
            .with_opt("location", None::<&str>)
            .with_opt("status", Some(""))
            .with("max_results", 6);

        assert_eq!(
            query.pairs(),
            &[("condition", "Diabetes".to_string()), ("max_results", "6".to_string())]
        );
        assert!(query.get("location").is_none());
        assert!(query.get("status").is_none());
        assert!(Query::new().with_opt("role", None::<String>).is_empty());
    }

    #[tokio::test]
    async fn test_get_decodes_body_and_sends_json_content_type() {
        let server = TestServer::start(vec![("/ai/health", 200, json!({"status": "healthy"}))]).await;
        let client = server.client();

        let body: Value = client.get("/ai/health", &Query::new()).await.unwrap();
        assert_eq!(body["status"], "healthy");

        let seen = server.last();
        assert_eq!(seen.method, "GET");
        assert_eq!(seen.path, "/ai/health");
        assert!(seen.query.is_none());
        assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_error_status_is_tagged() {
        let server = TestServer::start(vec![(
            "/meetings/",
            400,
            json!({"detail": "This expert is not available for meetings"}),
        )])
        .await;

        let err = server
            .client()
            .post::<_, Value>("/meetings/", Some(&json!({"expert_id": 2})), &Query::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("This expert is not available for meetings"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let server = TestServer::start(vec![]).await;
        let err = server
            .client()
            .get::<Value>("/nope", &Query::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_decode_error() {
        let server = TestServer::start(vec![("/users/1", 200, json!([1, 2, 3]))]).await;
        let err = server
            .client()
            .get::<store::User>("/users/1", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) on loopback is not expected to accept HTTP.
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"));
        let err = client.get::<Value>("/trials/", &Query::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
