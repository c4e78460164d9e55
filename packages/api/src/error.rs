use serde_json::Value;

/// Failure of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `detail` is the backend's `{"detail": ...}` message, if any.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Http { status: u16, detail: Option<String> },
    /// The request never produced a response (DNS, connection refused, CORS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 2xx response whose body did not match the expected model.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a failed response body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Self::Http {
            status,
            detail: extract_detail(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Server-provided explanation, e.g. "This expert is not available for meetings".
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The server's detail when present, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// FastAPI sends `{"detail": "..."}` for business errors and
/// `{"detail": [{"msg": "..."}, ...]}` for validation errors.
fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
