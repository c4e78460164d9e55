//! Backend location, resolved once per process.
//!
//! Native builds read `CURALINK_API_URL` at runtime (after loading `.env` via
//! `dotenvy`). WASM builds have no process environment, so the variable is
//! baked in at compile time instead. Either way an unset or blank value falls
//! back to [`DEFAULT_BASE_URL`].

use std::sync::OnceLock;

/// Environment variable naming the backend base URL.
pub const BASE_URL_ENV: &str = "CURALINK_API_URL";

/// Used when [`BASE_URL_ENV`] is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

static BASE_URL: OnceLock<String> = OnceLock::new();

/// Transport configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute URL every request path is appended to, without trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Configuration from the process-wide cached base URL.
    pub fn from_env() -> Self {
        Self::new(base_url())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Get or resolve the backend base URL.
pub fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| pick_base_url(configured_base_url()))
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_base_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn configured_base_url() -> Option<String> {
    option_env!("CURALINK_API_URL").map(str::to_string)
}

fn pick_base_url(configured: Option<String>) -> String {
    configured
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
