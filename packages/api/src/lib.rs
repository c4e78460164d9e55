//! # API crate: typed access to the CuraLink REST backend
//!
//! Every page of the client talks to the backend through this crate. It owns the
//! single configured HTTP client, the wire models, and one function per backend
//! operation. Nothing here reshapes responses: bodies are decoded into their
//! models and handed back as-is; merging and formatting happen in the `ui` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL resolution (`CURALINK_API_URL`, fallback `http://localhost:8000/api`), cached process-wide |
//! | [`client`] | [`ApiClient`] transport and the [`Query`] builder that drops absent filters |
//! | [`error`] | [`ApiError`], tagged with the HTTP status and the server's `detail` message |
//! | [`models`] | Request and response bodies for every resource |
//!
//! ## Resource traits
//!
//! Each backend resource is a trait implemented by [`ApiClient`], so page
//! controllers can be generic over exactly the resources they touch:
//!
//! - **Users** ([`UsersApi`]): `create_user`, `get_user`, `update_user`, `login`, `list_users`
//! - **Trials** ([`TrialsApi`]): `create_trial`, `list_trials`, `get_trial`, `update_trial`, `delete_trial`
//! - **Publications** ([`PublicationsApi`]): `create_publication`, `list_publications`, `get_publication`, `update_publication`, `delete_publication`
//! - **Forum** ([`ForumApi`]): `create_post`, `list_posts`, `get_post`, `delete_post`, `list_replies`, `list_categories`
//! - **Connections** ([`ConnectionsApi`]): `create_connection`, `list_connections`, `update_connection`, `delete_connection`, `list_sent_connections`, `list_received_connections`, `list_collaborators`, `list_experts`
//! - **Meetings** ([`MeetingsApi`]): `create_meeting_request`, `list_meeting_requests`, `update_meeting_request`, `delete_meeting_request`, `list_sent_meeting_requests`, `list_received_meeting_requests`
//! - **AI** ([`AiApi`]): `summarize`, `extract_conditions`, `match_experts`, `analyze_eligibility`, `ai_health`
//! - **External** ([`ExternalApi`]): `search_pubmed`, `search_clinical_trials`, `orcid_works`, `external_health`

pub mod ai;
pub mod client;
pub mod config;
pub mod connections;
pub mod error;
pub mod external;
pub mod forum;
pub mod meetings;
pub mod models;
pub mod publications;
pub mod trials;
pub mod users;

#[cfg(test)]
mod test_server;

pub use ai::AiApi;
pub use client::{ApiClient, Query};
pub use config::ApiConfig;
pub use connections::ConnectionsApi;
pub use error::ApiError;
pub use external::ExternalApi;
pub use forum::ForumApi;
pub use meetings::MeetingsApi;
pub use publications::PublicationsApi;
pub use trials::TrialsApi;
pub use users::UsersApi;

pub use store::{Profile, Role, User};
