//! Connections between users and meeting requests to experts.
//!
//! Statuses are owned by the server. The client only ever sends the status it
//! wants (`accepted`/`rejected`) and re-reads the record afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    #[default]
    Collaborate,
    Follow,
}

/// Lifecycle of a connection or meeting request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Other(String),
}

impl RequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Other(raw) => raw,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

impl From<String> for RequestStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => RequestStatus::Pending,
            "accepted" => RequestStatus::Accepted,
            "rejected" => RequestStatus::Rejected,
            _ => RequestStatus::Other(raw),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body for the status-update endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: i64,
    pub requester_id: i64,
    pub receiver_id: i64,
    pub connection_type: ConnectionType,
    pub status: RequestStatus,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConnection {
    pub requester_id: i64,
    pub receiver_id: i64,
    pub connection_type: ConnectionType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub id: i64,
    pub requester_id: i64,
    pub expert_id: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    pub status: RequestStatus,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMeetingRequest {
    pub requester_id: i64,
    pub expert_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

/// A researcher as seen from another researcher, with the status of any
/// connection between the two in either direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub specialties: Option<String>,
    #[serde(default)]
    pub research_interests: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub connection_status: Option<RequestStatus>,
}

/// A researcher as listed for patients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub specialties: Option<String>,
    #[serde(default)]
    pub research_interests: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "store::models::null_as_default")]
    pub meeting_availability: bool,
}
