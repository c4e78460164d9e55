//! Request and response bodies, one submodule per backend resource.
//!
//! Response types are lenient: optional columns default when missing, and
//! server timestamps accept both RFC 3339 and the backend's naive
//! `YYYY-MM-DDTHH:MM:SS[.ffffff]` form. Request types skip `None` fields so the
//! backend applies its own defaults.

mod ai;
mod catalog;
mod external;
mod forum;
mod network;
pub mod timestamp;
mod user;

pub use ai::{AiHealth, ConditionExtraction, Eligibility, EligibilityQuery, ExpertMatch, Summary};
pub use catalog::{NewPublication, NewTrial, Phase, Publication, Trial};
pub use external::{ExternalPublication, ExternalTrial, OrcidWork, OrcidWorks, ServiceHealth};
pub use forum::{ForumFilter, ForumPost, NewForumPost};
pub use network::{
    Collaborator, Connection, ConnectionType, Expert, MeetingRequest, NewConnection,
    NewMeetingRequest, RequestStatus, StatusUpdate,
};
pub use user::{NewUser, UserUpdate};

use serde::{Deserialize, Serialize};

/// Body returned by the backend's DELETE endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}
