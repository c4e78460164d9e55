//! # Persisted client models
//!
//! The two records the client keeps in local storage:
//!
//! | Type | Key | Meaning |
//! |------|-----|---------|
//! | [`User`] | `"user"` | The signed-in identity, exactly as the backend returned it at signup/login. |
//! | [`SavedItem`] | `"favorites"` (array) | A snapshot of a trial or publication card the user saved. |
//!
//! ## Roles
//!
//! The backend sends users as one flat JSON object with a `role` field and a
//! superset of patient and researcher columns (unused ones are `null`). Here the
//! role-specific columns live in [`Profile`], an enum internally tagged by `role`
//! and flattened into [`User`], so a patient can never carry researcher fields
//! and the role cannot be changed without replacing the profile.
//!
//! These types are `Serialize + Deserialize` and round-trip through the same
//! JSON shape the backend uses, so [`crate::SessionStore`] can persist a login
//! response verbatim.

use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Decides which pages and actions are available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Researcher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Researcher => "researcher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-specific part of a user record, tagged by the `role` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Patient(PatientProfile),
    Researcher(ResearcherProfile),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub symptoms: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearcherProfile {
    /// Comma-separated, free text: "Oncology, Neurology"
    #[serde(default)]
    pub specialties: Option<String>,
    #[serde(default)]
    pub research_interests: Option<String>,
    #[serde(default)]
    pub orcid: Option<String>,
    #[serde(default)]
    pub researchgate_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meeting_availability: bool,
}

/// A CuraLink account as returned by `/users/*`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Server timestamp, kept as sent.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub profile: Profile,
}

impl User {
    pub fn role(&self) -> Role {
        match self.profile {
            Profile::Patient(_) => Role::Patient,
            Profile::Researcher(_) => Role::Researcher,
        }
    }

    pub fn patient(&self) -> Option<&PatientProfile> {
        match &self.profile {
            Profile::Patient(p) => Some(p),
            Profile::Researcher(_) => None,
        }
    }

    pub fn researcher(&self) -> Option<&ResearcherProfile> {
        match &self.profile {
            Profile::Researcher(r) => Some(r),
            Profile::Patient(_) => None,
        }
    }

    /// The patient's condition, if set and non-blank.
    pub fn condition(&self) -> Option<&str> {
        self.patient()
            .and_then(|p| p.condition.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn symptoms(&self) -> Option<&str> {
        self.patient().and_then(|p| p.symptoms.as_deref())
    }
}

/// What a favorite snapshot was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedKind {
    Trial,
    Publication,
}

impl SavedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SavedKind::Trial => "trial",
            SavedKind::Publication => "publication",
        }
    }
}

/// Snapshot of a card saved to favorites.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    /// Card id: "7" for internal items, "ext-trial-NCT123" for external ones
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SavedKind,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub external: bool,
}

/// Treat an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
