//! Researcher-owned catalog entries: trials and publications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trial phase. The backend stores free text; the four standard phases are
/// recognised and anything else is kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Phase {
    #[default]
    I,
    II,
    III,
    IV,
    Other(String),
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::I, Phase::II, Phase::III, Phase::IV];

    pub fn as_str(&self) -> &str {
        match self {
            Phase::I => "Phase I",
            Phase::II => "Phase II",
            Phase::III => "Phase III",
            Phase::IV => "Phase IV",
            Phase::Other(raw) => raw,
        }
    }

    /// 1..=4 for the standard phases.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Phase::I => Some(1),
            Phase::II => Some(2),
            Phase::III => Some(3),
            Phase::IV => Some(4),
            Phase::Other(_) => None,
        }
    }
}

impl From<String> for Phase {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "Phase I" => Phase::I,
            "Phase II" => Phase::II,
            "Phase III" => Phase::III,
            "Phase IV" => Phase::IV,
            _ => Phase::Other(raw),
        }
    }
}

impl From<Phase> for String {
    fn from(phase: Phase) -> Self {
        phase.as_str().to_string()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trial created by a researcher on the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub id: i64,
    pub title: String,
    pub condition: String,
    pub phase: Phase,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub researcher_id: i64,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /trials/` and `PUT /trials/{id}`; the backend replaces the
/// whole record on update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTrial {
    pub title: String,
    pub condition: String,
    pub phase: Phase,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub researcher_id: i64,
}

impl From<&Trial> for NewTrial {
    fn from(trial: &Trial) -> Self {
        Self {
            title: trial.title.clone(),
            condition: trial.condition.clone(),
            phase: trial.phase.clone(),
            location: trial.location.clone(),
            description: trial.description.clone(),
            researcher_id: trial.researcher_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub researcher_id: i64,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /publications/` and `PUT /publications/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPublication {
    pub title: String,
    pub summary: String,
    pub researcher_id: i64,
}

impl From<&Publication> for NewPublication {
    fn from(publication: &Publication) -> Self {
        Self {
            title: publication.title.clone(),
            summary: publication.summary.clone(),
            researcher_id: publication.researcher_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phase_known_and_other() {
        let known: Phase = serde_json::from_value(json!("Phase III")).unwrap();
        assert_eq!(known, Phase::III);
        assert_eq!(known.ordinal(), Some(3));

        let other: Phase = serde_json::from_value(json!("PHASE2, PHASE3")).unwrap();
        assert_eq!(other, Phase::Other("PHASE2, PHASE3".into()));
        assert_eq!(other.ordinal(), None);
        assert_eq!(serde_json::to_value(&other).unwrap(), json!("PHASE2, PHASE3"));
        assert_eq!(serde_json::to_value(Phase::IV).unwrap(), json!("Phase IV"));
    }

    #[test]
    fn test_trial_from_backend_row() {
        let trial: Trial = serde_json::from_value(json!({
            "id": 1,
            "title": "Metformin dosing",
            "condition": "Diabetes",
            "phase": "Phase II",
            "location": "Boston",
            "description": null,
            "researcher_id": 7,
            "created_at": "2024-05-02T09:15:00.512000"
        }))
        .unwrap();
        assert_eq!(trial.phase, Phase::II);
        assert!(trial.description.is_none());
        assert!(trial.created_at.is_some());

        let body = NewTrial::from(&trial);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["researcher_id"], 7);
        assert!(value.get("description").is_none());
    }
}
