//! Records the backend fetches from PubMed, ClinicalTrials.gov and ORCID.
//!
//! Everything except the title is optional: these come from third-party
//! registries and the backend passes through whatever it found.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalTrial {
    #[serde(default)]
    pub id: Option<i64>,
    /// Registry identifier, e.g. `NCT01234567`.
    #[serde(default)]
    pub nct_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalPublication {
    #[serde(default)]
    pub id: Option<i64>,
    /// Source identifier (the PubMed PMID for `source == "pubmed"`).
    #[serde(default, alias = "pmid")]
    pub external_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub title: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default, rename = "abstract")]
    pub r#abstract: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// `GET /external/orcid/{orcid_id}`: at most ten works from the public record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidWorks {
    pub orcid_id: String,
    #[serde(default)]
    pub publications: Vec<OrcidWork>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidWork {
    pub title: String,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// Health report shared by the external-services endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub services: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pubmed_record() {
        let p: ExternalPublication = serde_json::from_value(json!({
            "id": 11, "external_id": "38012345", "source": "pubmed",
            "title": "GLP-1 outcomes", "authors": "A. Smith, B. Jones",
            "abstract": "We studied...", "journal": "Lancet",
            "publication_date": "2023", "url": "https://pubmed.ncbi.nlm.nih.gov/38012345/",
            "ai_summary": null, "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(p.external_id.as_deref(), Some("38012345"));
        assert_eq!(p.r#abstract.as_deref(), Some("We studied..."));
    }

    #[test]
    fn test_pmid_alias_and_missing_ids() {
        let p: ExternalPublication =
            serde_json::from_value(json!({"pmid": "42", "title": "T"})).unwrap();
        assert_eq!(p.external_id.as_deref(), Some("42"));

        let t: ExternalTrial = serde_json::from_value(json!({"title": "Untracked"})).unwrap();
        assert!(t.nct_id.is_none());
    }
}
