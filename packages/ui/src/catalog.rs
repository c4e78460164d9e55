//! Cards shown on the dashboards.
//!
//! Trials and publications come from two places: the platform's own records
//! and the external registries the backend proxies. Both are normalised into
//! one card type per kind, tagged with their [`Source`]. Internal cards keep
//! the numeric id; external cards get a synthesized `ext-trial-*` or
//! `ext-pub-*` id built from the registry id, or from the item's position when
//! the registry id is missing.

use api::models::{ExternalPublication, ExternalTrial, Publication, Trial};
use store::{SavedItem, SavedKind};

const NO_ABSTRACT: &str = "No abstract available";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Internal,
    External,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrialCard {
    pub id: String,
    pub title: String,
    pub condition: Option<String>,
    pub phase: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Owning researcher, internal trials only.
    pub researcher_id: Option<i64>,
    pub source: Source,
}

impl TrialCard {
    pub fn internal(trial: &Trial) -> Self {
        Self {
            id: trial.id.to_string(),
            title: trial.title.clone(),
            condition: Some(trial.condition.clone()),
            phase: Some(trial.phase.to_string()),
            location: Some(trial.location.clone()),
            description: trial.description.clone(),
            url: None,
            researcher_id: Some(trial.researcher_id),
            source: Source::Internal,
        }
    }

    pub fn external(index: usize, trial: &ExternalTrial) -> Self {
        Self {
            id: external_id("ext-trial", trial.nct_id.as_deref(), index),
            title: trial.title.clone(),
            condition: trial.condition.clone(),
            phase: trial.phase.clone(),
            location: trial.location.clone(),
            description: trial.description.clone(),
            url: trial.url.clone(),
            researcher_id: None,
            source: Source::External,
        }
    }

    pub fn is_external(&self) -> bool {
        self.source == Source::External
    }

    /// Text handed to the summarizer.
    pub fn summary_text(&self) -> String {
        format!(
            "{}. {} Phase: {}. Location: {}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.phase.as_deref().unwrap_or(""),
            self.location.as_deref().unwrap_or(""),
        )
    }

    pub fn to_saved(&self) -> SavedItem {
        SavedItem {
            id: self.id.clone(),
            kind: SavedKind::Trial,
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            external: self.is_external(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PublicationCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub authors: Option<String>,
    pub journal: Option<String>,
    pub url: Option<String>,
    pub researcher_id: Option<i64>,
    pub source: Source,
}

impl PublicationCard {
    pub fn internal(publication: &Publication) -> Self {
        Self {
            id: publication.id.to_string(),
            title: publication.title.clone(),
            summary: publication.summary.clone(),
            authors: None,
            journal: None,
            url: None,
            researcher_id: Some(publication.researcher_id),
            source: Source::Internal,
        }
    }

    pub fn external(index: usize, publication: &ExternalPublication) -> Self {
        let summary = publication
            .r#abstract
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(NO_ABSTRACT);
        Self {
            id: external_id("ext-pub", publication.external_id.as_deref(), index),
            title: publication.title.clone(),
            summary: summary.to_string(),
            authors: publication.authors.clone(),
            journal: publication.journal.clone(),
            url: publication.url.clone(),
            researcher_id: None,
            source: Source::External,
        }
    }

    pub fn is_external(&self) -> bool {
        self.source == Source::External
    }

    pub fn summary_text(&self) -> String {
        format!("{}. {}", self.title, self.summary)
    }

    pub fn to_saved(&self) -> SavedItem {
        SavedItem {
            id: self.id.clone(),
            kind: SavedKind::Publication,
            title: self.title.clone(),
            description: Some(self.summary.clone()),
            url: self.url.clone(),
            external: self.is_external(),
        }
    }
}

fn external_id(prefix: &str, source_id: Option<&str>, index: usize) -> String {
    match source_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("{prefix}-{id}"),
        None => format!("{prefix}-{index}"),
    }
}

/// Internal trials first, external appended in registry order. No de-duplication.
pub fn merge_trials(internal: &[Trial], external: &[ExternalTrial]) -> Vec<TrialCard> {
    internal
        .iter()
        .map(TrialCard::internal)
        .chain(
            external
                .iter()
                .enumerate()
                .map(|(i, t)| TrialCard::external(i, t)),
        )
        .collect()
}

/// Internal publications first, external appended. No de-duplication.
pub fn merge_publications(
    internal: &[Publication],
    external: &[ExternalPublication],
) -> Vec<PublicationCard> {
    internal
        .iter()
        .map(PublicationCard::internal)
        .chain(
            external
                .iter()
                .enumerate()
                .map(|(i, p)| PublicationCard::external(i, p)),
        )
        .collect()
}
