use serde::{Deserialize, Serialize};

use crate::client::Query;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionExtraction {
    /// Comma-separated, most likely first.
    pub conditions: String,
    #[serde(default)]
    pub original_symptoms: String,
    #[serde(default)]
    pub confidence: String,
}

impl ConditionExtraction {
    /// The first suggested condition, trimmed.
    pub fn primary(&self) -> Option<&str> {
        self.conditions
            .split(',')
            .map(str::trim)
            .find(|c| !c.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertMatch {
    /// Comma-separated specialties.
    pub recommended_specialties: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub confidence: String,
}

impl ExpertMatch {
    pub fn specialties(&self) -> Vec<&str> {
        self.recommended_specialties
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Inputs for `POST /ai/analyze-eligibility`, sent as query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EligibilityQuery {
    pub patient_age: u32,
    pub patient_condition: String,
    pub patient_symptoms: String,
    pub trial_criteria: String,
}

impl EligibilityQuery {
    pub fn to_query(&self) -> Query {
        Query::new()
            .with("patient_age", self.patient_age)
            .with("patient_condition", &self.patient_condition)
            .with("patient_symptoms", &self.patient_symptoms)
            .with("trial_criteria", &self.trial_criteria)
    }
}

/// `eligible` is one of `yes`, `no`, `maybe` or `unknown`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub eligible: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub confidence: String,
}

impl Eligibility {
    pub fn is_eligible(&self) -> Option<bool> {
        match self.eligible.as_str() {
            "yes" => Some(true),
            "no" => Some(false),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiHealth {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub api_configured: bool,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub fallback_mode: bool,
}
