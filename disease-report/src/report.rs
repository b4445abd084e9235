use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::error::ParseError;
use crate::extract::extract_percentage;

/// Structured disease summary returned by the text-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseReport {
    pub name: String,
    pub statistics: Statistics,
    pub recovery_options: HashMap<String, String>,
    pub medication: Medication,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub total_cases: u64,
    /// Percentage-formatted string, e.g. "95%". Not guaranteed well-formed.
    #[serde(default)]
    pub recovery_rate: Option<String>,
    /// Percentage-formatted string, e.g. "0.1%". Not guaranteed well-formed.
    #[serde(default)]
    pub mortality_rate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub side_effects: Vec<String>,
    pub dosage: String,
}

impl Statistics {
    /// Numeric recovery rate, absent when the stored string is missing or unparseable.
    pub fn recovery_rate_value(&self) -> Option<f64> {
        self.recovery_rate.as_deref().and_then(extract_percentage)
    }

    /// Numeric mortality rate, absent when the stored string is missing or unparseable.
    pub fn mortality_rate_value(&self) -> Option<f64> {
        self.mortality_rate.as_deref().and_then(extract_percentage)
    }
}

/// Parse an untrusted collaborator response into a [`DiseaseReport`].
///
/// Two phases: a syntactic JSON parse (failure ->
/// [`ParseError::MalformedDocument`]), then shape validation into the typed
/// model (failure -> [`ParseError::MissingField`] naming the offending
/// field). A wrong-typed field is a shape failure, so it surfaces as
/// `MissingField` as well. Never yields a partial report.
pub fn parse_report(raw: &str) -> Result<DiseaseReport, ParseError> {
    let document: serde_json::Value = serde_json::from_str(raw)?;

    serde_json::from_value(document).map_err(|e| {
        warn!("disease response failed shape validation: {}", e);
        ParseError::MissingField(e.to_string())
    })
}
