use disease_report::Medication;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub name: String,
}

/// Tabbed panels the presentation layer can render for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Statistics,
    Recovery,
    Medication,
}

/// Chart data for the statistics tab. Present only when both rates could be
/// extracted from the collaborator's percentage strings.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsPanel {
    pub total_cases: u64,
    pub recovery_rate: f64,
    pub mortality_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct DiseaseInfoResponse {
    pub name: String,
    pub tabs: Vec<Tab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<StatisticsPanel>,
    pub recovery_options: HashMap<String, String>,
    pub medication: Medication,
    /// True when the raw response came from the cache instead of a new
    /// collaborator call.
    pub cached: bool,
}

#[derive(Debug, Serialize)]
pub struct RawResponse {
    pub name: String,
    pub raw_response: String,
}
