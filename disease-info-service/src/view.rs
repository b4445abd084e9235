use disease_report::DiseaseReport;

use crate::models::{DiseaseInfoResponse, StatisticsPanel, Tab};

/// Assemble the tabbed view the presentation layer renders for one report.
pub fn build_response(report: DiseaseReport, cached: bool) -> DiseaseInfoResponse {
    let statistics = statistics_panel(&report);

    let mut tabs = Vec::new();
    if statistics.is_some() {
        tabs.push(Tab::Statistics);
    }
    tabs.push(Tab::Recovery);
    tabs.push(Tab::Medication);

    DiseaseInfoResponse {
        name: report.name,
        tabs,
        statistics,
        recovery_options: report.recovery_options,
        medication: report.medication,
        cached,
    }
}

/// The statistics chart needs both rates; with either one absent the tab is omitted.
fn statistics_panel(report: &DiseaseReport) -> Option<StatisticsPanel> {
    let recovery_rate = report.statistics.recovery_rate_value()?;
    let mortality_rate = report.statistics.mortality_rate_value()?;

    Some(StatisticsPanel {
        total_cases: report.statistics.total_cases,
        recovery_rate,
        mortality_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use disease_report::parse_report;

    const FLU_RESPONSE: &str = r#"{
        "name": "Flu",
        "statistics": {
            "total_cases": 1000,
            "recovery_rate": "95%",
            "mortality_rate": "0.1%"
        },
        "recovery_options": { "Rest": "Stay hydrated and rest." },
        "medication": {
            "name": "Ibuprofen",
            "side_effects": ["Nausea", "Dizziness"],
            "dosage": "200mg every 6 hours"
        }
    }"#;

    #[test]
    fn test_statistics_tab_enabled_when_both_rates_present() {
        let report = parse_report(FLU_RESPONSE).unwrap();
        let response = build_response(report, false);

        assert_eq!(
            response.tabs,
            vec![Tab::Statistics, Tab::Recovery, Tab::Medication]
        );
        let panel = response.statistics.unwrap();
        assert_eq!(panel.recovery_rate, 95.0);
        assert_eq!(panel.mortality_rate, 0.1);
        assert_eq!(panel.total_cases, 1000);
    }

    #[test]
    fn test_statistics_tab_omitted_when_a_rate_is_unparseable() {
        let raw = FLU_RESPONSE.replace("\"95%\"", "\"unknown\"");
        let report = parse_report(&raw).unwrap();
        let response = build_response(report, false);

        assert_eq!(response.tabs, vec![Tab::Recovery, Tab::Medication]);
        assert!(response.statistics.is_none());
    }
}
