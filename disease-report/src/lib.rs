pub mod cache;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod report;

// Re-export commonly used types
pub use cache::{InMemoryResponseCache, ResponseCache};
pub use error::{CacheError, ParseError};
pub use extract::extract_percentage;
pub use prompt::build_disease_prompt;
pub use report::{DiseaseReport, Medication, Statistics, parse_report};

#[cfg(test)]
mod tests {
    use super::*;

    const FLU_RESPONSE: &str = r#"{
        "name": "Flu",
        "statistics": {
            "total_cases": 1000,
            "recovery_rate": "95%",
            "mortality_rate": "0.1%"
        },
        "recovery_options": {
            "Rest": "Stay hydrated and rest."
        },
        "medication": {
            "name": "Ibuprofen",
            "side_effects": ["Nausea", "Dizziness"],
            "dosage": "200mg every 6 hours"
        }
    }"#;

    #[test]
    fn test_extract_percentage_well_formed() {
        assert_eq!(extract_percentage("23.5%"), Some(23.5));
        assert_eq!(extract_percentage("  100%"), Some(100.0));
        assert_eq!(extract_percentage("0.1%"), Some(0.1));
        // trailing content after the percent sign is ignored
        assert_eq!(extract_percentage("95% of cases"), Some(95.0));
    }

    #[test]
    fn test_extract_percentage_malformed() {
        assert_eq!(extract_percentage("N/A"), None);
        assert_eq!(extract_percentage(""), None);
        assert_eq!(extract_percentage("abc%"), None);
        assert_eq!(extract_percentage("%23"), None);
        assert_eq!(extract_percentage("23"), None);
        assert_eq!(extract_percentage("unknown"), None);
    }

    #[test]
    fn test_extract_percentage_is_pure() {
        for input in ["23.5%", "N/A", ""] {
            assert_eq!(extract_percentage(input), extract_percentage(input));
        }
    }

    #[test]
    fn test_parse_report_full_document() {
        let report = parse_report(FLU_RESPONSE).unwrap();

        assert_eq!(report.name, "Flu");
        assert_eq!(report.statistics.total_cases, 1000);
        assert_eq!(report.statistics.recovery_rate_value(), Some(95.0));
        assert_eq!(report.statistics.mortality_rate_value(), Some(0.1));
        assert_eq!(
            report.recovery_options.get("Rest").map(String::as_str),
            Some("Stay hydrated and rest.")
        );
        assert_eq!(report.medication.name, "Ibuprofen");
        assert_eq!(report.medication.side_effects.len(), 2);
        assert_eq!(report.medication.dosage, "200mg every 6 hours");
    }

    #[test]
    fn test_parse_report_unparseable_rate_is_not_an_error() {
        let raw = FLU_RESPONSE.replace("\"95%\"", "\"unknown\"");
        let report = parse_report(&raw).unwrap();

        assert_eq!(report.statistics.recovery_rate.as_deref(), Some("unknown"));
        assert_eq!(report.statistics.recovery_rate_value(), None);
        assert_eq!(report.statistics.mortality_rate_value(), Some(0.1));
    }

    #[test]
    fn test_parse_report_truncated_document() {
        let truncated = &FLU_RESPONSE[..FLU_RESPONSE.len() / 2];
        let err = parse_report(truncated).unwrap_err();
        assert!(matches!(err, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn test_parse_report_missing_medication() {
        let raw = r#"{
            "name": "Flu",
            "statistics": { "total_cases": 1000 },
            "recovery_options": {}
        }"#;
        let err = parse_report(raw).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(_)));
    }

    #[test]
    fn test_parse_report_wrong_typed_field() {
        // total_cases as a string is a shape failure, not a crash
        let raw = FLU_RESPONSE.replace("1000", "\"about a thousand\"");
        let err = parse_report(&raw).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(_)));
    }

    #[test]
    fn test_build_disease_prompt_embeds_name_and_template() {
        let template = r#"{"name": "Disease Name"}"#;
        let prompt = build_disease_prompt("Malaria", template);

        assert!(prompt.contains("Malaria"));
        assert!(prompt.contains(template));
        assert!(prompt.contains("not in markdown"));
    }

    #[tokio::test]
    async fn test_cache_roundtrip() {
        let cache = InMemoryResponseCache::new();

        assert!(cache.get("Flu").await.unwrap().is_none());

        cache
            .put("Flu".to_string(), FLU_RESPONSE.to_string())
            .await
            .unwrap();

        let cached = cache.get("Flu").await.unwrap();
        assert_eq!(cached.as_deref(), Some(FLU_RESPONSE));
    }

    #[tokio::test]
    async fn test_cache_first_write_wins() {
        let cache = InMemoryResponseCache::new();

        cache
            .put("Flu".to_string(), "first".to_string())
            .await
            .unwrap();
        cache
            .put("Flu".to_string(), "second".to_string())
            .await
            .unwrap();

        assert_eq!(cache.get("Flu").await.unwrap().as_deref(), Some("first"));
    }
}
