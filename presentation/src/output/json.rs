//! JSON output formatter for resolution results

use crate::output::formatter::OutputFormatter;
use serde_json::json;
use source_application::ResolutionReport;
use source_domain::{ResolutionError, ResolvedStrategy};

/// Formats resolution results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: serde_json::Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_strategy(&self, resolved: &ResolvedStrategy) -> String {
        Self::render(json!({
            "status": "resolved",
            "strategy": resolved,
        }))
    }

    fn format_error(&self, error: &ResolutionError) -> String {
        Self::render(json!({
            "status": "rejected",
            "error": {
                "code": error.code(),
                "message": error.to_string(),
            },
        }))
    }

    fn format_report(&self, report: &ResolutionReport) -> String {
        Self::render(json!({
            "summary": report.summary(),
            "stoppedEarly": report.stopped_early,
            "outcomes": report.outcomes,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source_application::DomainOutcome;
    use source_domain::{ConfigurationResolver, ModelDomainType, SourceType};

    #[test]
    fn test_format_strategy() {
        let resolved = ConfigurationResolver::default()
            .resolve(SourceType::FromModel, Some(ModelDomainType::RestrictedJrf))
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_strategy(&resolved)).unwrap();
        assert_eq!(value["status"], "resolved");
        assert_eq!(value["strategy"]["sourceType"], "FromModel");
        assert_eq!(value["strategy"]["modelDomainType"], "RestrictedJRF");
        assert_eq!(value["strategy"]["strategy"], "from-model");
    }

    #[test]
    fn test_format_error() {
        let value: serde_json::Value = serde_json::from_str(
            &JsonFormatter.format_error(&ResolutionError::UnknownSourceTypeLiteral(
                "bogus".to_string(),
            )),
        )
        .unwrap();
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["error"]["code"], "unknown_source_type");
    }

    #[test]
    fn test_format_report() {
        let report = ResolutionReport {
            outcomes: vec![DomainOutcome::LoadFailed {
                location: "missing.json".to_string(),
                message: "Domain specification not found: missing.json".to_string(),
            }],
            stopped_early: true,
        };
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_report(&report)).unwrap();
        assert_eq!(value["summary"]["loadFailed"], 1);
        assert_eq!(value["stoppedEarly"], true);
        assert_eq!(value["outcomes"][0]["status"], "loadFailed");
        assert_eq!(value["outcomes"][0]["location"], "missing.json");
    }
}
