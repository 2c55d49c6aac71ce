//! Console output formatter for resolution results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use source_application::{DomainOutcome, ResolutionReport};
use source_domain::{ResolutionError, ResolvedStrategy};

/// Formats resolution results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.bold(), "=".repeat(title.len()))
    }

    fn strategy_lines(resolved: &ResolvedStrategy) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "  {:<18} {}\n",
            "Source type:".cyan().bold(),
            resolved.source_type()
        ));
        let model = match resolved.model_domain_type() {
            Some(model) if resolved.is_defaulted() => format!("{} (defaulted)", model),
            Some(model) => model.to_string(),
            None => "N/A".to_string(),
        };
        output.push_str(&format!("  {:<18} {}\n", "Model type:".cyan().bold(), model));
        output.push_str(&format!(
            "  {:<18} {} - {}\n",
            "Strategy:".cyan().bold(),
            resolved.tag().green(),
            resolved.strategy().description()
        ));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_strategy(&self, resolved: &ResolvedStrategy) -> String {
        let mut output = Self::header("Resolved Strategy");
        output.push_str(&Self::strategy_lines(resolved));
        if let Some(substitution) = resolved.substitution() {
            output.push_str(&format!(
                "\n{} model domain type not declared, {} substituted\n",
                "note:".yellow().bold(),
                substitution.model_domain_type
            ));
        }
        output
    }

    fn format_error(&self, error: &ResolutionError) -> String {
        format!("{} {} [{}]\n", "rejected:".red().bold(), error, error.code())
    }

    fn format_report(&self, report: &ResolutionReport) -> String {
        let mut output = Self::header("Domain Resolution Report");

        for outcome in &report.outcomes {
            match outcome {
                DomainOutcome::Resolved { domain, strategy } => {
                    let marker = if strategy.is_defaulted() {
                        "~".yellow()
                    } else {
                        "v".green()
                    };
                    output.push_str(&format!("\n{} {}\n", marker, domain.bold()));
                    output.push_str(&Self::strategy_lines(strategy));
                }
                DomainOutcome::Rejected { domain, error } => {
                    output.push_str(&format!("\n{} {}\n", "x".red(), domain.bold()));
                    output.push_str(&format!("  {}", self.format_error(error)));
                }
                DomainOutcome::LoadFailed { location, message } => {
                    output.push_str(&format!("\n{} {}\n", "!".red(), location.bold()));
                    output.push_str(&format!("  {} {}\n", "load failed:".red().bold(), message));
                }
            }
        }

        let summary = report.summary();
        output.push_str(&format!(
            "\n{} {} resolved ({} defaulted), {} rejected, {} failed to load\n",
            "Summary:".cyan().bold(),
            summary.resolved,
            summary.defaulted,
            summary.rejected,
            summary.load_failed
        ));
        if report.stopped_early {
            output.push_str(&format!(
                "{}\n",
                "Stopped at the first failure (--fail-fast)".yellow()
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source_domain::{
        ConfigurationResolver, MissingModelTypePolicy, ModelDomainType, SourceType,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_strategy_image() {
        plain();
        let resolved = ConfigurationResolver::default()
            .resolve(SourceType::Image, None)
            .unwrap();
        let text = ConsoleFormatter.format_strategy(&resolved);
        assert!(text.contains("Image"));
        assert!(text.contains("N/A"));
        assert!(text.contains("from-image"));
        assert!(!text.contains("note:"));
    }

    #[test]
    fn test_format_strategy_reports_substitution() {
        plain();
        let resolved = ConfigurationResolver::new(MissingModelTypePolicy::DefaultTo(
            ModelDomainType::Wls,
        ))
        .resolve(SourceType::FromModel, None)
        .unwrap();
        let text = ConsoleFormatter.format_strategy(&resolved);
        assert!(text.contains("WLS (defaulted)"));
        assert!(text.contains("note:"));
    }

    #[test]
    fn test_format_error() {
        plain();
        let text = ConsoleFormatter.format_error(&ResolutionError::MissingModelType);
        assert!(text.contains("rejected:"));
        assert!(text.contains("missing_model_type"));
    }

    #[test]
    fn test_format_report() {
        plain();
        let report = ResolutionReport {
            outcomes: vec![
                DomainOutcome::Resolved {
                    domain: "alpha".to_string(),
                    strategy: ConfigurationResolver::default()
                        .resolve(SourceType::Image, None)
                        .unwrap(),
                },
                DomainOutcome::Rejected {
                    domain: "beta".to_string(),
                    error: ResolutionError::UnexpectedModelType {
                        source_type: SourceType::Image,
                        model_domain_type: ModelDomainType::Jrf,
                    },
                },
            ],
            stopped_early: false,
        };
        let text = ConsoleFormatter.format_report(&report);
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
        assert!(text.contains("unexpected_model_type"));
        assert!(text.contains("1 resolved (0 defaulted), 1 rejected, 0 failed to load"));
        assert!(!text.contains("--fail-fast"));
    }
}
