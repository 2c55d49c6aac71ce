//! Output formatter trait

use source_application::ResolutionReport;
use source_domain::{ResolutionError, ResolvedStrategy};

/// Trait for formatting resolution results
pub trait OutputFormatter {
    /// Format a single successful resolution
    fn format_strategy(&self, resolved: &ResolvedStrategy) -> String;

    /// Format a single rejected declaration
    fn format_error(&self, error: &ResolutionError) -> String;

    /// Format a batch report
    fn format_report(&self, report: &ResolutionReport) -> String;
}
