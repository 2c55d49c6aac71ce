//! Progress reporting for batch resolution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use source_application::ResolutionObserver;
use source_domain::{ResolutionError, ResolvedStrategy};

/// Reports progress while domain documents are loaded and resolved
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::style());
        bar.set_prefix("Resolving");
        Self { bar }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Clear the bar once the batch is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ResolutionObserver for ProgressReporter {
    fn on_resolved(&self, domain: &str, resolved: &ResolvedStrategy) {
        let marker = if resolved.is_defaulted() {
            "~".yellow()
        } else {
            "v".green()
        };
        self.bar.set_message(format!("{} {}", marker, domain));
        self.bar.inc(1);
    }

    fn on_rejected(&self, domain: &str, _error: &ResolutionError) {
        self.bar.set_message(format!("{} {}", "x".red(), domain));
        self.bar.inc(1);
    }

    fn on_load_failed(&self, location: &str, _message: &str) {
        self.bar.set_message(format!("{} {}", "!".red(), location));
        self.bar.inc(1);
    }
}

/// Plain progress output, one line per domain on stderr
pub struct SimpleProgress;

impl ResolutionObserver for SimpleProgress {
    fn on_resolved(&self, domain: &str, resolved: &ResolvedStrategy) {
        eprintln!("{} {} -> {}", "v".green(), domain, resolved.tag());
    }

    fn on_rejected(&self, domain: &str, error: &ResolutionError) {
        eprintln!("{} {} ({})", "x".red(), domain, error.code());
    }

    fn on_load_failed(&self, location: &str, message: &str) {
        eprintln!("{} {}: {}", "!".red(), location, message);
    }
}
