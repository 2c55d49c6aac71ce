//! Presentation-layer configuration

use source_domain::OutputFormat;

/// Output-related configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply command line overrides on top of file settings.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, no_color: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if no_color {
            self.color = false;
        }
        self
    }

    /// Apply the color setting process-wide.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
