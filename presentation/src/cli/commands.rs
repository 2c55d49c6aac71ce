//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for resolution results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for source_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => source_domain::OutputFormat::Text,
            OutputFormat::Json => source_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for domain-source
#[derive(Parser, Debug)]
#[command(name = "domain-source")]
#[command(author, version, about = "Resolve how a domain's configuration is obtained")]
#[command(long_about = r#"
domain-source validates the configuration source declared by a domain and
resolves it into an acquisition strategy:

  Image             -> from-image   (configuration baked into the image)
  PersistentVolume  -> from-volume  (configuration on a mounted volume)
  FromModel         -> from-model   (generated from a WLS, RestrictedJRF or JRF model)

A model domain type is only allowed, and required, with FromModel.

Configuration files are loaded from (in priority order):
1. DOMAIN_SOURCE_* environment variables
2. --config <path>        Explicit config file
3. ./domain-source.toml   Project-level config
4. ~/.config/domain-source/config.toml   Global config

Example:
  domain-source resolve FromModel --model-domain-type JRF
  domain-source check domains/*.json --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (overrides [output].format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a single source declaration given on the command line
    Resolve {
        /// Source type: Image, PersistentVolume or FromModel
        source_type: String,

        /// Model domain type: WLS, RestrictedJRF or JRF (FromModel only)
        #[arg(short, long, value_name = "TYPE")]
        model_domain_type: Option<String>,

        /// Substitute this model domain type when FromModel omits one
        #[arg(long, value_name = "TYPE")]
        default_model_type: Option<String>,
    },

    /// Load domain documents (.json / .toml) and resolve each one
    Check {
        /// Domain resource documents
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,

        /// Substitute this model domain type when FromModel omits one
        #[arg(long, value_name = "TYPE")]
        default_model_type: Option<String>,

        /// Stop at the first rejected domain
        #[arg(long)]
        fail_fast: bool,
    },

    /// Show configuration file locations and the effective configuration
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "domain-source",
            "resolve",
            "FromModel",
            "--model-domain-type",
            "JRF",
        ]);
        match cli.command {
            Command::Resolve {
                source_type,
                model_domain_type,
                default_model_type,
            } => {
                assert_eq!(source_type, "FromModel");
                assert_eq!(model_domain_type.as_deref(), Some("JRF"));
                assert!(default_model_type.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_with_global_flags() {
        let cli = Cli::parse_from([
            "domain-source",
            "check",
            "a.json",
            "b.toml",
            "--fail-fast",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Check {
                files, fail_fast, ..
            } => {
                assert_eq!(files, vec!["a.json", "b.toml"]);
                assert!(fail_fast);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_check_requires_files() {
        assert!(Cli::try_parse_from(["domain-source", "check"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
