//! CLI entrypoint for domain-source
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use source_application::{ResolutionParams, ResolveDomainsUseCase};
use source_domain::{MissingModelTypePolicy, ModelDomainType, OutputFormat, Severity};
use source_infrastructure::{ConfigLoader, FileConfig, FileDomainSpecLoader};
use source_presentation::{
    Cli, Command, OutputConfig, ProgressReporter, SimpleProgress, formatter_for,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting domain-source");

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&file_config, &cli.command)?;

    let output = OutputConfig {
        format: file_config.output.format.unwrap_or_default(),
        color: file_config.output.color,
    }
    .with_overrides(cli.output.map(Into::into), cli.no_color);
    output.apply_color();
    let formatter = formatter_for(output.format);

    let params = file_config.resolver.to_params();

    match cli.command {
        Command::ShowConfig => {
            ConfigLoader::print_config_sources();
            println!();
            println!("Effective configuration:");
            println!(
                "{}",
                toml::to_string_pretty(&file_config).context("Failed to render configuration")?
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve {
            source_type,
            model_domain_type,
            default_model_type,
        } => {
            let params = apply_default_override(params, default_model_type.as_deref())?;
            let resolver = params.resolver();
            info!("Resolving with missing model type policy: {}", resolver.policy());

            match resolver.resolve_literals(&source_type, model_domain_type.as_deref()) {
                Ok(resolved) => {
                    if let Some(substitution) = resolved.substitution() {
                        warn!(
                            "No model domain type declared; substituted {}",
                            substitution.model_domain_type
                        );
                    }
                    println!("{}", formatter.format_strategy(&resolved));
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    println!("{}", formatter.format_error(&err));
                    Ok(ExitCode::from(1))
                }
            }
        }
        Command::Check {
            files,
            default_model_type,
            fail_fast,
        } => {
            let mut params = apply_default_override(params, default_model_type.as_deref())?;
            if fail_fast {
                params = params.with_fail_fast(true);
            }

            // === Dependency Injection ===
            let loader = Arc::new(FileDomainSpecLoader::new());
            let use_case = ResolveDomainsUseCase::new(loader, params);

            let show_progress = !cli.quiet && output.format == OutputFormat::Text;
            let report = if !show_progress {
                use_case.execute(&files).await
            } else if cli.verbose > 0 {
                // Log lines would tear a progress bar; print one line per domain instead
                use_case.execute_with_observer(&files, &SimpleProgress).await
            } else {
                let progress = ProgressReporter::new(files.len());
                let report = use_case.execute_with_observer(&files, &progress).await;
                progress.finish();
                report
            };

            println!("{}", formatter.format_report(&report));

            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(2))
            }
        }
    }
}

/// Log configuration issues; refuse to run on errors.
///
/// `show-config` still runs so the broken configuration can be inspected.
fn check_config(config: &FileConfig, command: &Command) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if issues.iter().any(|issue| issue.is_error()) && !matches!(command, Command::ShowConfig) {
        bail!("Configuration has errors; see messages above");
    }
    Ok(())
}

/// `--default-model-type` switches the missing-model policy to substitution.
fn apply_default_override(
    params: ResolutionParams,
    default_model_type: Option<&str>,
) -> Result<ResolutionParams> {
    match default_model_type {
        Some(literal) => {
            let model: ModelDomainType = literal
                .parse()
                .with_context(|| format!("Invalid --default-model-type '{}'", literal))?;
            Ok(params.with_missing_model_type(MissingModelTypePolicy::DefaultTo(model)))
        }
        None => Ok(params),
    }
}
