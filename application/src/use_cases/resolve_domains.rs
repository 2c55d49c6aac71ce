//! Resolve domains use case
//!
//! Loads raw domain specifications through the [`DomainSpecLoader`] port,
//! parses their source literals and resolves each one into a
//! [`ResolvedStrategy`].
//!
//! # Overview
//!
//! 1. **Load** - documents are fetched concurrently, results kept in input order
//! 2. **Parse** - literals become `SourceType` / `ModelDomainType`, unknown text is rejected
//! 3. **Resolve** - the gating rule and missing-model policy are applied
//! 4. **Report** - every domain gets exactly one [`DomainOutcome`]
//!
//! Rejections never abort the process; they are collected in the
//! [`ResolutionReport`] (unless `fail_fast` stops the batch early).

use crate::config::ResolutionParams;
use crate::ports::observer::{NoObserver, ResolutionObserver};
use crate::ports::spec_loader::{DomainSpecLoader, RawDomainSpec, SpecLoaderError};
use futures::stream::{self, StreamExt};
use serde::{Serialize, Serializer};
use source_domain::{ConfigurationResolver, ResolutionError, ResolvedStrategy};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors for a single domain.
#[derive(Error, Debug)]
pub enum ResolveDomainError {
    /// The domain's declaration is invalid.
    #[error("Domain '{domain}' rejected: {source}")]
    Rejected {
        domain: String,
        source: ResolutionError,
    },

    /// The domain's document could not be loaded.
    #[error(transparent)]
    Load(#[from] SpecLoaderError),
}

/// Result of resolving one domain.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DomainOutcome {
    Resolved {
        domain: String,
        strategy: ResolvedStrategy,
    },
    Rejected {
        domain: String,
        #[serde(serialize_with = "serialize_resolution_error")]
        error: ResolutionError,
    },
    LoadFailed {
        location: String,
        message: String,
    },
}

impl DomainOutcome {
    /// Domain name, or the document location when loading failed.
    pub fn subject(&self) -> &str {
        match self {
            DomainOutcome::Resolved { domain, .. } | DomainOutcome::Rejected { domain, .. } => {
                domain
            }
            DomainOutcome::LoadFailed { location, .. } => location,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, DomainOutcome::Resolved { .. })
    }
}

fn serialize_resolution_error<S: Serializer>(
    error: &ResolutionError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct ErrorView<'a> {
        code: &'a str,
        message: String,
    }

    ErrorView {
        code: error.code(),
        message: error.to_string(),
    }
    .serialize(serializer)
}

/// Counts over a [`ResolutionReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub resolved: usize,
    pub defaulted: usize,
    pub rejected: usize,
    pub load_failed: usize,
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub outcomes: Vec<DomainOutcome>,
    /// Set when `fail_fast` stopped the batch before every input was handled.
    pub stopped_early: bool,
}

impl ResolutionReport {
    pub fn summary(&self) -> ReportSummary {
        self.outcomes
            .iter()
            .fold(ReportSummary::default(), |mut summary, outcome| {
                match outcome {
                    DomainOutcome::Resolved { strategy, .. } => {
                        summary.resolved += 1;
                        if strategy.is_defaulted() {
                            summary.defaulted += 1;
                        }
                    }
                    DomainOutcome::Rejected { .. } => summary.rejected += 1,
                    DomainOutcome::LoadFailed { .. } => summary.load_failed += 1,
                }
                summary
            })
    }

    /// True when every domain resolved and the batch ran to completion.
    pub fn is_clean(&self) -> bool {
        !self.stopped_early && self.outcomes.iter().all(DomainOutcome::is_resolved)
    }
}

/// Use case for resolving the configuration source of many domains.
pub struct ResolveDomainsUseCase {
    loader: Arc<dyn DomainSpecLoader>,
    params: ResolutionParams,
    resolver: ConfigurationResolver,
}

impl ResolveDomainsUseCase {
    pub fn new(loader: Arc<dyn DomainSpecLoader>, params: ResolutionParams) -> Self {
        let resolver = params.resolver();
        Self {
            loader,
            params,
            resolver,
        }
    }

    pub fn params(&self) -> &ResolutionParams {
        &self.params
    }

    /// Parse and resolve a single raw declaration.
    pub fn resolve_raw(&self, spec: &RawDomainSpec) -> Result<ResolvedStrategy, ResolveDomainError> {
        self.resolve_logged(spec)
            .map_err(|source| ResolveDomainError::Rejected {
                domain: spec.name.clone(),
                source,
            })
    }

    fn resolve_logged(&self, spec: &RawDomainSpec) -> Result<ResolvedStrategy, ResolutionError> {
        let result = self
            .resolver
            .resolve_literals(&spec.source_type, spec.model_domain_type.as_deref());

        match &result {
            Ok(resolved) => {
                if let Some(substitution) = resolved.substitution() {
                    warn!(
                        "Domain '{}' declares FromModel without a model domain type; using {}",
                        spec.name, substitution.model_domain_type
                    );
                }
                debug!("Domain '{}' resolved to {}", spec.name, resolved);
            }
            Err(err) => warn!("Domain '{}' rejected: {}", spec.name, err),
        }
        result
    }

    /// Resolve already loaded declarations.
    pub fn resolve_specs(
        &self,
        specs: &[RawDomainSpec],
        observer: &dyn ResolutionObserver,
    ) -> ResolutionReport {
        let mut report = ResolutionReport::default();
        for (index, spec) in specs.iter().enumerate() {
            let outcome = self.outcome_for(spec, observer);
            let rejected = !outcome.is_resolved();
            report.outcomes.push(outcome);
            if rejected && self.params.fail_fast && index + 1 < specs.len() {
                report.stopped_early = true;
                break;
            }
        }
        Self::log_summary(&report);
        report
    }

    /// Load and resolve every location.
    pub async fn execute(&self, locations: &[String]) -> ResolutionReport {
        self.execute_with_observer(locations, &NoObserver).await
    }

    pub async fn execute_with_observer(
        &self,
        locations: &[String],
        observer: &dyn ResolutionObserver,
    ) -> ResolutionReport {
        info!("Resolving {} domain specification(s)", locations.len());

        let loader = Arc::clone(&self.loader);
        let mut loads = stream::iter(locations.iter().cloned())
            .map(|location| {
                let loader = Arc::clone(&loader);
                async move {
                    let result = loader.load(&location).await;
                    (location, result)
                }
            })
            .buffered(self.params.max_concurrent_loads.max(1));

        let mut report = ResolutionReport::default();
        let mut handled = 0;
        while let Some((location, result)) = loads.next().await {
            handled += 1;
            let outcome = match result {
                Ok(spec) => self.outcome_for(&spec, observer),
                Err(err) => {
                    warn!("Failed to load {}: {}", location, err);
                    let message = err.to_string();
                    observer.on_load_failed(&location, &message);
                    DomainOutcome::LoadFailed { location, message }
                }
            };
            let rejected = !outcome.is_resolved();
            report.outcomes.push(outcome);
            if rejected && self.params.fail_fast && handled < locations.len() {
                report.stopped_early = true;
                break;
            }
        }

        Self::log_summary(&report);
        report
    }

    /// Load one document and resolve it.
    pub async fn resolve_location(
        &self,
        location: &str,
    ) -> Result<ResolvedStrategy, ResolveDomainError> {
        let spec = self.loader.load(location).await?;
        self.resolve_raw(&spec)
    }

    fn outcome_for(&self, spec: &RawDomainSpec, observer: &dyn ResolutionObserver) -> DomainOutcome {
        match self.resolve_logged(spec) {
            Ok(strategy) => {
                observer.on_resolved(&spec.name, &strategy);
                DomainOutcome::Resolved {
                    domain: spec.name.clone(),
                    strategy,
                }
            }
            Err(error) => {
                observer.on_rejected(&spec.name, &error);
                DomainOutcome::Rejected {
                    domain: spec.name.clone(),
                    error,
                }
            }
        }
    }

    fn log_summary(report: &ResolutionReport) {
        let summary = report.summary();
        info!(
            "Resolution finished: {} resolved ({} defaulted), {} rejected, {} failed to load",
            summary.resolved, summary.defaulted, summary.rejected, summary.load_failed
        );
    }
}
