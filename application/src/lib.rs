//! Application layer for domain-source
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolutionParams;
pub use ports::{
    observer::{NoObserver, ResolutionObserver},
    spec_loader::{DomainSpecLoader, RawDomainSpec, SpecLoaderError},
};
pub use use_cases::resolve_domains::{
    DomainOutcome, ReportSummary, ResolutionReport, ResolveDomainError, ResolveDomainsUseCase,
};
