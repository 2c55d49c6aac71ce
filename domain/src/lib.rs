//! Domain layer for domain-source
//!
//! This crate contains the source discriminants of a managed domain and the
//! resolver that turns them into a configuration-acquisition strategy.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Source type
//!
//! Where a domain's configuration originates:
//!
//! - **Image**: baked into the referenced image
//! - **PersistentVolume**: read from an externally mounted volume
//! - **FromModel**: generated from a model when the domain starts
//!
//! ## Model domain type
//!
//! The model flavor (`WLS`, `RestrictedJRF`, `JRF`), legal only with
//! `FromModel`.

pub mod config;
pub mod core;
pub mod resolution;
pub mod source;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::error::{ParseError, ResolutionError};
pub use resolution::{
    AcquisitionStrategy, ConfigurationResolver, DefaultSubstitution, MissingModelTypePolicy,
    ResolvedStrategy,
};
pub use source::{ModelDomainType, SourceSpec, SourceType};
