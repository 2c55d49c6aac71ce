//! Infrastructure layer for domain-source
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod document;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileResolverConfig};
pub use document::{DocumentError, DomainResource, FileDomainSpecLoader};
