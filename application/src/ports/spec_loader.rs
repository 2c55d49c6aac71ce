//! Domain specification loader port
//!
//! Defines how the application layer obtains the raw source declaration of
//! a domain. Implementations live in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while loading a domain specification
#[derive(Error, Debug)]
pub enum SpecLoaderError {
    #[error("Domain specification not found: {0}")]
    NotFound(String),

    #[error("Failed to read {location}: {message}")]
    Read { location: String, message: String },

    #[error("Malformed domain specification {location}: {message}")]
    Malformed { location: String, message: String },
}

/// The unparsed source declaration of one domain.
///
/// Literals stay as text so that unknown values are rejected by the domain
/// parser, not by the document format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDomainSpec {
    /// Domain name, used for reporting only
    pub name: String,
    pub source_type: String,
    pub model_domain_type: Option<String>,
}

impl RawDomainSpec {
    pub fn new(name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            model_domain_type: None,
        }
    }

    pub fn with_model_domain_type(mut self, model_domain_type: impl Into<String>) -> Self {
        self.model_domain_type = Some(model_domain_type.into());
        self
    }
}

/// Loader for domain specification documents
#[async_trait]
pub trait DomainSpecLoader: Send + Sync {
    /// Load the source declaration stored at `location`
    async fn load(&self, location: &str) -> Result<RawDomainSpec, SpecLoaderError>;
}
