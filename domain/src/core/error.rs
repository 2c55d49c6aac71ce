//! Domain error types

use crate::source::{ModelDomainType, SourceType};
use thiserror::Error;

/// Raised when a textual literal does not name a known variant.
///
/// Parsing is case-sensitive and never falls back to a default variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown source type '{0}' (expected one of: Image, PersistentVolume, FromModel)")]
    UnknownSourceType(String),

    #[error("Unknown model domain type '{0}' (expected one of: WLS, RestrictedJRF, JRF)")]
    UnknownModelDomainType(String),
}

/// Errors returned by [`ConfigurationResolver`](crate::resolution::ConfigurationResolver).
///
/// Every variant is recoverable: the caller decides whether to reject the
/// domain specification, apply a default, or escalate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// A model domain type was supplied for a source type that does not take one.
    #[error("Model domain type {model_domain_type} is not allowed with source type {source_type}")]
    UnexpectedModelType {
        source_type: SourceType,
        model_domain_type: ModelDomainType,
    },

    /// `FromModel` was declared without a model domain type and no default is configured.
    #[error("Source type FromModel requires a model domain type")]
    MissingModelType,

    #[error("Unknown source type literal '{0}'")]
    UnknownSourceTypeLiteral(String),

    #[error("Unknown model domain type literal '{0}'")]
    UnknownModelDomainTypeLiteral(String),
}

impl ResolutionError {
    /// Stable machine-readable code, used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            ResolutionError::UnexpectedModelType { .. } => "unexpected_model_type",
            ResolutionError::MissingModelType => "missing_model_type",
            ResolutionError::UnknownSourceTypeLiteral(_) => "unknown_source_type",
            ResolutionError::UnknownModelDomainTypeLiteral(_) => "unknown_model_domain_type",
        }
    }
}

impl From<ParseError> for ResolutionError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnknownSourceType(literal) => {
                ResolutionError::UnknownSourceTypeLiteral(literal)
            }
            ParseError::UnknownModelDomainType(literal) => {
                ResolutionError::UnknownModelDomainTypeLiteral(literal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_model_type_display() {
        let error = ResolutionError::UnexpectedModelType {
            source_type: SourceType::PersistentVolume,
            model_domain_type: ModelDomainType::Wls,
        };
        assert_eq!(
            error.to_string(),
            "Model domain type WLS is not allowed with source type PersistentVolume"
        );
    }

    #[test]
    fn test_parse_error_converts_to_literal_variant() {
        let error: ResolutionError = ParseError::UnknownSourceType("bogus".to_string()).into();
        assert_eq!(
            error,
            ResolutionError::UnknownSourceTypeLiteral("bogus".to_string())
        );

        let error: ResolutionError =
            ParseError::UnknownModelDomainType("wls".to_string()).into();
        assert_eq!(
            error,
            ResolutionError::UnknownModelDomainTypeLiteral("wls".to_string())
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            ResolutionError::UnexpectedModelType {
                source_type: SourceType::Image,
                model_domain_type: ModelDomainType::Jrf,
            }
            .code(),
            ResolutionError::MissingModelType.code(),
            ResolutionError::UnknownSourceTypeLiteral(String::new()).code(),
            ResolutionError::UnknownModelDomainTypeLiteral(String::new()).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
