//! Validated source declaration.
//!
//! [`SourceSpec`] folds the two discriminants into one tagged union so that a
//! model domain type can only exist alongside `FromModel`.

use super::{ModelDomainType, SourceType};
use crate::core::error::ResolutionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A source type together with its model refinement, when one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "sourceType", content = "modelDomainType")]
pub enum SourceSpec {
    Image,
    PersistentVolume,
    FromModel(ModelDomainType),
}

impl SourceSpec {
    /// Combine the two discriminants, enforcing the gating rule strictly.
    ///
    /// No default is applied here; see
    /// [`ConfigurationResolver`](crate::resolution::ConfigurationResolver) for
    /// policy-driven substitution.
    pub fn from_parts(
        source_type: SourceType,
        model_domain_type: Option<ModelDomainType>,
    ) -> Result<Self, ResolutionError> {
        match (source_type, model_domain_type) {
            (SourceType::Image, None) => Ok(SourceSpec::Image),
            (SourceType::PersistentVolume, None) => Ok(SourceSpec::PersistentVolume),
            (SourceType::FromModel, Some(model)) => Ok(SourceSpec::FromModel(model)),
            (SourceType::FromModel, None) => Err(ResolutionError::MissingModelType),
            (source_type @ (SourceType::Image | SourceType::PersistentVolume), Some(model)) => {
                Err(ResolutionError::UnexpectedModelType {
                    source_type,
                    model_domain_type: model,
                })
            }
        }
    }

    /// Parse raw literals and combine them with [`SourceSpec::from_parts`].
    ///
    /// The source type literal is parsed first, so an unknown source type is
    /// reported even if the model literal is also bad.
    pub fn from_literals(
        source_type: &str,
        model_domain_type: Option<&str>,
    ) -> Result<Self, ResolutionError> {
        let (source_type, model_domain_type) =
            Self::parse_literals(source_type, model_domain_type)?;
        Self::from_parts(source_type, model_domain_type)
    }

    /// Parse both literals without applying the gating rule.
    pub(crate) fn parse_literals(
        source_type: &str,
        model_domain_type: Option<&str>,
    ) -> Result<(SourceType, Option<ModelDomainType>), ResolutionError> {
        let source_type: SourceType = source_type.parse()?;
        let model_domain_type = model_domain_type
            .map(str::parse::<ModelDomainType>)
            .transpose()?;
        Ok((source_type, model_domain_type))
    }

    pub fn source_type(&self) -> SourceType {
        match self {
            SourceSpec::Image => SourceType::Image,
            SourceSpec::PersistentVolume => SourceType::PersistentVolume,
            SourceSpec::FromModel(_) => SourceType::FromModel,
        }
    }

    /// The model refinement, `None` meaning "not applicable".
    pub fn model_domain_type(&self) -> Option<ModelDomainType> {
        match self {
            SourceSpec::FromModel(model) => Some(*model),
            SourceSpec::Image | SourceSpec::PersistentVolume => None,
        }
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::FromModel(model) => write!(f, "FromModel({})", model),
            other => f.write_str(other.source_type().as_str()),
        }
    }
}
