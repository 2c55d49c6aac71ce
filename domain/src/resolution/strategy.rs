//! Resolution output types.

use crate::source::{ModelDomainType, SourceSpec, SourceType};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use std::fmt;

/// How the provisioning side should obtain a domain's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcquisitionStrategy {
    /// Read configuration baked into the referenced image
    FromImage,
    /// Read configuration from an externally mounted volume
    FromVolume,
    /// Generate configuration from a model at domain start time
    FromModel,
}

impl AcquisitionStrategy {
    /// Strategy tag consumed by downstream provisioning.
    pub fn as_str(&self) -> &'static str {
        match self {
            AcquisitionStrategy::FromImage => "from-image",
            AcquisitionStrategy::FromVolume => "from-volume",
            AcquisitionStrategy::FromModel => "from-model",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AcquisitionStrategy::FromImage => {
                "read configuration baked into the referenced image"
            }
            AcquisitionStrategy::FromVolume => {
                "read configuration from an externally mounted volume"
            }
            AcquisitionStrategy::FromModel => {
                "generate configuration from a model at domain start time"
            }
        }
    }

    /// Whether configuration only exists once the domain is started.
    pub fn generates_at_start(&self) -> bool {
        matches!(self, AcquisitionStrategy::FromModel)
    }

    /// Whether provisioning has to mount a volume before configuration can be read.
    pub fn requires_volume(&self) -> bool {
        matches!(self, AcquisitionStrategy::FromVolume)
    }
}

impl From<SourceType> for AcquisitionStrategy {
    fn from(source_type: SourceType) -> Self {
        match source_type {
            SourceType::Image => AcquisitionStrategy::FromImage,
            SourceType::PersistentVolume => AcquisitionStrategy::FromVolume,
            SourceType::FromModel => AcquisitionStrategy::FromModel,
        }
    }
}

impl fmt::Display for AcquisitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records that a model domain type was filled in by policy rather than declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSubstitution {
    pub model_domain_type: ModelDomainType,
}

/// The validated acquisition plan for one domain.
///
/// Equality compares the strategy tag and the resolved variants only; whether
/// the model domain type was substituted does not make two plans different.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedStrategy {
    spec: SourceSpec,
    strategy: AcquisitionStrategy,
    substitution: Option<DefaultSubstitution>,
}

impl ResolvedStrategy {
    pub(crate) fn new(spec: SourceSpec, substitution: Option<DefaultSubstitution>) -> Self {
        Self {
            spec,
            strategy: spec.source_type().into(),
            substitution,
        }
    }

    pub fn spec(&self) -> SourceSpec {
        self.spec
    }

    pub fn source_type(&self) -> SourceType {
        self.spec.source_type()
    }

    /// `None` when no model refinement applies.
    pub fn model_domain_type(&self) -> Option<ModelDomainType> {
        self.spec.model_domain_type()
    }

    pub fn strategy(&self) -> AcquisitionStrategy {
        self.strategy
    }

    pub fn tag(&self) -> &'static str {
        self.strategy.as_str()
    }

    /// Present when the model domain type came from a default policy.
    pub fn substitution(&self) -> Option<DefaultSubstitution> {
        self.substitution
    }

    pub fn is_defaulted(&self) -> bool {
        self.substitution.is_some()
    }
}

impl PartialEq for ResolvedStrategy {
    fn eq(&self, other: &Self) -> bool {
        self.strategy == other.strategy && self.spec == other.spec
    }
}

impl Eq for ResolvedStrategy {}

impl Serialize for ResolvedStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolvedStrategy", 4)?;
        state.serialize_field("sourceType", &self.source_type())?;
        state.serialize_field("modelDomainType", &self.model_domain_type())?;
        state.serialize_field("strategy", &self.strategy)?;
        state.serialize_field("substitution", &self.substitution)?;
        state.end()
    }
}

impl fmt::Display for ResolvedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model_domain_type() {
            Some(model) => write!(f, "{} ({}, {})", self.tag(), self.source_type(), model)?,
            None => write!(f, "{} ({}, N/A)", self.tag(), self.source_type())?,
        }
        if self.is_defaulted() {
            f.write_str(" [defaulted]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_tags() {
        assert_eq!(AcquisitionStrategy::FromImage.as_str(), "from-image");
        assert_eq!(AcquisitionStrategy::FromVolume.as_str(), "from-volume");
        assert_eq!(AcquisitionStrategy::FromModel.as_str(), "from-model");
    }

    #[test]
    fn test_strategy_serde_matches_tag() {
        for strategy in [
            AcquisitionStrategy::FromImage,
            AcquisitionStrategy::FromVolume,
            AcquisitionStrategy::FromModel,
        ] {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.as_str()));
        }
    }

    #[test]
    fn test_strategy_from_source_type() {
        assert_eq!(
            AcquisitionStrategy::from(SourceType::Image),
            AcquisitionStrategy::FromImage
        );
        assert_eq!(
            AcquisitionStrategy::from(SourceType::PersistentVolume),
            AcquisitionStrategy::FromVolume
        );
        assert_eq!(
            AcquisitionStrategy::from(SourceType::FromModel),
            AcquisitionStrategy::FromModel
        );
    }

    #[test]
    fn test_strategy_predicates() {
        assert!(AcquisitionStrategy::FromModel.generates_at_start());
        assert!(!AcquisitionStrategy::FromImage.generates_at_start());
        assert!(AcquisitionStrategy::FromVolume.requires_volume());
        assert!(!AcquisitionStrategy::FromModel.requires_volume());
    }

    #[test]
    fn test_equality_ignores_substitution() {
        let declared = ResolvedStrategy::new(SourceSpec::FromModel(ModelDomainType::Wls), None);
        let defaulted = ResolvedStrategy::new(
            SourceSpec::FromModel(ModelDomainType::Wls),
            Some(DefaultSubstitution {
                model_domain_type: ModelDomainType::Wls,
            }),
        );
        assert_eq!(declared, defaulted);
        assert!(!declared.is_defaulted());
        assert!(defaulted.is_defaulted());
    }

    #[test]
    fn test_serialize_not_applicable_as_null() {
        let resolved = ResolvedStrategy::new(SourceSpec::Image, None);
        let json = serde_json::to_value(resolved).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sourceType": "Image",
                "modelDomainType": null,
                "strategy": "from-image",
                "substitution": null,
            })
        );
    }

    #[test]
    fn test_display() {
        let resolved = ResolvedStrategy::new(SourceSpec::PersistentVolume, None);
        assert_eq!(resolved.to_string(), "from-volume (PersistentVolume, N/A)");

        let resolved = ResolvedStrategy::new(
            SourceSpec::FromModel(ModelDomainType::Wls),
            Some(DefaultSubstitution {
                model_domain_type: ModelDomainType::Wls,
            }),
        );
        assert_eq!(resolved.to_string(), "from-model (FromModel, WLS) [defaulted]");
    }
}
