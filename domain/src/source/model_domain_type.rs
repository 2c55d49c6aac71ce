//! Model-in-image domain type.
//!
//! The flavor of configuration model used when a domain's configuration is
//! generated from a model ([`SourceType::FromModel`](super::SourceType::FromModel)).
//! It is a refinement only; it has no meaning for the other source types.

use crate::core::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration model flavor for model-generated domains.
///
/// Declaration order carries no capability ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelDomainType {
    /// Plain WebLogic Server domain
    #[serde(rename = "WLS")]
    Wls,
    /// JRF domain without database dependencies
    #[serde(rename = "RestrictedJRF")]
    RestrictedJrf,
    /// Full JRF domain
    #[serde(rename = "JRF")]
    Jrf,
}

impl ModelDomainType {
    /// All variants in declaration order.
    pub const ALL: [ModelDomainType; 3] = [
        ModelDomainType::Wls,
        ModelDomainType::RestrictedJrf,
        ModelDomainType::Jrf,
    ];

    /// Returns the exact textual name of this model domain type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelDomainType::Wls => "WLS",
            ModelDomainType::RestrictedJrf => "RestrictedJRF",
            ModelDomainType::Jrf => "JRF",
        }
    }

    /// Whether the generated domain is built on the JRF infrastructure.
    pub fn uses_jrf_infrastructure(&self) -> bool {
        matches!(self, ModelDomainType::RestrictedJrf | ModelDomainType::Jrf)
    }

    /// Whether the generated domain needs database schemas (RCU) to start.
    ///
    /// Restricted JRF deliberately drops the database-backed services.
    pub fn requires_database(&self) -> bool {
        matches!(self, ModelDomainType::Jrf)
    }
}

impl std::str::FromStr for ModelDomainType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WLS" => Ok(ModelDomainType::Wls),
            "RestrictedJRF" => Ok(ModelDomainType::RestrictedJrf),
            "JRF" => Ok(ModelDomainType::Jrf),
            _ => Err(ParseError::UnknownModelDomainType(s.to_string())),
        }
    }
}

impl fmt::Display for ModelDomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ModelDomainType::Wls), "WLS");
        assert_eq!(format!("{}", ModelDomainType::RestrictedJrf), "RestrictedJRF");
        assert_eq!(format!("{}", ModelDomainType::Jrf), "JRF");
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for model in ModelDomainType::ALL {
            assert_eq!(model.to_string().parse::<ModelDomainType>(), Ok(model));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "bogus".parse::<ModelDomainType>(),
            Err(ParseError::UnknownModelDomainType("bogus".to_string()))
        );
        // Rust-style variant names are not accepted on the wire
        assert!("Wls".parse::<ModelDomainType>().is_err());
        assert!("RestrictedJrf".parse::<ModelDomainType>().is_err());
        assert!("jrf".parse::<ModelDomainType>().is_err());
    }

    #[test]
    fn test_capabilities() {
        assert!(!ModelDomainType::Wls.uses_jrf_infrastructure());
        assert!(ModelDomainType::RestrictedJrf.uses_jrf_infrastructure());
        assert!(ModelDomainType::Jrf.uses_jrf_infrastructure());

        assert!(!ModelDomainType::Wls.requires_database());
        assert!(!ModelDomainType::RestrictedJrf.requires_database());
        assert!(ModelDomainType::Jrf.requires_database());
    }

    #[test]
    fn test_serde_uses_exact_names() {
        assert_eq!(
            serde_json::to_string(&ModelDomainType::RestrictedJrf).unwrap(),
            "\"RestrictedJRF\""
        );
        let model: ModelDomainType = serde_json::from_str("\"JRF\"").unwrap();
        assert_eq!(model, ModelDomainType::Jrf);
        assert!(serde_json::from_str::<ModelDomainType>("\"Jrf\"").is_err());
    }

    #[test]
    fn test_serde_roundtrip_every_variant() {
        for model in ModelDomainType::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.as_str()));
            assert_eq!(serde_json::from_str::<ModelDomainType>(&json).unwrap(), model);
        }
    }
}
