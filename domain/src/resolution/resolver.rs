//! Configuration resolver.
//!
//! Turns a declared `(SourceType, Option<ModelDomainType>)` pair into a
//! [`ResolvedStrategy`], enforcing that a model domain type is present
//! exactly when the source type is `FromModel`.
//!
//! Resolution is pure: it reads only its arguments, performs no I/O and can
//! be called from any number of threads at once.
//!
//! # Examples
//!
//! ```
//! use source_domain::{
//!     AcquisitionStrategy, ConfigurationResolver, ModelDomainType, MissingModelTypePolicy,
//!     ResolutionError, SourceType,
//! };
//!
//! let resolver = ConfigurationResolver::default();
//!
//! let resolved = resolver.resolve(SourceType::Image, None).unwrap();
//! assert_eq!(resolved.strategy(), AcquisitionStrategy::FromImage);
//! assert_eq!(resolved.model_domain_type(), None);
//!
//! assert!(matches!(
//!     resolver.resolve(SourceType::PersistentVolume, Some(ModelDomainType::Wls)),
//!     Err(ResolutionError::UnexpectedModelType { .. })
//! ));
//!
//! // Opt-in default for model-generated domains
//! let lenient = ConfigurationResolver::new(MissingModelTypePolicy::DefaultTo(ModelDomainType::Wls));
//! let resolved = lenient.resolve(SourceType::FromModel, None).unwrap();
//! assert!(resolved.is_defaulted());
//! ```

use super::policy::MissingModelTypePolicy;
use super::strategy::{DefaultSubstitution, ResolvedStrategy};
use crate::core::error::ResolutionError;
use crate::source::{ModelDomainType, SourceSpec, SourceType};

/// Validates source declarations and produces acquisition plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigurationResolver {
    policy: MissingModelTypePolicy,
}

impl ConfigurationResolver {
    pub fn new(policy: MissingModelTypePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingModelTypePolicy {
        self.policy
    }

    /// Resolve a declared source type and optional model domain type.
    pub fn resolve(
        &self,
        source_type: SourceType,
        model_domain_type: Option<ModelDomainType>,
    ) -> Result<ResolvedStrategy, ResolutionError> {
        match SourceSpec::from_parts(source_type, model_domain_type) {
            Ok(spec) => Ok(ResolvedStrategy::new(spec, None)),
            Err(ResolutionError::MissingModelType) => match self.policy {
                MissingModelTypePolicy::Reject => Err(ResolutionError::MissingModelType),
                MissingModelTypePolicy::DefaultTo(model) => Ok(ResolvedStrategy::new(
                    SourceSpec::FromModel(model),
                    Some(DefaultSubstitution {
                        model_domain_type: model,
                    }),
                )),
            },
            Err(err) => Err(err),
        }
    }

    /// Parse raw literals at the loader boundary, then resolve.
    pub fn resolve_literals(
        &self,
        source_type: &str,
        model_domain_type: Option<&str>,
    ) -> Result<ResolvedStrategy, ResolutionError> {
        let (source_type, model_domain_type) =
            SourceSpec::parse_literals(source_type, model_domain_type)?;
        self.resolve(source_type, model_domain_type)
    }
}
