//! What to do when a model-generated domain omits its model domain type.

use crate::source::ModelDomainType;
use std::fmt;

/// Policy for `FromModel` declarations without a model domain type.
///
/// The library default is [`MissingModelTypePolicy::Reject`]. Deployments that
/// follow the orchestrator convention of treating an omitted type as `WLS`
/// opt in with `DefaultTo(ModelDomainType::Wls)`; the substitution is then
/// reported on the resolved strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingModelTypePolicy {
    /// Fail with `MissingModelType`
    #[default]
    Reject,
    /// Substitute the given type and report it
    DefaultTo(ModelDomainType),
}

impl fmt::Display for MissingModelTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingModelTypePolicy::Reject => write!(f, "reject"),
            MissingModelTypePolicy::DefaultTo(model) => write!(f, "default to {}", model),
        }
    }
}
