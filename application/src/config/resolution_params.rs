//! Resolution parameters - use case control.
//!
//! [`ResolutionParams`] groups the static parameters that control
//! [`ResolveDomainsUseCase`](crate::use_cases::resolve_domains::ResolveDomainsUseCase).
//! The missing-model policy is domain policy and is only carried through here.

use source_domain::{ConfigurationResolver, MissingModelTypePolicy};

/// Batch resolution control parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionParams {
    /// What to do with `FromModel` declarations lacking a model domain type.
    pub missing_model_type: MissingModelTypePolicy,
    /// Maximum number of documents loaded at once.
    pub max_concurrent_loads: usize,
    /// Stop the batch at the first rejected domain.
    pub fail_fast: bool,
}

impl Default for ResolutionParams {
    fn default() -> Self {
        Self {
            missing_model_type: MissingModelTypePolicy::default(),
            max_concurrent_loads: 8,
            fail_fast: false,
        }
    }
}

impl ResolutionParams {
    // ==================== Builder Methods ====================

    pub fn with_missing_model_type(mut self, policy: MissingModelTypePolicy) -> Self {
        self.missing_model_type = policy;
        self
    }

    pub fn with_max_concurrent_loads(mut self, max: usize) -> Self {
        self.max_concurrent_loads = max.max(1);
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn resolver(&self) -> ConfigurationResolver {
        ConfigurationResolver::new(self.missing_model_type)
    }
}
