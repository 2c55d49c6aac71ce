//! Resolution observer port
//!
//! Lets the caller follow batch resolution (progress display, audit trail)
//! without the use case knowing how outcomes are shown.

use source_domain::{ResolutionError, ResolvedStrategy};

/// Callback for each domain resolved by [`ResolveDomainsUseCase`](crate::ResolveDomainsUseCase)
pub trait ResolutionObserver: Send + Sync {
    /// Called when a domain resolves, defaulted or not
    fn on_resolved(&self, domain: &str, resolved: &ResolvedStrategy);

    /// Called when a domain is rejected
    fn on_rejected(&self, domain: &str, error: &ResolutionError);

    /// Called when a document could not be loaded at all
    fn on_load_failed(&self, _location: &str, _message: &str) {}
}

/// No-op observer for when nobody is watching
pub struct NoObserver;

impl ResolutionObserver for NoObserver {
    fn on_resolved(&self, _domain: &str, _resolved: &ResolvedStrategy) {}
    fn on_rejected(&self, _domain: &str, _error: &ResolutionError) {}
}
