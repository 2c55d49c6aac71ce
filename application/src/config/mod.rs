//! Application-level configuration.
//!
//! - [`ResolutionParams`] - resolver policy and batch control (concurrency, fail-fast)

pub mod resolution_params;

pub use resolution_params::ResolutionParams;
