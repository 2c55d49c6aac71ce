//! Domain configuration resolution.
//!
//! - [`ConfigurationResolver`] - validates a source declaration
//! - [`ResolvedStrategy`] - the acquisition plan it produces
//! - [`MissingModelTypePolicy`] - reject or default an omitted model type

mod policy;
mod resolver;
mod strategy;

pub use policy::MissingModelTypePolicy;
pub use resolver::ConfigurationResolver;
pub use strategy::{AcquisitionStrategy, DefaultSubstitution, ResolvedStrategy};
