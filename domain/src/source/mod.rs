//! Source discriminants for a domain's configuration.
//!
//! - [`SourceType`] - where configuration originates
//! - [`ModelDomainType`] - model flavor, only under `FromModel`
//! - [`SourceSpec`] - the two combined into one validated value

mod model_domain_type;
mod source_spec;
mod source_type;

pub use model_domain_type::ModelDomainType;
pub use source_spec::SourceSpec;
pub use source_type::SourceType;
