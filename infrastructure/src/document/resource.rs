//! Domain resource document shape.
//!
//! Only the fields that carry the source declaration are modelled; anything
//! else in the document is ignored.
//!
//! ```json
//! {
//!   "metadata": { "name": "sample-domain" },
//!   "spec": {
//!     "domainHomeSourceType": "FromModel",
//!     "configuration": { "model": { "domainType": "JRF" } }
//!   }
//! }
//! ```

use serde::Deserialize;
use source_application::RawDomainSpec;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DomainResource {
    pub metadata: ResourceMetadata,
    pub spec: Option<DomainResourceSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceMetadata {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainResourceSpec {
    pub domain_home_source_type: Option<String>,
    pub configuration: Option<ConfigurationSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigurationSection {
    pub model: Option<ModelSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelSection {
    pub domain_type: Option<String>,
}

impl DomainResource {
    /// Extract the raw source declaration.
    ///
    /// Returns `None` when `spec.domainHomeSourceType` is missing. `fallback_name`
    /// is used when the document has no `metadata.name`.
    pub fn into_raw_spec(self, fallback_name: &str) -> Option<RawDomainSpec> {
        let spec = self.spec?;
        let source_type = spec.domain_home_source_type?;
        let model_domain_type = spec
            .configuration
            .and_then(|configuration| configuration.model)
            .and_then(|model| model.domain_type);

        let name = self
            .metadata
            .name
            .unwrap_or_else(|| fallback_name.to_string());

        Some(RawDomainSpec {
            name,
            source_type,
            model_domain_type,
        })
    }
}
