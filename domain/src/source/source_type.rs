//! Domain home source type.
//!
//! Declares where a domain's configuration originates. The textual form of
//! each variant is its exact name, which is also what persisted domain
//! resources carry.
//!
//! # Examples
//!
//! ```
//! use source_domain::SourceType;
//!
//! let source: SourceType = "FromModel".parse().unwrap();
//! assert_eq!(source, SourceType::FromModel);
//! assert_eq!(source.to_string(), "FromModel");
//!
//! // Parsing is exact: no case folding, no fallback
//! assert!("frommodel".parse::<SourceType>().is_err());
//! ```

use crate::core::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a domain's configuration comes from.
///
/// | Variant | Configuration lives in |
/// |---------|------------------------|
/// | `Image` | the referenced container image |
/// | `PersistentVolume` | an externally mounted volume |
/// | `FromModel` | a model, generated when the domain starts |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceType {
    /// Configuration is baked into the image.
    Image,
    /// Configuration is read from a persistent volume.
    PersistentVolume,
    /// Configuration is generated from a model at domain start time.
    FromModel,
}

impl SourceType {
    /// All variants in declaration order.
    pub const ALL: [SourceType; 3] = [
        SourceType::Image,
        SourceType::PersistentVolume,
        SourceType::FromModel,
    ];

    /// Returns the exact textual name of this source type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Image => "Image",
            SourceType::PersistentVolume => "PersistentVolume",
            SourceType::FromModel => "FromModel",
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceType::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSourceType(s.to_string()))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
