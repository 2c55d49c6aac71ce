//! Configuration file loading for domain-source
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DOMAIN_SOURCE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./domain-source.toml` or `./.domain-source.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/domain-source/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileResolverConfig};
pub use loader::ConfigLoader;
