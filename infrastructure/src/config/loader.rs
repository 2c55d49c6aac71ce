//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["domain-source.toml", ".domain-source.toml"];
const ENV_PREFIX: &str = "DOMAIN_SOURCE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `DOMAIN_SOURCE_RESOLVER__MISSING_MODEL_TYPE=default` etc.
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./domain-source.toml` or `./.domain-source.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/domain-source/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
            Self::env_provider(),
        )
    }

    /// `DOMAIN_SOURCE_` variables, `__` separating section and key.
    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    fn load_from(
        global_path: Option<&Path>,
        project_path: Option<&Path>,
        explicit_path: Option<&Path>,
        env: Env,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global_path.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project_path {
            figment = figment.merge(Toml::file(path));
        }

        // An explicit path must exist; Toml::file would silently skip it
        if let Some(path) = explicit_path {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment = figment.merge(env);

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/domain-source/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("domain-source").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./domain-source.toml or ./.domain-source.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
