//! File system domain specification loader
//!
//! [`FileDomainSpecLoader`] implements [`DomainSpecLoader`] by reading domain
//! resource documents from disk. The format is chosen by extension:
//! `.json` or `.toml`.

use super::resource::DomainResource;
use async_trait::async_trait;
use source_application::{DomainSpecLoader, RawDomainSpec, SpecLoaderError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a domain document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported document extension: {0}")]
    UnsupportedExtension(String),

    #[error("missing spec.domainHomeSourceType")]
    MissingSourceType,
}

impl DocumentError {
    fn into_loader_error(self, location: &str) -> SpecLoaderError {
        match self {
            DocumentError::NotFound(_) => SpecLoaderError::NotFound(location.to_string()),
            DocumentError::Io(err) => SpecLoaderError::Read {
                location: location.to_string(),
                message: err.to_string(),
            },
            other => SpecLoaderError::Malformed {
                location: location.to_string(),
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            _ => Err(DocumentError::UnsupportedExtension(extension)),
        }
    }
}

/// Domain specification loader that reads from the local file system.
///
/// Relative locations are resolved against `base_dir` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileDomainSpecLoader {
    base_dir: Option<PathBuf>,
}

impl FileDomainSpecLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    fn resolve_path(&self, location: &str) -> PathBuf {
        let path = PathBuf::from(location);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    }

    /// Read and parse one document.
    pub async fn read_document(&self, location: &str) -> Result<RawDomainSpec, DocumentError> {
        let path = self.resolve_path(location);
        let format = DocumentFormat::from_path(&path)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DocumentError::NotFound(path));
            }
            Err(err) => return Err(err.into()),
        };

        let resource: DomainResource = match format {
            DocumentFormat::Json => serde_json::from_str(&content)?,
            DocumentFormat::Toml => toml::from_str(&content)?,
        };

        let fallback_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(location)
            .to_string();

        let spec = resource
            .into_raw_spec(&fallback_name)
            .ok_or(DocumentError::MissingSourceType)?;
        debug!(
            "Loaded domain '{}' from {} ({:?})",
            spec.name,
            path.display(),
            format
        );
        Ok(spec)
    }
}

#[async_trait]
impl DomainSpecLoader for FileDomainSpecLoader {
    async fn load(&self, location: &str) -> Result<RawDomainSpec, SpecLoaderError> {
        self.read_document(location)
            .await
            .map_err(|err| err.into_loader_error(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    #[tokio::test]
    async fn test_load_json_document() {
        let dir = TempDir::new().unwrap();
        let location = write(
            &dir,
            "domain.json",
            r#"{"metadata":{"name":"sample"},"spec":{"domainHomeSourceType":"FromModel","configuration":{"model":{"domainType":"WLS"}}}}"#,
        );

        let spec = FileDomainSpecLoader::new().load(&location).await.unwrap();
        assert_eq!(
            spec,
            RawDomainSpec::new("sample", "FromModel").with_model_domain_type("WLS")
        );
    }

    #[tokio::test]
    async fn test_load_toml_uses_file_stem_as_fallback_name() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "volume-domain.toml",
            "[spec]\ndomainHomeSourceType = \"PersistentVolume\"\n",
        );

        let loader = FileDomainSpecLoader::new().with_base_dir(dir.path());
        let spec = loader.load("volume-domain.toml").await.unwrap();
        assert_eq!(spec.name, "volume-domain");
        assert_eq!(spec.source_type, "PersistentVolume");
    }

    #[tokio::test]
    async fn test_unknown_literals_pass_through_untouched() {
        let dir = TempDir::new().unwrap();
        let location = write(
            &dir,
            "odd.json",
            r#"{"spec":{"domainHomeSourceType":"image","configuration":{"model":{"domainType":"jrf"}}}}"#,
        );

        let spec = FileDomainSpecLoader::new().load(&location).await.unwrap();
        assert_eq!(spec.source_type, "image");
        assert_eq!(spec.model_domain_type.as_deref(), Some("jrf"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let location = dir.path().join("absent.json").to_string_lossy().to_string();
        let err = FileDomainSpecLoader::new().load(&location).await.unwrap_err();
        assert!(matches!(err, SpecLoaderError::NotFound(l) if l == location));
    }

    #[tokio::test]
    async fn test_missing_source_type_is_malformed() {
        let dir = TempDir::new().unwrap();
        let location = write(&dir, "empty.json", r#"{"spec":{}}"#);
        let err = FileDomainSpecLoader::new().load(&location).await.unwrap_err();
        assert!(matches!(err, SpecLoaderError::Malformed { .. }));
        assert!(err.to_string().contains("domainHomeSourceType"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let dir = TempDir::new().unwrap();
        let location = write(&dir, "broken.json", "{");
        let err = FileDomainSpecLoader::new().load(&location).await.unwrap_err();
        assert!(matches!(err, SpecLoaderError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let location = write(&dir, "domain.yaml", "spec: {}");
        let err = FileDomainSpecLoader::new()
            .read_document(&location)
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedExtension(ext) if ext == "yaml"));
    }
}
