//! File-backed intent catalog
//!
//! The catalog is read once at startup; any failure here is fatal to the caller.

use std::path::{Path, PathBuf};

use concierge_core::{CatalogDocument, CatalogError, CatalogProvider, IntentCatalog};

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads a catalog from a JSON or YAML file
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
    source_name: String,
}

impl FileCatalogProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let source_name = path.display().to_string();
        Self { path, source_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, format: CatalogFormat, content: &str) -> Result<CatalogDocument, CatalogError> {
        let parsed = match format {
            CatalogFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| CatalogError::Parse {
            source_name: self.source_name.clone(),
            reason,
        })
    }
}

impl CatalogProvider for FileCatalogProvider {
    fn source_name(&self) -> &str {
        &self.source_name
    }

    fn load(&self) -> Result<IntentCatalog, CatalogError> {
        let format = CatalogFormat::from_path(&self.path)?;

        let content = std::fs::read_to_string(&self.path).map_err(|e| CatalogError::Io {
            source_name: self.source_name.clone(),
            reason: e.to_string(),
        })?;

        let catalog = IntentCatalog::new(self.parse(format, &content)?.into_intents())?;

        tracing::info!(
            path = %self.source_name,
            intents = catalog.len(),
            patterns = catalog.pattern_count(),
            "Loaded intent catalog"
        );

        Ok(catalog)
    }
}
