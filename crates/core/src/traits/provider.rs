//! Catalog provider trait

use crate::catalog::{Intent, IntentCatalog};
use crate::error::Result;

/// Source of an intent catalog
///
/// Called once at startup. Implementations decide the storage format; the
/// returned catalog is already validated.
pub trait CatalogProvider: Send + Sync {
    /// Human-readable name of the source (file path, "static", ...)
    fn source_name(&self) -> &str;

    /// Load and validate the catalog
    fn load(&self) -> Result<IntentCatalog>;
}

/// Provider over intents held in memory
#[derive(Debug, Clone)]
pub struct StaticCatalogProvider {
    intents: Vec<Intent>,
}

impl StaticCatalogProvider {
    pub fn new(intents: Vec<Intent>) -> Self {
        Self { intents }
    }
}

impl CatalogProvider for StaticCatalogProvider {
    fn source_name(&self) -> &str {
        "static"
    }

    fn load(&self) -> Result<IntentCatalog> {
        IntentCatalog::new(self.intents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;

    #[test]
    fn test_static_provider_validates() {
        let provider = StaticCatalogProvider::new(vec![Intent::new("greeting", ["hello"], ["Hi!"])]);
        assert_eq!(provider.load().unwrap().len(), 1);

        let empty = StaticCatalogProvider::new(vec![]);
        assert_eq!(empty.load(), Err(CatalogError::Empty));
    }
}
