//! Intent Catalog
//!
//! An ordered, validated collection of intents. Order matters: both matching
//! strategies break ties in favor of the intent that appears first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A named category of guest request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Unique identifier
    pub tag: String,
    /// Example phrases, in matching order
    pub patterns: Vec<String>,
    /// Candidate replies
    pub responses: Vec<String>,
}

impl Intent {
    pub fn new(
        tag: impl Into<String>,
        patterns: impl IntoIterator<Item = impl Into<String>>,
        responses: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            tag: tag.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// On-disk shape of a catalog
///
/// Accepts both `{ "intents": [...] }` and a bare top-level array of intents.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    Wrapped { intents: Vec<Intent> },
    Bare(Vec<Intent>),
}

impl CatalogDocument {
    pub fn into_intents(self) -> Vec<Intent> {
        match self {
            Self::Wrapped { intents } => intents,
            Self::Bare(intents) => intents,
        }
    }
}

/// Validated intent catalog, immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    /// Validate and wrap a list of intents
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        if intents.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(intents.len());
        for (index, intent) in intents.iter().enumerate() {
            if intent.tag.trim().is_empty() {
                return Err(CatalogError::BlankTag { index });
            }
            if !seen.insert(intent.tag.as_str()) {
                return Err(CatalogError::DuplicateTag(intent.tag.clone()));
            }
            if intent.patterns.is_empty() {
                return Err(CatalogError::NoPatterns(intent.tag.clone()));
            }
            if intent.responses.is_empty() {
                return Err(CatalogError::NoResponses(intent.tag.clone()));
            }
            if let Some(index) = intent.patterns.iter().position(|p| p.trim().is_empty()) {
                return Err(CatalogError::BlankPattern {
                    tag: intent.tag.clone(),
                    index,
                });
            }
        }

        Ok(Self { intents })
    }

    /// Parse and validate a JSON catalog
    pub fn from_json_str(source_name: &str, json: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        Self::new(document.into_intents())
    }

    /// Intents in catalog order
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Look up an intent by tag
    pub fn get(&self, tag: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.tag == tag)
    }

    /// All intent tags in catalog order
    pub fn tags(&self) -> Vec<&str> {
        self.intents.iter().map(|i| i.tag.as_str()).collect()
    }

    /// Every pattern of every intent, in catalog order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.intents
            .iter()
            .flat_map(|i| i.patterns.iter().map(String::as_str))
    }

    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }
}
