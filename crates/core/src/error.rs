//! Catalog error types

use thiserror::Error;

/// Errors raised while loading or validating an intent catalog.
///
/// Every variant is fatal at startup: the responder cannot serve without a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Catalog source could not be read
    #[error("Catalog source '{source_name}' could not be read: {reason}")]
    Io { source_name: String, reason: String },

    /// Catalog source is not valid JSON/YAML or does not follow the schema
    #[error("Catalog source '{source_name}' is malformed: {reason}")]
    Parse { source_name: String, reason: String },

    /// File extension is not one of the supported catalog formats
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Catalog has no intents at all
    #[error("Catalog contains no intents")]
    Empty,

    #[error("Intent #{index} has a blank tag")]
    BlankTag { index: usize },

    #[error("Duplicate intent tag: {0}")]
    DuplicateTag(String),

    #[error("Intent '{0}' has no patterns")]
    NoPatterns(String),

    #[error("Intent '{0}' has no responses")]
    NoResponses(String),

    #[error("Intent '{tag}' has a blank pattern at position {index}")]
    BlankPattern { tag: String, index: usize },

    /// Pattern normalizes to zero tokens and would match every input
    #[error("Pattern '{pattern}' of intent '{tag}' contains no words")]
    PatternWithoutTokens { tag: String, pattern: String },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
