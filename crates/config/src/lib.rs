//! Configuration for the concierge
//!
//! - [`Settings`]: layered application settings (defaults, files, environment)
//! - [`FileCatalogProvider`]: loads the intent catalog from a JSON or YAML file

pub mod catalog;
pub mod settings;

pub use catalog::{CatalogFormat, FileCatalogProvider};
pub use settings::{
    load_settings, load_settings_from, CatalogConfig, InteractionLogConfig, MatcherConfig,
    ObservabilityConfig, ServerConfig, Settings,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
