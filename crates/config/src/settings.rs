//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use concierge_core::constants;

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Intent catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Matching and reply policy
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Conversation log
    #[serde(default)]
    pub interaction_log: InteractionLogConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.matcher.fuzzy_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                field: "matcher.fuzzy_threshold".to_string(),
                message: format!("must be between 0.0 and 1.0, got {}", threshold),
            });
        }

        if self.matcher.fallback_response.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "matcher.fallback_response".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        if self.catalog.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.path".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        if self.interaction_log.enabled && self.interaction_log.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "interaction_log.path".to_string(),
                message: "must not be blank when the log is enabled".to_string(),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
        }
    }
}

/// Intent catalog source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a `.json`, `.yaml` or `.yml` catalog
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    constants::DEFAULT_CATALOG_PATH.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Matching and reply policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum similarity ratio for a fuzzy hit (inclusive)
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Reply when nothing matches
    #[serde(default = "default_fallback_response")]
    pub fallback_response: String,

    /// Fixed RNG seed for response selection; random when unset
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Inputs that end the conversation
    #[serde(default = "default_farewell_phrases")]
    pub farewell_phrases: Vec<String>,

    /// Closing line sent along with the reply to a farewell
    #[serde(default = "default_farewell_message")]
    pub farewell_message: String,
}

fn default_fuzzy_threshold() -> f64 {
    constants::DEFAULT_FUZZY_THRESHOLD
}
fn default_fallback_response() -> String {
    constants::FALLBACK_RESPONSE.to_string()
}
fn default_farewell_phrases() -> Vec<String> {
    constants::FAREWELL_PHRASES
        .iter()
        .map(|p| p.to_string())
        .collect()
}
fn default_farewell_message() -> String {
    constants::FAREWELL_MESSAGE.to_string()
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            fallback_response: default_fallback_response(),
            random_seed: None,
            farewell_phrases: default_farewell_phrases(),
            farewell_message: default_farewell_message(),
        }
    }
}

impl MatcherConfig {
    /// Whether `input` is one of the farewell phrases (case and surrounding whitespace ignored)
    pub fn is_farewell(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        self.farewell_phrases
            .iter()
            .any(|p| p.trim().to_lowercase() == input)
    }
}

/// Conversation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionLogConfig {
    /// Persist exchanges to disk; an in-memory log is used otherwise
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// CSV file path
    #[serde(default = "default_log_path")]
    pub path: String,
}

fn default_log_path() -> String {
    constants::DEFAULT_INTERACTION_LOG_PATH.to_string()
}

impl Default for InteractionLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_log_path(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Enable Prometheus metrics at /metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Load settings from `config/` and the environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (`CONCIERGE__SERVER__PORT=9000`)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env)
}

/// Same as [`load_settings`] with an explicit configuration directory
pub fn load_settings_from(config_dir: &str, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(
        File::with_name(&format!("{}/default", config_dir))
            .required(false)
    );

    if let Some(env_name) = env {
        builder = builder.add_source(
            File::with_name(&format!("{}/{}", config_dir, env_name))
                .required(false)
        );
    }

    builder = builder.add_source(
        Environment::with_prefix("CONCIERGE")
            .separator("__")
            .try_parsing(true)
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.matcher.fuzzy_threshold, 0.6);
        assert_eq!(
            settings.matcher.fallback_response,
            "I'm sorry, I didn't understand that. Can you please rephrase?"
        );
        assert_eq!(settings.catalog.path, "config/intents.json");
        assert_eq!(settings.interaction_log.path, "chat_log.csv");
        assert!(settings.matcher.random_seed.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_threshold_validation() {
        let mut settings = Settings::default();
        settings.matcher.fuzzy_threshold = 1.5;
        assert!(settings.validate().is_err());

        settings.matcher.fuzzy_threshold = -0.1;
        assert!(settings.validate().is_err());

        settings.matcher.fuzzy_threshold = 1.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_blank_fallback_rejected() {
        let mut settings = Settings::default();
        settings.matcher.fallback_response = "  ".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "matcher.fallback_response"
        ));
    }

    #[test]
    fn test_disabled_log_may_have_blank_path() {
        let mut settings = Settings::default();
        settings.interaction_log.path = String::new();
        assert!(settings.validate().is_err());

        settings.interaction_log.enabled = false;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_farewell_detection() {
        let matcher = MatcherConfig::default();
        assert!(matcher.is_farewell("bye"));
        assert!(matcher.is_farewell("  GoodBye "));
        assert!(!matcher.is_farewell("goodbye then"));
        assert!(!matcher.is_farewell(""));
    }
}
