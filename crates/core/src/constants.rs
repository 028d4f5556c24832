//! Shared defaults for the responder
//!
//! Single source of truth for the values the config crate falls back to and the
//! agent crate uses when built without settings.

/// Reply returned when neither matching strategy finds an intent
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I didn't understand that. Can you please rephrase?";

/// Minimum similarity ratio for a fuzzy hit (inclusive)
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Closing line shown after the guest says goodbye
pub const FAREWELL_MESSAGE: &str = "Thank you for chatting with me! Have a wonderful stay!";

/// Inputs that end the conversation
pub const FAREWELL_PHRASES: &[&str] = &["goodbye", "bye"];

/// Default catalog location, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "config/intents.json";

/// Default interaction log location
pub const DEFAULT_INTERACTION_LOG_PATH: &str = "chat_log.csv";
