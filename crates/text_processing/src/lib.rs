//! Text normalization for intent matching
//!
//! Turns raw guest input (and catalog patterns) into a sequence of lowercase,
//! lemmatized word tokens:
//!
//! ```text
//! "Where are the Towels?" -> ["where", "are", "the", "towel"]
//! ```
//!
//! Everything here is pure and deterministic, and never fails on any Unicode input.

pub mod lemmatizer;
pub mod normalizer;
pub mod tokenizer;

pub use lemmatizer::lemmatize;
pub use normalizer::{normalize, normalize_joined};
pub use tokenizer::tokenize;
