//! Text normalizer: lowercase, tokenize, lemmatize

use crate::lemmatizer::lemmatize;
use crate::tokenizer::tokenize;

/// Normalize raw text into lemmatized word tokens
///
/// Empty or whitespace-only text yields an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    tokenize(&lowered).iter().map(|t| lemmatize(t)).collect()
}

/// Normalized tokens joined by single spaces, the form the similarity ratio compares
pub fn normalize_joined(text: &str) -> String {
    normalize(text).join(" ")
}
