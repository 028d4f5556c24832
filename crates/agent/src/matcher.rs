//! Intent matching
//!
//! Two strategies over a [`CompiledCatalog`]:
//! - [`exact_match`]: a pattern's token set is contained in the input's token set;
//!   first hit in catalog order wins
//! - [`fuzzy_match`]: best similarity ratio between the space-joined token
//!   sequences over every (intent, pattern) pair, accepted above a threshold
//!
//! Patterns are normalized once, when the catalog is compiled.

use std::collections::HashSet;

use concierge_core::{CatalogError, Intent, IntentCatalog};
use concierge_text_processing::normalize;

use crate::similarity::SequenceMatcher;

/// A catalog pattern in normalized form
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Pattern as written in the catalog
    pub source: String,
    /// Normalized tokens, in order
    pub tokens: Vec<String>,
    token_set: HashSet<String>,
    joined: Vec<char>,
}

impl CompiledPattern {
    fn new(source: &str) -> Self {
        let tokens = normalize(source);
        let token_set = tokens.iter().cloned().collect();
        let joined = tokens.join(" ").chars().collect();
        Self {
            source: source.to_string(),
            tokens,
            token_set,
            joined,
        }
    }
}

/// Intent catalog with every pattern pre-normalized
#[derive(Debug, Clone)]
pub struct CompiledCatalog {
    catalog: IntentCatalog,
    /// `patterns[i]` belongs to `catalog.intents()[i]`
    patterns: Vec<Vec<CompiledPattern>>,
}

impl CompiledCatalog {
    /// Normalize every pattern
    ///
    /// Fails if a pattern has no word tokens at all (e.g. "?!"), since an empty
    /// token set is a subset of every input.
    pub fn compile(catalog: IntentCatalog) -> Result<Self, CatalogError> {
        let mut patterns = Vec::with_capacity(catalog.len());

        for intent in catalog.intents() {
            let compiled: Vec<CompiledPattern> =
                intent.patterns.iter().map(|p| CompiledPattern::new(p)).collect();

            if let Some(empty) = compiled.iter().find(|p| p.tokens.is_empty()) {
                return Err(CatalogError::PatternWithoutTokens {
                    tag: intent.tag.clone(),
                    pattern: empty.source.clone(),
                });
            }
            patterns.push(compiled);
        }

        Ok(Self { catalog, patterns })
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Intents with their compiled patterns, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&Intent, &[CompiledPattern])> {
        self.catalog
            .intents()
            .iter()
            .zip(self.patterns.iter().map(Vec::as_slice))
    }
}

/// Normalized guest input, prepared for both strategies
#[derive(Debug, Clone)]
pub struct NormalizedInput {
    pub tokens: Vec<String>,
    token_set: HashSet<String>,
    joined: Vec<char>,
}

impl NormalizedInput {
    /// Normalize raw text
    pub fn new(text: &str) -> Self {
        Self::from_tokens(normalize(text))
    }

    /// Wrap already-normalized tokens
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let token_set = tokens.iter().cloned().collect();
        let joined = tokens.join(" ").chars().collect();
        Self {
            tokens,
            token_set,
            joined,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Fuzzy strategy winner
#[derive(Debug, Clone, Copy)]
pub struct FuzzyHit<'c> {
    pub intent: &'c Intent,
    pub score: f64,
}

/// First intent (catalog order, then pattern order) with a pattern whose tokens
/// all appear in the input
pub fn exact_match<'c>(input: &NormalizedInput, catalog: &'c CompiledCatalog) -> Option<&'c Intent> {
    catalog.iter().find_map(|(intent, patterns)| {
        patterns
            .iter()
            .any(|p| p.token_set.is_subset(&input.token_set))
            .then_some(intent)
    })
}

/// Best-scoring intent over all patterns, if its score reaches `threshold`
///
/// Only a strictly greater score replaces the current best, so the earliest
/// intent wins ties, and a scan where every score is 0.0 has no winner.
pub fn fuzzy_match<'c>(
    input: &NormalizedInput,
    catalog: &'c CompiledCatalog,
    threshold: f64,
) -> Option<FuzzyHit<'c>> {
    let mut best: Option<&Intent> = None;
    let mut best_score = 0.0;

    for (intent, patterns) in catalog.iter() {
        for pattern in patterns {
            let matcher = SequenceMatcher::new(&input.joined, &pattern.joined);

            // Upper bounds that cannot beat the current best skip the full ratio
            if matcher.real_quick_ratio() <= best_score || matcher.quick_ratio() <= best_score {
                continue;
            }

            let score = matcher.ratio();
            if score > best_score {
                best = Some(intent);
                best_score = score;
            }
        }
    }

    match best {
        Some(intent) if best_score >= threshold => Some(FuzzyHit {
            intent,
            score: best_score,
        }),
        _ => None,
    }
}
