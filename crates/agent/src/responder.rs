//! Conversation entry point
//!
//! raw input -> normalize -> exact match -> fuzzy match -> fallback, then one
//! response is picked from the winning intent. Stateless: every call rescans the
//! catalog, and the only shared mutable state is the selector's RNG.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use concierge_config::MatcherConfig;
use concierge_core::{constants, CatalogError, Intent, IntentCatalog, ResponseSelector};

use crate::matcher::{exact_match, fuzzy_match, CompiledCatalog, NormalizedInput};
use crate::selector::RandomSelector;

/// Which strategy produced the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
    Fallback,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Fallback => "fallback",
        }
    }
}

/// Winning intent of a match attempt
#[derive(Debug, Clone, Copy)]
pub struct IntentMatch<'c> {
    pub intent: &'c Intent,
    pub kind: MatchKind,
    /// Similarity ratio, fuzzy hits only
    pub score: Option<f64>,
}

/// Reply text plus how it was produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub text: String,
    pub kind: MatchKind,
    /// Tag of the matched intent, `None` on fallback
    pub intent: Option<String>,
    pub score: Option<f64>,
    /// Time spent matching and selecting
    #[serde(skip)]
    pub elapsed_micros: u64,
}

/// Rule-based responder over a read-only catalog
pub struct Responder {
    catalog: CompiledCatalog,
    selector: Arc<dyn ResponseSelector>,
    threshold: f64,
    fallback: String,
}

impl Responder {
    /// Responder with the default threshold and fallback and an entropy-seeded selector
    pub fn new(catalog: IntentCatalog) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: CompiledCatalog::compile(catalog)?,
            selector: Arc::new(RandomSelector::new()),
            threshold: constants::DEFAULT_FUZZY_THRESHOLD,
            fallback: constants::FALLBACK_RESPONSE.to_string(),
        })
    }

    /// Responder configured from the `matcher` settings section
    pub fn from_config(catalog: IntentCatalog, config: &MatcherConfig) -> Result<Self, CatalogError> {
        let selector = match config.random_seed {
            Some(seed) => RandomSelector::seeded(seed),
            None => RandomSelector::new(),
        };

        Ok(Self::new(catalog)?
            .with_selector(Arc::new(selector))
            .with_threshold(config.fuzzy_threshold)
            .with_fallback(config.fallback_response.clone()))
    }

    pub fn with_selector(mut self, selector: Arc<dyn ResponseSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn catalog(&self) -> &IntentCatalog {
        self.catalog.catalog()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Find the intent for `input` without picking a response
    pub fn detect(&self, input: &str) -> Option<IntentMatch<'_>> {
        let input = NormalizedInput::new(input);

        if let Some(intent) = exact_match(&input, &self.catalog) {
            return Some(IntentMatch {
                intent,
                kind: MatchKind::Exact,
                score: None,
            });
        }

        fuzzy_match(&input, &self.catalog, self.threshold).map(|hit| IntentMatch {
            intent: hit.intent,
            kind: MatchKind::Fuzzy,
            score: Some(hit.score),
        })
    }

    /// Reply to `input`
    pub fn respond(&self, input: &str) -> String {
        self.reply(input).text
    }

    /// Reply to `input`, with match details
    pub fn reply(&self, input: &str) -> Reply {
        let start = Instant::now();

        let reply = match self.detect(input) {
            Some(found) => {
                let text = self
                    .selector
                    .select(&found.intent.responses)
                    .unwrap_or(&self.fallback)
                    .to_string();

                tracing::debug!(
                    intent = %found.intent.tag,
                    kind = found.kind.as_str(),
                    score = ?found.score,
                    "Matched intent"
                );

                Reply {
                    text,
                    kind: found.kind,
                    intent: Some(found.intent.tag.clone()),
                    score: found.score,
                    elapsed_micros: 0,
                }
            }
            None => {
                tracing::debug!(input_len = input.len(), "No intent matched, using fallback");
                Reply {
                    text: self.fallback.clone(),
                    kind: MatchKind::Fallback,
                    intent: None,
                    score: None,
                    elapsed_micros: 0,
                }
            }
        };

        Reply {
            elapsed_micros: start.elapsed().as_micros() as u64,
            ..reply
        }
    }
}
