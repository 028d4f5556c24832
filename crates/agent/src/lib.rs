//! Concierge conversation agent
//!
//! Matches a guest's free-text message against the intent catalog and replies
//! with one of the matched intent's canned responses:
//! - Exact: every token of some pattern appears in the message
//! - Fuzzy: best similarity ratio over all patterns, accepted above a threshold
//! - Fallback: fixed reply when neither strategy finds an intent

pub mod matcher;
pub mod responder;
pub mod selector;
pub mod similarity;

pub use matcher::{exact_match, fuzzy_match, CompiledCatalog, CompiledPattern, FuzzyHit, NormalizedInput};
pub use responder::{IntentMatch, MatchKind, Reply, Responder};
pub use selector::{FirstResponseSelector, RandomSelector};
pub use similarity::{ratio, Match, SequenceMatcher};
