//! Extension points
//!
//! The responder is generic over where its catalog comes from and how a reply is
//! picked among an intent's candidates.

mod provider;
mod selector;

pub use provider::{CatalogProvider, StaticCatalogProvider};
pub use selector::ResponseSelector;
