//! Core types for the concierge responder
//!
//! Holds the intent catalog and the seams the rest of the workspace plugs into:
//! - [`IntentCatalog`]: validated, ordered, read-only set of intents
//! - [`CatalogProvider`]: where a catalog comes from
//! - [`ResponseSelector`]: how one canned response is picked
//!
//! Nothing in this crate knows about text normalization, matching or I/O.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod traits;

pub use catalog::{CatalogDocument, Intent, IntentCatalog};
pub use error::{CatalogError, Result};
pub use traits::{CatalogProvider, ResponseSelector, StaticCatalogProvider};
