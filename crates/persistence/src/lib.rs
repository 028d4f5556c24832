//! Interaction log for the concierge
//!
//! Every exchange (guest input, reply, timestamp) is appended to a log that can be
//! read back in order:
//! - [`CsvInteractionLog`]: CSV file with a header row
//! - [`InMemoryInteractionLog`]: process-local, nothing survives a restart

pub mod csv_log;
pub mod error;
pub mod interactions;
pub mod memory;

use std::sync::Arc;

use concierge_config::InteractionLogConfig;

pub use csv_log::CsvInteractionLog;
pub use error::PersistenceError;
pub use interactions::{InteractionLog, InteractionRecord, HEADER, TIMESTAMP_FORMAT};
pub use memory::InMemoryInteractionLog;

/// Build the interaction log described by `config`
///
/// The CSV file and its header are created up front, so a bad path fails at
/// startup rather than on the first message.
pub async fn init(config: &InteractionLogConfig) -> Result<Arc<dyn InteractionLog>, PersistenceError> {
    if config.enabled {
        let log = CsvInteractionLog::open(&config.path).await?;
        Ok(Arc::new(log))
    } else {
        tracing::info!("Interaction log disabled, keeping history in memory");
        Ok(Arc::new(InMemoryInteractionLog::new()))
    }
}
