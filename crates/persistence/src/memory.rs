//! In-process interaction log, used when file logging is disabled and in tests

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::interactions::{InteractionLog, InteractionRecord};
use crate::PersistenceError;

#[derive(Default)]
pub struct InMemoryInteractionLog {
    records: RwLock<Vec<InteractionRecord>>,
}

impl InMemoryInteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl InteractionLog for InMemoryInteractionLog {
    async fn append(&self, record: &InteractionRecord) -> Result<(), PersistenceError> {
        self.records.write().push(record.clone());
        Ok(())
    }

    async fn history(&self) -> Result<Vec<InteractionRecord>, PersistenceError> {
        Ok(self.records.read().clone())
    }
}
