//! Persistence error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Interaction log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interaction log CSV error: {0}")]
    Csv(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl From<csv::Error> for PersistenceError {
    fn from(e: csv::Error) -> Self {
        PersistenceError::Csv(e.to_string())
    }
}

impl From<tokio::task::JoinError> for PersistenceError {
    fn from(e: tokio::task::JoinError) -> Self {
        PersistenceError::Task(e.to_string())
    }
}
