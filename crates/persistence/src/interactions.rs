//! Interaction records and the log abstraction

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::PersistenceError;

/// Timestamp layout used in the log, second precision, local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column names of the CSV header row
pub const HEADER: [&str; 3] = ["User Input", "Chatbot Response", "Timestamp"];

/// One guest message and the reply it got
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(rename = "User Input")]
    pub input: String,

    #[serde(rename = "Chatbot Response")]
    pub response: String,

    #[serde(rename = "Timestamp", with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

impl InteractionRecord {
    /// Record stamped with the current local time
    pub fn new(input: impl Into<String>, response: impl Into<String>) -> Self {
        Self::at(input, response, Local::now().naive_local())
    }

    /// Record with an explicit timestamp, truncated to whole seconds
    pub fn at(input: impl Into<String>, response: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            input: input.into(),
            response: response.into(),
            timestamp: timestamp.trunc_subsecs(0),
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Append-only conversation record
#[async_trait]
pub trait InteractionLog: Send + Sync {
    /// Append one record after the existing ones
    async fn append(&self, record: &InteractionRecord) -> Result<(), PersistenceError>;

    /// Every record, oldest first
    async fn history(&self) -> Result<Vec<InteractionRecord>, PersistenceError>;
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
