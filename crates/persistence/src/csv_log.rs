//! CSV-file interaction log
//!
//! One header row (`User Input,Chatbot Response,Timestamp`) followed by one row per
//! exchange. File access runs on the blocking pool under a per-log lock; clones
//! share it, so share one instance (or its clones) per file.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::interactions::{InteractionLog, InteractionRecord, HEADER};
use crate::PersistenceError;

/// Interaction log backed by a CSV file
#[derive(Clone)]
pub struct CsvInteractionLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl CsvInteractionLog {
    /// Open the log at `path`, creating the file and its header row if missing
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let log = Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        };

        let path = log.path.clone();
        let lock = Arc::clone(&log.lock);
        let created = tokio::task::spawn_blocking(move || {
            let _guard = lock.lock();
            ensure_header(&path)
        })
        .await??;

        if created {
            tracing::info!(path = %log.path.display(), "Created interaction log");
        }
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write the header row if the file does not exist yet. Returns whether it was created.
fn ensure_header(path: &Path) -> Result<bool, PersistenceError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    writer.flush()?;
    Ok(true)
}

fn append_row(path: &Path, record: &InteractionRecord) -> Result<(), PersistenceError> {
    ensure_header(path)?;

    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}

fn read_rows(path: &Path) -> Result<Vec<InteractionRecord>, PersistenceError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for (line, row) in reader.deserialize::<InteractionRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => {
                // Header is line 1
                tracing::warn!(line = line + 2, error = %e, "Skipping malformed interaction row");
            }
        }
    }
    Ok(records)
}

#[async_trait]
impl InteractionLog for CsvInteractionLog {
    async fn append(&self, record: &InteractionRecord) -> Result<(), PersistenceError> {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);
        let record = record.clone();

        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock();
            append_row(&path, &record)
        })
        .await??;

        tracing::debug!(path = %self.path.display(), "Interaction appended");
        Ok(())
    }

    async fn history(&self) -> Result<Vec<InteractionRecord>, PersistenceError> {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);

        let records = tokio::task::spawn_blocking(move || {
            let _guard = lock.lock();
            read_rows(&path)
        })
        .await??;
        Ok(records)
    }
}
