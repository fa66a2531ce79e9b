//! File-backed history of discovery cycle outcomes.
//!
//! The full history lives in one JSON array on disk. Every access reads the
//! whole file; every append rewrites it, so a record is durable before
//! `append` returns and a restarted process observes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::schema::{Architecture, CycleRecord};

/// Errors raised by the history store. Fatal to the cycle that hits them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("history I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("history file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Durable, append-only log of cycle records.
///
/// The store trusts its caller: no deduplication, no validation of record
/// contents. Records are never mutated or deleted once appended.
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    /// Open a store at the given path, creating parent directories.
    /// A file that does not exist yet is an empty history.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        Ok(Self { path })
    }

    /// Read the full ordered history.
    pub fn load_all(&self) -> Result<Vec<CycleRecord>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save_all(&self, records: &[CycleRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Architecture of the best-scoring record across the entire history,
    /// or the fixed baseline when the history is empty. Empty is a valid
    /// initial state, not an error.
    pub fn sample_parent(&self) -> Result<Architecture, StorageError> {
        let records = self.load_all()?;
        Ok(match best_record(&records) {
            Some(best) => best.architecture.clone(),
            None => Architecture::baseline(),
        })
    }

    /// Best record by composite score; the earliest wins ties.
    pub fn best(&self) -> Result<Option<CycleRecord>, StorageError> {
        Ok(best_record(&self.load_all()?).cloned())
    }

    /// Append one record. The full history is rewritten before returning.
    pub fn append(&self, record: CycleRecord) -> Result<(), StorageError> {
        let mut records = self.load_all()?;
        records.push(record);
        self.save_all(&records)
    }

    /// Number of recorded cycles.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.load_all()?.len())
    }

    /// Check whether any cycle has been recorded.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.load_all()?.is_empty())
    }
}

/// Scan for the maximum composite score, keeping the first on ties.
fn best_record(records: &[CycleRecord]) -> Option<&CycleRecord> {
    let mut best: Option<&CycleRecord> = None;
    for record in records {
        match best {
            Some(current) if record.composite_score > current.composite_score => {
                best = Some(record);
            }
            None => best = Some(record),
            _ => {}
        }
    }
    best
}
