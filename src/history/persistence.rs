use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HistoryRecord, HistoryStore};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid history data: {0}")]
    InvalidData(String),
    #[error("unsupported history version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Serialize to the versioned JSON envelope.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        let file = HistoryFile {
            version: FORMAT_VERSION,
            records: self.records.clone(),
        };
        serde_json::to_string_pretty(&file).map_err(|e| HistoryError::InvalidData(e.to_string()))
    }

    /// Deserialize from the versioned JSON envelope, enforcing the cap.
    pub fn from_json(json: &str, max_records: usize) -> Result<Self, HistoryError> {
        let file: HistoryFile =
            serde_json::from_str(json).map_err(|e| HistoryError::InvalidData(e.to_string()))?;
        if file.version != FORMAT_VERSION {
            return Err(HistoryError::UnsupportedVersion(file.version));
        }
        let mut records = file.records;
        records.truncate(max_records);
        Ok(Self {
            records,
            max_records,
        })
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = self.to_json()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, json.as_bytes())?;
        fs::rename(&tmp, path)?;
        debug!(path = %path.display(), record_count = self.records.len(), "history saved");
        Ok(())
    }

    /// Open from file, returning an empty store if the file doesn't exist.
    pub fn open(path: &Path, max_records: usize) -> Result<Self, HistoryError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json, max_records),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new(max_records)),
            Err(e) => Err(HistoryError::Io(e)),
        }
    }
}
