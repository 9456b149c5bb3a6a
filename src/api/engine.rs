use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::types::{EngineError, SavedItem};
use crate::assist::{AssistTask, Assistant};
use crate::export::TextSink;
use crate::history::{HistoryRecord, HistoryStore};
use crate::settings::settings;
use crate::translit::transliterate;

/// Label used when no assistant is configured or the assist call fails.
const DEFAULT_LABEL: &str = "සටහන";

/// The HelaType application engine: the pure converter plus its stateful
/// collaborators. The converter itself stays free of storage and network
/// concerns; everything fallible lives here.
pub struct HelaEngine {
    history: RwLock<HistoryStore>,
    history_path: Option<PathBuf>,
    assistant: Option<Box<dyn Assistant + Send + Sync>>,
}

impl HelaEngine {
    /// In-memory engine with no persistence and no assistant.
    pub fn new() -> Self {
        Self {
            history: RwLock::new(HistoryStore::new(settings().history.max_records)),
            history_path: None,
            assistant: None,
        }
    }

    /// Engine with history loaded from `path` (empty when the file does not
    /// exist yet); every history mutation is persisted back to it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let path = path.into();
        let store = HistoryStore::open(&path, settings().history.max_records)?;
        Ok(Self {
            history: RwLock::new(store),
            history_path: Some(path),
            assistant: None,
        })
    }

    pub fn with_assistant(mut self, assistant: Box<dyn Assistant + Send + Sync>) -> Self {
        self.assistant = Some(assistant);
        self
    }

    /// Transliterate Singlish input. Pure pass-through to the converter;
    /// safe to call on every keystroke.
    pub fn convert(&self, input: &str) -> String {
        transliterate(input)
    }

    /// Save text to history with a smart label. An assist failure never
    /// loses the text: the save proceeds with the default label.
    pub fn save_text(&self, text: &str) -> Result<SavedItem, EngineError> {
        let label = match &self.assistant {
            Some(assistant) => match assistant.assist(&AssistTask::TitleLabel.prompt(text)) {
                Ok(label) => label,
                Err(e) => {
                    debug!(error = %e, "smart label failed, using default");
                    DEFAULT_LABEL.to_string()
                }
            },
            None => DEFAULT_LABEL.to_string(),
        };

        let record = self.write_history(|h| h.add(text))?;
        Ok(SavedItem { record, label })
    }

    /// Run an assist task over the given text, returning the rewrite.
    pub fn assist_rewrite(&self, task: AssistTask, text: &str) -> Result<String, EngineError> {
        let assistant = self.assistant.as_ref().ok_or(EngineError::NoAssistant)?;
        debug!(task = task.label(), in_len = text.len());
        Ok(assistant.assist(&task.prompt(text))?)
    }

    /// Snapshot of the saved records, newest first.
    pub fn history_records(&self) -> Vec<HistoryRecord> {
        self.read_history().records().to_vec()
    }

    /// Remove a saved record by id. Returns whether it existed.
    pub fn remove_history(&self, id: &str) -> Result<bool, EngineError> {
        self.write_history(|h| h.remove(id))
    }

    pub fn clear_history(&self) -> Result<(), EngineError> {
        self.write_history(|h| h.clear())
    }

    /// Write `text` to an export sink (file, clipboard, ...).
    pub fn export(&self, text: &str, sink: &mut dyn TextSink) -> Result<(), EngineError> {
        sink.write_text(text)?;
        Ok(())
    }

    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }

    fn read_history(&self) -> std::sync::RwLockReadGuard<'_, HistoryStore> {
        self.history.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate the store, then persist if a path is configured.
    fn write_history<T>(&self, f: impl FnOnce(&mut HistoryStore) -> T) -> Result<T, EngineError> {
        let result = {
            let mut guard = self.history.write().unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut guard);
            if let Some(path) = &self.history_path {
                guard.save(path)?;
            }
            result
        };
        Ok(result)
    }
}

impl Default for HelaEngine {
    fn default() -> Self {
        Self::new()
    }
}
