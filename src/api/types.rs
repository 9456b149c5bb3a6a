use crate::assist::AssistError;
use crate::history::{HistoryError, HistoryRecord};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("assist failed: {0}")]
    Assist(#[from] AssistError),
    #[error("no assistant configured")]
    NoAssistant,
}

/// Result of a smart save: the persisted record plus the label shown to the
/// user (assistant-generated, or the default when assist was unavailable).
#[derive(Debug, Clone)]
pub struct SavedItem {
    pub record: HistoryRecord,
    pub label: String,
}
