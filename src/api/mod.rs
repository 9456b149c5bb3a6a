//! Application facade tying the pure converter to its collaborators:
//! history persistence, the optional assistant, and export sinks.

pub mod engine;
pub mod types;

pub use engine::HelaEngine;
pub use types::{EngineError, SavedItem};
