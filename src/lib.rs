//! HelaType engine: deterministic Singlish → Sinhala transliteration with
//! saved-text history, export sinks, and optional generative text tools.
//!
//! The core is [`translit::transliterate`], a pure longest-match converter
//! over a static mapping table. Everything stateful or fallible (history
//! persistence, assist calls, export) lives behind the [`api::HelaEngine`]
//! facade so the converter stays total, synchronous, and offline.

pub mod api;
pub mod assist;
pub mod export;
pub mod history;
pub mod settings;
pub mod trace_init;
pub mod translit;

pub use api::HelaEngine;
pub use translit::transliterate;
