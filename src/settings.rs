//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub history: HistorySettings,
    pub assist: AssistSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    pub file_name: String,
    pub max_records: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistSettings {
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub default_file_name: String,
}

fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let parsed: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;

    if parsed.history.max_records == 0 {
        return Err(SettingsError::InvalidValue {
            field: "history.max_records".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if parsed.assist.timeout_secs == 0 {
        return Err(SettingsError::InvalidValue {
            field: "assist.timeout_secs".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if parsed.history.file_name.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "history.file_name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(parsed)
}
