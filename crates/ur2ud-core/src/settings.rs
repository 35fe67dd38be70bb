//! Engine settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` parses and validates user settings
//! - `Settings::default()` is the embedded `default_settings.toml`

use std::path::PathBuf;

use serde::Deserialize;

use crate::tables::Scheme;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub engine: EngineSettings,
    #[serde(default)]
    pub tables: TableSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSettings {
    #[serde(default)]
    pub scheme: Scheme,
    #[serde(default = "default_accented_vowels")]
    pub accented_vowels: bool,
}

fn default_accented_vowels() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSettings {
    /// Custom table asset; the built-in tables are used when absent.
    pub path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if let Some(path) = &s.tables.path {
        if path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "tables.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
