//! Form and batch settings.
//!
//! The defaults ship inside the crate as `default_settings.toml`. A caller
//! may swap in its own TOML with [`init_custom`], but only until something
//! has read [`settings`]; after that the values are frozen for the process.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::mode::ConversionMode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static OVERRIDE: OnceLock<String> = OnceLock::new();
static ACTIVE: OnceLock<Settings> = OnceLock::new();

/// Validate `toml_content` and install it in place of the defaults.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if ACTIVE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    OVERRIDE
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// The active settings, parsed on first use.
pub fn settings() -> &'static Settings {
    ACTIVE.get_or_init(|| {
        let source = OVERRIDE.get().map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        // Both sources were validated: the default by build.rs and the unit
        // tests, an override by init_custom.
        parse_settings_toml(source).expect("installed settings TOML is valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings TOML is malformed: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings were already read; a custom TOML can no longer be installed")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub form: FormSettings,
    pub labels: LabelSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormSettings {
    pub default_mode: ConversionMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelSettings {
    pub roman: String,
    pub integer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    pub max_line_bytes: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_blank {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_blank!(labels.roman);
    check_non_blank!(labels.integer);

    if s.batch.max_line_bytes == 0 {
        return Err(SettingsError::InvalidValue {
            field: "batch.max_line_bytes".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    // form.default_mode is checked by deserialization into ConversionMode

    Ok(())
}
