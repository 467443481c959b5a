use std::fs;
use std::process::ExitCode;

use roman_session::settings::SettingsError;

pub fn settings_export() -> ExitCode {
    print!("{}", roman_session::settings::default_toml());
    ExitCode::SUCCESS
}

pub fn settings_validate(file: &str) -> ExitCode {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        roman_session::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: form.default_mode={}, labels.roman={}, labels.integer={}, batch.max_line_bytes={}",
        s.form.default_mode, s.labels.roman, s.labels.integer, s.batch.max_line_bytes
    );
    ExitCode::SUCCESS
}

#[derive(Debug, thiserror::Error)]
pub enum LoadSettingsError {
    #[error("Error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Error loading settings: {0}")]
    Invalid(#[from] SettingsError),
}

/// Install a custom settings file before anything reads the global settings.
pub fn load_settings(file: &str) -> Result<(), LoadSettingsError> {
    let content = fs::read_to_string(file).map_err(|source| LoadSettingsError::Read {
        path: file.to_string(),
        source,
    })?;
    roman_session::settings::init_custom(content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_settings(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadSettingsError::Read { .. }));
        assert!(err.to_string().starts_with("Error reading"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[labels]\nroman = \"\"\n").unwrap();
        let err = load_settings(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadSettingsError::Invalid(_)));
    }
}
