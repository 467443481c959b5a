use roman_core::{integer_to_roman, roman_to_integer, whitespace, Expected, NumeralError};
use tracing::{debug, debug_span};

use crate::error::FormError;
use crate::mode::ConversionMode;
use crate::parse::parse_int_prefix;
use crate::settings::{self, LabelSettings, Settings};

/// What the form shows after a conversion. Exactly one field is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormResponse {
    pub result: String,
    pub error: String,
}

impl FormResponse {
    fn ok(result: String) -> Self {
        Self {
            result,
            ..Self::default()
        }
    }

    fn err(e: &FormError) -> Self {
        Self {
            error: e.to_string(),
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Dispatches form input to the conversion picked by the mode selector.
#[derive(Debug, Clone)]
pub struct ConversionForm {
    labels: LabelSettings,
    default_mode: ConversionMode,
}

impl Default for ConversionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionForm {
    /// Form configured from the global settings.
    pub fn new() -> Self {
        Self::with_settings(settings::settings())
    }

    pub fn with_settings(s: &Settings) -> Self {
        Self {
            labels: s.labels.clone(),
            default_mode: s.form.default_mode,
        }
    }

    pub fn default_mode(&self) -> ConversionMode {
        self.default_mode
    }

    /// Run one conversion. `mode` is the selector's wire name; anything other
    /// than `intToRoman` or `romanToInt` is reported as an unknown mode.
    pub fn handle(&self, mode: &str, input: &str) -> FormResponse {
        let _span = debug_span!("handle_conversion", mode).entered();
        let outcome = mode
            .parse::<ConversionMode>()
            .and_then(|m| self.convert(m, input));
        match outcome {
            Ok(result) => FormResponse::ok(result),
            Err(e) => {
                debug!(error = %e, "conversion failed");
                FormResponse::err(&e)
            }
        }
    }

    /// Same as [`handle`](Self::handle) with the configured default mode.
    pub fn handle_default(&self, input: &str) -> FormResponse {
        self.handle(self.default_mode.as_str(), input)
    }

    /// Convert and render the labelled result line.
    pub fn convert(&self, mode: ConversionMode, input: &str) -> Result<String, FormError> {
        let input = whitespace::trim(input);
        match mode {
            ConversionMode::IntToRoman => {
                let num = parse_int_prefix(input).ok_or(NumeralError::InvalidType {
                    expected: Expected::Integer,
                })?;
                let roman = integer_to_roman(num)?;
                Ok(format!("{}: {}", self.labels.roman, roman))
            }
            ConversionMode::RomanToInt => {
                let value = roman_to_integer(input)?;
                Ok(format!("{}: {}", self.labels.integer, value))
            }
        }
    }
}
