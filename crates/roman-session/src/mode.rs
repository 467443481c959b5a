use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Direction of a conversion, named as on the form's mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionMode {
    #[serde(rename = "intToRoman")]
    IntToRoman,
    #[serde(rename = "romanToInt")]
    RomanToInt,
}

impl ConversionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionMode::IntToRoman => "intToRoman",
            ConversionMode::RomanToInt => "romanToInt",
        }
    }
}

impl FromStr for ConversionMode {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intToRoman" => Ok(ConversionMode::IntToRoman),
            "romanToInt" => Ok(ConversionMode::RomanToInt),
            other => Err(FormError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
