use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{integer_to_roman, number_to_roman, roman_to_integer, MAX_VALUE, MIN_VALUE};
use crate::error::NumeralError;

/// A value known to have a canonical Roman numeral (`1..=3999`).
///
/// Displays and serializes as the numeral. Deserializes from either a
/// numeral string or an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(u16);

impl Numeral {
    pub fn new(value: i64) -> Result<Self, NumeralError> {
        if value < i64::from(MIN_VALUE) || value > i64::from(MAX_VALUE) {
            return Err(NumeralError::OutOfRange { value });
        }
        Ok(Self(value as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn to_roman(self) -> String {
        // Infallible: the constructor enforces the range.
        integer_to_roman(i64::from(self.0)).unwrap_or_default()
    }
}

impl TryFrom<i64> for Numeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Numeral> for u16 {
    fn from(n: Numeral) -> u16 {
        n.0
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        roman_to_integer(s).map(Self)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_roman())
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Numeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumeralVisitor)
    }
}

struct NumeralVisitor;

impl<'de> Visitor<'de> for NumeralVisitor {
    type Value = Numeral;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a Roman numeral or an integer between 1 and 3999")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Numeral, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Numeral, E> {
        Numeral::new(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Numeral, E> {
        Numeral::new(i64::try_from(v).unwrap_or(i64::MAX)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Numeral, E> {
        number_to_roman(v).map_err(E::custom)?;
        Numeral::new(v as i64).map_err(E::custom)
    }
}
