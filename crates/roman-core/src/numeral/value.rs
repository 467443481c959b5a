//! Entry points for dynamically typed input, such as values read from JSON.
//! The wrong JSON type is reported as `InvalidType`.

use serde_json::Value;

use super::{integer_to_roman, number_to_roman, roman_to_integer};
use crate::error::{Expected, NumeralError};

pub fn integer_to_roman_value(value: &Value) -> Result<String, NumeralError> {
    let Value::Number(n) = value else {
        return Err(NumeralError::InvalidType {
            expected: Expected::Integer,
        });
    };
    if let Some(i) = n.as_i64() {
        integer_to_roman(i)
    } else if let Some(u) = n.as_u64() {
        integer_to_roman(i64::try_from(u).unwrap_or(i64::MAX))
    } else {
        number_to_roman(n.as_f64().unwrap_or(f64::NAN))
    }
}

pub fn roman_to_integer_value(value: &Value) -> Result<u16, NumeralError> {
    match value {
        Value::String(s) => roman_to_integer(s),
        _ => Err(NumeralError::InvalidType {
            expected: Expected::String,
        }),
    }
}
