use tracing::{debug, debug_span};

use super::{MAX_VALUE, MIN_VALUE, SYMBOLS};
use crate::error::{Expected, NumeralError};

/// Longest canonical numeral (3888, `MMMDCCCLXXXVIII`).
const MAX_NUMERAL_LEN: usize = 15;

/// Convert an integer in `1..=3999` to its canonical Roman numeral.
pub fn integer_to_roman(num: i64) -> Result<String, NumeralError> {
    let _span = debug_span!("integer_to_roman", num).entered();

    if num < i64::from(MIN_VALUE) || num > i64::from(MAX_VALUE) {
        debug!(num, "out of range");
        return Err(NumeralError::OutOfRange { value: num });
    }

    // Range-checked above.
    Ok(encode(num as u16))
}

/// Convert a floating-point number that must hold an integral value.
///
/// NaN, infinities and fractional values are a type error rather than a
/// range error, matching callers that receive untyped numbers.
pub fn number_to_roman(num: f64) -> Result<String, NumeralError> {
    if !num.is_finite() || num.fract() != 0.0 {
        debug!(num, "not an integer");
        return Err(NumeralError::InvalidType {
            expected: Expected::Integer,
        });
    }
    // Saturating cast: anything beyond i64 is out of range anyway.
    integer_to_roman(num as i64)
}

fn encode(value: u16) -> String {
    let mut out = String::with_capacity(MAX_NUMERAL_LEN);
    let mut remaining = value;
    for &(step, glyph) in &SYMBOLS {
        while remaining >= step {
            out.push_str(glyph);
            remaining -= step;
        }
    }
    debug_assert_eq!(remaining, 0);
    out
}
