use tracing::{debug, debug_span};

use super::encode::integer_to_roman;
use super::glyph_value;
use crate::error::NumeralError;
use crate::whitespace;

/// Convert a Roman numeral to its value.
///
/// Surrounding whitespace is ignored and letters are case-insensitive. Only
/// canonical numerals are accepted: the decoded value is re-encoded and must
/// reproduce the normalized input exactly.
pub fn roman_to_integer(roman: &str) -> Result<u16, NumeralError> {
    let normalized = whitespace::trim(roman).to_uppercase();
    let _span = debug_span!("roman_to_integer", input = normalized.as_str()).entered();

    if normalized.is_empty() {
        debug!("empty input");
        return Err(NumeralError::InvalidFormat);
    }

    let glyphs = normalized
        .chars()
        .map(glyph_value)
        .collect::<Option<Vec<u16>>>()
        .ok_or_else(|| {
            debug!("character outside MDCLXVI");
            NumeralError::InvalidFormat
        })?;

    let total = scan(&glyphs);

    match integer_to_roman(total) {
        Ok(reencoded) if reencoded == normalized => Ok(total as u16),
        Ok(reencoded) => {
            debug!(total, reencoded = reencoded.as_str(), "not canonical");
            Err(NumeralError::InvalidFormat)
        }
        Err(_) => {
            debug!(total, "decoded value has no numeral");
            Err(NumeralError::InvalidFormat)
        }
    }
}

/// Left-to-right sum, folding a glyph followed by a larger one into a
/// subtractive pair.
fn scan(glyphs: &[u16]) -> i64 {
    let mut total: i64 = 0;
    let mut i = 0;
    while i < glyphs.len() {
        let current = glyphs[i];
        let next = glyphs.get(i + 1).copied().unwrap_or(0);
        if next > current {
            total = total.saturating_add(i64::from(next - current));
            i += 2;
        } else {
            total = total.saturating_add(i64::from(current));
            i += 1;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(roman_to_integer("I").unwrap(), 1);
        assert_eq!(roman_to_integer("IX").unwrap(), 9);
        assert_eq!(roman_to_integer("LVIII").unwrap(), 58);
        assert_eq!(roman_to_integer("MCMXCIV").unwrap(), 1994);
        assert_eq!(roman_to_integer("MMMCMXCIX").unwrap(), 3999);
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(roman_to_integer("mcmxciv").unwrap(), 1994);
        assert_eq!(roman_to_integer("McMxCiV").unwrap(), 1994);
        assert_eq!(roman_to_integer("  xlii\t\n").unwrap(), 42);
    }

    #[test]
    fn test_form_whitespace() {
        assert_eq!(roman_to_integer("\u{FEFF}IX").unwrap(), 9);
        assert_eq!(roman_to_integer("\u{00A0}ix\u{2028}").unwrap(), 9);
        assert_eq!(
            roman_to_integer("\u{0085}IX"),
            Err(NumeralError::InvalidFormat)
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(roman_to_integer(""), Err(NumeralError::InvalidFormat));
        assert_eq!(roman_to_integer("   "), Err(NumeralError::InvalidFormat));
    }

    #[test]
    fn test_foreign_characters() {
        for s in ["ABC", "X I", "12", "IV.", "Ⅻ", "ⅰ", "MCMXCIVß", "X-I"] {
            assert_eq!(roman_to_integer(s), Err(NumeralError::InvalidFormat), "{s}");
        }
    }

    #[test]
    fn test_non_canonical() {
        for s in [
            "IM", "VX", "IIII", "IXIX", "MMMM", "VV", "LL", "DD", "LC", "XM", "IL", "IC",
            "XXXX", "CCCC", "VIV", "IIV", "XCX", "CMCM", "MMMMCMXCIX",
        ] {
            assert_eq!(roman_to_integer(s), Err(NumeralError::InvalidFormat), "{s}");
        }
    }

    #[test]
    fn test_scan_subtractive_pairs() {
        assert_eq!(scan(&[1, 5]), 4);
        assert_eq!(scan(&[10, 1, 10]), 19);
        assert_eq!(scan(&[1, 1000]), 999);
        assert_eq!(scan(&[]), 0);
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        let long = "M".repeat(100_000);
        assert_eq!(roman_to_integer(&long), Err(NumeralError::InvalidFormat));
    }
}
