use roman_core::whitespace;

/// Parse a leading base-10 integer the way a browser's `parseInt(s, 10)` does.
///
/// Leading whitespace and one sign are accepted, digits are read until the
/// first non-digit, and the rest is ignored. Returns `None` when no digit
/// is found. Values beyond `i64` saturate.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = whitespace::trim_start(s);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(d);
    }
    if !seen {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(parse_int_prefix("1994"), Some(1994));
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("007"), Some(7));
    }

    #[test]
    fn test_sign_and_whitespace() {
        assert_eq!(parse_int_prefix("  -12"), Some(-12));
        assert_eq!(parse_int_prefix("+12"), Some(12));
        assert_eq!(parse_int_prefix("- 12"), None);
        assert_eq!(parse_int_prefix("--1"), None);
    }

    #[test]
    fn test_form_whitespace() {
        assert_eq!(parse_int_prefix("\u{FEFF}12"), Some(12));
        assert_eq!(parse_int_prefix("\u{3000}-7"), Some(-7));
        assert_eq!(parse_int_prefix("\u{0085}12"), None);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_int_prefix("42abc"), Some(42));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix("1e3"), Some(1));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("XIV"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(".5"), None);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(-i64::MAX));
    }
}
