//! Whitespace as the web form sees it.
//!
//! `String.prototype.trim` and `parseInt` strip U+FEFF but not U+0085, which
//! is the reverse of `char::is_whitespace` for those two code points.

/// Whitespace or line terminator in the browser's sense.
pub fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}

pub fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_form_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_is_whitespace() {
        assert_eq!(trim("\u{FEFF}IX\u{FEFF}"), "IX");
        assert_eq!(trim_start("\u{FEFF} 12 "), "12 ");
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(trim("\u{0085}IX"), "\u{0085}IX");
        assert!(!is_form_whitespace('\u{0085}'));
    }

    #[test]
    fn test_common_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{2028}', '\u{3000}'] {
            assert!(is_form_whitespace(c), "{:?}", c);
        }
        assert!(!is_form_whitespace('I'));
    }
}
