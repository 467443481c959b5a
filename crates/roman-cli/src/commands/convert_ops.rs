use std::process::ExitCode;

use roman_core::{integer_to_roman, roman_to_integer, MAX_VALUE, MIN_VALUE};
use roman_session::ConversionForm;

pub fn to_roman_cmd(n: i64) -> ExitCode {
    let roman = die!(integer_to_roman(n), "Error: {}");
    println!("{roman}");
    ExitCode::SUCCESS
}

pub fn to_int_cmd(numeral: &str) -> ExitCode {
    let value = die!(roman_to_integer(numeral), "Error: {}");
    println!("{value}");
    ExitCode::SUCCESS
}

/// Emulate the conversion form: print the result line, or the error line on
/// stderr and fail.
pub fn convert_cmd(mode: Option<&str>, input: &str) -> ExitCode {
    let form = ConversionForm::new();
    let mode = mode.unwrap_or(form.default_mode().as_str());
    let resp = form.handle(mode, input);
    if resp.is_ok() {
        println!("{}", resp.result);
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", resp.error);
        ExitCode::FAILURE
    }
}

/// Rows of `value<TAB>numeral` for `from..=to`, clamped to the valid range.
pub fn table_rows(from: u16, to: u16) -> Vec<(u16, String)> {
    (from.max(MIN_VALUE)..=to.min(MAX_VALUE))
        .filter_map(|n| integer_to_roman(i64::from(n)).ok().map(|r| (n, r)))
        .collect()
}

pub fn table_cmd(from: u16, to: u16) -> ExitCode {
    for (n, roman) in table_rows(from, to) {
        println!("{n}\t{roman}");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let rows = table_rows(1, 5);
        let rendered: Vec<&str> = rows.iter().map(|(_, r)| r.as_str()).collect();
        assert_eq!(rendered, vec!["I", "II", "III", "IV", "V"]);
    }

    #[test]
    fn test_table_rows_clamped() {
        assert_eq!(table_rows(0, 1), vec![(1, "I".to_string())]);
        assert_eq!(table_rows(3998, u16::MAX).len(), 2);
        assert!(table_rows(10, 5).is_empty());
    }
}
