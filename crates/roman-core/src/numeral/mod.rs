//! The symbol table and both conversion directions.
//!
//! Encoding walks [`SYMBOLS`] greedily from the largest entry. Decoding scans
//! single glyphs, folds subtractive pairs, then re-encodes the total and
//! rejects anything that does not reproduce the normalized input.

mod decode;
mod encode;
mod typed;
mod value;


pub use decode::roman_to_integer;
pub use encode::{integer_to_roman, number_to_roman};
pub use typed::Numeral;
pub use value::{integer_to_roman_value, roman_to_integer_value};

/// Smallest value with a Roman representation.
pub const MIN_VALUE: u16 = 1;
/// Largest value with a Roman representation.
pub const MAX_VALUE: u16 = 3999;

/// Value/glyph pairs, largest first. Includes the six subtractive pairs.
pub const SYMBOLS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of a single uppercase glyph, looked up in the one-character
/// entries of [`SYMBOLS`].
pub(crate) fn glyph_value(c: char) -> Option<u16> {
    SYMBOLS.iter().find_map(|&(value, glyph)| {
        let mut chars = glyph.chars();
        (chars.next() == Some(c) && chars.next().is_none()).then_some(value)
    })
}
