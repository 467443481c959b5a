//! Conversion between integers and canonical Roman numerals.
//!
//! Both directions share one ordered symbol table. Decoding is validated by
//! re-encoding the decoded value, so the encoder's output set is the exact
//! definition of a valid numeral.

pub mod error;
pub mod numeral;
pub mod whitespace;

pub use error::{ErrorKind, Expected, NumeralError};
pub use numeral::{
    integer_to_roman, integer_to_roman_value, number_to_roman, roman_to_integer,
    roman_to_integer_value, Numeral, MAX_VALUE, MIN_VALUE, SYMBOLS,
};
