//! Conversion form handling on top of `roman-core`.
//!
//! `ConversionForm` takes a mode name and the raw text a user typed, runs the
//! matching conversion, and returns either a labelled result or the error
//! message to show in place of it.

mod error;
mod form;
mod mode;
mod parse;
pub mod settings;

#[cfg(test)]
mod tests;

pub use error::FormError;
pub use form::{ConversionForm, FormResponse};
pub use mode::ConversionMode;
pub use parse::parse_int_prefix;
