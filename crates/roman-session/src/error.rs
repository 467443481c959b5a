use roman_core::NumeralError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Numeral(#[from] NumeralError),
    #[error("Unknown conversion mode.")]
    UnknownMode(String),
}
