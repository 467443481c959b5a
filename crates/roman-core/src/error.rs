use std::fmt;

/// The input type a conversion expected but did not receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Integer,
    String,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Integer => f.write_str("an integer"),
            Expected::String => f.write_str("a string"),
        }
    }
}

/// Errors raised by the numeral conversions.
///
/// The messages are fixed; callers render them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("Input must be {expected}.")]
    InvalidType { expected: Expected },
    #[error("The number must be between 1 and 3999.")]
    OutOfRange { value: i64 },
    #[error("Input must be a valid Roman numeral.")]
    InvalidFormat,
}

/// Coarse classification of a [`NumeralError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidType,
    OutOfRange,
    InvalidFormat,
}

impl NumeralError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumeralError::InvalidType { .. } => ErrorKind::InvalidType,
            NumeralError::OutOfRange { .. } => ErrorKind::OutOfRange,
            NumeralError::InvalidFormat => ErrorKind::InvalidFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(
            NumeralError::InvalidType {
                expected: Expected::Integer
            }
            .to_string(),
            "Input must be an integer."
        );
        assert_eq!(
            NumeralError::InvalidType {
                expected: Expected::String
            }
            .to_string(),
            "Input must be a string."
        );
        assert_eq!(
            NumeralError::OutOfRange { value: 4000 }.to_string(),
            "The number must be between 1 and 3999."
        );
        assert_eq!(
            NumeralError::InvalidFormat.to_string(),
            "Input must be a valid Roman numeral."
        );
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(
            NumeralError::OutOfRange { value: -1 }.kind(),
            NumeralError::OutOfRange { value: 9000 }.kind()
        );
        assert_eq!(
            NumeralError::InvalidType {
                expected: Expected::String
            }
            .kind(),
            ErrorKind::InvalidType
        );
    }
}
