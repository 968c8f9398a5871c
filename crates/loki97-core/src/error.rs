//! Error types for the LOKI97 cipher.

use std::fmt;

/// Input-validation errors reported before any cryptographic work begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Master key byte length is not 16, 24, or 32.
    InvalidKeyLength {
        /// The offending key length in bytes.
        len: usize,
    },
    /// Message or ciphertext byte length is not a multiple of 16.
    InvalidMessageLength {
        /// The offending message length in bytes.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { len } => {
                write!(f, "key length must be 16, 24, or 32 bytes, got {len}")
            }
            Error::InvalidMessageLength { len } => {
                write!(f, "message length must be a multiple of 16 bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_key_length() {
        let err = Error::InvalidKeyLength { len: 17 };
        assert_eq!(
            format!("{}", err),
            "key length must be 16, 24, or 32 bytes, got 17"
        );
    }

    #[test]
    fn display_invalid_message_length() {
        let err = Error::InvalidMessageLength { len: 15 };
        assert_eq!(
            format!("{}", err),
            "message length must be a multiple of 16 bytes, got 15"
        );
    }
}
