//! Error types for the disposition crate.

use thiserror::Error;

/// The main error type for the disposition crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid disposition type supplied to the formatter
    #[error("invalid disposition type: {0}")]
    Type(String),

    /// Header value violates the RFC 6266 grammar
    #[error("malformed header value: {0}")]
    Format(String),

    /// Extended value bytes could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

/// Specialized Result type for disposition operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Type("inva lid".to_string());
        assert_eq!(err.to_string(), "invalid disposition type: inva lid");

        let err = Error::Format("unterminated quoted-string".to_string());
        assert_eq!(
            err.to_string(),
            "malformed header value: unterminated quoted-string"
        );

        let err = Error::Decode("invalid UTF-8".to_string());
        assert_eq!(err.to_string(), "decode error: invalid UTF-8");
    }

    #[test]
    fn test_error_debug() {
        let err = Error::Format("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Format"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(Error::Type("error".to_string()));
        assert!(err_result.is_err());
    }
}
