//! Custom error types for fieldseal
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fieldseal operations
#[derive(Error, Debug)]
pub enum FieldsealError {
    /// Configuration-related errors: invalid or missing key, missing
    /// engine reference. Raised at construction time rather than at the
    /// first encrypt/decrypt call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Decryption failures surfaced at the CLI edge.
    ///
    /// The library itself never returns this: [`crate::crypto::Encrypter::decrypt`]
    /// reports failure through its `Option` return value so a corrupted
    /// field cannot abort a batch read.
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl FieldsealError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FieldsealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FieldsealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fieldseal operations
pub type FieldsealResult<T> = Result<T, FieldsealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldsealError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_is_config() {
        assert!(FieldsealError::Config("bad key".into()).is_config());
        assert!(!FieldsealError::Io("disk on fire".into()).is_config());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FieldsealError = io_err.into();
        assert!(matches!(err, FieldsealError::Io(_)));
    }
}
