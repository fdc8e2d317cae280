//! Error types for format operations
//!
//! Conversion itself never fails; these errors come from the outer surfaces
//! (looking up an output format, parsing its options, encoding the result).

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while encoding the document
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation or parameter
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A known parameter received a value it cannot use
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },
}
