//! Error types for arrayview.
//!
//! Only the checked operations, runtime-shaped construction and the ambient
//! layers (configuration, I/O) produce errors. The unchecked view reports
//! nothing: out-of-range and dangling access stay undefined behaviour.

use thiserror::Error;

/// Main error type for arrayview operations.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Initializer count differs from the declared element count
    #[error("shape mismatch: block declares {expected} elements, initializer has {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Checked access outside `0..len`
    #[error("index {index} out of range for block of {len} elements")]
    OutOfRange { index: isize, len: usize },

    /// Handle does not address an element of the block it was checked against
    #[error("address {address} does not name an element of block at {base} ({len} elements)")]
    ForeignAddress {
        address: String,
        base: String,
        len: usize,
    },

    /// Configuration could not be loaded or is malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for arrayview operations
pub type Result<T> = std::result::Result<T, ViewError>;

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::Serialization(err.to_string())
    }
}
