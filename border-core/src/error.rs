//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum LrrError {
    /// No value is stored under the key.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// An array does not have the shape declared by a space.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Shape declared by the space.
        expected: Vec<usize>,

        /// Shape of the given array.
        actual: Vec<usize>,
    },
}
