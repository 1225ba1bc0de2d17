//! Error types for qjulia-slices.

use thiserror::Error;

/// The main error type for sampling and configuration operations.
#[derive(Error, Debug)]
pub enum QJuliaError {
    /// Grid parameters violate a sampling precondition.
    #[error("invalid grid parameters: {0}")]
    InvalidParameters(String),

    /// A slice index outside `[0, z_res)` was requested.
    #[error("slice index {index} out of range for {count} slices")]
    SliceOutOfRange { index: u32, count: u32 },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for qjulia-slices operations.
pub type Result<T> = std::result::Result<T, QJuliaError>;
