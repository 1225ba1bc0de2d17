//! Error type for slice and manifest output.

use thiserror::Error;

/// Errors raised while encoding slices or writing the manifest.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("invalid image data: expected {expected} pixels, got {actual}")]
    InvalidImageData { expected: usize, actual: usize },
}
