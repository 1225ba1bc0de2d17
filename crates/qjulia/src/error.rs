//! Error type for whole-volume generation.

use qjulia_core::QJuliaError;
use qjulia_export::ExportError;
use thiserror::Error;

/// Fatal errors that stop a generation run.
///
/// Per-slice encoder failures are not fatal and are collected in the
/// [`GenerationReport`](crate::GenerationReport) instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Sampling(#[from] QJuliaError),

    #[error("failed to write manifest: {0}")]
    Manifest(#[source] ExportError),

    #[error("failed to prepare output directory {path}: {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;
