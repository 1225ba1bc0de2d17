//! Loading grid parameters from JSON files.

use std::path::Path;

use qjulia_core::{GridParameters, QJuliaError};

use crate::error::Result;

/// Reads, parses and validates a JSON parameter file.
///
/// Fields missing from the file keep their [`GridParameters::default`] values.
pub fn load_params(path: impl AsRef<Path>) -> Result<GridParameters> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(QJuliaError::from)?;
    let params = GridParameters::from_json(&json)?;
    log::info!("loaded parameters from {}", path.display());
    Ok(params)
}

/// Loads parameters from `path`, or returns the defaults when `path` is `None`.
pub fn load_params_or_default(path: Option<&Path>) -> Result<GridParameters> {
    match path {
        Some(path) => load_params(path),
        None => {
            log::info!("using default parameters");
            Ok(GridParameters::default())
        }
    }
}
