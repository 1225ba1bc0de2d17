//! qjulia-slices: samples a quaternion Julia set into a stack of grayscale
//! density slices for volumetric viewers.
//!
//! # Quick Start
//!
//! ```no_run
//! use qjulia::*;
//!
//! fn main() -> Result<()> {
//!     let params = GridParameters {
//!         x_res: 64,
//!         y_res: 64,
//!         z_res: 64,
//!         ..GridParameters::default()
//!     };
//!
//!     // Writes manifest.xml and density/slice*.png into ./out
//!     let report = generate(params, "out")?;
//!     assert!(report.is_complete());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! - [`GridSampler`] evaluates `Z <- Z*Z + C` at every interior lattice node
//!   and forces the outer shell to `2 * threshold`
//! - [`SampleGrid::pack`] clamps, normalizes, inverts and quantizes a slice
//! - [`SliceSink`] receives each packed slice; [`PngDirectory`] writes PNGs
//! - [`Manifest`] describes the volume for the viewer

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{load_params, load_params_or_default};
pub use error::{Error, Result};
pub use pipeline::{
    generate, render_slices, GenerationReport, PngDirectory, SliceFailure, SliceSink,
    MANIFEST_FILE_NAME,
};

// Re-export core types
pub use qjulia_core::{
    escape_measure, pack_sample, slice_file_name, slice_number_width, slice_pattern,
    EscapeSample, EscapeTime, GridParameters, GridSampler, PixelBuffer, QJuliaError,
    Quaternion, SampleGrid, UVec3, Vec3,
};

// Re-export output types
pub use qjulia_export::{encode_png, save_png, ExportError, Manifest, DENSITY_DIR};
