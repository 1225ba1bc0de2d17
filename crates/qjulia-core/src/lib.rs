//! Core sampling engine for qjulia-slices.
//!
//! This crate turns a set of [`GridParameters`] into 8-bit density slices:
//! - [`Quaternion`] arithmetic and the escape-time map `Z <- Z*Z + C`
//! - [`GridSampler`] walking a regular 3D lattice with a closed border shell
//! - [`SampleGrid::pack`] normalizing raw escape measures into a [`PixelBuffer`]
//! - Slice file naming shared with the manifest pattern

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod escape;
pub mod naming;
pub mod params;
pub mod quaternion;
pub mod sampler;
pub mod slice;

pub use error::{QJuliaError, Result};
pub use escape::{escape_measure, EscapeSample, EscapeTime};
pub use naming::{digit_count, slice_file_name, slice_number_width, slice_pattern};
pub use params::GridParameters;
pub use quaternion::Quaternion;
pub use sampler::GridSampler;
pub use slice::{pack_sample, PixelBuffer, SampleGrid};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
