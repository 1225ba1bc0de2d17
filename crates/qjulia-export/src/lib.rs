//! Output layer for qjulia-slices: grayscale PNG slices and the XML manifest
//! consumed by volumetric viewers.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod image_encoder;
pub mod manifest;

pub use error::ExportError;
pub use image_encoder::{encode_png, save_png};
pub use manifest::{Manifest, DENSITY_DIR, SUBVOXEL_BITS, VOXEL_SIZE};
