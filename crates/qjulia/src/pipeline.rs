//! Whole-volume generation: manifest, then one PNG per z-slice.

use std::path::{Path, PathBuf};

use qjulia_core::{slice_file_name, slice_number_width, GridParameters, GridSampler, PixelBuffer};
use qjulia_export::{save_png, ExportError, Manifest, DENSITY_DIR};

use crate::error::{Error, Result};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.xml";

/// Destination for packed slices.
pub trait SliceSink {
    /// Persists one slice under `file_name`, taking ownership of its pixels.
    fn write_slice(
        &mut self,
        file_name: &str,
        pixels: PixelBuffer,
    ) -> std::result::Result<(), ExportError>;
}

/// Writes slices as PNG files into a directory.
#[derive(Debug, Clone)]
pub struct PngDirectory {
    dir: PathBuf,
}

impl PngDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SliceSink for PngDirectory {
    fn write_slice(
        &mut self,
        file_name: &str,
        pixels: PixelBuffer,
    ) -> std::result::Result<(), ExportError> {
        save_png(self.dir.join(file_name), pixels)
    }
}

/// A slice that could not be written.
#[derive(Debug)]
pub struct SliceFailure {
    pub index: u32,
    pub file_name: String,
    pub error: ExportError,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of slices sampled.
    pub slice_count: u32,
    /// Number of slices successfully handed to the sink.
    pub slices_written: u32,
    /// Slices whose output failed, in slice order.
    pub failures: Vec<SliceFailure>,
}

impl GenerationReport {
    /// Returns true if every slice was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.slices_written == self.slice_count
    }
}

/// Samples every slice of `sampler` and hands the packed pixels to `sink`.
///
/// A failed write is logged and recorded; the remaining slices are still
/// produced.
pub fn render_slices(sampler: &GridSampler, sink: &mut impl SliceSink) -> GenerationReport {
    let count = sampler.slice_count();
    let width = slice_number_width(count);
    let threshold = sampler.params().threshold;

    let mut report = GenerationReport {
        slice_count: count,
        ..GenerationReport::default()
    };

    for (z, grid) in sampler.slices() {
        log::info!("Calculating slice {} of {}", z + 1, count);

        let pixels = grid.pack(threshold);
        let file_name = slice_file_name(z, width);

        match sink.write_slice(&file_name, pixels) {
            Ok(()) => report.slices_written += 1,
            Err(error) => {
                log::error!("failed to write slice {z} ({file_name}): {error}");
                report.failures.push(SliceFailure {
                    index: z,
                    file_name,
                    error,
                });
            }
        }
    }

    report
}

/// Generates the full volume into `output_dir`.
///
/// Writes `manifest.xml` into `output_dir` and the slices into
/// `output_dir/density/`, creating directories as needed.
pub fn generate(params: GridParameters, output_dir: impl AsRef<Path>) -> Result<GenerationReport> {
    let sampler = GridSampler::new(params)?;
    let output_dir = output_dir.as_ref();

    let density_dir = output_dir.join(DENSITY_DIR);
    std::fs::create_dir_all(&density_dir).map_err(|source| Error::OutputDir {
        path: density_dir.display().to_string(),
        source,
    })?;

    Manifest::from_params(sampler.params())
        .write_file(output_dir.join(MANIFEST_FILE_NAME))
        .map_err(Error::Manifest)?;

    let mut sink = PngDirectory::new(density_dir);
    let report = render_slices(&sampler, &mut sink);

    if report.is_complete() {
        log::info!(
            "wrote {} slices to {}",
            report.slices_written,
            sink.dir().display()
        );
    } else {
        log::warn!(
            "{} of {} slices failed",
            report.failures.len(),
            report.slice_count
        );
    }

    Ok(report)
}
