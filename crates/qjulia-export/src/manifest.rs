//! Volume manifest describing the slice stack.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use qjulia_core::{slice_number_width, slice_pattern, GridParameters, UVec3};

use crate::error::ExportError;

/// Directory, relative to the manifest, holding the density slices.
pub const DENSITY_DIR: &str = "density";

/// Edge length of one voxel as declared to the viewer.
pub const VOXEL_SIZE: &str = "1.0E-4";

/// Bit depth of every density sample.
pub const SUBVOXEL_BITS: u32 = 8;

/// Volume-level metadata written once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Number of nodes along X, Y and Z.
    pub grid_size: UVec3,
    /// Field width of the slice number in file names.
    pub slice_number_width: usize,
}

impl Manifest {
    #[must_use]
    pub fn new(grid_size: UVec3) -> Self {
        Self {
            grid_size,
            slice_number_width: slice_number_width(grid_size.z),
        }
    }

    #[must_use]
    pub fn from_params(params: &GridParameters) -> Self {
        Self::new(params.resolution())
    }

    /// Returns the density channel's slice pattern, e.g. `density/slice%4d.png`.
    #[must_use]
    pub fn density_pattern(&self) -> String {
        format!("{DENSITY_DIR}/{}", slice_pattern(self.slice_number_width))
    }

    /// Writes the manifest XML.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), ExportError> {
        let UVec3 { x, y, z } = self.grid_size;
        writeln!(out, "<?xml version=\"1.0\"?>")?;
        writeln!(
            out,
            "<grid gridSizeX = \"{x}\" gridSizeY = \"{y}\" gridSizeZ = \"{z}\" voxelSize = \"{VOXEL_SIZE}\" subvoxelBits = \"{SUBVOXEL_BITS}\">"
        )?;
        writeln!(out, " <channels>")?;
        writeln!(
            out,
            "  <channel type = \"DENSITY\" slices = \"{}\"/>",
            self.density_pattern()
        )?;
        writeln!(out, " </channels>")?;
        writeln!(out, "</grid>")?;
        out.flush()?;
        Ok(())
    }

    /// Writes the manifest XML to `path`, replacing any existing file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        self.write_to(BufWriter::new(File::create(path)?))?;
        log::debug!("wrote manifest {}", path.display());
        Ok(())
    }
}
