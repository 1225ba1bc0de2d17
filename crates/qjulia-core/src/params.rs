//! Sampling parameters for a quaternion Julia volume.

use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{QJuliaError, Result};
use crate::quaternion::Quaternion;

/// Grid bounds, resolution and iteration settings for one volume.
///
/// Field names match the JSON configuration format. Missing fields fall back
/// to [`GridParameters::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParameters {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,

    /// Number of lattice nodes along X. Must be at least 2.
    pub x_res: u32,
    /// Number of lattice nodes along Y. Must be at least 2.
    pub y_res: u32,
    /// Number of lattice nodes (and output slices) along Z. Must be at least 2.
    pub z_res: u32,

    /// Fixed 4th coordinate of every sampled point.
    pub z_w: f32,

    pub c_x: f32,
    pub c_y: f32,
    pub c_z: f32,
    pub c_w: f32,

    /// Upper bound on `Z*Z + C` updates per point.
    pub max_iterations: u32,
    /// Escape radius. Must be positive and finite.
    pub threshold: f32,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            x_min: -1.5,
            x_max: 1.5,
            y_min: -1.5,
            y_max: 1.5,
            z_min: -1.5,
            z_max: 1.5,
            x_res: 100,
            y_res: 100,
            z_res: 100,
            z_w: 0.0,
            c_x: 0.3,
            c_y: 0.5,
            c_z: 0.4,
            c_w: 0.2,
            max_iterations: 8,
            threshold: 4.0,
        }
    }
}

impl GridParameters {
    /// Parses parameters from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Serializes the parameters as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the sampling preconditions.
    ///
    /// Every resolution must be at least 2 (step sizes divide by `res - 1`)
    /// and the threshold must be positive and finite. Bounds, `z_w` and the
    /// Julia constant must be finite.
    pub fn validate(&self) -> Result<()> {
        for (axis, res) in [("x", self.x_res), ("y", self.y_res), ("z", self.z_res)] {
            if res < 2 {
                return Err(QJuliaError::InvalidParameters(format!(
                    "{axis}_res must be at least 2, got {res}"
                )));
            }
        }

        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(QJuliaError::InvalidParameters(format!(
                "threshold must be positive and finite, got {}",
                self.threshold
            )));
        }

        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max, self.z_min, self.z_max];
        if bounds.iter().any(|b| !b.is_finite()) || !self.z_w.is_finite() {
            return Err(QJuliaError::InvalidParameters(
                "grid bounds and z_w must be finite".to_string(),
            ));
        }

        let c = [self.c_x, self.c_y, self.c_z, self.c_w];
        if c.iter().any(|v| !v.is_finite()) {
            return Err(QJuliaError::InvalidParameters(format!(
                "Julia constant must be finite, got {c:?}"
            )));
        }

        Ok(())
    }

    /// Returns the minimum corner of the sampled box.
    #[must_use]
    pub fn bound_min(&self) -> Vec3 {
        Vec3::new(self.x_min, self.y_min, self.z_min)
    }

    /// Returns the maximum corner of the sampled box.
    #[must_use]
    pub fn bound_max(&self) -> Vec3 {
        Vec3::new(self.x_max, self.y_max, self.z_max)
    }

    /// Returns the number of lattice nodes in each dimension.
    #[must_use]
    pub fn resolution(&self) -> UVec3 {
        UVec3::new(self.x_res, self.y_res, self.z_res)
    }

    /// Returns the distance between adjacent lattice nodes on each axis.
    #[must_use]
    pub fn step_size(&self) -> Vec3 {
        let cells = (self.resolution() - UVec3::ONE).as_vec3();
        (self.bound_max() - self.bound_min()) / cells
    }

    /// Returns the Julia constant `C`.
    #[must_use]
    pub fn constant(&self) -> Quaternion {
        Quaternion::new(self.c_x, self.c_y, self.c_z, self.c_w)
    }

    /// Returns the value every border sample is forced to.
    #[must_use]
    pub fn border_value(&self) -> f32 {
        2.0 * self.threshold
    }

    /// Returns the number of samples in one z-slice.
    #[must_use]
    pub fn slice_len(&self) -> usize {
        self.x_res as usize * self.y_res as usize
    }
}
