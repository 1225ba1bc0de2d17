//! Regular-lattice sampling of the quaternion Julia set.
//!
//! The 4th quaternion coordinate is held at `z_w` for the whole sweep, so the
//! sampled volume is a 3D cross-section of the 4D set. Every node on a face
//! of the lattice is forced to `2 * threshold`, which packs to zero density
//! and closes the isosurface at the grid boundary.

use glam::{UVec3, Vec3};

use crate::error::{QJuliaError, Result};
use crate::escape::{EscapeSample, EscapeTime};
use crate::params::GridParameters;
use crate::quaternion::Quaternion;
use crate::slice::SampleGrid;

/// Samples z-slices of the lattice described by [`GridParameters`].
#[derive(Debug, Clone)]
pub struct GridSampler {
    params: GridParameters,
    engine: EscapeTime,
    step: Vec3,
}

impl GridSampler {
    /// Creates a sampler after validating `params`.
    pub fn new(params: GridParameters) -> Result<Self> {
        params.validate()?;
        let engine = EscapeTime::new(params.constant(), params.max_iterations, params.threshold);
        let step = params.step_size();
        log::debug!(
            "grid {:?} over {:?}..{:?}, step {:?}",
            params.resolution(),
            params.bound_min(),
            params.bound_max(),
            step
        );
        Ok(Self {
            params,
            engine,
            step,
        })
    }

    #[must_use]
    pub fn params(&self) -> &GridParameters {
        &self.params
    }

    /// Returns the number of z-slices.
    #[must_use]
    pub fn slice_count(&self) -> u32 {
        self.params.z_res
    }

    /// Returns the starting quaternion for lattice node `(x, y, z)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn lattice_point(&self, x: u32, y: u32, z: u32) -> Quaternion {
        let p = &self.params;
        Quaternion::new(
            p.x_min + x as f32 * self.step.x,
            p.y_min + y as f32 * self.step.y,
            p.z_min + z as f32 * self.step.z,
            p.z_w,
        )
    }

    /// Returns whether node `(x, y, z)` lies on a face of the lattice.
    #[must_use]
    pub fn is_border(&self, x: u32, y: u32, z: u32) -> bool {
        let last = self.params.resolution() - UVec3::ONE;
        x == 0 || x == last.x || y == 0 || y == last.y || z == 0 || z == last.z
    }

    /// Runs the engine at interior node `(x, y, z)`.
    ///
    /// Returns `None` for face nodes, which are never iterated.
    #[must_use]
    pub fn escape_sample(&self, x: u32, y: u32, z: u32) -> Option<EscapeSample> {
        if self.is_border(x, y, z) {
            None
        } else {
            Some(self.engine.sample(self.lattice_point(x, y, z)))
        }
    }

    /// Samples every node of slice `z`.
    pub fn sample_slice(&self, z: u32) -> Result<SampleGrid> {
        if z >= self.params.z_res {
            return Err(QJuliaError::SliceOutOfRange {
                index: z,
                count: self.params.z_res,
            });
        }

        Ok(self.fill_slice(z))
    }

    /// Iterates over all slices in increasing z order.
    pub fn slices(&self) -> impl Iterator<Item = (u32, SampleGrid)> + '_ {
        (0..self.params.z_res).map(move |z| (z, self.fill_slice(z)))
    }

    fn fill_slice(&self, z: u32) -> SampleGrid {
        let (width, height) = (self.params.x_res, self.params.y_res);
        let border = self.params.border_value();
        let mut values = Vec::with_capacity(self.params.slice_len());
        let (mut escaped, mut iterations) = (0u32, 0u64);
        for y in 0..height {
            for x in 0..width {
                let value = match self.escape_sample(x, y, z) {
                    Some(sample) => {
                        escaped += u32::from(sample.escaped);
                        iterations += u64::from(sample.iterations);
                        sample.measure
                    }
                    None => border,
                };
                values.push(value);
            }
        }
        log::debug!("slice {z}: {escaped} interior nodes escaped after {iterations} iterations");
        SampleGrid::from_sampled(width, height, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::pack_sample;
    use proptest::prelude::*;

    fn small_params(res: u32) -> GridParameters {
        GridParameters {
            x_res: res,
            y_res: res,
            z_res: res,
            ..GridParameters::default()
        }
    }

    #[test]
    fn test_lattice_corners_match_bounds() {
        let sampler = GridSampler::new(small_params(5)).unwrap();
        assert_eq!(
            sampler.lattice_point(0, 0, 0),
            Quaternion::new(-1.5, -1.5, -1.5, 0.0)
        );
        assert_eq!(
            sampler.lattice_point(4, 4, 4),
            Quaternion::new(1.5, 1.5, 1.5, 0.0)
        );
        assert_eq!(sampler.lattice_point(2, 2, 2), Quaternion::ZERO);
    }

    #[test]
    fn test_z_w_is_fixed_fourth_coordinate() {
        let params = GridParameters {
            z_w: 0.125,
            ..small_params(4)
        };
        let sampler = GridSampler::new(params).unwrap();
        assert_eq!(sampler.lattice_point(1, 2, 3).w, 0.125);
    }

    #[test]
    fn test_rejects_invalid_params() {
        assert!(GridSampler::new(small_params(1)).is_err());
    }

    #[test]
    fn test_slice_out_of_range() {
        let sampler = GridSampler::new(small_params(3)).unwrap();
        let err = sampler.sample_slice(3).unwrap_err();
        assert!(matches!(
            err,
            QJuliaError::SliceOutOfRange { index: 3, count: 3 }
        ));
    }

    #[test]
    fn test_faces_are_border_value() {
        let sampler = GridSampler::new(small_params(6)).unwrap();
        let border = sampler.params().border_value();
        for (z, grid) in sampler.slices() {
            for y in 0..6 {
                for x in 0..6 {
                    if sampler.is_border(x, y, z) {
                        assert_eq!(grid.get(x, y), border);
                    }
                }
            }
        }
        assert!(!sampler.is_border(1, 1, 1));
        assert!(sampler.is_border(5, 1, 1));
        assert!(sampler.is_border(1, 1, 0));
    }

    #[test]
    fn test_first_and_last_slices_are_entirely_border() {
        let sampler = GridSampler::new(small_params(5)).unwrap();
        for z in [0, 4] {
            let grid = sampler.sample_slice(z).unwrap();
            assert!(grid.values().iter().all(|&v| v == 8.0));
        }
    }

    #[test]
    fn test_three_cubed_only_center_runs_engine() {
        // With a large constant the single interior node escapes immediately
        let params = GridParameters {
            c_x: 10.0,
            c_y: 10.0,
            c_z: 10.0,
            c_w: 10.0,
            threshold: 4.0,
            max_iterations: 1,
            ..small_params(3)
        };
        let sampler = GridSampler::new(params).unwrap();
        let center = sampler.sample_slice(1).unwrap().get(1, 1);
        assert_eq!(center, 400.0);

        for (_, grid) in sampler.slices() {
            let pixels = grid.pack(4.0);
            assert!(pixels.pixels().iter().all(|&p| p == 0));
        }
    }

    #[test]
    fn test_three_cubed_center_in_set_is_bright() {
        let params = GridParameters {
            c_x: 0.0,
            c_y: 0.0,
            c_z: 0.0,
            c_w: 0.0,
            threshold: 2.0,
            max_iterations: 10,
            ..small_params(3)
        };
        let sampler = GridSampler::new(params).unwrap();
        let pixels = sampler.sample_slice(1).unwrap().pack(2.0);
        assert_eq!(pixels.get(1, 1), 255);
        assert_eq!(pixels.pixels().iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn test_escape_sample_skips_faces() {
        let params = GridParameters {
            c_x: 10.0,
            c_y: 10.0,
            c_z: 10.0,
            c_w: 10.0,
            ..small_params(3)
        };
        let sampler = GridSampler::new(params).unwrap();
        assert!(sampler.escape_sample(0, 1, 1).is_none());
        assert!(sampler.escape_sample(1, 1, 2).is_none());

        let center = sampler.escape_sample(1, 1, 1).unwrap();
        assert!(center.escaped);
        assert_eq!(center.iterations, 1);
        assert_eq!(center.measure, sampler.sample_slice(1).unwrap().get(1, 1));
    }

    #[test]
    fn test_escape_sample_reports_full_budget_inside_set() {
        let params = GridParameters {
            c_x: 0.0,
            c_y: 0.0,
            c_z: 0.0,
            c_w: 0.0,
            max_iterations: 12,
            ..small_params(3)
        };
        let sampler = GridSampler::new(params).unwrap();
        let center = sampler.escape_sample(1, 1, 1).unwrap();
        assert!(!center.escaped);
        assert_eq!(center.iterations, 12);
    }

    #[test]
    fn test_slices_yields_every_index_in_order() {
        let sampler = GridSampler::new(small_params(4)).unwrap();
        let indices: Vec<u32> = sampler.slices().map(|(z, _)| z).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_non_cubic_grid_dimensions() {
        let params = GridParameters {
            x_res: 7,
            y_res: 4,
            z_res: 3,
            ..GridParameters::default()
        };
        let sampler = GridSampler::new(params).unwrap();
        let grid = sampler.sample_slice(1).unwrap();
        assert_eq!((grid.width(), grid.height()), (7, 4));
        assert_eq!(grid.values().len(), 28);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_sampling_is_deterministic(
            c in prop::array::uniform4(-1.0f32..1.0),
            z_w in -1.0f32..1.0,
            res in 3u32..8,
        ) {
            let params = GridParameters {
                c_x: c[0],
                c_y: c[1],
                c_z: c[2],
                c_w: c[3],
                z_w,
                ..small_params(res)
            };
            let a = GridSampler::new(params.clone()).unwrap();
            let b = GridSampler::new(params).unwrap();
            for z in 0..res {
                let ga = a.sample_slice(z).unwrap();
                let gb = b.sample_slice(z).unwrap();
                let bits_a: Vec<u32> = ga.values().iter().map(|v| v.to_bits()).collect();
                let bits_b: Vec<u32> = gb.values().iter().map(|v| v.to_bits()).collect();
                prop_assert_eq!(bits_a, bits_b);
            }
        }

        #[test]
        fn prop_border_pixels_are_zero(
            c in prop::array::uniform4(-1.0f32..1.0),
            res in 3u32..7,
            threshold in 0.5f32..8.0,
        ) {
            let params = GridParameters {
                c_x: c[0],
                c_y: c[1],
                c_z: c[2],
                c_w: c[3],
                threshold,
                ..small_params(res)
            };
            let sampler = GridSampler::new(params).unwrap();
            for (z, grid) in sampler.slices() {
                for y in 0..res {
                    for x in 0..res {
                        if sampler.is_border(x, y, z) {
                            prop_assert_eq!(pack_sample(grid.get(x, y), threshold), 0);
                        }
                    }
                }
            }
        }
    }
}
