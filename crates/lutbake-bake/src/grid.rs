//! Dense sample grids.
//!
//! A grid of resolution `N` holds `N^3` RGB samples. Sample `(x, y, z)`
//! is the pipeline output for the identity input
//! `(x/(N-1), y/(N-1), z/(N-1))` and lives at `x + y*N + z*N^2`, red
//! fastest, the same order `.cube` files and 3D textures use.

use crate::SamplePipeline;
use half::f16;
use lutbake_lut::LutResult;
use rayon::prelude::*;

/// Identity coordinate of node `i` on an axis with `size` nodes.
#[inline]
fn coord(i: usize, size: usize) -> f32 {
    if size > 1 {
        i as f32 / (size - 1) as f32
    } else {
        0.0
    }
}

fn fill_slice(
    slice: &mut [[f32; 3]],
    z: usize,
    size: usize,
    pipeline: &SamplePipeline<'_>,
) -> LutResult<()> {
    let b = coord(z, size);
    for (i, out) in slice.iter_mut().enumerate() {
        let (x, y) = (i % size, i / size);
        *out = pipeline.evaluate([coord(x, size), coord(y, size), b])?;
    }
    Ok(())
}

/// Evaluates the pipeline over a `size^3` identity lattice on the rayon
/// pool, one z-slice per task.
///
/// The first failing sample aborts the whole grid.
///
/// # Example
///
/// ```rust
/// use lutbake_bake::{ConversionFlags, SamplePipeline, generate_grid};
/// use lutbake_lut::Lut3D;
///
/// let lut = Lut3D::identity(2);
/// let pipeline = SamplePipeline::new(ConversionFlags::NONE, None, Some(&lut)).unwrap();
/// let data = generate_grid(3, &pipeline).unwrap();
/// assert_eq!(data[13], [0.5, 0.5, 0.5]);
/// ```
pub fn generate_grid(size: usize, pipeline: &SamplePipeline<'_>) -> LutResult<Vec<[f32; 3]>> {
    if size == 0 {
        return Ok(Vec::new());
    }
    let mut data = vec![[0.0f32; 3]; size * size * size];

    data.par_chunks_mut(size * size)
        .enumerate()
        .try_for_each(|(z, slice)| fill_slice(slice, z, size, pipeline))?;

    Ok(data)
}

/// Single-threaded [`generate_grid`].
pub fn generate_grid_serial(size: usize, pipeline: &SamplePipeline<'_>) -> LutResult<Vec<[f32; 3]>> {
    if size == 0 {
        return Ok(Vec::new());
    }
    let mut data = vec![[0.0f32; 3]; size * size * size];

    for (z, slice) in data.chunks_mut(size * size).enumerate() {
        fill_slice(slice, z, size, pipeline)?;
    }

    Ok(data)
}

/// Evaluates the pipeline along the gray ramp `i/(size-1)`.
///
/// This is the 1D output path: one RGB sample per ramp step.
pub fn generate_curve(size: usize, pipeline: &SamplePipeline<'_>) -> LutResult<Vec<[f32; 3]>> {
    (0..size)
        .map(|i| {
            let v = coord(i, size);
            pipeline.evaluate([v, v, v])
        })
        .collect()
}

/// Expands RGB samples to RGBA floats with alpha 1.
pub fn rgba_f32(samples: &[[f32; 3]]) -> Vec<f32> {
    samples
        .iter()
        .flat_map(|&[r, g, b]| [r, g, b, 1.0])
        .collect()
}

/// Expands RGB samples to RGBA half floats with alpha 1.
pub fn rgba_f16(samples: &[[f32; 3]]) -> Vec<f16> {
    samples
        .iter()
        .flat_map(|&[r, g, b]| [f16::from_f32(r), f16::from_f32(g), f16::from_f32(b), f16::ONE])
        .collect()
}

/// A baked `size^3` RGB grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Samples per axis
    pub size: usize,
    /// Samples, red fastest
    pub data: Vec<[f32; 3]>,
}

impl Grid {
    /// Wraps generated samples.
    pub fn new(size: usize, data: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(data.len(), size * size * size);
        Self { size, data }
    }

    /// Flat index of `(x, y, z)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size + z * self.size * self.size
    }

    /// Sample at `(x, y, z)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        self.data[self.index(x, y, z)]
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-size grid.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples as a flat `r, g, b, r, g, b, ...` slice.
    pub fn as_flat(&self) -> &[f32] {
        self.data.as_flattened()
    }

    /// RGBA float buffer with alpha 1, ready for a float texture upload.
    pub fn to_rgba_f32(&self) -> Vec<f32> {
        rgba_f32(&self.data)
    }

    /// RGBA half-float buffer with alpha 1.
    pub fn to_rgba_f16(&self) -> Vec<f16> {
        rgba_f16(&self.data)
    }
}
