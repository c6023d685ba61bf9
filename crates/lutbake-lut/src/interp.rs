//! Interpolation for LUT evaluation.
//!
//! All lookups normalize the input against the table's domain and clamp it
//! to `[0, 1]` before indexing, so out-of-domain input lands on the edge
//! entries and never reads outside the table.
//!
//! - [`map_linear`] - 1D, input drives a lookup of the whole RGB row
//! - [`map_channels`] - 1D, each channel through its own column
//! - [`map_nearest`] - 1D, nearest entry of the first column
//! - [`map_trilinear`] - 3D, eight-corner blend

use crate::{Lut1D, Lut3D, LutError, LutResult};

/// Interpolation method for 1D LUT evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest entry (no interpolation).
    Nearest,

    /// Linear interpolation between the two surrounding entries.
    #[default]
    Linear,
}

/// Evaluates a 1D LUT at `input`, returning the interpolated RGB row.
///
/// The rows are blended as whole triples: the result depends on `input`
/// only, not on which channel it came from.
///
/// # Errors
///
/// [`LutError::MissingTable`] for an empty table,
/// [`LutError::DegenerateRange`] when the domain has zero width.
///
/// # Example
///
/// ```rust
/// use lutbake_lut::{Lut1D, map_linear};
///
/// let lut = Lut1D::identity(5);
/// let rgb = map_linear(&lut, 0.625).unwrap();
/// assert!((rgb[1] - 0.625).abs() < 1e-6);
/// ```
pub fn map_linear(lut: &Lut1D, input: f32) -> LutResult<[f32; 3]> {
    lut.validate()?;
    let values = &lut.values;
    let size = values.len();
    if size == 1 {
        return Ok(values[0]);
    }

    let pos = normalize(input, lut.domain_min, lut.domain_max) * (size - 1) as f32;
    let idx = (pos.floor() as usize).min(size - 2);
    let frac = pos - idx as f32;

    Ok(lerp3(values[idx], values[idx + 1], frac))
}

/// Evaluates a 1D LUT independently per channel.
///
/// Red is looked up in the red column, green in the green column and blue
/// in the blue column.
pub fn map_channels(lut: &Lut1D, rgb: [f32; 3], interp: Interpolation) -> LutResult<[f32; 3]> {
    lut.validate()?;
    Ok([
        sample_column(lut, 0, rgb[0], interp),
        sample_column(lut, 1, rgb[1], interp),
        sample_column(lut, 2, rgb[2], interp),
    ])
}

/// Returns the nearest entry of the first column for `input`.
///
/// The index is `round(t * (size - 1))`, so an input exactly halfway
/// between two entries picks the upper one.
///
/// # Example
///
/// ```rust
/// use lutbake_lut::{Lut1D, map_nearest};
///
/// let lut = Lut1D::from_mono(vec![0.0, 0.5, 1.0], 0.0, 1.0).unwrap();
/// assert_eq!(map_nearest(&lut, 0.25).unwrap(), 0.5);
/// ```
pub fn map_nearest(lut: &Lut1D, input: f32) -> LutResult<f32> {
    lut.validate()?;
    Ok(sample_column(lut, 0, input, Interpolation::Nearest))
}

/// Evaluates a 3D LUT at `rgb` using trilinear interpolation.
///
/// Corner indices are clamped per axis before the fetch: the lower corner
/// to `[0, size - 2]`, the upper one to `[1, size - 1]`. The blend runs
/// along x (red) first, then y, then z.
///
/// # Errors
///
/// [`LutError::MissingTable`] for an empty table,
/// [`LutError::DegenerateRange`] when any axis of the domain has zero width.
///
/// # Example
///
/// ```rust
/// use lutbake_lut::{Lut3D, map_trilinear};
///
/// let lut = Lut3D::identity(17);
/// let rgb = map_trilinear(&lut, [0.5, 0.3, 0.8]).unwrap();
/// assert!((rgb[2] - 0.8).abs() < 1e-5);
/// ```
pub fn map_trilinear(lut: &Lut3D, rgb: [f32; 3]) -> LutResult<[f32; 3]> {
    lut.validate()?;
    let size = lut.size;
    if size == 1 {
        return Ok(lut.values[0]);
    }

    let (min, max) = lut.domain();
    let n = (size - 1) as f32;
    let coords = [
        normalize(rgb[0], min[0], max[0]) * n,
        normalize(rgb[1], min[1], max[1]) * n,
        normalize(rgb[2], min[2], max[2]) * n,
    ];
    let lower = coords.map(|v| (v.floor() as usize).min(size - 2));
    let upper = coords.map(|v| (v.ceil() as usize).clamp(1, size - 1));

    let tx = coords[0] - lower[0] as f32;
    let ty = coords[1] - lower[1] as f32;
    let tz = coords[2] - lower[2] as f32;

    let (lx, ly, lz) = (lower[0], lower[1], lower[2]);
    let (ux, uy, uz) = (upper[0], upper[1], upper[2]);

    let c000 = lut.get(lx, ly, lz);
    let c001 = lut.get(lx, ly, uz);
    let c010 = lut.get(lx, uy, lz);
    let c011 = lut.get(lx, uy, uz);
    let c100 = lut.get(ux, ly, lz);
    let c101 = lut.get(ux, ly, uz);
    let c110 = lut.get(ux, uy, lz);
    let c111 = lut.get(ux, uy, uz);

    // x edges
    let c00 = lerp3(c000, c100, tx);
    let c10 = lerp3(c010, c110, tx);
    let c01 = lerp3(c001, c101, tx);
    let c11 = lerp3(c011, c111, tx);

    // y faces
    let c0 = lerp3(c00, c10, ty);
    let c1 = lerp3(c01, c11, ty);

    Ok(lerp3(c0, c1, tz))
}

/// Fails with [`LutError::DegenerateRange`] if `[min, max]` cannot be
/// normalized against.
pub(crate) fn check_range(min: f32, max: f32) -> LutResult<()> {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return Err(LutError::DegenerateRange { min, max });
    }
    Ok(())
}

/// Single-column lookup; the table must already be checked.
fn sample_column(lut: &Lut1D, channel: usize, input: f32, interp: Interpolation) -> f32 {
    let values = &lut.values;
    let size = values.len();
    let pos = normalize(input, lut.domain_min, lut.domain_max) * (size - 1) as f32;

    match interp {
        Interpolation::Nearest => {
            let idx = (pos.round() as usize).min(size - 1);
            values[idx][channel]
        }
        Interpolation::Linear => {
            if size == 1 {
                return values[0][channel];
            }
            let idx = (pos.floor() as usize).min(size - 2);
            let frac = pos - idx as f32;
            lerp(values[idx][channel], values[idx + 1][channel], frac)
        }
    }
}

/// Maps `value` into `[0, 1]` relative to `[min, max]`.
#[inline]
fn normalize(value: f32, min: f32, max: f32) -> f32 {
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}
