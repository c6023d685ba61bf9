//! 1-dimensional lookup table.
//!
//! A 1D LUT is a curve sampled at evenly spaced inputs across its domain.
//! Each entry is an RGB row, so one table can carry a separate curve per
//! channel (`.cube` `LUT_1D_SIZE`) or a single curve replicated to all
//! three columns (mono `.spi1d`).

use crate::interp::{self, Interpolation, check_range};
use crate::{LutError, LutResult};

/// A 1-dimensional lookup table.
///
/// # Structure
///
/// - `values.len()` entries, each an RGB row
/// - Input domain `[domain_min, domain_max]`, evenly sampled
/// - Linear or nearest lookup, see [`crate::interp`]
///
/// # Example
///
/// ```rust
/// use lutbake_lut::Lut1D;
///
/// let lut = Lut1D::identity(256);
/// let rgb = lut.map_linear(0.5).unwrap();
/// assert!((rgb[0] - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1D {
    /// LUT entries, one RGB row per sample
    pub values: Vec<[f32; 3]>,
    /// Input domain minimum
    pub domain_min: f32,
    /// Input domain maximum
    pub domain_max: f32,
}

impl Default for Lut1D {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            domain_min: 0.0,
            domain_max: 1.0,
        }
    }
}

impl Lut1D {
    /// Creates a table of `size` zeroed rows over `[0, 1]`.
    pub fn new(size: usize) -> Self {
        Self {
            values: vec![[0.0; 3]; size],
            ..Self::default()
        }
    }

    /// Creates an identity (pass-through) 1D LUT.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of entries (typically 256, 1024, or 4096)
    pub fn identity(size: usize) -> Self {
        let values = (0..size)
            .map(|i| {
                let t = if size > 1 { i as f32 / (size - 1) as f32 } else { 0.0 };
                [t, t, t]
            })
            .collect();
        Self {
            values,
            ..Self::default()
        }
    }

    /// Creates a LUT from RGB rows.
    ///
    /// # Errors
    ///
    /// [`LutError::MissingTable`] if `values` is empty,
    /// [`LutError::DegenerateRange`] if `domain_min == domain_max`.
    pub fn from_values(values: Vec<[f32; 3]>, domain_min: f32, domain_max: f32) -> LutResult<Self> {
        let lut = Self {
            values,
            domain_min,
            domain_max,
        };
        lut.validate()?;
        Ok(lut)
    }

    /// Creates a LUT from a single curve, replicated to all channels.
    pub fn from_mono(data: Vec<f32>, domain_min: f32, domain_max: f32) -> LutResult<Self> {
        Self::from_values(data.into_iter().map(|v| [v, v, v]).collect(), domain_min, domain_max)
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, min: f32, max: f32) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Returns the number of entries in the LUT.
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if every row holds the same value in all three columns.
    pub fn is_mono(&self) -> bool {
        self.values.iter().all(|v| v[0] == v[1] && v[1] == v[2])
    }

    /// Checks that the table can be looked up.
    pub fn validate(&self) -> LutResult<()> {
        if self.values.is_empty() {
            return Err(LutError::MissingTable("1D"));
        }
        check_range(self.domain_min, self.domain_max)
    }

    /// Interpolated RGB row for `input`. See [`interp::map_linear`].
    #[inline]
    pub fn map_linear(&self, input: f32) -> LutResult<[f32; 3]> {
        interp::map_linear(self, input)
    }

    /// Nearest entry of the first column. See [`interp::map_nearest`].
    #[inline]
    pub fn map_nearest(&self, input: f32) -> LutResult<f32> {
        interp::map_nearest(self, input)
    }

    /// Per-channel lookup. See [`interp::map_channels`].
    #[inline]
    pub fn map_channels(&self, rgb: [f32; 3], method: Interpolation) -> LutResult<[f32; 3]> {
        interp::map_channels(self, rgb, method)
    }
}
