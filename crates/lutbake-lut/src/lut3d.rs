//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of color values.
//! Common uses include:
//! - Color grading / Look development
//! - Display calibration
//! - Camera log to display transforms

use crate::interp::{self, check_range};
use crate::{LutError, LutResult};

/// A 3-dimensional lookup table.
///
/// # Structure
///
/// - `size^3` entries, each containing RGB output values
/// - Stored in file order: x (red) varies fastest, then y (green), then z (blue)
/// - Input domain is either one scalar range shared by all channels
///   (`LUT_3D_INPUT_RANGE`) or a per-channel box (`DOMAIN_MIN`/`DOMAIN_MAX`),
///   selected by `uses_domain_min_max`
///
/// # Example
///
/// ```rust
/// use lutbake_lut::Lut3D;
///
/// let lut = Lut3D::identity(33);
/// let output = lut.map_trilinear([0.5, 0.3, 0.2]).unwrap();
/// assert!((output[1] - 0.3).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Cube size (typically 17, 33, or 65)
    pub size: usize,
    /// LUT data, flattened as `x + y*size + z*size^2`
    pub values: Vec<[f32; 3]>,
    /// Scalar input range minimum, applied to all channels
    pub input_min: f32,
    /// Scalar input range maximum, applied to all channels
    pub input_max: f32,
    /// Per-channel input domain minimum
    pub domain_min: [f32; 3],
    /// Per-channel input domain maximum
    pub domain_max: [f32; 3],
    /// Selects `domain_min`/`domain_max` over the scalar range
    pub uses_domain_min_max: bool,
}

impl Default for Lut3D {
    fn default() -> Self {
        Self {
            size: 0,
            values: Vec::new(),
            input_min: 0.0,
            input_max: 1.0,
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
            uses_domain_min_max: false,
        }
    }
}

impl Lut3D {
    /// Creates a cube of `size^3` zeroed entries.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![[0.0; 3]; size * size * size],
            ..Self::default()
        }
    }

    /// Creates an identity (pass-through) 3D LUT.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutbake_lut::Lut3D;
    ///
    /// let lut = Lut3D::identity(17);
    /// let result = lut.map_trilinear([0.5, 0.3, 0.8]).unwrap();
    /// assert!((result[0] - 0.5).abs() < 1e-5);
    /// ```
    pub fn identity(size: usize) -> Self {
        let total = size * size * size;
        let mut values = Vec::with_capacity(total);
        let n = if size > 1 { (size - 1) as f32 } else { 1.0 };

        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    values.push([x as f32 / n, y as f32 / n, z as f32 / n]);
                }
            }
        }

        Self {
            size,
            values,
            ..Self::default()
        }
    }

    /// Creates a 3D LUT from raw data in file order.
    ///
    /// # Errors
    ///
    /// [`LutError::MissingTable`] for `size == 0`, [`LutError::SizeMismatch`]
    /// if `values` does not hold exactly `size^3` entries.
    pub fn from_values(values: Vec<[f32; 3]>, size: usize) -> LutResult<Self> {
        let lut = Self {
            size,
            values,
            ..Self::default()
        };
        lut.validate()?;
        Ok(lut)
    }

    /// Sets the scalar input range and selects it.
    pub fn with_input_range(mut self, min: f32, max: f32) -> Self {
        self.input_min = min;
        self.input_max = max;
        self.uses_domain_min_max = false;
        self
    }

    /// Sets the per-channel domain and selects it.
    pub fn with_domain(mut self, min: [f32; 3], max: [f32; 3]) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self.uses_domain_min_max = true;
        self
    }

    /// Returns the total number of entries in the LUT.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Returns the flat index for grid position (x, y, z).
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size + z * self.size * self.size
    }

    /// Gets the value at grid position (x, y, z).
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        self.values[self.index(x, y, z)]
    }

    /// Effective per-channel input domain.
    pub fn domain(&self) -> ([f32; 3], [f32; 3]) {
        if self.uses_domain_min_max {
            (self.domain_min, self.domain_max)
        } else {
            ([self.input_min; 3], [self.input_max; 3])
        }
    }

    /// Checks that the table can be looked up.
    pub fn validate(&self) -> LutResult<()> {
        if self.size == 0 || self.values.is_empty() {
            return Err(LutError::MissingTable("3D"));
        }
        if self.values.len() != self.entry_count() {
            return Err(LutError::SizeMismatch {
                table: "3D",
                size: self.size,
                expected: self.entry_count(),
                actual: self.values.len(),
            });
        }
        let (min, max) = self.domain();
        for c in 0..3 {
            check_range(min[c], max[c])?;
        }
        Ok(())
    }

    /// Trilinear lookup. See [`interp::map_trilinear`].
    #[inline]
    pub fn map_trilinear(&self, rgb: [f32; 3]) -> LutResult<[f32; 3]> {
        interp::map_trilinear(self, rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_layout() {
        let lut = Lut3D::identity(3);
        assert_eq!(lut.values.len(), 27);
        assert_eq!(lut.get(2, 0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(lut.get(0, 1, 0), [0.0, 0.5, 0.0]);
        assert_eq!(lut.get(0, 0, 2), [0.0, 0.0, 1.0]);
        assert_eq!(lut.index(1, 2, 1), 1 + 6 + 9);
    }

    #[test]
    fn test_corners() {
        let lut = Lut3D::identity(33);

        let black = lut.map_trilinear([0.0, 0.0, 0.0]).unwrap();
        assert!(black[0].abs() < 0.01);

        let white = lut.map_trilinear([1.0, 1.0, 1.0]).unwrap();
        assert!((white[0] - 1.0).abs() < 0.01);

        let red = lut.map_trilinear([1.0, 0.0, 0.0]).unwrap();
        assert!((red[0] - 1.0).abs() < 0.01);
        assert!(red[1].abs() < 0.01);
    }

    #[test]
    fn test_from_data() {
        let data: Vec<[f32; 3]> = (0..8).map(|_| [0.5, 0.5, 0.5]).collect();
        let lut = Lut3D::from_values(data, 2).unwrap();
        let result = lut.map_trilinear([0.5, 0.5, 0.5]).unwrap();
        assert_eq!(result, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_from_data_wrong_len() {
        let data = vec![[0.0; 3]; 7];
        assert!(matches!(
            Lut3D::from_values(data, 2),
            Err(LutError::SizeMismatch { expected: 8, actual: 7, .. })
        ));
    }

    #[test]
    fn test_domain_selection() {
        let lut = Lut3D::new(2).with_input_range(-1.0, 2.0);
        assert_eq!(lut.domain(), ([-1.0; 3], [2.0; 3]));

        let lut = lut.with_domain([0.0, 0.1, 0.2], [1.0, 1.1, 1.2]);
        assert_eq!(lut.domain(), ([0.0, 0.1, 0.2], [1.0, 1.1, 1.2]));
    }

    #[test]
    fn test_new_is_zeroed() {
        let lut = Lut3D::new(4);
        assert_eq!(lut.entry_count(), 64);
        assert!(lut.values.iter().all(|v| *v == [0.0; 3]));
        assert!(lut.validate().is_ok());
    }
}
