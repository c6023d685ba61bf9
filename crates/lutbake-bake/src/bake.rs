//! Host entry points: file bytes and a config in, sample grid out.

use crate::grid::{Grid, generate_curve, generate_grid, generate_grid_serial};
use crate::{BakeConfig, BakeResult, SamplePipeline};
use lutbake_lut::{LutFormat, ParsedLut};
use std::path::Path;
use tracing::{debug, info};

/// Output resolution for a bake.
///
/// The config override wins when non-zero, then the source 3D table size,
/// then the config fallback.
pub fn resolve_size(parsed: &ParsedLut, config: &BakeConfig) -> u32 {
    if config.override_resolution > 0 {
        config.override_resolution
    } else if let Some(lut) = &parsed.lut3d {
        lut.size as u32
    } else {
        config.fallback_resolution
    }
}

/// Bakes parsed tables into a grid.
///
/// # Example
///
/// ```rust
/// use lutbake_bake::{BakeConfig, bake};
/// use lutbake_lut::cube;
///
/// let parsed = cube::parse_str("LUT_3D_SIZE 2\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n").unwrap();
/// let grid = bake(&parsed, &BakeConfig::default().with_resolution(3)).unwrap();
/// assert_eq!(grid.get(1, 1, 1), [0.5, 0.5, 0.5]);
/// ```
pub fn bake(parsed: &ParsedLut, config: &BakeConfig) -> BakeResult<Grid> {
    config.validate()?;
    let size = resolve_size(parsed, config) as usize;
    let pipeline = SamplePipeline::from_parsed(parsed, config)?;

    debug!(
        size,
        format = parsed.format.extension(),
        curve_mode = ?pipeline.curve_mode(),
        flags = ?config.flags,
        parallel = config.parallel,
        "baking grid"
    );

    let data = if config.parallel {
        generate_grid(size, &pipeline)?
    } else {
        generate_grid_serial(size, &pipeline)?
    };

    info!(size, samples = data.len(), "baked grid");
    Ok(Grid::new(size, data))
}

/// Parses raw file contents and bakes them.
pub fn bake_bytes(bytes: &[u8], format: LutFormat, config: &BakeConfig) -> BakeResult<Grid> {
    let parsed = ParsedLut::from_bytes(bytes, format)?;
    bake(&parsed, config)
}

/// Reads a LUT file, picking the parser from its extension, and bakes it.
pub fn bake_file<P: AsRef<Path>>(path: P, config: &BakeConfig) -> BakeResult<Grid> {
    let parsed = ParsedLut::read(path.as_ref())?;
    if !parsed.title.is_empty() {
        debug!(title = %parsed.title, "read LUT");
    }
    bake(&parsed, config)
}

/// Bakes parsed tables along the gray ramp instead of the full lattice.
///
/// The ramp has [`resolve_size`] samples.
pub fn bake_curve(parsed: &ParsedLut, config: &BakeConfig) -> BakeResult<Vec<[f32; 3]>> {
    config.validate()?;
    let size = resolve_size(parsed, config) as usize;
    let pipeline = SamplePipeline::from_parsed(parsed, config)?;

    debug!(size, curve_mode = ?pipeline.curve_mode(), "baking curve");
    Ok(generate_curve(size, &pipeline)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BakeError, ConversionFlags, CurveMode};
    use approx::assert_abs_diff_eq;
    use lutbake_lut::{Lut1D, Lut3D, LutError, cube};
    use lutbake_transfer::log_c;
    use std::io::Write;

    fn parsed(lut1d: Option<Lut1D>, lut3d: Option<Lut3D>) -> ParsedLut {
        ParsedLut {
            title: String::new(),
            lut1d,
            lut3d,
            format: LutFormat::Cube,
        }
    }

    #[test]
    fn size_resolution_order() {
        let config = BakeConfig::default();
        assert_eq!(resolve_size(&parsed(None, Some(Lut3D::identity(17))), &config), 17);
        assert_eq!(resolve_size(&parsed(Some(Lut1D::identity(4)), None), &config), 33);
        let config = config.with_resolution(64);
        assert_eq!(resolve_size(&parsed(None, Some(Lut3D::identity(17))), &config), 64);
    }

    #[test]
    fn bake_keeps_source_size() {
        let grid = bake(&parsed(None, Some(Lut3D::identity(5))), &BakeConfig::default()).unwrap();
        assert_eq!(grid.size, 5);
        assert_eq!(grid.len(), 125);
        assert_abs_diff_eq!(grid.get(1, 2, 3)[2], 0.75, epsilon = 1e-6);
    }

    #[test]
    fn bake_1d_only_uses_fallback() {
        let config = BakeConfig {
            fallback_resolution: 4,
            ..BakeConfig::default()
        };
        let grid = bake(&parsed(Some(Lut1D::identity(16)), None), &config).unwrap();
        assert_eq!(grid.size, 4);
        // packed: red drives all channels
        assert_abs_diff_eq!(grid.get(3, 0, 0)[2], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(grid.get(0, 3, 3)[1], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn bake_with_logc_input() {
        let config = BakeConfig::default()
            .with_resolution(3)
            .with_flags(ConversionFlags::logc_input());
        let grid = bake(&parsed(None, None), &config).unwrap();
        assert_abs_diff_eq!(grid.get(1, 1, 1)[0], log_c::decode(0.5), epsilon = 1e-6);
    }

    #[test]
    fn bake_serial() {
        let config = BakeConfig {
            parallel: false,
            ..BakeConfig::default()
        };
        let lut = Lut3D::identity(3);
        let a = bake(&parsed(None, Some(lut.clone())), &config).unwrap();
        let b = bake(&parsed(None, Some(lut)), &BakeConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bake_rejects_invalid_config() {
        let config = BakeConfig::default().with_resolution(1000);
        let err = bake(&parsed(None, None), &config).unwrap_err();
        assert!(matches!(err, BakeError::InvalidResolution { .. }));
    }

    #[test]
    fn bake_bytes_propagates_parse_errors() {
        let err = bake_bytes(b"LUT_3D_SIZE 2\nabc 0.1 0.2\n", LutFormat::Cube, &BakeConfig::default())
            .unwrap_err();
        assert!(matches!(err, BakeError::Lut(LutError::Format { line: Some(2), .. })));
    }

    #[test]
    fn bake_spi1d_bytes() {
        let text = b"From 0 1\nLength 3\n{\n0.0\n0.5\n1.0\n}\n";
        let config = BakeConfig::default().with_resolution(5);
        let grid = bake_bytes(text, LutFormat::Spi1D, &config).unwrap();
        // nearest, per channel
        assert_eq!(grid.get(1, 2, 4), [0.5, 0.5, 1.0]);
    }

    #[test]
    fn bake_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".cube").tempfile().unwrap();
        write!(file, "TITLE \"t\"\nLUT_1D_SIZE 2\n0 0 0\n1 1 1\n").unwrap();
        let config = BakeConfig::default()
            .with_resolution(2)
            .with_curve_mode(CurveMode::PerChannel);
        let grid = bake_file(file.path(), &config).unwrap();
        assert_eq!(grid.get(1, 0, 1), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn curve_output() {
        let parsed = cube::parse_str("LUT_1D_SIZE 3\n0 0 0\n0.25 0.25 0.25\n1 1 1\n").unwrap();
        let config = BakeConfig::default().with_resolution(3);
        let curve = bake_curve(&parsed, &config).unwrap();
        assert_eq!(curve, vec![[0.0; 3], [0.25; 3], [1.0; 3]]);
    }
}
