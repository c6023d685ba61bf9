//! Per-sample evaluation.
//!
//! A [`SamplePipeline`] runs one RGB sample through a fixed chain:
//!
//! 1. linear to LogC (`linear_to_log_pre`)
//! 2. LogC to linear (`log_to_linear_pre`)
//! 3. 1D table, applied according to [`CurveMode`]
//! 4. 3D table, trilinear
//! 5. linear to LogC (`linear_to_log_post`)
//! 6. LogC to linear (`log_to_linear_post`)
//!
//! Tables are borrowed, so one pipeline can be shared across threads.

use crate::config::{BakeConfig, ConversionFlags, CurveMode};
use lutbake_lut::{Interpolation, Lut1D, Lut3D, LutResult, ParsedLut};
use lutbake_transfer::LogCMode;
use tracing::warn;

/// Conversion stages and tables for evaluating samples.
#[derive(Debug, Clone, Copy)]
pub struct SamplePipeline<'a> {
    flags: ConversionFlags,
    lut1d: Option<&'a Lut1D>,
    lut3d: Option<&'a Lut3D>,
    curve_mode: CurveMode,
    logc_mode: LogCMode,
}

impl<'a> SamplePipeline<'a> {
    /// Builds a pipeline, validating the tables once up front.
    ///
    /// The 1D table is applied in [`CurveMode::Packed`] mode and LogC is
    /// precise unless changed with the builder methods.
    pub fn new(
        flags: ConversionFlags,
        lut1d: Option<&'a Lut1D>,
        lut3d: Option<&'a Lut3D>,
    ) -> LutResult<Self> {
        if let Some(lut) = lut1d {
            lut.validate()?;
        }
        if let Some(lut) = lut3d {
            lut.validate()?;
        }
        if flags.linear_to_log_pre && flags.log_to_linear_pre {
            warn!("both pre conversions enabled, they are applied in sequence");
        }
        if flags.linear_to_log_post && flags.log_to_linear_post {
            warn!("both post conversions enabled, they are applied in sequence");
        }
        Ok(Self {
            flags,
            lut1d,
            lut3d,
            curve_mode: CurveMode::Packed,
            logc_mode: LogCMode::Precise,
        })
    }

    /// Builds the pipeline a config asks for over a parsed file.
    pub fn from_parsed(parsed: &'a ParsedLut, config: &BakeConfig) -> LutResult<Self> {
        let curve_mode = config
            .curve_mode
            .unwrap_or_else(|| CurveMode::default_for(parsed.format));
        Ok(Self::new(config.flags, parsed.lut1d.as_ref(), parsed.lut3d.as_ref())?
            .with_curve_mode(curve_mode)
            .with_logc_mode(config.logc_mode))
    }

    /// Sets how the 1D table is applied.
    pub fn with_curve_mode(mut self, mode: CurveMode) -> Self {
        self.curve_mode = mode;
        self
    }

    /// Sets the LogC variant.
    pub fn with_logc_mode(mut self, mode: LogCMode) -> Self {
        self.logc_mode = mode;
        self
    }

    /// Active 1D application mode.
    pub fn curve_mode(&self) -> CurveMode {
        self.curve_mode
    }

    /// Runs one sample through every enabled stage.
    pub fn evaluate(&self, rgb: [f32; 3]) -> LutResult<[f32; 3]> {
        let mut rgb = rgb;

        if self.flags.linear_to_log_pre {
            rgb = self.logc_mode.encode_rgb(rgb);
        }
        if self.flags.log_to_linear_pre {
            rgb = self.logc_mode.decode_rgb(rgb);
        }

        if let Some(lut) = self.lut1d {
            rgb = match self.curve_mode {
                CurveMode::Packed => lut.map_linear(rgb[0])?,
                CurveMode::PerChannel => lut.map_channels(rgb, Interpolation::Linear)?,
                CurveMode::Nearest => lut.map_channels(rgb, Interpolation::Nearest)?,
            };
        }
        if let Some(lut) = self.lut3d {
            rgb = lut.map_trilinear(rgb)?;
        }

        if self.flags.linear_to_log_post {
            rgb = self.logc_mode.encode_rgb(rgb);
        }
        if self.flags.log_to_linear_post {
            rgb = self.logc_mode.decode_rgb(rgb);
        }

        Ok(rgb)
    }
}

/// One-shot evaluation of a single sample.
///
/// # Example
///
/// ```rust
/// use lutbake_bake::{ConversionFlags, evaluate};
/// use lutbake_lut::Lut3D;
///
/// let lut = Lut3D::identity(9);
/// let rgb = evaluate([0.25, 0.5, 0.75], ConversionFlags::NONE, None, Some(&lut)).unwrap();
/// assert!((rgb[2] - 0.75).abs() < 1e-5);
/// ```
pub fn evaluate(
    sample: [f32; 3],
    flags: ConversionFlags,
    lut1d: Option<&Lut1D>,
    lut3d: Option<&Lut3D>,
) -> LutResult<[f32; 3]> {
    SamplePipeline::new(flags, lut1d, lut3d)?.evaluate(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lutbake_lut::{LutError, LutFormat};
    use lutbake_transfer::log_c;

    fn assert_rgb_eq(a: [f32; 3], b: [f32; 3]) {
        for c in 0..3 {
            assert_abs_diff_eq!(a[c], b[c], epsilon = 1e-5);
        }
    }

    #[test]
    fn passthrough_without_stages() {
        let out = evaluate([0.1, 0.2, 0.3], ConversionFlags::NONE, None, None).unwrap();
        assert_eq!(out, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn pre_conversions_compose() {
        let flags = ConversionFlags {
            linear_to_log_pre: true,
            log_to_linear_pre: true,
            ..ConversionFlags::NONE
        };
        let out = evaluate([0.0, 0.18, 1.0], flags, None, None).unwrap();
        assert_rgb_eq(out, [0.0, 0.18, 1.0]);
    }

    #[test]
    fn pre_encode_runs_before_decode() {
        // encode_fast is undefined below -B/A, decode_fast is not
        let flags = ConversionFlags {
            linear_to_log_pre: true,
            log_to_linear_pre: true,
            ..ConversionFlags::NONE
        };
        let pipeline = SamplePipeline::new(flags, None, None)
            .unwrap()
            .with_logc_mode(LogCMode::Approximate);
        let out = pipeline.evaluate([-0.5; 3]).unwrap();
        assert!(out.iter().all(|c| c.is_nan()));

        let reversed = log_c::encode_fast(log_c::decode_fast(-0.5));
        assert!(reversed.is_finite());
    }

    #[test]
    fn post_conversions_compose() {
        let flags = ConversionFlags {
            linear_to_log_post: true,
            log_to_linear_post: true,
            ..ConversionFlags::NONE
        };
        let lut = Lut3D::identity(2);
        let out = evaluate([0.18; 3], flags, None, Some(&lut)).unwrap();
        assert_rgb_eq(out, [0.18; 3]);
        // either stage alone moves mid gray
        assert!((log_c::encode(0.18) - 0.18).abs() > 0.1);
        assert!((log_c::decode(0.18) - 0.18).abs() > 0.1);
    }

    #[test]
    fn pre_encode_feeds_table() {
        let flags = ConversionFlags {
            linear_to_log_pre: true,
            ..ConversionFlags::NONE
        };
        let lut = Lut3D::identity(65);
        let out = evaluate([0.18, 0.18, 0.18], flags, None, Some(&lut)).unwrap();
        assert_abs_diff_eq!(out[0], log_c::encode(0.18), epsilon = 1e-4);
    }

    #[test]
    fn post_decode_after_table() {
        let flags = ConversionFlags {
            log_to_linear_post: true,
            ..ConversionFlags::NONE
        };
        let lut = Lut3D::identity(2);
        let out = evaluate([0.5, 0.5, 0.5], flags, None, Some(&lut)).unwrap();
        assert_abs_diff_eq!(out[1], log_c::decode(0.5), epsilon = 1e-5);
    }

    #[test]
    fn packed_curve_couples_channels() {
        // rows are not gray, output follows the red input only
        let lut = Lut1D::from_values(vec![[0.0, 1.0, 0.5], [1.0, 0.0, 0.5]], 0.0, 1.0).unwrap();
        let pipeline = SamplePipeline::new(ConversionFlags::NONE, Some(&lut), None).unwrap();
        let out = pipeline.evaluate([0.25, 0.9, 0.1]).unwrap();
        assert_rgb_eq(out, [0.25, 0.75, 0.5]);
    }

    #[test]
    fn per_channel_curve() {
        let lut = Lut1D::from_values(vec![[0.0, 1.0, 0.5], [1.0, 0.0, 0.5]], 0.0, 1.0).unwrap();
        let pipeline = SamplePipeline::new(ConversionFlags::NONE, Some(&lut), None)
            .unwrap()
            .with_curve_mode(CurveMode::PerChannel);
        let out = pipeline.evaluate([0.25, 0.9, 0.1]).unwrap();
        assert_rgb_eq(out, [0.25, 0.1, 0.5]);
    }

    #[test]
    fn nearest_curve() {
        let lut = Lut1D::from_mono(vec![0.0, 0.5, 1.0], 0.0, 1.0).unwrap();
        let pipeline = SamplePipeline::new(ConversionFlags::NONE, Some(&lut), None)
            .unwrap()
            .with_curve_mode(CurveMode::Nearest);
        assert_eq!(pipeline.evaluate([0.1, 0.25, 0.8]).unwrap(), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn curve_then_cube() {
        // 1D halves, 3D inverts
        let curve = Lut1D::from_values(vec![[0.0; 3], [0.5; 3]], 0.0, 1.0).unwrap();
        let mut cube = Lut3D::identity(2);
        for v in cube.values.iter_mut() {
            *v = [1.0 - v[0], 1.0 - v[1], 1.0 - v[2]];
        }
        let out = evaluate([1.0, 1.0, 1.0], ConversionFlags::NONE, Some(&curve), Some(&cube)).unwrap();
        assert_rgb_eq(out, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn invalid_tables_rejected_up_front() {
        let empty = Lut3D::default();
        let err = SamplePipeline::new(ConversionFlags::NONE, None, Some(&empty)).unwrap_err();
        assert!(matches!(err, LutError::MissingTable("3D")));

        let flat = Lut1D::identity(4).with_domain(1.0, 1.0);
        let err = SamplePipeline::new(ConversionFlags::NONE, Some(&flat), None).unwrap_err();
        assert!(matches!(err, LutError::DegenerateRange { .. }));
    }

    #[test]
    fn from_parsed_picks_format_default() {
        let parsed = ParsedLut {
            title: String::new(),
            lut1d: Some(Lut1D::identity(3)),
            lut3d: None,
            format: LutFormat::Spi1D,
        };
        let pipeline = SamplePipeline::from_parsed(&parsed, &BakeConfig::default()).unwrap();
        assert_eq!(pipeline.curve_mode(), CurveMode::Nearest);

        let config = BakeConfig::default().with_curve_mode(CurveMode::PerChannel);
        let pipeline = SamplePipeline::from_parsed(&parsed, &config).unwrap();
        assert_eq!(pipeline.curve_mode(), CurveMode::PerChannel);
    }
}
