//! Bake configuration.
//!
//! Everything a host exposes as import settings, gathered in one immutable
//! value that is passed to [`crate::bake`]. Configs can be built in code or
//! loaded from a YAML sidecar:
//!
//! ```yaml
//! override_resolution: 64
//! log_to_linear_pre: true
//! curve_mode: per_channel
//! logc_mode: precise
//! ```

use crate::{BakeError, BakeResult};
use lutbake_lut::LutFormat;
use lutbake_transfer::LogCMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Grid resolution used when nothing else decides it.
pub const DEFAULT_RESOLUTION: u32 = 33;

/// Largest grid resolution a config may request.
pub const MAX_RESOLUTION: u32 = 256;

/// LogC conversions around the table lookups.
///
/// The flags are independent; setting both flags of a stage applies both,
/// encode first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionFlags {
    /// Linear to LogC before the lookups.
    pub linear_to_log_pre: bool,
    /// LogC to linear before the lookups.
    pub log_to_linear_pre: bool,
    /// Linear to LogC after the lookups.
    pub linear_to_log_post: bool,
    /// LogC to linear after the lookups.
    pub log_to_linear_post: bool,
}

impl ConversionFlags {
    /// No conversion at any stage.
    pub const NONE: Self = Self {
        linear_to_log_pre: false,
        log_to_linear_pre: false,
        linear_to_log_post: false,
        log_to_linear_post: false,
    };

    /// LogC to linear on input, the usual setting for camera LUTs baked
    /// into a linear-light pipeline.
    pub fn logc_input() -> Self {
        Self {
            log_to_linear_pre: true,
            ..Self::NONE
        }
    }

    /// True if any conversion is enabled.
    pub fn any(&self) -> bool {
        self.linear_to_log_pre || self.log_to_linear_pre || self.linear_to_log_post || self.log_to_linear_post
    }
}

/// How a 1D table is applied to an RGB sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    /// Red drives a linear lookup that returns the whole RGB row.
    Packed,
    /// Each channel through its own column, linear interpolation.
    PerChannel,
    /// Each channel through its own column, nearest entry.
    Nearest,
}

impl CurveMode {
    /// Mode matching how each format's importer applies its 1D table.
    pub fn default_for(format: LutFormat) -> Self {
        match format {
            LutFormat::Cube => Self::Packed,
            LutFormat::Spi1D => Self::Nearest,
        }
    }
}

impl FromStr for CurveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "packed" => Ok(Self::Packed),
            "per_channel" => Ok(Self::PerChannel),
            "nearest" => Ok(Self::Nearest),
            _ => Err(format!(
                "unknown curve mode '{}' (expected packed, per-channel or nearest)",
                s
            )),
        }
    }
}

/// Settings for one bake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeConfig {
    /// Output grid resolution; 0 keeps the source 3D size.
    pub override_resolution: u32,
    /// Pre/post LogC conversions.
    #[serde(flatten)]
    pub flags: ConversionFlags,
    /// 1D table application; `None` picks the format's default.
    pub curve_mode: Option<CurveMode>,
    /// Precise or approximate LogC.
    pub logc_mode: LogCMode,
    /// Resolution used when there is no override and no 3D table.
    pub fallback_resolution: u32,
    /// Evaluate the grid on the rayon pool.
    pub parallel: bool,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            override_resolution: 0,
            flags: ConversionFlags::NONE,
            curve_mode: None,
            logc_mode: LogCMode::Precise,
            fallback_resolution: DEFAULT_RESOLUTION,
            parallel: true,
        }
    }
}

impl BakeConfig {
    /// Loads a config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> BakeResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Loads a config from a YAML string. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> BakeResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the output resolution override.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.override_resolution = resolution;
        self
    }

    /// Sets the conversion flags.
    pub fn with_flags(mut self, flags: ConversionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Forces a 1D application mode.
    pub fn with_curve_mode(mut self, mode: CurveMode) -> Self {
        self.curve_mode = Some(mode);
        self
    }

    /// Checks resolution bounds.
    pub fn validate(&self) -> BakeResult<()> {
        if self.override_resolution > MAX_RESOLUTION {
            return Err(BakeError::InvalidResolution {
                field: "override_resolution",
                value: self.override_resolution,
                min: 0,
                max: MAX_RESOLUTION,
            });
        }
        if self.fallback_resolution == 0 || self.fallback_resolution > MAX_RESOLUTION {
            return Err(BakeError::InvalidResolution {
                field: "fallback_resolution",
                value: self.fallback_resolution,
                min: 1,
                max: MAX_RESOLUTION,
            });
        }
        Ok(())
    }
}
