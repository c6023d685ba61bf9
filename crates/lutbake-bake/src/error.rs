//! Error types for grid baking.

use thiserror::Error;

/// Result type for bake operations.
pub type BakeResult<T> = Result<T, BakeError>;

/// Errors that can occur while baking a LUT into a grid.
#[derive(Debug, Error)]
pub enum BakeError {
    /// Parse or lookup failure in the LUT layer.
    #[error("LUT error: {0}")]
    Lut(#[from] lutbake_lut::LutError),

    /// YAML config parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading config files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid resolution outside the supported range.
    #[error("invalid {field}: {value} (expected {min}..={max})")]
    InvalidResolution {
        /// Config field holding the value.
        field: &'static str,
        /// Rejected value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
}
