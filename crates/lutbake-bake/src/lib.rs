//! # lutbake-bake
//!
//! Bakes `.cube` and `.spi1d` LUTs into dense 3D sample grids.
//!
//! The core is a pure function of the file contents and a [`BakeConfig`]:
//! parse the tables, run every identity lattice point through a
//! [`SamplePipeline`] (optional LogC conversions around the 1D and 3D
//! lookups), and collect the results into a [`Grid`].
//!
//! # Usage
//!
//! ```rust
//! use lutbake_bake::{BakeConfig, ConversionFlags, bake_bytes};
//! use lutbake_lut::LutFormat;
//!
//! let text = b"LUT_1D_SIZE 2\n0 0 0\n1 1 1\n";
//! let config = BakeConfig::default()
//!     .with_resolution(17)
//!     .with_flags(ConversionFlags::logc_input());
//! let grid = bake_bytes(text, LutFormat::Cube, &config).unwrap();
//! assert_eq!(grid.len(), 17 * 17 * 17);
//!
//! // half-float RGBA, ready for a texture upload
//! let pixels = grid.to_rgba_f16();
//! assert_eq!(pixels.len(), grid.len() * 4);
//! ```
//!
//! # Parallelism
//!
//! Grids are generated on the global rayon pool unless
//! [`BakeConfig::parallel`] is false.
//!
//! # Dependencies
//!
//! - [`lutbake_lut`] - tables, parsers, interpolation
//! - [`lutbake_transfer`] - LogC
//! - [`rayon`] - parallel grid generation
//! - [`serde_yaml`] - config files
//! - [`half`] - half-float export

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bake;
mod error;
pub mod config;
pub mod grid;
pub mod pipeline;

pub use bake::{bake, bake_bytes, bake_curve, bake_file, resolve_size};
pub use config::{BakeConfig, ConversionFlags, CurveMode, DEFAULT_RESOLUTION, MAX_RESOLUTION};
pub use error::{BakeError, BakeResult};
pub use grid::{Grid, generate_curve, generate_grid, generate_grid_serial, rgba_f16, rgba_f32};
pub use pipeline::{SamplePipeline, evaluate};
