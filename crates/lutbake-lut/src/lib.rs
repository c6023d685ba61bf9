//! # lutbake-lut
//!
//! Look-Up Table (LUT) types, parsers and interpolation.
//!
//! # LUT Types
//!
//! - [`Lut1D`] - 1-dimensional lookup table (RGB rows over a scalar domain)
//! - [`Lut3D`] - 3-dimensional lookup table (full RGB cube)
//! - [`ParsedLut`] - everything one file declared, plus its title
//!
//! # Supported Formats
//!
//! - `.cube` - Adobe/Iridas 1D and 3D LUTs ([`cube`] module)
//! - `.spi1d` - Sony Pictures Imageworks 1D LUTs ([`spi1d`] module)
//!
//! # Usage
//!
//! ```rust
//! use lutbake_lut::{Lut1D, Lut3D};
//!
//! let lut = Lut1D::identity(1024);
//! let rgb = lut.map_linear(0.5).unwrap();
//!
//! let lut = Lut3D::identity(33);
//! let rgb = lut.map_trilinear([0.5, 0.3, 0.2]).unwrap();
//! ```
//!
//! # Interpolation
//!
//! - 1D LUTs: Linear (whole row or per channel) or nearest entry
//! - 3D LUTs: Trilinear
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Parse diagnostics
//!
//! # Used By
//!
//! - `lutbake-bake` - grid generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut1d;
mod lut3d;
mod parsed;
pub mod cube;
pub mod interp;
pub mod spi1d;

pub use error::{LutError, LutResult};
pub use interp::{Interpolation, map_channels, map_linear, map_nearest, map_trilinear};
pub use lut1d::Lut1D;
pub use lut3d::Lut3D;
pub use parsed::{LutFormat, ParsedLut};
