//! # lutbake-transfer
//!
//! Log/linear transfer functions used around LUT lookups.
//!
//! Camera LUTs are usually authored against a log-encoded input. Before a
//! table is baked into a linear-light grid the samples have to be moved
//! into the space the table expects, and sometimes back out afterwards.
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`log_c`] | ARRI LogC (ALEXA, EI 800 scene-linear parameters) | Scene-referred |
//!
//! # Usage
//!
//! ```rust
//! use lutbake_transfer::log_c;
//!
//! // Scene linear 18% gray into LogC and back
//! let log = log_c::encode(0.18);
//! let linear = log_c::decode(log);
//! assert!((linear - 0.18).abs() < 1e-4);
//! ```
//!
//! # Used By
//!
//! - `lutbake-bake` - pre/post conversion stages of the sample pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod log_c;

pub use log_c::{LogCMode, decode as log_c_decode, encode as log_c_encode};
