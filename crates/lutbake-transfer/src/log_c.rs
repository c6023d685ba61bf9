//! ARRI LogC transfer function.
//!
//! LogC is ARRI's logarithmic encoding for their digital cinema cameras.
//! The parameters below are the EI 800 set normalized for scene-linear
//! input, as used by real-time grading pipelines that bake camera LUTs.
//!
//! # Range
//!
//! - Encoded: [0, 1] (signal range)
//! - Linear: Scene-referred (can be negative for out-of-gamut)
//!
//! # Precise vs Approximate
//!
//! [`encode`] and [`decode`] are the piecewise forms with a linear toe
//! below `CUT`. [`encode_fast`] and [`decode_fast`] drop the toe and only
//! evaluate the log segment; they diverge from the precise curve near black
//! and produce NaN for inputs far enough below zero.

use serde::{Deserialize, Serialize};

// LogC parameters (EI 800, scene linear)
const CUT: f32 = 0.011361;
const A: f32 = 5.555556;
const B: f32 = 0.047996;
const C: f32 = 0.244161;
const D: f32 = 0.386036;
const E: f32 = 5.301883;
const F: f32 = 0.092819;

/// Encoded value at the linear/log breakpoint.
const LOG_CUT: f32 = E * CUT + F;

/// LogC encode: Linear to LogC.
///
/// # Example
///
/// ```rust
/// use lutbake_transfer::log_c::encode;
///
/// // 18% gray in LogC is approximately 0.391
/// let log = encode(0.18);
/// assert!((log - 0.391).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear > CUT {
        C * (A * linear + B).log10() + D
    } else {
        E * linear + F
    }
}

/// LogC decode: LogC to linear.
///
/// # Example
///
/// ```rust
/// use lutbake_transfer::log_c::decode;
///
/// let linear = decode(0.391);
/// assert!((linear - 0.18).abs() < 0.01);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    if log > LOG_CUT {
        (10.0_f32.powf((log - D) / C) - B) / A
    } else {
        (log - F) / E
    }
}

/// Log segment only, no linear toe.
#[inline]
pub fn encode_fast(linear: f32) -> f32 {
    C * (A * linear + B).log10() + D
}

/// Inverse of [`encode_fast`].
#[inline]
pub fn decode_fast(log: f32) -> f32 {
    (10.0_f32.powf((log - D) / C) - B) / A
}

/// Applies LogC encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies LogC decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Applies the approximate LogC encoding to RGB.
#[inline]
pub fn encode_fast_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode_fast(rgb[0]), encode_fast(rgb[1]), encode_fast(rgb[2])]
}

/// Applies the approximate LogC decoding to RGB.
#[inline]
pub fn decode_fast_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode_fast(rgb[0]), decode_fast(rgb[1]), decode_fast(rgb[2])]
}

/// Returns the LogC value for 18% gray (middle gray).
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}

/// Which form of the LogC curve to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCMode {
    /// Piecewise curve with the linear toe.
    #[default]
    Precise,
    /// Log segment only. Faster, inaccurate below the breakpoint.
    Approximate,
}

impl LogCMode {
    /// Linear to LogC on every channel.
    #[inline]
    pub fn encode_rgb(self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Precise => encode_rgb(rgb),
            Self::Approximate => encode_fast_rgb(rgb),
        }
    }

    /// LogC to linear on every channel.
    #[inline]
    pub fn decode_rgb(self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Precise => decode_rgb(rgb),
            Self::Approximate => decode_fast_rgb(rgb),
        }
    }
}
