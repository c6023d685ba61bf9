//! Result of parsing one LUT file.

use crate::{Lut1D, Lut3D, LutError, LutResult, cube, spi1d};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Supported LUT file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LutFormat {
    /// Adobe/Iridas `.cube` (1D and/or 3D)
    Cube,
    /// Sony Pictures Imageworks `.spi1d`
    Spi1D,
}

impl LutFormat {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> LutResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "cube" => Ok(Self::Cube),
            "spi1d" => Ok(Self::Spi1D),
            _ => Err(LutError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> LutResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Spi1D => "spi1d",
        }
    }
}

/// Tables and metadata read from one LUT file.
///
/// Produced once per parse and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLut {
    /// `TITLE` of a .cube file; empty when absent.
    pub title: String,
    /// 1D table, if the file declared one.
    pub lut1d: Option<Lut1D>,
    /// 3D table, if the file declared one.
    pub lut3d: Option<Lut3D>,
    /// Format the tables were read from.
    pub format: LutFormat,
}

impl ParsedLut {
    /// Parses `reader` as `format`.
    pub fn parse<R: BufRead>(reader: R, format: LutFormat) -> LutResult<Self> {
        match format {
            LutFormat::Cube => cube::parse(reader),
            LutFormat::Spi1D => spi1d::parse_lut(reader),
        }
    }

    /// Parses raw file contents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutbake_lut::{LutFormat, ParsedLut};
    ///
    /// let parsed = ParsedLut::from_bytes(b"LUT_1D_SIZE 2\n0 0 0\n1 1 1\n", LutFormat::Cube).unwrap();
    /// assert_eq!(parsed.lut1d.unwrap().size(), 2);
    /// ```
    pub fn from_bytes(bytes: &[u8], format: LutFormat) -> LutResult<Self> {
        Self::parse(bytes, format)
    }

    /// Reads a LUT file, picking the parser from its extension.
    pub fn read<P: AsRef<Path>>(path: P) -> LutResult<Self> {
        let path = path.as_ref();
        let format = LutFormat::from_path(path)?;
        let file = File::open(path)?;
        Self::parse(BufReader::new(file), format)
    }

    /// True if the file declared no table at all.
    pub fn is_empty(&self) -> bool {
        self.lut1d.is_none() && self.lut3d.is_none()
    }
}
