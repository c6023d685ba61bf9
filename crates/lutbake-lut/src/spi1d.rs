//! Sony Pictures Imageworks .spi1d LUT format.
//!
//! A header of `Key value...` lines followed by a brace-delimited block
//! holding exactly `Length` samples:
//!
//! ```text
//! Version 1
//! From 0.0 1.0
//! Length 4
//! Components 1
//! {
//!   0.000000
//!   0.250000
//!   0.600000
//!   1.000000
//! }
//! ```
//!
//! Only the `Length` lines following `{` are read; whatever follows them,
//! the closing brace included, is ignored. `Components 3` rows carry one
//! value per channel; mono rows are replicated to all three channels.
//!
//! # Example
//!
//! ```rust
//! use lutbake_lut::spi1d;
//!
//! let lut = spi1d::parse_str("From 0 1\nLength 3\n{\n0.0\n0.5\n1.0\n}\n").unwrap();
//! assert_eq!(lut.map_nearest(0.25).unwrap(), 0.5);
//! ```

use crate::{Lut1D, LutError, LutFormat, LutResult, ParsedLut};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Reads an SPI1D file from disk.
pub fn read<P: AsRef<Path>>(path: P) -> LutResult<Lut1D> {
    let file = File::open(path.as_ref())?;
    parse(BufReader::new(file))
}

/// Reads an SPI1D file as a [`ParsedLut`].
pub fn read_lut<P: AsRef<Path>>(path: P) -> LutResult<ParsedLut> {
    read(path).map(into_parsed)
}

/// Parses SPI1D text held in memory.
pub fn parse_str(text: &str) -> LutResult<Lut1D> {
    parse(text.as_bytes())
}

/// Parses SPI1D from a reader, wrapped as a [`ParsedLut`].
pub fn parse_lut<R: BufRead>(reader: R) -> LutResult<ParsedLut> {
    parse(reader).map(into_parsed)
}

/// Parses SPI1D from a reader.
///
/// # Errors
///
/// [`LutError::Format`] if `Length` is missing or invalid, the `{` block is
/// missing, fewer than `Length` lines follow it, or a sample is not a
/// number. [`LutError::DegenerateRange`] if `From` has zero width.
pub fn parse<R: BufRead>(reader: R) -> LutResult<Lut1D> {
    let mut lines = reader.lines().enumerate();
    let mut from = (0.0f32, 1.0f32);
    let mut length: Option<usize> = None;
    let mut components = 1usize;

    // Header, up to the opening brace
    let brace_line = loop {
        let Some((idx, line)) = lines.next() else {
            return Err(LutError::format_eof("missing '{' data block"));
        };
        let line_no = idx + 1;
        let raw = line?;
        let raw = if idx == 0 { raw.trim_start_matches('\u{feff}') } else { raw.as_str() };
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "{" {
            break line_no;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "From" => {
                if tokens.len() != 3 {
                    return Err(LutError::format(line_no, line, "expected 'From <min> <max>'"));
                }
                from = (
                    parse_value(line_no, line, tokens[1])?,
                    parse_value(line_no, line, tokens[2])?,
                );
            }
            "Length" => {
                let n = tokens
                    .get(1)
                    .and_then(|t| t.parse::<usize>().ok())
                    .filter(|&n| n > 0)
                    .ok_or_else(|| LutError::format(line_no, line, "expected 'Length <n>' with n > 0"))?;
                length = Some(n);
            }
            "Components" => {
                components = match tokens.get(1).copied() {
                    Some("1") => 1,
                    Some("3") => 3,
                    _ => return Err(LutError::format(line_no, line, "Components must be 1 or 3")),
                };
            }
            "Version" => {}
            _ => trace!(line = line_no, "ignoring header line"),
        }
    };

    let length = length.ok_or_else(|| LutError::format(brace_line, "{", "data block before Length"))?;

    let mut values: Vec<[f32; 3]> = Vec::new();
    for _ in 0..length {
        let Some((idx, line)) = lines.next() else {
            return Err(LutError::format_eof(format!(
                "expected {} values, found {}",
                length,
                values.len()
            )));
        };
        let line_no = idx + 1;
        let raw = line?;
        let line = raw.trim();
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() != components {
            return Err(LutError::format(
                line_no,
                line,
                format!("expected {} value(s), found {}", components, tokens.len()),
            ));
        }
        let row = if components == 1 {
            let v = parse_value(line_no, line, tokens[0])?;
            [v, v, v]
        } else {
            [
                parse_value(line_no, line, tokens[0])?,
                parse_value(line_no, line, tokens[1])?,
                parse_value(line_no, line, tokens[2])?,
            ]
        };
        values.push(row);
    }

    debug!(length, components, from_min = from.0, from_max = from.1, "parsed .spi1d");
    Lut1D::from_values(values, from.0, from.1)
}

fn into_parsed(lut: Lut1D) -> ParsedLut {
    ParsedLut {
        title: String::new(),
        lut1d: Some(lut),
        lut3d: None,
        format: LutFormat::Spi1D,
    }
}

fn parse_value(line_no: usize, line: &str, token: &str) -> LutResult<f32> {
    token
        .parse()
        .map_err(|_| LutError::format(line_no, line, format!("invalid number '{}'", token)))
}
