//! Adobe/Iridas .cube LUT format support.
//!
//! The .cube format is a simple text-based LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and many other tools. One file
//! may carry a 1D table, a 3D table, or both.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_1D_SIZE 1024
//! LUT_1D_INPUT_RANGE 0.0 1.0
//! LUT_3D_SIZE 33
//! LUT_3D_INPUT_RANGE 0.0 1.0
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! # Data rows
//!
//! Every line that is not blank, a comment, or one of the keywords above is
//! a data row of three floats. Rows fill the 1D table first until it is
//! full, then the 3D table; rows past both are ignored. A file declaring
//! both tables therefore has to list every 1D row before the first 3D row.
//! 3D rows are in file order, red varying fastest.
//!
//! # Example
//!
//! ```rust
//! use lutbake_lut::cube;
//!
//! let text = "LUT_3D_SIZE 2\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
//! let parsed = cube::parse_str(text).unwrap();
//! let lut = parsed.lut3d.unwrap();
//! let rgb = lut.map_trilinear([0.25, 0.5, 0.75]).unwrap();
//! assert!((rgb[0] - 0.25).abs() < 1e-6);
//! ```

use crate::{Lut1D, Lut3D, LutError, LutFormat, LutResult, ParsedLut};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace, warn};

/// Largest accepted `LUT_3D_SIZE`.
pub const MAX_3D_SIZE: usize = 256;

/// Largest accepted `LUT_1D_SIZE`.
pub const MAX_1D_SIZE: usize = 65536;

/// Reads a .cube file from disk.
///
/// # Example
///
/// ```rust,no_run
/// use lutbake_lut::cube;
///
/// let parsed = cube::read("grade.cube").unwrap();
/// println!("{}", parsed.title);
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> LutResult<ParsedLut> {
    let file = File::open(path.as_ref())?;
    parse(BufReader::new(file))
}

/// Parses .cube text held in memory.
pub fn parse_str(text: &str) -> LutResult<ParsedLut> {
    parse(text.as_bytes())
}

/// Parses a .cube LUT from a reader.
///
/// # Errors
///
/// [`LutError::Format`] for malformed keywords or data rows, data before
/// any size declaration, or a declared table left incomplete.
/// [`LutError::DegenerateRange`] if a table's domain has zero width.
pub fn parse<R: BufRead>(reader: R) -> LutResult<ParsedLut> {
    let mut title = String::new();
    let mut fill_1d: Option<TableFill> = None;
    let mut fill_3d: Option<TableFill> = None;
    let mut size_3d = 0usize;
    let mut range_1d: Option<(f32, f32)> = None;
    let mut range_3d = (0.0f32, 1.0f32);
    let mut domain_min: Option<[f32; 3]> = None;
    let mut domain_max: Option<[f32; 3]> = None;
    let mut surplus = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let raw = line?;
        let raw = if idx == 0 { raw.trim_start_matches('\u{feff}') } else { raw.as_str() };
        let line = raw.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "TITLE" => {
                title = parse_title(line);
            }
            "LUT_3D_SIZE" => {
                let n = parse_size(line_no, line, &tokens, MAX_3D_SIZE)?;
                if fill_3d.is_some() {
                    warn!(line = line_no, "LUT_3D_SIZE redeclared, previous 3D rows dropped");
                }
                size_3d = n;
                fill_3d = Some(TableFill::new(n * n * n, line_no, line));
            }
            "LUT_1D_SIZE" => {
                let n = parse_size(line_no, line, &tokens, MAX_1D_SIZE)?;
                if fill_1d.is_some() {
                    warn!(line = line_no, "LUT_1D_SIZE redeclared, previous 1D rows dropped");
                }
                fill_1d = Some(TableFill::new(n, line_no, line));
            }
            "LUT_3D_INPUT_RANGE" => {
                let [min, max] = parse_floats::<2>(line_no, line, &tokens[1..])?;
                range_3d = (min, max);
            }
            "LUT_1D_INPUT_RANGE" => {
                let [min, max] = parse_floats::<2>(line_no, line, &tokens[1..])?;
                range_1d = Some((min, max));
            }
            "DOMAIN_MIN" => {
                domain_min = Some(parse_floats::<3>(line_no, line, &tokens[1..])?);
            }
            "DOMAIN_MAX" => {
                domain_max = Some(parse_floats::<3>(line_no, line, &tokens[1..])?);
            }
            _ => {
                let rgb = parse_floats::<3>(line_no, line, &tokens)?;
                if let Some(table) = fill_1d.as_mut().filter(|t| !t.is_full()) {
                    trace!(line = line_no, slot = table.values.len(), "1D row");
                    table.values.push(rgb);
                } else if let Some(table) = fill_3d.as_mut().filter(|t| !t.is_full()) {
                    trace!(line = line_no, slot = table.values.len(), "3D row");
                    table.values.push(rgb);
                } else if fill_1d.is_none() && fill_3d.is_none() {
                    return Err(LutError::format(
                        line_no,
                        line,
                        "data row before LUT_1D_SIZE or LUT_3D_SIZE",
                    ));
                } else {
                    surplus += 1;
                }
            }
        }
    }

    if surplus > 0 {
        warn!(rows = surplus, "ignored data rows past the declared table sizes");
    }

    let uses_domain_min_max = domain_min.is_some() || domain_max.is_some();

    let lut1d = match fill_1d {
        Some(fill) => {
            let values = fill.finish()?;
            // A 1D-only file may state its domain with DOMAIN_MIN/MAX
            let (min, max) = match range_1d {
                Some(range) => range,
                None if fill_3d.is_none() && uses_domain_min_max => {
                    debug!("1D domain taken from DOMAIN_MIN/DOMAIN_MAX");
                    (
                        domain_min.map_or(0.0, |d| d[0]),
                        domain_max.map_or(1.0, |d| d[0]),
                    )
                }
                None => (0.0, 1.0),
            };
            Some(Lut1D::from_values(values, min, max)?)
        }
        None => None,
    };

    let lut3d = match fill_3d {
        Some(fill) => {
            let values = fill.finish()?;
            let lut = Lut3D {
                size: size_3d,
                values,
                input_min: range_3d.0,
                input_max: range_3d.1,
                domain_min: domain_min.unwrap_or([0.0; 3]),
                domain_max: domain_max.unwrap_or([1.0; 3]),
                uses_domain_min_max,
            };
            lut.validate()?;
            Some(lut)
        }
        None => None,
    };

    debug!(
        title = %title,
        size_1d = lut1d.as_ref().map_or(0, |l| l.size()),
        size_3d = lut3d.as_ref().map_or(0, |l| l.size),
        "parsed .cube"
    );

    Ok(ParsedLut {
        title,
        lut1d,
        lut3d,
        format: LutFormat::Cube,
    })
}

/// Rows collected for one declared table.
struct TableFill {
    values: Vec<[f32; 3]>,
    expected: usize,
    line: usize,
    content: String,
}

impl TableFill {
    fn new(expected: usize, line: usize, content: &str) -> Self {
        Self {
            values: Vec::with_capacity(expected),
            expected,
            line,
            content: content.to_string(),
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.values.len() >= self.expected
    }

    fn finish(self) -> LutResult<Vec<[f32; 3]>> {
        if !self.is_full() {
            return Err(LutError::format(
                self.line,
                self.content,
                format!("expected {} data rows, found {}", self.expected, self.values.len()),
            ));
        }
        Ok(self.values)
    }
}

// Helper functions

fn parse_title(line: &str) -> String {
    let rest = line["TITLE".len()..].trim();
    rest.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(rest)
        .to_string()
}

fn parse_size(line_no: usize, line: &str, tokens: &[&str], max: usize) -> LutResult<usize> {
    if tokens.len() != 2 {
        return Err(LutError::format(line_no, line, "expected a single size value"));
    }
    let n: usize = tokens[1]
        .parse()
        .map_err(|_| LutError::format(line_no, line, format!("invalid size '{}'", tokens[1])))?;
    if n == 0 || n > max {
        return Err(LutError::format(
            line_no,
            line,
            format!("size {} out of range 1..={}", n, max),
        ));
    }
    Ok(n)
}

fn parse_floats<const N: usize>(line_no: usize, line: &str, tokens: &[&str]) -> LutResult<[f32; N]> {
    if tokens.len() != N {
        return Err(LutError::format(
            line_no,
            line,
            format!("expected {} values, found {}", N, tokens.len()),
        ));
    }
    let mut out = [0.0f32; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token
            .parse()
            .map_err(|_| LutError::format(line_no, line, format!("invalid number '{}'", token)))?;
    }
    Ok(out)
}
