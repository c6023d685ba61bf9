//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
#[derive(Debug, Error)]
pub enum LutError {
    /// Malformed LUT text. Fatal to the whole parse.
    #[error("{}", format_message(.line, .content, .reason))]
    Format {
        /// 1-based line number, when the error belongs to a single line.
        line: Option<usize>,
        /// Raw content of the offending line.
        content: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Input domain with zero (or non-finite) width.
    #[error("degenerate input range: [{min}, {max}]")]
    DegenerateRange {
        /// Minimum value
        min: f32,
        /// Maximum value
        max: f32,
    },

    /// Lookup on a table with no entries.
    #[error("{0} LUT has no entries")]
    MissingTable(&'static str),

    /// Entry count that does not match the declared table size.
    #[error("{table} LUT of size {size} needs {expected} entries, has {actual}")]
    SizeMismatch {
        /// "1D" or "3D"
        table: &'static str,
        /// Declared size
        size: usize,
        /// Entries the size calls for
        expected: usize,
        /// Entries present
        actual: usize,
    },

    /// File extension that maps to no known LUT format.
    #[error("unsupported LUT format: {0}")]
    UnsupportedFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LutError {
    /// Builds a [`LutError::Format`] for a specific line.
    pub fn format(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            line: Some(line),
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Builds a [`LutError::Format`] that is not tied to one line.
    pub fn format_eof(reason: impl Into<String>) -> Self {
        Self::Format {
            line: None,
            content: String::new(),
            reason: reason.into(),
        }
    }
}

fn format_message(line: &Option<usize>, content: &str, reason: &str) -> String {
    match (*line, content.is_empty()) {
        (Some(n), false) => format!("parse error at line {}: {} ({:?})", n, reason, content),
        (Some(n), true) => format!("parse error at line {}: {}", n, reason),
        (None, false) => format!("parse error: {} ({:?})", reason, content),
        (None, true) => format!("parse error: {}", reason),
    }
}
