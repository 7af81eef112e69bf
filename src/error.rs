//! Error types for maze construction and rendering.

use std::fmt;

/// Errors arising from grid construction or text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A grid was requested with a zero dimension, or with more cells than fit in memory.
    InvalidDimensions {
        /// Requested number of columns.
        columns: usize,
        /// Requested number of rows.
        rows: usize,
    },
    /// A rendering glyph does not occupy exactly one terminal column.
    InvalidGlyph {
        /// The offending glyph.
        glyph: char,
        /// Its display width, `None` for control characters.
        width: Option<usize>,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { columns, rows } => {
                write!(
                    f,
                    "invalid maze dimensions {columns}x{rows}: both must be at least 1"
                )
            }
            Self::InvalidGlyph { glyph, width } => match width {
                Some(w) => write!(f, "glyph {glyph:?} is {w} columns wide, expected 1"),
                None => write!(f, "glyph {glyph:?} is not printable"),
            },
        }
    }
}

impl std::error::Error for MazeError {}
