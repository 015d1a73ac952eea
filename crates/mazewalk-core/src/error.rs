//! Error types for grid construction and cell access.

use crate::position::Position;
use std::fmt;

/// Errors arising from grid construction, population, or lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A dimension does not fit the signed coordinate type.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height` exceeds the cell storage limit.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// The largest accepted cell count.
        max: usize,
    },
    /// The start coordinate lies outside the grid.
    StartOutOfBounds {
        /// The offending start.
        start: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A cell was requested outside `[0, width) x [0, height)`.
    ///
    /// This is the bounds signal: for a walker it means "escaped", not a bug.
    OutOfBounds {
        /// The requested coordinate.
        position: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Bulk population input does not match the grid dimensions.
    ShapeMismatch {
        /// Grid height.
        expected_rows: usize,
        /// Grid width.
        expected_cols: usize,
        /// Number of rows supplied.
        found_rows: usize,
        /// Length of the first offending row, if the row count matched.
        found_cols: Option<usize>,
        /// Index of the first offending row, if the row count matched.
        row: Option<usize>,
    },
}

impl GridError {
    /// Whether this is the out-of-bounds lookup signal.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { width, height, max } => {
                write!(f, "{width}x{height} grid exceeds the limit of {max} cells")
            }
            Self::StartOutOfBounds {
                start,
                width,
                height,
            } => write!(
                f,
                "start {start} outside grid [0, {width}) x [0, {height})"
            ),
            Self::OutOfBounds {
                position,
                width,
                height,
            } => write!(
                f,
                "position {position} out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::ShapeMismatch {
                expected_rows,
                expected_cols,
                found_rows,
                found_cols,
                row,
            } => match (row, found_cols) {
                (Some(row), Some(cols)) => write!(
                    f,
                    "row {row} has {cols} cells, expected {expected_cols}"
                ),
                _ => write!(
                    f,
                    "expected {expected_rows} rows of {expected_cols} cells, got {found_rows} rows"
                ),
            },
        }
    }
}

impl std::error::Error for GridError {}
