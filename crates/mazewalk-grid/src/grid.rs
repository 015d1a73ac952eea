//! The maze grid.

use crate::cell::Cell;
use log::warn;
use mazewalk_core::{GridError, Position};
use std::borrow::Borrow;

/// A `width x height` maze with a designated start cell.
///
/// Cells are stored row-major: cell `(x, y)` lives at `y * width + x`.
/// Every in-bounds coordinate has exactly one cell; lookups outside
/// `[0, width) x [0, height)` fail with [`GridError::OutOfBounds`].
///
/// Freshly constructed grids hold [`Cell::default`] everywhere, i.e.
/// every cell walled north and south.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    start: Position,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum number of cells a grid may hold (2^24).
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create a grid of default cells.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if either dimension is zero.
    /// - [`GridError::DimensionTooLarge`] if either exceeds [`Grid::MAX_DIM`].
    /// - [`GridError::TooManyCells`] if `width * height` exceeds [`Grid::MAX_CELLS`].
    /// - [`GridError::StartOutOfBounds`] if `(start_x, start_y)` is not a cell.
    pub fn new(width: u32, height: u32, start_x: i32, start_y: i32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let cell_count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(GridError::TooManyCells {
                width,
                height,
                max: Self::MAX_CELLS,
            })?;
        let start = Position::new(start_x, start_y);
        if !in_bounds(start, width, height) {
            return Err(GridError::StartOutOfBounds {
                start,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            start,
            cells: vec![Cell::default(); cell_count],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The authoritative start coordinate.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `position` names a cell of this grid.
    pub fn contains(&self, position: Position) -> bool {
        in_bounds(position, self.width, self.height)
    }

    /// The cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the coordinate is outside the grid.
    /// Walkers treat this as having escaped.
    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell, GridError> {
        self.cell_at(Position::new(x, y))
    }

    /// The cell at `position`. See [`Grid::cell`].
    pub fn cell_at(&self, position: Position) -> Result<&Cell, GridError> {
        let idx = self.index(position)?;
        Ok(&self.cells[idx])
    }

    /// Replace the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the coordinate is outside the grid;
    /// the grid is left unchanged.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let position = Position::new(x, y);
        let idx = self.index(position)?;
        self.note_start_marker(position, &cell);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Parse `code` (see [`Cell::from_code`]) into the cell at `(x, y)`.
    ///
    /// An `x` marker on a cell other than [`Grid::start`] is logged as a
    /// warning; the grid-level start stays authoritative.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn populate_from_code(&mut self, code: &str, x: i32, y: i32) -> Result<(), GridError> {
        self.set_cell(x, y, Cell::from_code(code))
    }

    /// Populate every cell from a row-major table of codes: `rows[y][x]`
    /// becomes cell `(x, y)`.
    ///
    /// The table must have exactly `height` rows of `width` codes. The
    /// shape is checked before any cell is written, so a rejected table
    /// leaves the grid untouched.
    pub fn populate_all_from_codes<I, R, S>(&mut self, rows: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|code| Cell::from_code(code.as_ref()))
                    .collect::<Vec<_>>()
            })
            .collect();
        self.replace_all(parsed)
    }

    /// Set the cell at `(x, y)` from a 4-bit wall code
    /// (`0b1000` N, `0b0100` E, `0b0010` S, `0b0001` W).
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn populate_from_bits(&mut self, bits: u8, x: i32, y: i32) -> Result<(), GridError> {
        self.set_cell(x, y, Cell::from_bits(bits))
    }

    /// Bit-code counterpart of [`Grid::populate_all_from_codes`].
    pub fn populate_all_from_bits<I, R, B>(&mut self, rows: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = B>,
        B: Borrow<u8>,
    {
        let parsed: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|bits| Cell::from_bits(*bits.borrow()))
                    .collect::<Vec<_>>()
            })
            .collect();
        self.replace_all(parsed)
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let pos = Position::new((i % width) as i32, (i / width) as i32);
            (pos, cell)
        })
    }

    /// Positions of cells whose code carried the start marker.
    pub fn marked_starts(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.start_marker)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Export the grid as a row-major table of canonical cell codes.
    ///
    /// Feeding the result back to [`Grid::populate_all_from_codes`]
    /// reproduces the same cells.
    pub fn to_codes(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(Cell::to_code).collect())
            .collect()
    }

    fn index(&self, position: Position) -> Result<usize, GridError> {
        if !self.contains(position) {
            return Err(GridError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok((position.y as usize) * (self.width as usize) + (position.x as usize))
    }

    fn replace_all(&mut self, rows: Vec<Vec<Cell>>) -> Result<(), GridError> {
        let expected_rows = self.height as usize;
        let expected_cols = self.width as usize;
        if rows.len() != expected_rows {
            return Err(GridError::ShapeMismatch {
                expected_rows,
                expected_cols,
                found_rows: rows.len(),
                found_cols: None,
                row: None,
            });
        }
        if let Some((y, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected_cols)
        {
            return Err(GridError::ShapeMismatch {
                expected_rows,
                expected_cols,
                found_rows: rows.len(),
                found_cols: Some(row.len()),
                row: Some(y),
            });
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        for (i, cell) in cells.iter().enumerate() {
            let pos = Position::new((i % expected_cols) as i32, (i / expected_cols) as i32);
            self.note_start_marker(pos, cell);
        }
        self.cells = cells;
        Ok(())
    }

    fn note_start_marker(&self, position: Position, cell: &Cell) {
        if cell.start_marker && position != self.start {
            warn!(
                "cell {position} is marked as start but the grid start is {}; keeping the grid start",
                self.start
            );
        }
    }
}

fn in_bounds(position: Position, width: u32, height: u32) -> bool {
    position.x >= 0
        && position.y >= 0
        && (position.x as u32) < width
        && (position.y as u32) < height
}
