//! The four compass directions.
//!
//! A [`Direction`] names both a side of a cell (where a wall may stand)
//! and a unit step for the walker. Screen convention: `y` grows south.

use std::fmt;

/// Cardinal direction on the maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Towards row `y - 1`.
    North = 0,
    /// Towards column `x + 1`.
    East = 1,
    /// Towards row `y + 1`.
    South = 2,
    /// Towards column `x - 1`.
    West = 3,
}

impl Direction {
    /// All four directions in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(dx, dy)` unit vector for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Bit used for this direction in a 4-bit wall code.
    ///
    /// North is the most significant bit: `0b1000` N, `0b0100` E,
    /// `0b0010` S, `0b0001` W.
    pub fn bit(self) -> u8 {
        0b1000 >> (self as u8)
    }

    /// Parse a single cell-code character, case-insensitively.
    ///
    /// Returns `None` for anything other than `n`, `e`, `s`, `w`.
    pub fn from_code_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            'e' => Some(Direction::East),
            's' => Some(Direction::South),
            'w' => Some(Direction::West),
            _ => None,
        }
    }

    /// Lower-case cell-code character for this direction.
    pub fn code_char(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        f.write_str(name)
    }
}
