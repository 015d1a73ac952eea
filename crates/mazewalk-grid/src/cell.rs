//! A single maze cell and its code formats.

use mazewalk_core::{Direction, WallSet};

/// Character marking a cell as the drawn start in a cell code.
pub const START_MARKER: char = 'x';

/// One grid position with its wall configuration.
///
/// `start_marker` records an `x` in the cell's code. It only affects
/// drawing; the authoritative start is [`Grid::start`](crate::Grid::start).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Blocked sides.
    pub walls: WallSet,
    /// Whether the cell code carried the start marker.
    pub start_marker: bool,
}

impl Cell {
    /// A cell with the given walls and no start marker.
    pub fn new(walls: WallSet) -> Self {
        Self {
            walls,
            start_marker: false,
        }
    }

    /// A cell with no walls.
    pub fn open() -> Self {
        Self::new(WallSet::empty())
    }

    /// Whether movement towards `direction` is blocked.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.contains(direction)
    }

    /// Parse a cell code.
    ///
    /// Case-insensitive; `n`/`e`/`s`/`w` add walls, `x` sets the start
    /// marker, other characters are ignored. Repeated characters are
    /// harmless.
    pub fn from_code(code: &str) -> Self {
        let mut cell = Self::open();
        for c in code.chars() {
            if let Some(d) = Direction::from_code_char(c) {
                cell.walls.insert(d);
            } else if c.eq_ignore_ascii_case(&START_MARKER) {
                cell.start_marker = true;
            }
        }
        cell
    }

    /// Build a cell from a 4-bit wall code (`0b1000` N ... `0b0001` W).
    pub fn from_bits(bits: u8) -> Self {
        Self::new(WallSet::from_bits(bits))
    }

    /// Canonical lower-case code: walls in `nesw` order, then `x` if marked.
    pub fn to_code(&self) -> String {
        let mut code: String = self.walls.iter().map(Direction::code_char).collect();
        if self.start_marker {
            code.push(START_MARKER);
        }
        code
    }
}

/// Cells start out walled north and south, forming horizontal corridors
/// until the grid is populated.
impl Default for Cell {
    fn default() -> Self {
        Self::new(
            WallSet::empty()
                .with(Direction::North)
                .with(Direction::South),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn code_ignores_case_and_order() {
        let a = Cell::from_code("ns");
        let b = Cell::from_code("SN");
        assert_eq!(a, b);
        assert_eq!(
            a.walls,
            WallSet::empty().with(Direction::North).with(Direction::South)
        );
    }

    #[test]
    fn code_ignores_padding_and_unknown_chars() {
        let c = Cell::from_code(" e?w  ");
        assert_eq!(c.walls.iter().collect::<Vec<_>>(), vec![Direction::East, Direction::West]);
        assert!(!c.start_marker);
    }

    #[test]
    fn start_marker_any_case() {
        assert!(Cell::from_code("newx").start_marker);
        assert!(Cell::from_code("X").start_marker);
        assert!(Cell::from_code("X").walls.is_empty());
    }

    #[test]
    fn empty_code_is_open() {
        assert_eq!(Cell::from_code("    "), Cell::open());
    }

    #[test]
    fn bits_match_direction_order() {
        let c = Cell::from_bits(0b1001);
        assert!(c.has_wall(Direction::North));
        assert!(c.has_wall(Direction::West));
        assert!(!c.has_wall(Direction::East));
        assert!(!c.has_wall(Direction::South));
    }

    #[test]
    fn default_is_north_south_corridor() {
        let c = Cell::default();
        assert_eq!(c.to_code(), "ns");
        assert!(!c.start_marker);
    }

    #[test]
    fn to_code_is_canonical() {
        assert_eq!(Cell::from_code("WSEN x").to_code(), "neswx");
    }

    proptest! {
        #[test]
        fn code_parse_is_order_and_case_insensitive(code in "[nesxwNESWX ]{0,8}") {
            let forward = Cell::from_code(&code);
            let reversed: String = code.chars().rev().collect();
            prop_assert_eq!(Cell::from_code(&reversed), forward);
            prop_assert_eq!(Cell::from_code(&code.to_uppercase()), forward);
            prop_assert_eq!(Cell::from_code(&forward.to_code()), forward);
        }
    }
}
