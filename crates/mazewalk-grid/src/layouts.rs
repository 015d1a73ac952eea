//! Predefined maze layouts.

use crate::grid::Grid;
use mazewalk_core::GridError;

/// Width of [`ESCAPE_ROOM`].
pub const ESCAPE_ROOM_WIDTH: u32 = 10;

/// Height of [`ESCAPE_ROOM`].
pub const ESCAPE_ROOM_HEIGHT: u32 = 9;

/// The reference 10 x 9 maze, one fixed-width code per cell, `[y][x]`.
///
/// The `x` marker sits at (4, 4). The only gap in the outer wall is the
/// north side of (1, 0).
#[rustfmt::skip]
pub const ESCAPE_ROOM: [[&str; ESCAPE_ROOM_WIDTH as usize]; ESCAPE_ROOM_HEIGHT as usize] = [
    ["new ", "w   ", "ne  ", "nsw ", "ns  ", "ns  ", "ns  ", "ns  ", "ns  ", "ne  "],
    ["ew  ", "ew  ", "w   ", "ns  ", "ns  ", "n   ", "ns  ", "ns  ", "n   ", "e   "],
    ["ew  ", "ews ", "ew  ", "nsw ", "ns  ", "s   ", "n   ", "ne  ", "ew  ", "ew  "],
    ["ew  ", "new ", "ew  ", "nw  ", "ns  ", "n   ", "e   ", "w   ", "e   ", "ew  "],
    ["ew  ", "w   ", "es  ", "esw ", "newx", "ew  ", "ew  ", "ew  ", "sw  ", "e   "],
    ["w   ", "es  ", "new ", "new ", "w   ", "s   ", "es  ", "ew  ", "wn  ", "e   "],
    ["ew  ", "nw  ", "s   ", "s   ", "    ", "ns  ", "ns  ", "s   ", "es  ", "ew  "],
    ["ew  ", "ew  ", "nw  ", "nes ", "ew  ", "nsw ", "ne  ", "nw  ", "ns  ", "es  "],
    ["sw  ", "s   ", "s   ", "nes ", "sw  ", "ns  ", "es  ", "sw  ", "ns  ", "nes "],
];

/// Build the [`ESCAPE_ROOM`] grid, starting at its marked cell (4, 4).
pub fn escape_room() -> Result<Grid, GridError> {
    let mut grid = Grid::new(ESCAPE_ROOM_WIDTH, ESCAPE_ROOM_HEIGHT, 4, 4)?;
    grid.populate_all_from_codes(&ESCAPE_ROOM)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::{Direction, Position};

    #[test]
    fn escape_room_shape() {
        let g = escape_room().unwrap();
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 9);
        assert_eq!(g.start(), Position::new(4, 4));
    }

    #[test]
    fn marker_agrees_with_start() {
        let g = escape_room().unwrap();
        assert_eq!(g.marked_starts(), vec![g.start()]);
    }

    #[test]
    fn start_cell_walls() {
        let g = escape_room().unwrap();
        let c = g.cell(4, 4).unwrap();
        assert!(c.has_wall(Direction::North));
        assert!(c.has_wall(Direction::East));
        assert!(c.has_wall(Direction::West));
        assert!(!c.has_wall(Direction::South));
    }

    #[test]
    fn single_exit_through_top_row() {
        let g = escape_room().unwrap();
        let exits: Vec<(Position, Direction)> = g
            .cells()
            .flat_map(|(pos, cell)| {
                Direction::ALL
                    .into_iter()
                    .filter(move |&d| !cell.has_wall(d))
                    .map(move |d| (pos, d))
            })
            .filter(|&(pos, d)| !g.contains(pos.step(d)))
            .collect();
        assert_eq!(exits, vec![(Position::new(1, 0), Direction::North)]);
    }
}
