//! Grid fixtures.
//!
//! All builders panic on invalid arguments; they are for tests only.

use mazewalk_core::WallSet;
use mazewalk_grid::{Cell, Grid};

/// A `width x height` grid with no walls at all.
pub fn open_grid(width: u32, height: u32, start_x: i32, start_y: i32) -> Grid {
    fill(width, height, start_x, start_y, Cell::open())
}

/// A grid where every cell is walled on all sides. Walks never end.
pub fn sealed_grid(width: u32, height: u32, start_x: i32, start_y: i32) -> Grid {
    fill(width, height, start_x, start_y, Cell::new(WallSet::all()))
}

/// A single cell walled north, south and west: the only way out is east.
pub fn east_exit() -> Grid {
    let mut grid = Grid::new(1, 1, 0, 0).expect("1x1 grid");
    grid.populate_from_code("nsw", 0, 0).expect("in bounds");
    grid
}

/// A `len x 1` corridor walled north and south, open at both ends.
///
/// This is exactly what a freshly constructed grid looks like.
pub fn corridor(len: u32, start_x: i32) -> Grid {
    Grid::new(len, 1, start_x, 0).expect("valid corridor")
}

fn fill(width: u32, height: u32, start_x: i32, start_y: i32, cell: Cell) -> Grid {
    let mut grid = Grid::new(width, height, start_x, start_y).expect("valid fixture grid");
    let rows = vec![vec![cell.to_code(); width as usize]; height as usize];
    grid.populate_all_from_codes(&rows).expect("fixture shape matches");
    grid
}
