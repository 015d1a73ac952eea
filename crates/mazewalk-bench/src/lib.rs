//! Benchmark profiles for Mazewalk.
//!
//! - [`reference_grid`]: the 10x9 escape room, started from its marked cell
//! - [`open_field`]: an `n`x`n` grid with no walls, started from the centre
//! - [`reference_config`]: a seeded batch of 100 walks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mazewalk_core::GridError;
use mazewalk_grid::{layouts, Cell, Grid};
use mazewalk_walk::WalkConfig;

/// The escape room layout.
pub fn reference_grid() -> Result<Grid, GridError> {
    layouts::escape_room()
}

/// An `n`x`n` grid with every wall removed, started from the centre cell.
///
/// Escape time grows roughly with `n * n`, which makes this the scaling
/// profile for walk throughput.
pub fn open_field(n: u32) -> Result<Grid, GridError> {
    let centre = (n / 2) as i32;
    let mut grid = Grid::new(n, n, centre, centre)?;
    for y in 0..n as i32 {
        for x in 0..n as i32 {
            grid.set_cell(x, y, Cell::open())?;
        }
    }
    Ok(grid)
}

/// 100 walks from the grid's own start, seeded with `seed`.
pub fn reference_config(seed: u64) -> WalkConfig {
    WalkConfig {
        attempts: 100,
        seed,
        start: None,
    }
}
