//! Maze grid model for Mazewalk.
//!
//! A [`Grid`] is a fixed `width x height` array of [`Cell`]s, each with a
//! [`WallSet`](mazewalk_core::WallSet), plus a grid-level start
//! coordinate. Grids are usually populated in bulk from compact cell
//! codes (`"nes"`, `"w x"`, ...) or 4-bit wall codes, then treated as
//! read-only while walks run.
//!
//! # Cell codes
//!
//! Each character of a code is matched case-insensitively: `n`, `e`, `s`
//! and `w` add a wall, `x` marks the cell as the drawn start, anything
//! else (usually padding spaces) is ignored.
//!
//! ```
//! use mazewalk_core::Direction;
//! use mazewalk_grid::Grid;
//!
//! let mut grid = Grid::new(2, 1, 0, 0).unwrap();
//! grid.populate_all_from_codes(&[["nsw", "NE S"]]).unwrap();
//! assert!(grid.cell(1, 0).unwrap().has_wall(Direction::East));
//! assert!(grid.cell(2, 0).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod layouts;

pub use cell::Cell;
pub use grid::Grid;
