//! Mazewalk: walled maze grids and a random-walk escape simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Mazewalk sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use mazewalk::prelude::*;
//!
//! // A 2x1 corridor, open to the east, started in the west cell.
//! let mut grid = Grid::new(2, 1, 0, 0).unwrap();
//! grid.populate_all_from_codes([["nsw", "ns"]]).unwrap();
//!
//! let config = WalkConfig { attempts: 5, seed: 42, start: None };
//! let report = config.run(&grid, NoopObserver).unwrap();
//! assert_eq!(report.attempts(), 5);
//! assert!(report.average_moves() >= 2);
//! println!("{report}");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazewalk-core` | Directions, wall sets, positions, grid errors |
//! | [`grid`] | `mazewalk-grid` | Cells, the grid, cell-code parsing, stock layouts |
//! | [`walk`] | `mazewalk-walk` | Moves, walks, batches, direction sources, observers |
//! | [`render`] | `mazewalk-render` | Draw instructions and the canvas seam |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Directions, wall sets, positions, and grid errors (`mazewalk-core`).
pub use mazewalk_core as types;

/// Cells, the grid, and cell-code parsing (`mazewalk-grid`).
///
/// [`grid::layouts::escape_room`] builds the stock 10x9 maze.
pub use mazewalk_grid as grid;

/// Moves, walks, and batches (`mazewalk-walk`).
///
/// [`walk::Walk`] is the lazy step sequence; [`walk::run_batch`] and
/// [`walk::WalkConfig::run`] drive repeated walks.
pub use mazewalk_walk as walk;

/// Backend-agnostic draw instructions (`mazewalk-render`).
pub use mazewalk_render as render;

/// Common imports for typical Mazewalk usage.
///
/// ```rust
/// use mazewalk::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mazewalk_core::{Direction, GridError, Position, WallSet};

    // Grid
    pub use mazewalk_grid::{Cell, Grid};

    // Walks
    pub use mazewalk_walk::{
        attempt_move, run_batch, run_batch_with, run_walk, BatchReport, ConfigError,
        DirectionSource, NoopObserver, RandomDirections, ScriptedDirections, Step, Walk,
        WalkConfig, WalkError, WalkObserver, WalkOutcome, WalkState,
    };

    // Rendering
    pub use mazewalk_render::{Canvas, DrawCommand, DrawList, Layout, RenderObserver};
}
