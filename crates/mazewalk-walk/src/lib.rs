//! Random-walk escape simulator for Mazewalk grids.
//!
//! A walk starts on a cell and repeatedly samples a direction from a
//! [`DirectionSource`]. A wall on that side of the current cell blocks
//! the move; otherwise the walker steps to the neighbour. The walk ends
//! the moment the walker's coordinate leaves the grid.
//!
//! Every sampled direction counts as one move, blocked or not.
//!
//! # Termination
//!
//! A walk on an escapable maze ends with probability 1, but there is no
//! upper bound on its length and no built-in cutoff: an unlucky
//! direction sequence can keep a walk going arbitrarily long, and a maze
//! with no reachable exit never ends. Use [`Walk`] directly with
//! [`Iterator::take`] when a cap is needed.
//!
//! # Entry points
//!
//! - [`attempt_move`]: one move under the wall rules.
//! - [`Walk`]: lazy iterator of [`Step`]s.
//! - [`run_walk`] / [`run_batch`] / [`run_batch_with`]: drive walks to completion.
//! - [`WalkConfig`]: validated, seeded batch configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod error;
pub mod observer;
pub mod source;
pub mod walk;

pub use batch::{run_batch, run_batch_with, BatchReport};
pub use config::WalkConfig;
pub use error::{ConfigError, WalkError};
pub use observer::{NoopObserver, WalkObserver};
pub use source::{DirectionSource, RandomDirections, ScriptedDirections};
pub use walk::{attempt_move, run_walk, Step, Walk, WalkOutcome, WalkState};
