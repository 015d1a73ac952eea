//! Core types for the Mazewalk random-walk maze simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: compass
//! directions, per-cell wall sets, walker positions, and grid errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod position;
pub mod walls;

pub use direction::Direction;
pub use error::GridError;
pub use position::Position;
pub use walls::WallSet;
