//! Backend-agnostic draw instructions for Mazewalk.
//!
//! Nothing here touches pixels or windows. Mazes and walks are turned
//! into ordered [`DrawCommand`]s (clear, line, present) and handed to a
//! [`Canvas`], which a windowing backend implements. [`DrawList`] is a
//! canvas that simply records the commands.
//!
//! - [`maze_frame`]: full redraw of a grid.
//! - [`move_segment`]: trail line for one accepted move.
//! - [`RenderObserver`]: plugs both into a batch of walks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod draw;
pub mod layout;
pub mod observer;

pub use canvas::{Canvas, DrawList};
pub use draw::{cell_segments, maze_frame, move_segment, DrawCommand, LineSegment};
pub use layout::{Color, Layout, Point};
pub use observer::RenderObserver;
