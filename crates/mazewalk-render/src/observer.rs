//! Drawing a batch of walks as it runs.

use crate::canvas::Canvas;
use crate::draw::{maze_frame, move_segment};
use crate::layout::Layout;
use mazewalk_core::Position;
use mazewalk_grid::Grid;
use mazewalk_walk::{Step, WalkObserver};

/// A [`WalkObserver`] that draws onto a [`Canvas`].
///
/// Each walk starts with a full maze redraw. Every accepted move, the
/// escaping one included, adds one trail line and a present; blocked
/// moves draw nothing.
#[derive(Debug)]
pub struct RenderObserver<C> {
    layout: Layout,
    canvas: C,
}

impl<C: Canvas> RenderObserver<C> {
    /// Draw onto `canvas` with `layout`.
    pub fn new(layout: Layout, canvas: C) -> Self {
        Self { layout, canvas }
    }

    /// The canvas being drawn on.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Give the canvas back.
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}

impl<C: Canvas> WalkObserver for RenderObserver<C> {
    fn walk_started(&mut self, _attempt: u32, grid: &Grid, _start: Position) {
        self.canvas.execute_all(&maze_frame(&self.layout, grid));
    }

    fn stepped(&mut self, _attempt: u32, step: &Step) {
        if step.blocked {
            return;
        }
        self.canvas
            .line(&move_segment(&self.layout, step.from, step.direction));
        self.canvas.present();
    }
}
