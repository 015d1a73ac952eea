//! Draw instructions for mazes and walk trails.

use crate::layout::{Color, Layout, Point};
use mazewalk_core::{Direction, Position};
use mazewalk_grid::{Cell, Grid};
use smallvec::SmallVec;

/// A straight line between two pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineSegment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Line colour.
    pub color: Color,
}

/// One instruction for a [`Canvas`](crate::Canvas).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Color),
    /// Draw a line.
    Line(LineSegment),
    /// Show everything drawn so far.
    Present,
}

/// Wall lines of one cell, plus the start cross if the cell is marked.
///
/// Walls come in `N, E, S, W` order; a cell yields at most six segments.
pub fn cell_segments(layout: &Layout, position: Position, cell: &Cell) -> SmallVec<[LineSegment; 6]> {
    let tl = layout.room_origin(position);
    let w = layout.room_width as i32;
    let h = layout.room_height as i32;
    let tr = Point::new(tl.x + w, tl.y);
    let bl = Point::new(tl.x, tl.y + h);
    let br = Point::new(tl.x + w, tl.y + h);

    let line = |start, end| LineSegment {
        start,
        end,
        color: layout.wall,
    };

    let mut out = SmallVec::new();
    for d in cell.walls.iter() {
        out.push(match d {
            Direction::North => line(tl, tr),
            Direction::East => line(tr, br),
            Direction::South => line(bl, br),
            Direction::West => line(tl, bl),
        });
    }
    if cell.start_marker {
        out.push(line(tl, br));
        out.push(line(bl, tr));
    }
    out
}

/// Full redraw of `grid`.
///
/// Clears, then for each cell in row-major order draws its segments and
/// presents; a final present closes the frame.
pub fn maze_frame(layout: &Layout, grid: &Grid) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear(layout.background)];
    for (position, cell) in grid.cells() {
        commands.extend(
            cell_segments(layout, position, cell)
                .into_iter()
                .map(DrawCommand::Line),
        );
        commands.push(DrawCommand::Present);
    }
    commands.push(DrawCommand::Present);
    commands
}

/// Trail line from the centre of `from` to the centre of its neighbour
/// towards `direction`.
pub fn move_segment(layout: &Layout, from: Position, direction: Direction) -> LineSegment {
    LineSegment {
        start: layout.room_center(from),
        end: layout.room_center(from.step(direction)),
        color: layout.trail,
    }
}
