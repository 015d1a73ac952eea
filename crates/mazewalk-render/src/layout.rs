//! Screen geometry and colours.

use mazewalk_core::Position;
use mazewalk_grid::Grid;

/// An RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// White.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Red.
    pub const RED: Color = Color::rgb(255, 0, 0);

    /// Build a colour from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A pixel coordinate. May be negative for trail lines leaving the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Pixels from the left edge.
    pub x: i32,
    /// Pixels from the top edge.
    pub y: i32,
}

impl Point {
    /// Build a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Room size and palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Room width in pixels. Default: 50.
    pub room_width: u32,
    /// Room height in pixels. Default: 50.
    pub room_height: u32,
    /// Clear colour. Default: black.
    pub background: Color,
    /// Wall and start-cross colour. Default: white.
    pub wall: Color,
    /// Walk trail colour. Default: red.
    pub trail: Color,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            room_width: 50,
            room_height: 50,
            background: Color::BLACK,
            wall: Color::WHITE,
            trail: Color::RED,
        }
    }
}

impl Layout {
    /// Window size needed to show `grid`, in pixels.
    pub fn window_size(&self, grid: &Grid) -> (u32, u32) {
        (
            grid.width() * self.room_width,
            grid.height() * self.room_height,
        )
    }

    /// Top-left corner of the room at `position`.
    pub fn room_origin(&self, position: Position) -> Point {
        Point::new(
            position.x * self.room_width as i32,
            position.y * self.room_height as i32,
        )
    }

    /// Centre of the room at `position`, rounded down.
    pub fn room_center(&self, position: Position) -> Point {
        let origin = self.room_origin(position);
        Point::new(
            origin.x + (self.room_width / 2) as i32,
            origin.y + (self.room_height / 2) as i32,
        )
    }
}
