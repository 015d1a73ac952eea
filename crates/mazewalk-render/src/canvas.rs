//! The rendering seam.

use crate::draw::{DrawCommand, LineSegment};
use crate::layout::Color;

/// A drawing surface supplied by a windowing backend.
///
/// Calls are fire-and-forget; a canvas cannot fail a draw.
pub trait Canvas {
    /// Fill the whole surface.
    fn clear(&mut self, color: Color);

    /// Draw one line.
    fn line(&mut self, segment: &LineSegment);

    /// Show what has been drawn (flip buffers).
    fn present(&mut self);

    /// Dispatch a single command.
    fn execute(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear(color) => self.clear(*color),
            DrawCommand::Line(segment) => self.line(segment),
            DrawCommand::Present => self.present(),
        }
    }

    /// Dispatch commands in order.
    fn execute_all<'a, I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = &'a DrawCommand>,
        Self: Sized,
    {
        for command in commands {
            self.execute(command);
        }
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn clear(&mut self, color: Color) {
        (**self).clear(color);
    }

    fn line(&mut self, segment: &LineSegment) {
        (**self).line(segment);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

/// A canvas that records every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded line segments only.
    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(segment) => Some(segment),
            _ => None,
        })
    }

    /// Number of presents recorded.
    pub fn presents(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, segment: &LineSegment) {
        self.commands.push(DrawCommand::Line(*segment));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    #[test]
    fn replay_is_faithful() {
        let seg = LineSegment {
            start: Point::new(0, 0),
            end: Point::new(3, 4),
            color: Color::RED,
        };
        let commands = vec![
            DrawCommand::Clear(Color::BLACK),
            DrawCommand::Line(seg),
            DrawCommand::Present,
        ];
        let mut list = DrawList::new();
        list.execute_all(&commands);
        assert_eq!(list.commands(), commands.as_slice());
        assert_eq!(list.lines().count(), 1);
        assert_eq!(list.presents(), 1);
        assert_eq!(list.take(), commands);
        assert!(list.commands().is_empty());
    }
}
