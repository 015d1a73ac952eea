//! Single walks: the move rule, the lazy step sequence, and its outcome.

use crate::source::DirectionSource;
use log::{debug, trace, warn};
use mazewalk_core::{Direction, GridError, Position};
use mazewalk_grid::Grid;
use std::fmt;

/// Apply one move attempt under the wall rules.
///
/// If the cell at `position` has a wall towards `direction` the move is
/// blocked and `position` comes back unchanged. Otherwise the neighbour
/// coordinate is returned, which may lie outside the grid; this function
/// does not decide whether the walker escaped.
///
/// # Errors
///
/// [`GridError::OutOfBounds`] if `position` itself is not a cell.
pub fn attempt_move(
    grid: &Grid,
    position: Position,
    direction: Direction,
) -> Result<Position, GridError> {
    let cell = grid.cell_at(position)?;
    if cell.has_wall(direction) {
        return Ok(position);
    }
    Ok(position.step(direction))
}

/// Where a walk stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkState {
    /// Still inside the grid at this cell.
    InBounds(Position),
    /// Left the grid; holds the first outside coordinate.
    Escaped(Position),
}

/// One sampled move of a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// 1-based move counter within the walk.
    pub number: u64,
    /// The sampled direction.
    pub direction: Direction,
    /// Position before the move.
    pub from: Position,
    /// Position after the move; equal to `from` when blocked.
    pub to: Position,
    /// A wall stopped the move.
    pub blocked: bool,
    /// `to` lies outside the grid; this is the last step of the walk.
    pub escaped: bool,
}

/// Totals for a finished walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Sampled directions, including blocked ones.
    pub moves: u64,
    /// How many of those moves hit a wall.
    pub blocked: u64,
    /// The coordinate outside the grid where the walk ended.
    pub exit: Position,
}

impl fmt::Display for WalkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You escaped in {} moves!", self.moves)
    }
}

/// A random walk as a lazy sequence of [`Step`]s.
///
/// Yields one step per sampled direction and stops after the step that
/// leaves the grid. The sequence has no length bound; see the crate docs.
///
/// ```
/// use mazewalk_core::{Direction, Position};
/// use mazewalk_grid::{Cell, Grid};
/// use mazewalk_walk::{ScriptedDirections, Walk};
///
/// let mut grid = Grid::new(1, 1, 0, 0).unwrap();
/// grid.set_cell(0, 0, Cell::open()).unwrap();
/// let source = ScriptedDirections::new(vec![Direction::East]).unwrap();
/// let steps: Vec<_> = Walk::new(&grid, grid.start(), source).unwrap().collect();
/// assert_eq!(steps.len(), 1);
/// assert_eq!(steps[0].to, Position::new(1, 0));
/// ```
#[derive(Debug)]
pub struct Walk<'g, S> {
    grid: &'g Grid,
    source: S,
    state: WalkState,
    moves: u64,
    blocked: u64,
}

impl<'g, S: DirectionSource> Walk<'g, S> {
    /// Start a walk at `start`.
    ///
    /// # Errors
    ///
    /// [`GridError::StartOutOfBounds`] if `start` is not a cell of `grid`.
    pub fn new(grid: &'g Grid, start: Position, source: S) -> Result<Self, GridError> {
        if !grid.contains(start) {
            return Err(GridError::StartOutOfBounds {
                start,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(Self {
            grid,
            source,
            state: WalkState::InBounds(start),
            moves: 0,
            blocked: 0,
        })
    }

    /// Current state.
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Current coordinate, inside or (once escaped) outside the grid.
    pub fn position(&self) -> Position {
        match self.state {
            WalkState::InBounds(p) | WalkState::Escaped(p) => p,
        }
    }

    /// Moves sampled so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Whether the walker has left the grid.
    pub fn is_escaped(&self) -> bool {
        matches!(self.state, WalkState::Escaped(_))
    }

    /// The outcome, once escaped.
    pub fn outcome(&self) -> Option<WalkOutcome> {
        match self.state {
            WalkState::Escaped(exit) => Some(WalkOutcome {
                moves: self.moves,
                blocked: self.blocked,
                exit,
            }),
            WalkState::InBounds(_) => None,
        }
    }

    /// Drive the walk until it escapes.
    ///
    /// Does not return if the walker can never reach an exit.
    pub fn finish(mut self) -> WalkOutcome {
        while self.next().is_some() {}
        WalkOutcome {
            moves: self.moves,
            blocked: self.blocked,
            exit: self.position(),
        }
    }
}

impl<S: DirectionSource> Iterator for Walk<'_, S> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let WalkState::InBounds(from) = self.state else {
            return None;
        };
        let direction = self.source.next_direction();
        let to = match attempt_move(self.grid, from, direction) {
            Ok(to) => to,
            Err(e) => {
                // Only reachable if `from` left the grid without being
                // recorded as an escape. End the walk there.
                warn!("walk stopped at {from}: {e}");
                self.state = WalkState::Escaped(from);
                return None;
            }
        };
        self.moves += 1;
        let blocked = to == from;
        if blocked {
            self.blocked += 1;
        }
        let escaped = !self.grid.contains(to);
        self.state = if escaped {
            WalkState::Escaped(to)
        } else {
            WalkState::InBounds(to)
        };
        trace!("move {}: {direction} {from} -> {to}", self.moves);

        Some(Step {
            number: self.moves,
            direction,
            from,
            to,
            blocked,
            escaped,
        })
    }
}

/// Run one walk from `start` to escape and report its totals.
///
/// # Errors
///
/// [`GridError::StartOutOfBounds`] if `start` is not a cell of `grid`.
pub fn run_walk<S: DirectionSource>(
    grid: &Grid,
    start: Position,
    source: S,
) -> Result<WalkOutcome, GridError> {
    let outcome = Walk::new(grid, start, source)?.finish();
    debug!("escaped at {} after {} moves", outcome.exit, outcome.moves);
    Ok(outcome)
}
