//! Batches of independent walks and their statistics.

use crate::error::{ConfigError, WalkError};
use crate::observer::{NoopObserver, WalkObserver};
use crate::source::DirectionSource;
use crate::walk::{Walk, WalkOutcome};
use log::debug;
use mazewalk_core::Position;
use mazewalk_grid::Grid;
use std::fmt;

/// Results of a batch of walks.
///
/// Always holds at least one outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchReport {
    outcomes: Vec<WalkOutcome>,
    total_moves: u64,
}

impl BatchReport {
    fn new(outcomes: Vec<WalkOutcome>) -> Self {
        let total_moves = outcomes.iter().map(|o| o.moves).sum();
        Self {
            outcomes,
            total_moves,
        }
    }

    /// Number of walks run.
    pub fn attempts(&self) -> usize {
        self.outcomes.len()
    }

    /// Per-walk outcomes in run order.
    pub fn outcomes(&self) -> &[WalkOutcome] {
        &self.outcomes
    }

    /// Sum of moves over all walks.
    pub fn total_moves(&self) -> u64 {
        self.total_moves
    }

    /// Mean moves per walk, truncated towards zero (`total / attempts`).
    pub fn average_moves(&self) -> u64 {
        self.total_moves / self.outcomes.len() as u64
    }

    /// Fewest moves any walk needed.
    pub fn min_moves(&self) -> u64 {
        self.outcomes.iter().map(|o| o.moves).min().unwrap_or(0)
    }

    /// Most moves any walk needed.
    pub fn max_moves(&self) -> u64 {
        self.outcomes.iter().map(|o| o.moves).max().unwrap_or(0)
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On average, it took {} moves to get out of the maze.",
            self.average_moves()
        )
    }
}

/// Run `attempts` walks from `start`, each from a fresh position, drawing
/// directions from one shared `source`.
///
/// # Errors
///
/// - [`ConfigError::ZeroAttempts`] if `attempts` is 0.
/// - [`WalkError::Grid`] if `start` is not a cell of `grid`.
pub fn run_batch<S: DirectionSource>(
    grid: &Grid,
    start: Position,
    attempts: u32,
    source: S,
) -> Result<BatchReport, WalkError> {
    run_batch_with(grid, start, attempts, source, NoopObserver)
}

/// [`run_batch`] with an observer notified of every walk and step.
pub fn run_batch_with<S, O>(
    grid: &Grid,
    start: Position,
    attempts: u32,
    mut source: S,
    mut observer: O,
) -> Result<BatchReport, WalkError>
where
    S: DirectionSource,
    O: WalkObserver,
{
    if attempts == 0 {
        return Err(ConfigError::ZeroAttempts.into());
    }

    let mut outcomes = Vec::with_capacity(attempts as usize);
    for attempt in 0..attempts {
        let mut walk = Walk::new(grid, start, &mut source)?;
        observer.walk_started(attempt, grid, start);
        for step in walk.by_ref() {
            observer.stepped(attempt, &step);
        }
        let outcome = walk.finish();
        debug!("attempt {attempt}: escaped in {} moves", outcome.moves);
        observer.walk_finished(attempt, &outcome);
        outcomes.push(outcome);
    }

    let report = BatchReport::new(outcomes);
    debug!(
        "{} attempts, {} total moves, average {}",
        report.attempts(),
        report.total_moves(),
        report.average_moves()
    );
    Ok(report)
}
