//! Hooks for watching a batch of walks as it runs.

use crate::walk::{Step, WalkOutcome};
use mazewalk_core::Position;
use mazewalk_grid::Grid;

/// Receives walk events in order. All methods default to no-ops.
///
/// `attempt` is the 0-based index of the walk within its batch.
pub trait WalkObserver {
    /// A walk is about to start at `start`.
    fn walk_started(&mut self, attempt: u32, grid: &Grid, start: Position) {
        let _ = (attempt, grid, start);
    }

    /// A move was sampled.
    fn stepped(&mut self, attempt: u32, step: &Step) {
        let _ = (attempt, step);
    }

    /// A walk escaped.
    fn walk_finished(&mut self, attempt: u32, outcome: &WalkOutcome) {
        let _ = (attempt, outcome);
    }
}

impl<O: WalkObserver + ?Sized> WalkObserver for &mut O {
    fn walk_started(&mut self, attempt: u32, grid: &Grid, start: Position) {
        (**self).walk_started(attempt, grid, start);
    }

    fn stepped(&mut self, attempt: u32, step: &Step) {
        (**self).stepped(attempt, step);
    }

    fn walk_finished(&mut self, attempt: u32, outcome: &WalkOutcome) {
        (**self).walk_finished(attempt, outcome);
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl WalkObserver for NoopObserver {}
