//! Test fixtures and recording observers for Mazewalk development.
//!
//! Grid builders for common shapes ([`fixtures`]), direction scripts
//! written as compact strings, and a [`RecordingObserver`] that keeps
//! every walk event for later assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use mazewalk_core::{Direction, Position};
use mazewalk_grid::Grid;
use mazewalk_walk::{ScriptedDirections, Step, WalkObserver, WalkOutcome};

/// Build a scripted source from a string of `n`/`e`/`s`/`w` characters.
///
/// Other characters are skipped, so `"nn es"` is `[N, N, E, S]`.
///
/// # Panics
///
/// If the string contains no direction characters.
pub fn script(dirs: &str) -> ScriptedDirections {
    let parsed: Vec<Direction> = dirs.chars().filter_map(Direction::from_code_char).collect();
    ScriptedDirections::new(parsed).expect("script must contain at least one direction")
}

/// Observer that records every event it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub starts: Vec<(u32, Position)>,
    pub steps: Vec<(u32, Step)>,
    pub outcomes: Vec<(u32, WalkOutcome)>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps of one attempt, in order.
    pub fn steps_of(&self, attempt: u32) -> Vec<Step> {
        self.steps
            .iter()
            .filter(|(a, _)| *a == attempt)
            .map(|(_, s)| *s)
            .collect()
    }

    /// Number of non-blocked steps across all attempts.
    pub fn accepted_steps(&self) -> usize {
        self.steps.iter().filter(|(_, s)| !s.blocked).count()
    }
}

impl WalkObserver for RecordingObserver {
    fn walk_started(&mut self, attempt: u32, _grid: &Grid, start: Position) {
        self.starts.push((attempt, start));
    }

    fn stepped(&mut self, attempt: u32, step: &Step) {
        self.steps.push((attempt, *step));
    }

    fn walk_finished(&mut self, attempt: u32, outcome: &WalkOutcome) {
        self.outcomes.push((attempt, *outcome));
    }
}
