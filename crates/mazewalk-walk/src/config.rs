//! Batch configuration and validation.
//!
//! [`WalkConfig`] collects everything needed to reproduce a batch of
//! walks on a given grid: how many walks, the seed for the direction
//! source, and an optional start override.

use crate::batch::{run_batch_with, BatchReport};
use crate::error::{ConfigError, WalkError};
use crate::observer::WalkObserver;
use crate::source::RandomDirections;
use mazewalk_core::Position;
use mazewalk_grid::Grid;

/// Configuration for a seeded batch of walks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    /// Number of walks in the batch. Default: 10.
    pub attempts: u32,
    /// Seed for the ChaCha8 direction source. Default: 0.
    pub seed: u64,
    /// Start cell; `None` uses [`Grid::start`]. Default: `None`.
    pub start: Option<Position>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            attempts: 10,
            seed: 0,
            start: None,
        }
    }
}

impl WalkConfig {
    /// The start this configuration resolves to on `grid`.
    pub fn resolved_start(&self, grid: &Grid) -> Position {
        self.start.unwrap_or_else(|| grid.start())
    }

    /// Check the configuration against `grid`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroAttempts`] if `attempts` is 0.
    /// - [`ConfigError::StartOutOfBounds`] if the start override is not a cell.
    pub fn validate(&self, grid: &Grid) -> Result<(), ConfigError> {
        if self.attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let start = self.resolved_start(grid);
        if !grid.contains(start) {
            return Err(ConfigError::StartOutOfBounds { start });
        }
        Ok(())
    }

    /// Validate, seed a direction source, and run the batch.
    pub fn run<O: WalkObserver>(&self, grid: &Grid, observer: O) -> Result<BatchReport, WalkError> {
        self.validate(grid)?;
        run_batch_with(
            grid,
            self.resolved_start(grid),
            self.attempts,
            RandomDirections::seeded(self.seed),
            observer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use mazewalk_grid::Cell;

    fn open_3x3() -> Grid {
        let mut g = Grid::new(3, 3, 1, 1).unwrap();
        let rows = vec![vec![""; 3]; 3];
        g.populate_all_from_codes(&rows).unwrap();
        assert_eq!(*g.cell(0, 0).unwrap(), Cell::open());
        g
    }

    #[test]
    fn defaults() {
        let c = WalkConfig::default();
        assert_eq!(c.attempts, 10);
        assert_eq!(c.seed, 0);
        assert_eq!(c.start, None);
    }

    #[test]
    fn validate_rejects_zero_attempts() {
        let c = WalkConfig {
            attempts: 0,
            ..Default::default()
        };
        assert_eq!(c.validate(&open_3x3()), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn validate_rejects_outside_start() {
        let c = WalkConfig {
            start: Some(Position::new(3, 0)),
            ..Default::default()
        };
        assert_eq!(
            c.validate(&open_3x3()),
            Err(ConfigError::StartOutOfBounds {
                start: Position::new(3, 0)
            })
        );
    }

    #[test]
    fn start_override_wins() {
        let g = open_3x3();
        let c = WalkConfig {
            start: Some(Position::new(0, 2)),
            ..Default::default()
        };
        assert_eq!(c.resolved_start(&g), Position::new(0, 2));
        assert_eq!(WalkConfig::default().resolved_start(&g), Position::new(1, 1));
    }

    #[test]
    fn same_seed_same_report() {
        let g = open_3x3();
        let c = WalkConfig {
            attempts: 25,
            seed: 99,
            start: None,
        };
        let a = c.run(&g, NoopObserver).unwrap();
        let b = c.run(&g, NoopObserver).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.attempts(), 25);
    }
}
