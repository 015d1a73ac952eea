//! Direction sources: the randomness seam of the simulator.

use crate::error::ConfigError;
use mazewalk_core::Direction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the direction of each move attempt.
pub trait DirectionSource {
    /// The next direction to try.
    fn next_direction(&mut self) -> Direction;
}

impl<S: DirectionSource + ?Sized> DirectionSource for &mut S {
    fn next_direction(&mut self) -> Direction {
        (**self).next_direction()
    }
}

/// Uniform choice over the four directions, driven by any [`Rng`].
#[derive(Clone, Debug)]
pub struct RandomDirections<R> {
    rng: R,
}

impl<R: Rng> RandomDirections<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give the generator back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomDirections<ChaCha8Rng> {
    /// A reproducible source: identical seeds give identical sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}

/// Replays a fixed direction sequence, starting over when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDirections {
    script: Vec<Direction>,
    cursor: usize,
}

impl ScriptedDirections {
    /// Build from a non-empty script.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyScript`] if `script` is empty.
    pub fn new(script: Vec<Direction>) -> Result<Self, ConfigError> {
        if script.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        Ok(Self { script, cursor: 0 })
    }

    /// Total directions handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        let d = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        d
    }
}
