//! Compact wall sets.

use crate::direction::Direction;
use std::fmt;

/// The set of blocked sides of one cell.
///
/// Stored as a 4-bit mask (see [`Direction::bit`]), so a set holds at
/// most four distinct directions by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WallSet(u8);

impl WallSet {
    const MASK: u8 = 0b1111;

    /// A set with no walls.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A set with all four walls.
    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// Build a set from a 4-bit wall code. Bits above the low nibble are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// The 4-bit wall code of this set.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether `direction` is blocked.
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Add a wall. Adding an existing wall is a no-op.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Remove a wall. Removing a missing wall is a no-op.
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Returns a copy of this set with `direction` added.
    pub fn with(mut self, direction: Direction) -> Self {
        self.insert(direction);
        self
    }

    /// Number of walls (0..=4).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set has no walls.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the walls in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for WallSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = WallSet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl fmt::Debug for WallSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
