//! Dice with a caller-chosen number of sides.

use rand::Rng;
use rand::rngs::StdRng;

/// Side count used when the caller does not pick one.
pub const DEFAULT_SIDES: u32 = 6;

/// A die with a fixed number of sides.
///
/// Holds no state beyond the side count; every roll draws fresh from the
/// RNG handed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// Create a die with the given number of sides.
    ///
    /// A side count of zero is bumped to one so a roll always has a face
    /// to land on.
    pub fn new(sides: u32) -> Self {
        Self {
            sides: sides.max(1),
        }
    }

    /// Create a die from an optional caller-supplied side count.
    ///
    /// Absent or zero picks the six-sided default; a negative count clamps
    /// to one.
    pub fn with_sides(sides: Option<i32>) -> Self {
        match sides {
            None | Some(0) => Self::new(DEFAULT_SIDES),
            Some(n) => Self::new(n.max(1).unsigned_abs()),
        }
    }

    /// The number of sides on this die.
    pub fn sides(self) -> u32 {
        self.sides
    }

    /// Roll the die once, yielding a value in `1..=sides`.
    pub fn roll_once(self, rng: &mut StdRng) -> u32 {
        rng.random_range(1..=self.sides)
    }

    /// Roll the die `count` times, in order.
    ///
    /// A zero or negative count rolls nothing and yields an empty vector.
    pub fn roll(self, count: i32, rng: &mut StdRng) -> Vec<u32> {
        (0..count).map(|_| self.roll_once(rng)).collect()
    }
}
