//! Polyhedral dice.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::Custom(n) => n,
        }
    }

    /// The die with this many sides. Anything below two becomes a d2.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            n => Self::Custom(n.max(2)),
        }
    }

    /// Roll once, returning `1..=sides`.
    pub fn roll(self, rng: &mut StdRng) -> u32 {
        rng.random_range(1..=self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
