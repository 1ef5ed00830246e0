//! Resource pools (health, mana, stamina).
//!
//! A pool is a current value clamped between zero and a maximum. Every
//! mutation goes through [`Pool::adjust`] or [`Pool::restore`] so the
//! bounds hold no matter what delta a narrated effect asks for.

use serde::{Deserialize, Serialize};

/// A current/max resource pair, clamped to `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
}

impl Pool {
    /// Create a full pool.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Create a pool with a specific starting value, clamped to bounds.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Adjust by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i64) -> i32 {
        let next = i64::from(self.current)
            .saturating_add(delta)
            .clamp(0, i64::from(self.max));
        self.current = i32::try_from(next).unwrap_or(self.max);
        self.current
    }

    /// Refill to the maximum.
    pub fn restore(&mut self) {
        self.current = self.max;
    }

    /// Raise the maximum without touching the current value.
    pub fn raise_max(&mut self, amount: i32) {
        self.max = self.max.saturating_add(amount.max(0));
    }

    /// Returns true if the pool is at zero.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the pool is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Returns true if `0 <= current <= max`.
    pub fn in_bounds(&self) -> bool {
        (0..=self.max).contains(&self.current)
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
