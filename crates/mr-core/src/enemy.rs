//! The transient combat opponent.

use serde::{Deserialize, Serialize};

use crate::pool::Pool;

/// An opponent that exists only while combat is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    /// Health; the maximum is fixed at the starting value.
    pub health: Pool,
    /// Armor class.
    pub armor_class: i32,
    /// Damage descriptor such as `1d6+2`. Informational only.
    pub damage: String,
}

impl Enemy {
    /// Create an enemy at full health.
    pub fn new(name: impl Into<String>, hp: i32, armor_class: i32, damage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Pool::new(hp),
            armor_class,
            damage: damage.into(),
        }
    }

    /// Whether the enemy has been reduced to zero health.
    pub fn is_down(&self) -> bool {
        self.health.is_empty()
    }
}
