//! Exploration, shop and combat modes.
//!
//! The mode is derived from what is open: an enemy means combat, otherwise
//! an open shop means shopping, otherwise exploration. Combat freezes the
//! clock and can only be left through [`Lifecycle::end_combat`].

use mr_core::Enemy;
use mr_mechanics::Shop;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The session view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Free movement and conversation.
    #[default]
    Exploration,
    /// Trading with an open shop.
    Shop,
    /// Fighting an enemy.
    Combat,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exploration => write!(f, "exploration"),
            Self::Shop => write!(f, "shop"),
            Self::Combat => write!(f, "combat"),
        }
    }
}

/// The transient encounter state: at most one enemy and one shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    enemy: Option<Enemy>,
    shop: Option<Shop>,
}

impl Lifecycle {
    /// Rebuild from persisted parts.
    pub fn from_parts(enemy: Option<Enemy>, shop: Option<Shop>) -> Self {
        Self { enemy, shop }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        if self.enemy.is_some() {
            Mode::Combat
        } else if self.shop.is_some() {
            Mode::Shop
        } else {
            Mode::Exploration
        }
    }

    /// Whether the world clock is stopped.
    pub fn is_time_frozen(&self) -> bool {
        self.enemy.is_some()
    }

    /// The active enemy.
    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// Mutable access to the active enemy.
    pub fn enemy_mut(&mut self) -> Option<&mut Enemy> {
        self.enemy.as_mut()
    }

    /// The open shop.
    pub fn shop(&self) -> Option<&Shop> {
        self.shop.as_ref()
    }

    /// Mutable access to the open shop.
    pub fn shop_mut(&mut self) -> Option<&mut Shop> {
        self.shop.as_mut()
    }

    /// Open a shop, replacing any open one. Ignored during combat.
    pub fn open_shop(&mut self, shop: Shop) -> bool {
        if self.enemy.is_some() {
            return false;
        }
        info!(shop = %shop.name, items = shop.stock.len(), "shop opened");
        self.shop = Some(shop);
        true
    }

    /// Close the shop, discarding its stock.
    pub fn close_shop(&mut self) -> Option<Shop> {
        let shop = self.shop.take();
        if let Some(s) = &shop {
            info!(shop = %s.name, "shop closed");
        }
        shop
    }

    /// Start a fight. Any open shop is closed.
    pub fn start_combat(&mut self, enemy: Enemy) {
        self.close_shop();
        info!(enemy = %enemy.name, hp = enemy.health.max, "combat started");
        self.enemy = Some(enemy);
    }

    /// End the fight, discarding the enemy.
    pub fn end_combat(&mut self) -> Option<Enemy> {
        let enemy = self.enemy.take();
        if let Some(e) = &enemy {
            info!(enemy = %e.name, "combat ended");
        }
        enemy
    }
}
