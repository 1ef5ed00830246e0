//! Experience thresholds and level-ups.

use mr_core::stats::xp_to_next_level;
use mr_core::{Ability, Catalog, Player};
use rand::rngs::StdRng;
use tracing::info;

use crate::dice::Die;

/// Hit die used when the player's class is not in the catalog.
pub const FALLBACK_HIT_DIE: Die = Die::D8;

/// A level-up that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level reached.
    pub new_level: u32,
    /// Maximum health gained.
    pub hp_gain: i32,
}

impl LevelUp {
    /// The announcement added to the turn log.
    pub fn message(&self) -> String {
        format!(
            "LEVEL UP! You are now Level {}! You feel stronger. (HP +{})",
            self.new_level, self.hp_gain
        )
    }
}

/// Apply at most one level-up if experience has reached the threshold.
///
/// The threshold is subtracted so leftover experience carries over. Health
/// grows by one hit-die roll plus the constitution modifier (at least 1),
/// and all pools are refilled.
pub fn check_level_up(player: &mut Player, catalog: &Catalog, rng: &mut StdRng) -> Option<LevelUp> {
    let threshold = xp_to_next_level(player.level);
    if player.xp < threshold {
        return None;
    }
    player.xp -= threshold;
    player.level += 1;

    let die = catalog
        .class(&player.class)
        .map(|c| Die::from_sides(c.hit_die))
        .unwrap_or(FALLBACK_HIT_DIE);
    let roll = i32::try_from(die.roll(rng)).unwrap_or(i32::MAX);
    let hp_gain = roll.saturating_add(player.modifier(Ability::Con)).max(1);

    player.health.raise_max(hp_gain);
    player.health.restore();
    player.mana.restore();
    player.stamina.restore();

    info!(level = player.level, hp_gain, "level up");
    Some(LevelUp {
        new_level: player.level,
        hp_gain,
    })
}
