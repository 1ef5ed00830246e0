//! The patch applier: merges a narrator response into the game state.
//!
//! Steps run in a fixed order so effects in the same patch interact
//! deterministically:
//!
//! 1. scene image
//! 2. clock and survival (skipped during combat)
//! 3. currency, then `addItemId` if the currency change went through
//! 4. player health
//! 5. enemy health
//! 6. mana
//! 7. fact
//! 8. experience
//! 9. quests: add, update status, remove
//! 10. shop
//! 11. combat start or end
//! 12. one level-up check
//! 13. confiscation or restoration
//! 14. narration entry and next choices
//!
//! Soft rejections (an unaffordable charge, an unknown item id) add a
//! sentence to the narration and the rest of the patch still applies.

use mr_core::{Catalog, Enemy, LogEntry, LogKind, QuestStatus};
use mr_mechanics::{Shop, check_level_up, end_of_day};
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::envelope::NarrativeResponse;
use crate::narrator::SceneArtist;
use crate::patch::Patch;
use crate::state::GameState;

/// Narration added when a charge would overdraw the player.
pub const UNAFFORDABLE_NOTE: &str = " (You cannot afford this.)";

/// Narration added when `addItemId` names no catalog item.
pub const VANISHED_NOTE: &str = " (The item seems to have vanished.)";

/// Hours a single patch may advance the clock.
pub const MAX_TIME_DELTA: i64 = 24 * 365;

/// Starting health when a combat directive gives none.
pub const DEFAULT_ENEMY_HP: i64 = 1;

/// Armor class when a combat directive gives none.
pub const DEFAULT_ENEMY_AC: i64 = 10;

/// What the applier borrows for one call.
pub struct ApplyContext<'a> {
    /// Item and class lookups.
    pub catalog: &'a Catalog,
    /// Dice for level-up rolls.
    pub rng: &'a mut StdRng,
    /// Scene painter.
    pub artist: &'a mut dyn SceneArtist,
}

fn clamp_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// Produce the next state from `state` and a narrator response.
pub fn apply(state: &GameState, response: &NarrativeResponse, ctx: &mut ApplyContext<'_>) -> GameState {
    let patch = &response.patch;
    let mut next = state.clone();
    let mut narration = response.narration.clone();

    // 1
    if let Some(prompt) = &patch.scene_prompt {
        match ctx.artist.paint(prompt) {
            Ok(Some(image)) => next.scene_image = Some(image),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "scene image failed; keeping previous"),
        }
    }

    // 2
    if !next.lifecycle.is_time_frozen() {
        advance_clock(&mut next, patch, &mut narration);
    }

    // 3
    apply_currency(&mut next, patch, ctx.catalog, &mut narration);

    // 4-6
    if let Some(d) = patch.hp_delta {
        next.player.health.adjust(d);
    }
    if let (Some(d), Some(enemy)) = (patch.enemy_hp_delta, next.lifecycle.enemy_mut()) {
        enemy.health.adjust(d);
    }
    if let Some(d) = patch.mp_delta {
        next.player.mana.adjust(d);
    }

    // 7
    if let Some(fact) = &patch.add_fact {
        next.world.add_fact(fact.clone());
    }

    // 8
    if let Some(xp) = patch.xp_delta.filter(|d| *d > 0) {
        let gain = u32::try_from(xp).unwrap_or(u32::MAX);
        next.player.xp = next.player.xp.saturating_add(gain);
    }

    // 9
    apply_quests(&mut next, patch);

    // 10-11
    apply_encounters(&mut next, patch, ctx.catalog);

    // 12
    if let Some(up) = check_level_up(&mut next.player, ctx.catalog, ctx.rng) {
        next.log.push(LogEntry::new(LogKind::LevelUp, up.message()));
    }

    // 13
    if patch.confiscates() {
        if next.player.confiscate() {
            next.world.record("Belongings confiscated");
        }
    } else if Patch::is_set(patch.restore_inventory) && next.player.restore_stash() {
        next.world.record("Belongings returned");
    }

    // 14
    next.log.push(LogEntry::new(LogKind::Narration, narration));
    next.choices = response.next_choices();
    next
}

fn advance_clock(next: &mut GameState, patch: &Patch, narration: &mut String) {
    let hours = patch
        .time_delta
        .filter(|h| *h > 0)
        .unwrap_or(1)
        .min(MAX_TIME_DELTA);
    let hours = u32::try_from(hours).unwrap_or(1);
    let rolled = next.world.advance(hours);
    debug!(hours, rolled, day = next.world.day, hour = next.world.hour, "clock advanced");
    if !rolled {
        return;
    }

    let tick = end_of_day(&mut next.player);
    if !tick.is_empty() {
        let text = tick.join(" ");
        next.world.record(text.clone());
        narration.push(' ');
        narration.push_str(&text);
    }
}

fn apply_currency(next: &mut GameState, patch: &Patch, catalog: &Catalog, narration: &mut String) {
    let delta = patch.currency_delta.unwrap_or(0);
    let balance = i128::from(next.player.currency) + i128::from(delta);
    if delta < 0 && balance < 0 {
        warn!(currency = next.player.currency, delta, "charge rejected");
        narration.push_str(UNAFFORDABLE_NOTE);
        return;
    }
    next.player.currency = u64::try_from(balance.max(0)).unwrap_or(u64::MAX);

    if let Some(id) = &patch.add_item_id {
        match catalog.item(id) {
            Some(item) => {
                debug!(item = %item.name, "item granted");
                next.player.inventory.push(item);
            }
            None => {
                warn!(id = %id, "unknown item id");
                narration.push_str(VANISHED_NOTE);
            }
        }
    }
}

fn apply_quests(next: &mut GameState, patch: &Patch) {
    let quests = &mut next.player.quests;
    if let Some(draft) = patch.add_quest.as_ref().filter(|q| !q.title.is_empty()) {
        quests.add(draft.title.clone(), draft.description.clone());
    }
    if let Some(update) = patch
        .update_quest_status
        .as_ref()
        .filter(|u| !u.title.is_empty())
    {
        if !quests.set_status(&update.title, update.new_status) {
            debug!(title = %update.title, "status update for unknown quest");
        } else if update.new_status == QuestStatus::Completed {
            next.world.record(format!("Quest completed: {}", update.title));
        }
    }
    if let Some(title) = &patch.remove_quest {
        next.player.quests.remove(title);
    }
}

fn apply_encounters(next: &mut GameState, patch: &Patch, catalog: &Catalog) {
    if let Some(start) = &patch.start_combat {
        let hp = clamp_i32(start.hp.unwrap_or(DEFAULT_ENEMY_HP).max(1));
        let ac = clamp_i32(start.ac.unwrap_or(DEFAULT_ENEMY_AC));
        let enemy = Enemy::new(start.name.clone(), hp, ac, start.damage.clone());
        next.world.record(format!("Combat with {}", enemy.name));
        next.lifecycle.start_combat(enemy);
        if patch.shop.is_some() {
            warn!("shop directive ignored: combat started in the same turn");
        }
        return;
    }
    if Patch::is_set(patch.end_combat) {
        if let Some(enemy) = next.lifecycle.end_combat() {
            next.world.record(format!("Combat with {} ended", enemy.name));
        }
        if patch.shop.is_some() {
            warn!("shop directive ignored: combat ended in the same turn");
        }
        return;
    }
    if let Some(directive) = patch.shop.as_ref().filter(|s| !s.name.is_empty()) {
        let shop = Shop::from_ids(directive.name.clone(), &directive.inventory, catalog);
        let name = shop.name.clone();
        if next.lifecycle.open_shop(shop) {
            next.world.record(format!("Visited {name}"));
        } else {
            warn!(shop = %name, "shop directive ignored during combat");
        }
    }
}
