//! End-of-day hunger and thirst.
//!
//! Food is eaten (one ration removed) and only starts costing exhaustion
//! once the player has gone more than [`STARVATION_GRACE_DAYS`] days
//! without. Water is never used up, and every day without it costs one
//! exhaustion.

use mr_core::Player;
use tracing::debug;

/// Days without food tolerated before starvation sets in.
pub const STARVATION_GRACE_DAYS: u32 = 3;

/// Run one day rollover. Returns the messages to append to the narration.
pub fn end_of_day(player: &mut Player) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some(index) = player.inventory.iter().position(|i| i.is_ration()) {
        player.inventory.remove(index);
        player.hunger_days = 0;
        messages.push("Consumed 1 Ration.".to_string());
    } else {
        player.hunger_days += 1;
        if player.hunger_days > STARVATION_GRACE_DAYS {
            player.exhaustion += 1;
            messages.push("Starving! Exhaustion +1.".to_string());
        }
    }

    if player.inventory.iter().any(|i| i.is_water_skin()) {
        player.thirst_days = 0;
        messages.push("Drank water.".to_string());
    } else {
        player.thirst_days += 1;
        player.exhaustion += 1;
        messages.push("Dehydrated! Exhaustion +1.".to_string());
    }

    debug!(
        hunger = player.hunger_days,
        thirst = player.thirst_days,
        exhaustion = player.exhaustion,
        "survival tick"
    );
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use mr_core::Catalog;

    fn player() -> Player {
        Player::new("Aria", "Human", "Fighter", "Soldier")
    }

    #[test]
    fn ration_and_water_consumes_ration_only() {
        let c = Catalog::standard();
        let mut p = player();
        p.inventory.push(c.item("ration").unwrap());
        p.inventory.push(c.item("waterskin").unwrap());
        p.hunger_days = 2;
        p.thirst_days = 1;
        let msgs = end_of_day(&mut p);
        assert_eq!(msgs, ["Consumed 1 Ration.", "Drank water."]);
        assert_eq!(p.inventory.len(), 1);
        assert!(p.inventory[0].is_water_skin());
        assert_eq!((p.hunger_days, p.thirst_days, p.exhaustion), (0, 0, 0));
    }

    #[test]
    fn hunger_within_grace_is_silent() {
        let c = Catalog::standard();
        let mut p = player();
        p.inventory.push(c.item("waterskin").unwrap());
        p.hunger_days = 2;
        let msgs = end_of_day(&mut p);
        assert_eq!(msgs, ["Drank water."]);
        assert_eq!(p.hunger_days, 3);
        assert_eq!(p.exhaustion, 0);
    }

    #[test]
    fn fourth_hungry_day_starves() {
        let c = Catalog::standard();
        let mut p = player();
        p.inventory.push(c.item("waterskin").unwrap());
        p.hunger_days = 3;
        let msgs = end_of_day(&mut p);
        assert_eq!(msgs, ["Starving! Exhaustion +1.", "Drank water."]);
        assert_eq!(p.hunger_days, 4);
        assert_eq!(p.exhaustion, 1);
    }

    #[test]
    fn thirst_always_costs_exhaustion() {
        let c = Catalog::standard();
        let mut p = player();
        p.inventory.push(c.item("ration").unwrap());
        let msgs = end_of_day(&mut p);
        assert_eq!(msgs, ["Consumed 1 Ration.", "Dehydrated! Exhaustion +1."]);
        assert_eq!(p.thirst_days, 1);
        assert_eq!(p.exhaustion, 1);
    }

    #[test]
    fn empty_handed_after_long_fast() {
        let mut p = player();
        p.hunger_days = 5;
        end_of_day(&mut p);
        assert_eq!(p.hunger_days, 6);
        assert_eq!(p.exhaustion, 2);
    }
}
