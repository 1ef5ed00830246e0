//! Equipping and unequipping items.
//!
//! Slot rules:
//! - an item goes to its declared slot; the generic `ring` slot resolves to
//!   `ring1` if free, else `ring2` if free, else replaces `ring1`;
//! - whatever the target slot held goes back to the inventory;
//! - a two-handed item evicts the off-hand item to the inventory;
//! - an off-hand item is refused while a two-handed item is in the main hand.
//!
//! Armor class is recomputed after every change.

use mr_core::{Item, Player, Slot};
use tracing::{debug, warn};

/// What happened when equipping an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipOutcome {
    /// The item is now in this slot.
    Equipped {
        /// Slot the item went to.
        slot: Slot,
    },
    /// Refused because a two-handed weapon holds the main hand.
    Blocked,
    /// No matching item in the inventory.
    NotInInventory,
    /// The item declares no slot.
    NotEquippable,
}

/// The concrete slot an item would occupy right now.
pub fn resolve_slot(player: &Player, item: &Item) -> Option<Slot> {
    match item.slot? {
        Slot::Ring => {
            let slot = if !player.equipment.is_occupied(Slot::Ring1) {
                Slot::Ring1
            } else if !player.equipment.is_occupied(Slot::Ring2) {
                Slot::Ring2
            } else {
                Slot::Ring1
            };
            Some(slot)
        }
        slot => Some(slot),
    }
}

/// Move the first inventory item matching `item` into equipment.
pub fn equip(player: &mut Player, item: &Item) -> EquipOutcome {
    let Some(index) = player.find_in_inventory(item) else {
        return EquipOutcome::NotInInventory;
    };
    let Some(slot) = resolve_slot(player, &player.inventory[index]) else {
        return EquipOutcome::NotEquippable;
    };
    if slot == Slot::OffHand && player.equipment.main_hand_is_two_handed() {
        warn!(item = %item.name, "off-hand blocked by two-handed weapon");
        return EquipOutcome::Blocked;
    }

    let incoming = player.inventory.remove(index);
    if incoming.two_handed
        && let Some(off) = player.equipment.remove(Slot::OffHand)
    {
        player.inventory.push(off);
    }
    debug!(item = %incoming.name, %slot, "equipping");
    if let Some(previous) = player.equipment.insert(slot, incoming) {
        player.inventory.push(previous);
    }
    player.recompute_armor_class();
    EquipOutcome::Equipped { slot }
}

/// Move the item in `slot` back to the inventory. Returns false if the slot was empty.
pub fn unequip(player: &mut Player, slot: Slot) -> bool {
    let Some(item) = player.equipment.remove(slot) else {
        return false;
    };
    debug!(item = %item.name, %slot, "unequipping");
    player.inventory.push(item);
    player.recompute_armor_class();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use mr_core::Catalog;

    fn player_with(ids: &[&str]) -> (Player, Catalog) {
        let catalog = Catalog::standard();
        let mut p = Player::new("Aria", "Human", "Fighter", "Soldier");
        for id in ids {
            p.inventory.push(catalog.item(id).unwrap());
        }
        (p, catalog)
    }

    #[test]
    fn equip_moves_item_and_updates_ac() {
        let (mut p, c) = player_with(&["armor_chain"]);
        let mail = c.item("armor_chain").unwrap();
        assert_eq!(
            equip(&mut p, &mail),
            EquipOutcome::Equipped { slot: Slot::Chest }
        );
        assert!(p.inventory.is_empty());
        assert_eq!(p.armor_class, 16);
    }

    #[test]
    fn occupied_slot_returns_previous() {
        let (mut p, c) = player_with(&["armor_chain", "armor_leather"]);
        equip(&mut p, &c.item("armor_chain").unwrap());
        equip(&mut p, &c.item("armor_leather").unwrap());
        assert_eq!(p.equipment.get(Slot::Chest).unwrap().name, "Leather Armor");
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.inventory[0].name, "Chain Mail");
        assert_eq!(p.armor_class, 11);
    }

    #[test]
    fn rings_fill_then_overwrite_first() {
        let (mut p, c) = player_with(&["ring_prot", "ring_prot", "ring_prot"]);
        let ring = c.item("ring_prot").unwrap();
        assert_eq!(equip(&mut p, &ring), EquipOutcome::Equipped { slot: Slot::Ring1 });
        assert_eq!(equip(&mut p, &ring), EquipOutcome::Equipped { slot: Slot::Ring2 });
        assert_eq!(equip(&mut p, &ring), EquipOutcome::Equipped { slot: Slot::Ring1 });
        assert_eq!(p.equipment.len(), 2);
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.armor_class, 2);
    }

    #[test]
    fn two_handed_evicts_off_hand() {
        let (mut p, c) = player_with(&["shield_wood", "axe_great"]);
        equip(&mut p, &c.item("shield_wood").unwrap());
        equip(&mut p, &c.item("axe_great").unwrap());
        assert!(!p.equipment.is_occupied(Slot::OffHand));
        assert!(p.equipment.is_occupied(Slot::MainHand));
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.inventory[0].name, "Wooden Shield");
        assert_eq!(p.armor_class, 10);
    }

    #[test]
    fn off_hand_blocked_by_two_handed() {
        let (mut p, c) = player_with(&["axe_great", "shield_wood"]);
        equip(&mut p, &c.item("axe_great").unwrap());
        let shield = c.item("shield_wood").unwrap();
        assert_eq!(equip(&mut p, &shield), EquipOutcome::Blocked);
        assert!(!p.equipment.is_occupied(Slot::OffHand));
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.inventory[0].name, "Wooden Shield");
        assert_eq!(p.equipment.get(Slot::MainHand).unwrap().name, "Great Axe");
    }

    #[test]
    fn missing_and_unequippable() {
        let (mut p, c) = player_with(&["lute"]);
        assert_eq!(
            equip(&mut p, &c.item("sword_iron").unwrap()),
            EquipOutcome::NotInInventory
        );
        assert_eq!(
            equip(&mut p, &c.item("lute").unwrap()),
            EquipOutcome::NotEquippable
        );
        assert_eq!(p.inventory.len(), 1);
    }

    #[test]
    fn unequip_round_trip() {
        let (mut p, c) = player_with(&["helmet_iron"]);
        equip(&mut p, &c.item("helmet_iron").unwrap());
        assert_eq!(p.armor_class, 2);
        assert!(unequip(&mut p, Slot::Head));
        assert!(p.equipment.is_empty());
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.armor_class, 10);
        assert!(!unequip(&mut p, Slot::Head));
    }
}
