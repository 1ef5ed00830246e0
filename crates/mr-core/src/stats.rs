//! Derived statistics.
//!
//! Pure functions over player data. Nothing here mutates state; callers
//! store the results (armor class in particular is only ever written from
//! [`armor_class`]).

use crate::ability::Ability;
use crate::item::{Equipment, Item};

/// Copper pieces in one gold piece.
pub const COPPER_PER_GOLD: u64 = 10_000;

/// Copper pieces in one silver piece.
pub const COPPER_PER_SILVER: u64 = 100;

/// Skills and their governing abilities, alphabetical.
pub const SKILLS: [(&str, Ability); 18] = [
    ("Acrobatics", Ability::Dex),
    ("Animal Handling", Ability::Wis),
    ("Arcana", Ability::Int),
    ("Athletics", Ability::Str),
    ("Deception", Ability::Cha),
    ("History", Ability::Int),
    ("Insight", Ability::Wis),
    ("Intimidation", Ability::Cha),
    ("Investigation", Ability::Int),
    ("Medicine", Ability::Wis),
    ("Nature", Ability::Int),
    ("Perception", Ability::Wis),
    ("Performance", Ability::Cha),
    ("Persuasion", Ability::Cha),
    ("Religion", Ability::Int),
    ("Sleight of Hand", Ability::Dex),
    ("Stealth", Ability::Dex),
    ("Survival", Ability::Wis),
];

/// `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Experience needed to leave `level`.
pub fn xp_to_next_level(level: u32) -> u32 {
    level.saturating_mul(100).saturating_add(150)
}

/// Armor class from equipped items.
///
/// With no AC-bearing item equipped the result is `10 + dex modifier`.
/// Otherwise it is the plain sum of the equipped AC values and the
/// unarmored baseline is not added.
pub fn armor_class(equipment: &Equipment, dexterity: i32) -> i32 {
    let mut worn = equipment.items().filter_map(|i| i.armor_class).peekable();
    if worn.peek().is_none() {
        return 10 + ability_modifier(dexterity);
    }
    worn.sum()
}

/// Total carried weight.
pub fn encumbrance(inventory: &[Item]) -> f64 {
    inventory.iter().map(|i| i.weight).sum()
}

/// Carry capacity in pounds.
pub fn max_carry(strength: i32) -> i32 {
    strength * 15
}

/// Render a copper amount as `"{g}g {s}s {c}c"`.
pub fn format_currency(copper: u64) -> String {
    let gold = copper / COPPER_PER_GOLD;
    let silver = (copper % COPPER_PER_GOLD) / COPPER_PER_SILVER;
    let rest = copper % COPPER_PER_SILVER;
    format!("{gold}g {silver}s {rest}c")
}

/// The ability a class casts spells with. Unknown classes fall back to intelligence.
pub fn spellcasting_ability(class: &str) -> Ability {
    match class {
        "Wizard" | "Artificer" => Ability::Int,
        "Cleric" | "Druid" | "Ranger" => Ability::Wis,
        "Bard" | "Paladin" | "Sorcerer" | "Warlock" => Ability::Cha,
        _ => Ability::Int,
    }
}

/// The ability governing a skill.
pub fn skill_ability(skill: &str) -> Option<Ability> {
    SKILLS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, ability)| *ability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Slot;

    fn armor(name: &str, slot: Slot, ac: i32) -> Item {
        Item {
            slot: Some(slot),
            armor_class: Some(ac),
            ..Item::new(name, "armor")
        }
    }

    #[test]
    fn modifier_floors_toward_negative() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
    }

    #[test]
    fn xp_threshold() {
        assert_eq!(xp_to_next_level(1), 250);
        assert_eq!(xp_to_next_level(0), 150);
        assert_eq!(xp_to_next_level(4), 550);
    }

    #[test]
    fn unarmored_uses_dex() {
        let eq = Equipment::new();
        assert_eq!(armor_class(&eq, 14), 12);
        assert_eq!(armor_class(&eq, 8), 9);
    }

    #[test]
    fn armored_ignores_baseline() {
        let mut eq = Equipment::new();
        eq.insert(Slot::Chest, armor("Leather Armor", Slot::Chest, 11));
        eq.insert(Slot::OffHand, armor("Wooden Shield", Slot::OffHand, 2));
        assert_eq!(armor_class(&eq, 18), 13);
    }

    #[test]
    fn weapons_alone_count_as_unarmored() {
        let mut eq = Equipment::new();
        eq.insert(Slot::MainHand, Item::new("Dagger", "weapon"));
        assert_eq!(armor_class(&eq, 12), 11);
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0), "0g 0s 0c");
        assert_eq!(format_currency(12_345), "1g 23s 45c");
        assert_eq!(format_currency(99), "0g 0s 99c");
    }

    #[test]
    fn carry_and_weight() {
        assert_eq!(max_carry(10), 150);
        let inv = vec![
            Item {
                weight: 2.0,
                ..Item::new("Ration (Day)", "food")
            },
            Item {
                weight: 0.5,
                ..Item::new("Healing Potion", "consumable")
            },
        ];
        assert!((encumbrance(&inv) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn casting_and_skills() {
        assert_eq!(spellcasting_ability("Cleric"), Ability::Wis);
        assert_eq!(spellcasting_ability("Warlock"), Ability::Cha);
        assert_eq!(spellcasting_ability("Fighter"), Ability::Int);
        assert_eq!(skill_ability("Stealth"), Some(Ability::Dex));
        assert_eq!(skill_ability("Juggling"), None);
    }
}
