//! Static registries of items, spells, races, classes, backgrounds and feats.
//!
//! [`Catalog::standard`] builds the game's built-in content in code. Lookups
//! are by catalog id (items, spells, feats) or by key (races, classes,
//! backgrounds). Every item handed out is a fresh clone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::error::{CoreError, CoreResult};
use crate::item::{Item, Slot};
use crate::spell::{Spell, SpellTarget};

/// A racial ability bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityBonus {
    /// Added to every ability.
    All(i32),
    /// Added to a single ability.
    One(Ability, i32),
}

/// A playable race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    /// Racial traits.
    pub traits: Vec<String>,
    /// Walking speed in feet.
    pub speed: u32,
    /// Named subraces, if any.
    pub subraces: Vec<String>,
    /// Ability bonuses.
    pub bonuses: Vec<AbilityBonus>,
}

/// A character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Hit die size.
    pub hit_die: u32,
    /// Starting mana.
    pub mana: i32,
    /// Starting stamina.
    pub stamina: i32,
    /// Starting gear as comma-separated item names.
    pub gear: String,
    /// Saving-throw proficiencies.
    pub saving_throws: Vec<Ability>,
    /// Skill proficiencies.
    pub skills: Vec<String>,
    /// Class features.
    pub features: Vec<String>,
    /// Abilities that receive the highest scores, in priority order.
    pub primary: Vec<Ability>,
    /// Starting spell ids.
    pub spells: Vec<String>,
}

/// A character background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Skill proficiencies.
    pub skills: Vec<String>,
    /// Starting gear as comma-separated item names.
    pub gear: String,
    /// Background feature.
    pub feature: String,
}

/// A feat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feat {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rules text.
    pub description: String,
    /// Prerequisite.
    pub requirement: String,
}

/// Read-only game content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
    spells: Vec<Spell>,
    feats: Vec<Feat>,
    races: BTreeMap<String, Race>,
    classes: BTreeMap<String, Class>,
    backgrounds: BTreeMap<String, Background>,
}

impl Catalog {
    /// The built-in content.
    pub fn standard() -> Self {
        Self {
            items: standard_items(),
            spells: standard_spells(),
            feats: standard_feats(),
            races: standard_races(),
            classes: standard_classes(),
            backgrounds: standard_backgrounds(),
        }
    }

    /// A fresh copy of the item with this id.
    pub fn item(&self, id: &str) -> Option<Item> {
        self.items
            .iter()
            .find(|i| i.id.as_deref() == Some(id))
            .cloned()
    }

    /// Like [`Catalog::item`] but an error when missing.
    pub fn require_item(&self, id: &str) -> CoreResult<Item> {
        self.item(id)
            .ok_or_else(|| CoreError::UnknownItem(id.to_string()))
    }

    /// A fresh copy of the item with this display name.
    pub fn item_by_name(&self, name: &str) -> Option<Item> {
        self.items.iter().find(|i| i.name == name).cloned()
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The spell with this id.
    pub fn spell(&self, id: &str) -> Option<&Spell> {
        self.spells.iter().find(|s| s.id == id)
    }

    /// All spells.
    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    /// The feat with this id.
    pub fn feat(&self, id: &str) -> Option<&Feat> {
        self.feats.iter().find(|f| f.id == id)
    }

    /// Look up a race.
    pub fn race(&self, name: &str) -> CoreResult<&Race> {
        self.races
            .get(name)
            .ok_or_else(|| CoreError::UnknownRace(name.to_string()))
    }

    /// Look up a class.
    pub fn class(&self, name: &str) -> CoreResult<&Class> {
        self.classes
            .get(name)
            .ok_or_else(|| CoreError::UnknownClass(name.to_string()))
    }

    /// Look up a background.
    pub fn background(&self, name: &str) -> CoreResult<&Background> {
        self.backgrounds
            .get(name)
            .ok_or_else(|| CoreError::UnknownBackground(name.to_string()))
    }

    /// Race names, sorted.
    pub fn race_names(&self) -> impl Iterator<Item = &str> {
        self.races.keys().map(String::as_str)
    }

    /// Class names, sorted.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Background names, sorted.
    pub fn background_names(&self) -> impl Iterator<Item = &str> {
        self.backgrounds.keys().map(String::as_str)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

fn plain(id: &str, name: &str, kind: &str, rarity: &str, value: u64, weight: f64) -> Item {
    Item {
        id: Some(id.to_string()),
        rarity: Some(rarity.to_string()),
        value,
        weight,
        ..Item::new(name, kind)
    }
}

fn weapon(id: &str, name: &str, rarity: &str, power: i32, two_handed: bool, weight: f64, value: u64) -> Item {
    Item {
        slot: Some(Slot::MainHand),
        power: Some(power),
        two_handed,
        ..plain(id, name, "weapon", rarity, value, weight)
    }
}

fn armor(id: &str, name: &str, rarity: &str, slot: Slot, ac: i32, weight: f64, value: u64) -> Item {
    Item {
        slot: Some(slot),
        armor_class: Some(ac),
        ..plain(id, name, "armor", rarity, value, weight)
    }
}

fn tool(id: &str, name: &str, weight: f64, value: u64) -> Item {
    plain(id, name, "tool", "common", value, weight)
}

fn with_effect(mut item: Item, key: &str, amount: f64) -> Item {
    item.effect.insert(key.to_string(), amount);
    item
}

fn standard_items() -> Vec<Item> {
    vec![
        with_effect(
            plain("pot_heal", "Healing Potion", "consumable", "common", 500, 0.5),
            "hp",
            10.0,
        ),
        with_effect(plain("ration", "Ration (Day)", "food", "common", 50, 2.0), "hunger", -1.0),
        with_effect(
            plain("waterskin", "Waterskin (Full)", "water", "common", 20, 5.0),
            "thirst",
            -0.5,
        ),
        weapon("sword_iron", "Iron Longsword", "common", 3, false, 3.0, 1000),
        weapon("axe_great", "Great Axe", "uncommon", 5, true, 7.0, 1500),
        weapon("dagger_iron", "Dagger", "common", 2, false, 1.0, 200),
        weapon("mace_iron", "Mace", "common", 3, false, 4.0, 500),
        weapon("axe_iron", "Axe", "common", 3, false, 2.0, 500),
        weapon("bow_short", "Bow", "common", 3, true, 2.0, 2500),
        weapon("hammer_war", "Hammer", "common", 4, false, 2.0, 1500),
        weapon("staff_wood", "Staff", "common", 2, true, 4.0, 500),
        weapon("spear_wood", "Spear", "common", 3, false, 3.0, 100),
        weapon("crossbow_light", "Crossbow", "common", 4, true, 5.0, 2500),
        weapon("scimitar", "Scimitar", "common", 3, false, 3.0, 2500),
        armor("shield_wood", "Wooden Shield", "common", Slot::OffHand, 2, 6.0, 500),
        armor("helmet_iron", "Iron Helmet", "common", Slot::Head, 2, 4.0, 750),
        armor("armor_leather", "Leather Armor", "common", Slot::Chest, 11, 10.0, 1500),
        armor("armor_chain", "Chain Mail", "common", Slot::Chest, 16, 55.0, 7500),
        armor("armor_plate", "Plate Armor", "rare", Slot::Chest, 18, 65.0, 150_000),
        armor("greaves_iron", "Iron Greaves", "common", Slot::Legs, 3, 10.0, 1000),
        armor("gauntlets_leather", "Leather Gauntlets", "common", Slot::Hands, 1, 1.0, 250),
        armor("boots_leather", "Leather Boots", "common", Slot::Feet, 1, 2.0, 250),
        armor("robes", "Robes", "common", Slot::Chest, 10, 4.0, 200),
        armor("armor_scale", "Scale Mail", "common", Slot::Chest, 14, 45.0, 5000),
        armor("armor_hide", "Hide Armor", "common", Slot::Chest, 12, 12.0, 1000),
        Item {
            slot: Some(Slot::Ring),
            armor_class: Some(1),
            ..plain("ring_prot", "Ring of Protection", "accessory", "rare", 5000, 0.1)
        },
        Item {
            slot: Some(Slot::Amulet),
            stat_bonus: BTreeMap::from([(Ability::Con, 2)]),
            ..plain("amulet_health", "Amulet of Health", "accessory", "rare", 7500, 0.2)
        },
        tool("book_spell", "Book", 3.0, 2500),
        tool("focus_arcane", "Arcane Focus", 1.0, 1000),
        tool("pouch_component", "Component Pouch", 2.0, 2500),
        tool("tools_thieves", "Thieves' Tools", 1.0, 2500),
        tool("lute", "Lute", 2.0, 3500),
    ]
}

fn standard_spells() -> Vec<Spell> {
    vec![
        Spell {
            id: "firebolt".to_string(),
            name: "Fire Bolt".to_string(),
            cost: 2,
            damage: Some(8),
            heal: None,
            buff: None,
            duration: None,
            school: "Evocation".to_string(),
            target: SpellTarget::Enemy,
        },
        Spell {
            id: "heal".to_string(),
            name: "Cure Wounds".to_string(),
            cost: 5,
            damage: None,
            heal: Some(12),
            buff: None,
            duration: None,
            school: "Evocation".to_string(),
            target: SpellTarget::Ally,
        },
        Spell {
            id: "shield".to_string(),
            name: "Shield".to_string(),
            cost: 3,
            damage: None,
            heal: None,
            buff: Some("Shielded".to_string()),
            duration: Some(2),
            school: "Abjuration".to_string(),
            target: SpellTarget::Caster,
        },
    ]
}

fn standard_feats() -> Vec<Feat> {
    vec![
        Feat {
            id: "alert".to_string(),
            name: "Alert".to_string(),
            description: "+5 Initiative, cannot be surprised.".to_string(),
            requirement: "None".to_string(),
        },
        Feat {
            id: "tough".to_string(),
            name: "Tough".to_string(),
            description: "+2 HP per level.".to_string(),
            requirement: "None".to_string(),
        },
    ]
}

fn race(traits: &[&str], speed: u32, subraces: &[&str]) -> Race {
    Race {
        traits: strings(traits),
        speed,
        subraces: strings(subraces),
        bonuses: Vec::new(),
    }
}

fn standard_races() -> BTreeMap<String, Race> {
    let mut human = race(&["Versatile", "Ambitious"], 30, &[]);
    human.bonuses.push(AbilityBonus::All(1));

    let entries = [
        ("Human", human),
        (
            "Elf",
            race(
                &["Darkvision", "Keen Senses"],
                30,
                &["High", "Wood", "Drow", "Eladrin", "Shadar-kai", "Sea", "Astral"],
            ),
        ),
        ("Dwarf", race(&["Darkvision", "Resilience"], 25, &["Hill", "Mountain", "Duergar"])),
        ("Halfling", race(&["Lucky", "Brave"], 25, &["Lightfoot", "Stout"])),
        ("Gnome", race(&["Cunning"], 25, &["Forest", "Rock", "Deep"])),
        ("Dragonborn", race(&["Breath Weapon"], 30, &["Chromatic", "Metallic", "Gem"])),
        ("Tiefling", race(&["Darkvision", "Hellish Resistance"], 30, &[])),
        ("Half-Orc", race(&["Relentless Endurance"], 30, &[])),
        ("Half-Elf", race(&["Fey Ancestry"], 30, &[])),
        ("Aarakocra", race(&["Flight"], 25, &[])),
        ("Aasimar", race(&["Healing Hands", "Light Bearer"], 30, &[])),
        ("Bugbear", race(&["Long Limbed", "Sneaky"], 30, &[])),
        ("Centaur", race(&["Charge", "Equine Build"], 40, &[])),
        ("Changeling", race(&["Shapechanger"], 30, &[])),
        ("Dhampir", race(&["Spider Climb", "Vampiric Bite"], 35, &[])),
        ("Fairy", race(&["Flight", "Fey Magic"], 30, &[])),
        ("Firbolg", race(&["Hidden Step", "Speech of Beast"], 30, &[])),
        ("Genasi", race(&["Elemental Legacy"], 30, &["Air", "Earth", "Fire", "Water"])),
        ("Gith", race(&["Psionics"], 30, &["Githyanki", "Githzerai"])),
        ("Goblin", race(&["Nimble Escape"], 30, &[])),
        ("Goliath", race(&["Stone's Endurance"], 30, &[])),
        ("Harengon", race(&["Rabbit Hop", "Lucky Footwork"], 30, &[])),
        ("Kenku", race(&["Mimicry"], 30, &[])),
        ("Kobold", race(&["Pack Tactics"], 30, &[])),
        ("Leonin", race(&["Daunting Roar"], 35, &[])),
        ("Lizardfolk", race(&["Natural Armor", "Bite"], 30, &[])),
        ("Minotaur", race(&["Horns", "Hammering Horns"], 30, &[])),
        ("Orc", race(&["Adrenaline Rush"], 30, &[])),
        ("Satyr", race(&["Magic Resistance", "Mirthful Leaps"], 35, &[])),
        ("Shifter", race(&["Shifting"], 30, &[])),
        ("Tabaxi", race(&["Feline Agility", "Claws"], 30, &[])),
        ("Tortle", race(&["Natural Armor", "Shell Defense"], 30, &[])),
        ("Triton", race(&["Amphibious", "Control Air/Water"], 30, &[])),
        ("Warforged", race(&["Constructed Resilience", "Integrated Protection"], 30, &[])),
        ("Yuan-Ti", race(&["Magic Resistance", "Poison Immunity"], 30, &[])),
        ("Autognome", race(&["Built for Success"], 30, &[])),
        ("Giff", race(&["Firearms Knowledge"], 30, &[])),
        ("Hadozee", race(&["Glide"], 30, &[])),
        ("Locathah", race(&["Leviathan Will"], 30, &[])),
        ("Owlin", race(&["Silent Flight"], 30, &[])),
        ("Plasmoid", race(&["Amorphous"], 30, &[])),
        ("Reborn", race(&["Deathless Nature"], 30, &[])),
        ("Thri-kreen", race(&["Chameleon Carapace"], 30, &[])),
        ("Verdan", race(&["Telepathic Insight"], 30, &[])),
    ];
    entries
        .into_iter()
        .map(|(name, r)| (name.to_string(), r))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn class(
    hit_die: u32,
    mana: i32,
    stamina: i32,
    gear: &str,
    saving_throws: [Ability; 2],
    skills: &[&str],
    features: &[&str],
    primary: [Ability; 2],
    spells: &[&str],
) -> Class {
    Class {
        hit_die,
        mana,
        stamina,
        gear: gear.to_string(),
        saving_throws: saving_throws.to_vec(),
        skills: strings(skills),
        features: strings(features),
        primary: primary.to_vec(),
        spells: strings(spells),
    }
}

fn standard_classes() -> BTreeMap<String, Class> {
    use Ability::{Cha, Con, Dex, Int, Str, Wis};

    let entries = [
        (
            "Fighter",
            class(10, 0, 15, "Chain Mail, Iron Longsword, Wooden Shield", [Str, Con],
                &["Acrobatics", "Athletics"], &["Second Wind", "Fighting Style"], [Str, Con], &[]),
        ),
        (
            "Wizard",
            class(6, 15, 5, "Robes, Staff, Book", [Int, Wis], &["Arcana", "History"],
                &["Spellcasting", "Arcane Recovery"], [Int, Wis], &["firebolt", "shield"]),
        ),
        (
            "Rogue",
            class(8, 0, 12, "Leather Armor, Dagger", [Dex, Int],
                &["Acrobatics", "Stealth", "Sleight of Hand"], &["Sneak Attack", "Thieves' Cant"],
                [Dex, Cha], &[]),
        ),
        (
            "Cleric",
            class(8, 12, 8, "Scale Mail, Mace", [Wis, Cha], &["Insight", "Religion"],
                &["Spellcasting", "Divine Domain"], [Wis, Cha], &["heal"]),
        ),
        (
            "Barbarian",
            class(12, 0, 15, "Hide Armor, Axe", [Str, Con], &["Athletics", "Survival"],
                &["Rage", "Unarmored Defense"], [Str, Con], &[]),
        ),
        (
            "Ranger",
            class(10, 6, 10, "Leather Armor, Bow", [Str, Dex], &["Animal Handling", "Survival"],
                &["Favored Enemy", "Natural Explorer"], [Dex, Wis], &[]),
        ),
        (
            "Paladin",
            class(10, 6, 10, "Chain Mail, Hammer", [Wis, Cha], &["Athletics", "Persuasion"],
                &["Divine Sense", "Lay on Hands"], [Str, Cha], &["heal"]),
        ),
        (
            "Monk",
            class(8, 4, 15, "Robes, Staff", [Str, Dex], &["Acrobatics", "Insight"],
                &["Unarmored Defense", "Martial Arts"], [Dex, Wis], &[]),
        ),
        (
            "Sorcerer",
            class(6, 15, 3, "Dagger, Arcane Focus", [Con, Cha], &["Arcana", "Deception"],
                &["Spellcasting", "Sorcerous Origin"], [Cha, Con], &["firebolt"]),
        ),
        (
            "Warlock",
            class(8, 10, 5, "Spear, Component Pouch", [Wis, Cha], &["Arcana", "Intimidation"],
                &["Otherworldly Patron", "Pact Magic"], [Cha, Int], &["firebolt"]),
        ),
        (
            "Artificer",
            class(8, 8, 5, "Thieves' Tools, Crossbow", [Con, Int], &["Arcana", "Investigation"],
                &["Magical Tinkering", "Infuse Item"], [Int, Con], &["firebolt"]),
        ),
        (
            "Bard",
            class(8, 12, 5, "Lute, Leather Armor", [Dex, Cha], &["Performance", "Persuasion"],
                &["Bardic Inspiration", "Spellcasting"], [Cha, Dex], &["heal"]),
        ),
        (
            "Druid",
            class(8, 12, 5, "Scimitar, Wooden Shield", [Int, Wis], &["Nature", "Survival"],
                &["Druidic", "Spellcasting"], [Wis, Con], &["heal"]),
        ),
    ];
    entries
        .into_iter()
        .map(|(name, c)| (name.to_string(), c))
        .collect()
}

fn standard_backgrounds() -> BTreeMap<String, Background> {
    let entries = [
        ("Acolyte", ["Insight", "Religion"], "Holy Symbol, Prayer Book", "Shelter of the Faithful"),
        ("Soldier", ["Athletics", "Intimidation"], "Insignia of Rank, Trophy", "Military Rank"),
        ("Criminal", ["Deception", "Stealth"], "Crowbar, Dark Clothes", "Criminal Contact"),
        ("Folk Hero", ["Animal Handling", "Survival"], "Shovel, Iron Pot", "Rustic Hospitality"),
        ("Sage", ["Arcana", "History"], "Bottle of Ink, Quill", "Researcher"),
        ("Charlatan", ["Deception", "Sleight of Hand"], "Fine Clothes, Disguise Kit", "False Identity"),
    ];
    entries
        .into_iter()
        .map(|(name, skills, gear, feature)| {
            (
                name.to_string(),
                Background {
                    skills: strings(&skills),
                    gear: gear.to_string(),
                    feature: feature.to_string(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_counts() {
        let c = Catalog::standard();
        assert_eq!(c.items().len(), 31);
        assert_eq!(c.spells().len(), 3);
        assert_eq!(c.race_names().count(), 44);
        assert_eq!(c.class_names().count(), 13);
        assert_eq!(c.background_names().count(), 6);
    }

    #[test]
    fn survival_items_present() {
        let c = Catalog::standard();
        assert!(c.item("ration").unwrap().is_ration());
        assert!(c.item("waterskin").unwrap().is_water_skin());
    }

    #[test]
    fn two_handed_flags() {
        let c = Catalog::standard();
        for id in ["axe_great", "bow_short", "staff_wood", "crossbow_light"] {
            assert!(c.item(id).unwrap().two_handed, "{id}");
        }
        assert!(!c.item("sword_iron").unwrap().two_handed);
    }

    #[test]
    fn lookup_by_name() {
        let c = Catalog::standard();
        let mail = c.item_by_name("Chain Mail").unwrap();
        assert_eq!(mail.id.as_deref(), Some("armor_chain"));
        assert_eq!(mail.armor_class, Some(16));
        assert!(c.item_by_name("Trophy").is_none());
    }

    #[test]
    fn unknown_lookups_error() {
        let c = Catalog::standard();
        assert!(matches!(c.race("Slime"), Err(CoreError::UnknownRace(_))));
        assert!(matches!(c.class("Chef"), Err(CoreError::UnknownClass(_))));
        assert!(matches!(
            c.background("Pirate"),
            Err(CoreError::UnknownBackground(_))
        ));
        assert!(c.require_item("sword_gold").is_err());
    }

    #[test]
    fn class_spells_resolve() {
        let c = Catalog::standard();
        for name in c.class_names() {
            for spell in &c.class(name).unwrap().spells {
                assert!(c.spell(spell).is_some(), "{name}: {spell}");
            }
        }
    }

    #[test]
    fn human_gets_all_bonus() {
        let c = Catalog::standard();
        assert_eq!(c.race("Human").unwrap().bonuses, vec![AbilityBonus::All(1)]);
        assert!(c.race("Elf").unwrap().bonuses.is_empty());
    }

    #[test]
    fn amulet_grants_con() {
        let c = Catalog::standard();
        let amulet = c.item("amulet_health").unwrap();
        assert_eq!(amulet.stat_bonus.get(&Ability::Con), Some(&2));
        assert_eq!(c.feat("tough").unwrap().name, "Tough");
    }
}
