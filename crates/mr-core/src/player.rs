//! The player character.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ability::{Abilities, Ability};
use crate::item::{Equipment, Item, Slot};
use crate::pool::Pool;
use crate::quest::QuestLog;
use crate::spell::Spell;
use crate::stats;

/// Free-text personality notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    /// Personality traits.
    pub traits: String,
    /// Ideals.
    pub ideals: String,
    /// Bonds.
    pub bonds: String,
    /// Flaws.
    pub flaws: String,
}

/// Skill and saving-throw proficiencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proficiencies {
    /// Proficient skills.
    pub skills: Vec<String>,
    /// Proficient saving throws.
    pub saving_throws: Vec<Ability>,
}

/// A non-player character the player has met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// Name.
    pub name: String,
    /// Role, e.g. "blacksmith".
    pub role: String,
    /// Where they were met.
    pub location: String,
}

/// Inventory and equipment held back during a confiscation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stash {
    /// Confiscated inventory.
    pub inventory: Vec<Item>,
    /// Confiscated equipment.
    pub equipment: Equipment,
}

/// The player character and everything they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Character name.
    pub name: String,
    /// Race key.
    pub race: String,
    /// Class key.
    pub class: String,
    /// Background key.
    pub background: String,
    /// One-line character concept.
    #[serde(default)]
    pub concept: String,
    /// Personality notes.
    #[serde(default)]
    pub personality: Personality,
    /// Proficiencies.
    #[serde(default)]
    pub proficiencies: Proficiencies,
    /// Character level, starting at 1.
    pub level: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Hit points.
    pub health: Pool,
    /// Mana.
    pub mana: Pool,
    /// Stamina.
    pub stamina: Pool,
    /// Currency in copper.
    pub currency: u64,
    /// Ability scores.
    pub abilities: Abilities,
    /// Armor class, always the output of [`stats::armor_class`].
    pub armor_class: i32,
    /// Carried items. Duplicates allowed.
    pub inventory: Vec<Item>,
    /// Equipped items.
    pub equipment: Equipment,
    /// Known spells.
    #[serde(default)]
    pub spells: Vec<Spell>,
    /// Quests.
    #[serde(default)]
    pub quests: QuestLog,
    /// Faction reputation.
    #[serde(default)]
    pub factions: BTreeMap<String, i32>,
    /// NPCs met.
    #[serde(default)]
    pub known_npcs: Vec<Npc>,
    /// Exhaustion level.
    #[serde(default)]
    pub exhaustion: u32,
    /// Consecutive days without food.
    #[serde(default)]
    pub hunger_days: u32,
    /// Consecutive days without water.
    #[serde(default)]
    pub thirst_days: u32,
    /// Items held back by a confiscation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stash: Option<Stash>,
}

impl Player {
    /// A level-1 character with empty pools and possessions.
    ///
    /// Character creation fills in pools, gear and spells afterwards.
    pub fn new(
        name: impl Into<String>,
        race: impl Into<String>,
        class: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        let abilities = Abilities::default();
        let equipment = Equipment::new();
        let armor_class = stats::armor_class(&equipment, abilities.dexterity);
        Self {
            name: name.into(),
            race: race.into(),
            class: class.into(),
            background: background.into(),
            concept: String::new(),
            personality: Personality::default(),
            proficiencies: Proficiencies::default(),
            level: 1,
            xp: 0,
            health: Pool::new(0),
            mana: Pool::new(0),
            stamina: Pool::new(0),
            currency: 0,
            abilities,
            armor_class,
            inventory: Vec::new(),
            equipment,
            spells: Vec::new(),
            quests: QuestLog::new(),
            factions: BTreeMap::new(),
            known_npcs: Vec::new(),
            exhaustion: 0,
            hunger_days: 0,
            thirst_days: 0,
            stash: None,
        }
    }

    /// Modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        stats::ability_modifier(self.abilities.get(ability))
    }

    /// Recompute armor class from equipment and dexterity.
    pub fn recompute_armor_class(&mut self) {
        self.armor_class = stats::armor_class(&self.equipment, self.abilities.dexterity);
    }

    /// Index of the first inventory item with the same identity.
    pub fn find_in_inventory(&self, item: &Item) -> Option<usize> {
        self.inventory.iter().position(|i| i.same_identity(item))
    }

    /// Move all inventory and equipment into the stash.
    ///
    /// Returns false and changes nothing when both are already empty. If a
    /// stash already exists the new items are added to it.
    pub fn confiscate(&mut self) -> bool {
        if self.inventory.is_empty() && self.equipment.is_empty() {
            return false;
        }
        let stash = self.stash.get_or_insert_with(Stash::default);
        stash.inventory.append(&mut self.inventory);
        for (slot, item) in self.equipment.take_all() {
            if let Some(older) = stash.equipment.insert(slot, item) {
                stash.inventory.push(older);
            }
        }
        self.recompute_armor_class();
        true
    }

    /// Return stashed items to the player.
    ///
    /// Stashed inventory is appended. Stashed equipment goes back into its
    /// slot; anything already in that slot moves to the inventory. Returns
    /// false when there is no stash.
    pub fn restore_stash(&mut self) -> bool {
        let Some(stash) = self.stash.take() else {
            return false;
        };
        self.inventory.extend(stash.inventory);
        for (slot, item) in stash.equipment {
            if let Some(current) = self.equipment.insert(slot, item) {
                self.inventory.push(current);
            }
        }
        if self.equipment.main_hand_is_two_handed()
            && let Some(off) = self.equipment.remove(Slot::OffHand)
        {
            self.inventory.push(off);
        }
        self.recompute_armor_class();
        true
    }
}
