//! Items, equipment slots, and the equipped-item map.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::error::CoreError;

/// A named equipment attachment point.
///
/// `Ring` is only ever a *declared* slot on an item; the equipment map
/// stores rings under `Ring1` and `Ring2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    /// Primary weapon hand.
    MainHand,
    /// Shield or secondary weapon hand.
    OffHand,
    /// Helmets.
    Head,
    /// Body armor.
    Chest,
    /// Greaves.
    Legs,
    /// Gloves and gauntlets.
    Hands,
    /// Boots.
    Feet,
    /// Generic ring slot declared by ring items.
    Ring,
    /// First ring finger.
    Ring1,
    /// Second ring finger.
    Ring2,
    /// Neck slot.
    Amulet,
}

impl Slot {
    /// The wire name of the slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainHand => "mainHand",
            Self::OffHand => "offHand",
            Self::Head => "head",
            Self::Chest => "chest",
            Self::Legs => "legs",
            Self::Hands => "hands",
            Self::Feet => "feet",
            Self::Ring => "ring",
            Self::Ring1 => "ring1",
            Self::Ring2 => "ring2",
            Self::Amulet => "amulet",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Slot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let slot = match lower.as_str() {
            "mainhand" | "main_hand" | "main-hand" => Self::MainHand,
            "offhand" | "off_hand" | "off-hand" => Self::OffHand,
            "head" => Self::Head,
            "chest" => Self::Chest,
            "legs" => Self::Legs,
            "hands" => Self::Hands,
            "feet" => Self::Feet,
            "ring" => Self::Ring,
            "ring1" => Self::Ring1,
            "ring2" => Self::Ring2,
            "amulet" => Self::Amulet,
            _ => return Err(CoreError::UnknownSlot(s.to_string())),
        };
        Ok(slot)
    }
}

/// An immutable item record: a catalog entry or ad-hoc starting gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog id; `None` for ad-hoc gear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Item type (weapon, armor, food, water, tool, gear, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Rarity label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    /// Value in the smallest currency denomination.
    #[serde(default)]
    pub value: u64,
    /// Weight in pounds.
    #[serde(default)]
    pub weight: f64,
    /// Consumable effects keyed by resource name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub effect: BTreeMap<String, f64>,
    /// Declared equipment slot, if equippable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
    /// Weapon power.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<i32>,
    /// Armor-class value contributed while equipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<i32>,
    /// Occupies both hands.
    #[serde(default)]
    pub two_handed: bool,
    /// Ability bonuses granted while equipped.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stat_bonus: BTreeMap<Ability, i32>,
}

impl Item {
    /// A minimal item with a name and type.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
            rarity: None,
            value: 0,
            weight: 0.0,
            effect: BTreeMap::new(),
            slot: None,
            power: None,
            armor_class: None,
            two_handed: false,
            stat_bonus: BTreeMap::new(),
        }
    }

    /// Ad-hoc gear synthesized when a starting-gear name has no catalog match.
    pub fn ad_hoc_gear(name: impl Into<String>) -> Self {
        Self {
            weight: 1.0,
            value: 10,
            ..Self::new(name, "gear")
        }
    }

    /// Identity match used for inventory lookups: same catalog id and name.
    pub fn same_identity(&self, other: &Item) -> bool {
        self.id == other.id && self.name == other.name
    }

    /// Food that the end-of-day survival tick consumes.
    pub fn is_ration(&self) -> bool {
        self.id.as_deref() == Some("ration") || self.kind == "food"
    }

    /// A water container the survival tick drinks from.
    pub fn is_water_skin(&self) -> bool {
        self.id.as_deref() == Some("waterskin") || self.kind == "water"
    }
}

/// Equipped items keyed by slot. A key is present only when occupied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Equipment {
    slots: BTreeMap<Slot, Item>,
}

impl Equipment {
    /// An empty equipment map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The item in a slot.
    pub fn get(&self, slot: Slot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Whether a slot is occupied.
    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Put an item in a slot, returning whatever was there before.
    pub fn insert(&mut self, slot: Slot, item: Item) -> Option<Item> {
        self.slots.insert(slot, item)
    }

    /// Empty a slot, returning its item.
    pub fn remove(&mut self, slot: Slot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    /// Iterate occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Item)> {
        self.slots.iter().map(|(s, i)| (*s, i))
    }

    /// Iterate equipped items.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots.values()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is equipped.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove and return every equipped item.
    pub fn take_all(&mut self) -> Equipment {
        std::mem::take(self)
    }

    /// Whether main hand holds a two-handed item.
    pub fn main_hand_is_two_handed(&self) -> bool {
        self.get(Slot::MainHand).is_some_and(|i| i.two_handed)
    }
}

impl IntoIterator for Equipment {
    type Item = (Slot, Item);
    type IntoIter = std::collections::btree_map::IntoIter<Slot, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}
