//! Spell records.

use serde::{Deserialize, Serialize};

/// Who a spell is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellTarget {
    /// A hostile creature.
    Enemy,
    /// A friendly creature.
    Ally,
    /// The caster.
    #[serde(rename = "self")]
    Caster,
}

/// A catalog spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Mana cost.
    pub cost: i32,
    /// Damage dealt, if offensive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    /// Health restored, if curative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal: Option<i32>,
    /// Named buff applied, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff: Option<String>,
    /// Buff duration in rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// School of magic.
    pub school: String,
    /// Intended target.
    pub target: SpellTarget,
}
