//! Core types for Mythic Realms.
//!
//! The character, item, quest and world model shared by every other crate,
//! the static catalog of game content, and the pure derived-stat functions
//! (ability modifiers, experience thresholds, armor class).

pub mod ability;
pub mod catalog;
pub mod enemy;
pub mod error;
pub mod item;
pub mod player;
pub mod pool;
pub mod quest;
pub mod spell;
pub mod stats;
pub mod world;

pub use ability::{Abilities, Ability};
pub use catalog::{AbilityBonus, Background, Catalog, Class, Feat, Race};
pub use enemy::Enemy;
pub use error::{CoreError, CoreResult};
pub use item::{Equipment, Item, Slot};
pub use player::{Npc, Personality, Player, Proficiencies, Stash};
pub use pool::Pool;
pub use quest::{Quest, QuestLog, QuestStatus};
pub use spell::{Spell, SpellTarget};
pub use world::{Choice, Intent, LogEntry, LogKind, World, WorldEvent};
