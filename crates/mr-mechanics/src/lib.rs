//! Game rules for Mythic Realms.
//!
//! The building blocks the turn engine composes: slot-aware equipping,
//! the end-of-day survival tick, experience and level-ups, shop trading,
//! and character creation from the catalog.

pub mod character;
pub mod dice;
pub mod economy;
pub mod equipment;
pub mod error;
pub mod leveling;
pub mod survival;

pub use character::{CharacterDraft, Opening, create_character, default_abilities};
pub use dice::Die;
pub use economy::{Shop, buy, sell};
pub use equipment::{EquipOutcome, equip, unequip};
pub use error::{MechError, MechResult};
pub use leveling::{LevelUp, check_level_up};
pub use survival::end_of_day;
