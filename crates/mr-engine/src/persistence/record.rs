//! The persisted shape of a game and the summary read back for slot lists.

use chrono::{DateTime, Utc};
use mr_core::{Choice, Enemy, LogEntry, Player, World};
use mr_mechanics::Shop;
use serde::{Deserialize, Serialize};

use crate::lifecycle::{Lifecycle, Mode};
use crate::state::GameState;

/// Everything needed to resume a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// The player character.
    pub player: Player,
    /// The world.
    pub world: World,
    /// Turn history.
    pub log: Vec<LogEntry>,
    /// Choices on offer when saved.
    pub choices: Vec<Choice>,
    /// Mode when saved.
    pub view: Mode,
    /// Active enemy.
    #[serde(default)]
    pub enemy: Option<Enemy>,
    /// Open shop with its remaining stock.
    #[serde(default)]
    pub shop: Option<Shop>,
    /// Current scene image.
    #[serde(default)]
    pub scene_image: Option<String>,
    /// When the record was written.
    pub saved_at: DateTime<Utc>,
}

impl SaveRecord {
    /// Snapshot a state, stamped with the current time.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player: state.player.clone(),
            world: state.world.clone(),
            log: state.log.clone(),
            choices: state.choices.clone(),
            view: state.view(),
            enemy: state.enemy().cloned(),
            shop: state.shop().cloned(),
            scene_image: state.scene_image.clone(),
            saved_at: Utc::now(),
        }
    }

    /// Rebuild the live state. The view is derived again from enemy and shop.
    pub fn into_state(self) -> GameState {
        GameState {
            player: self.player,
            world: self.world,
            lifecycle: Lifecycle::from_parts(self.enemy, self.shop),
            log: self.log,
            choices: self.choices,
            scene_image: self.scene_image,
        }
    }
}

/// What the slot picker shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSummary {
    /// Slot id.
    pub slot_id: String,
    /// Whether a readable save is present.
    pub exists: bool,
    /// Character name.
    pub player_name: String,
    /// Character level.
    pub player_level: u32,
    /// In-game day.
    pub world_day: u32,
}

/// Fallback name when a save has no readable player name.
pub const UNKNOWN_HERO: &str = "Unknown Hero";

impl SlotSummary {
    /// An empty slot.
    pub fn empty(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            exists: false,
            player_name: UNKNOWN_HERO.to_string(),
            player_level: 1,
            world_day: 1,
        }
    }

    /// Summarize raw record text, reading only the fields it needs.
    ///
    /// Text that is not a JSON object yields an empty slot.
    pub fn from_json(slot_id: impl Into<String>, raw: &str) -> Self {
        let slot_id = slot_id.into();
        let Ok(partial) = serde_json::from_str::<PartialRecord>(raw) else {
            return Self::empty(slot_id);
        };
        let player = partial.player.unwrap_or_default();
        Self {
            slot_id,
            exists: true,
            player_name: player.name.unwrap_or_else(|| UNKNOWN_HERO.to_string()),
            player_level: player.level.unwrap_or(1),
            world_day: partial.world.and_then(|w| w.day).unwrap_or(1),
        }
    }
}

#[derive(Deserialize)]
struct PartialRecord {
    #[serde(default)]
    player: Option<PartialPlayer>,
    #[serde(default)]
    world: Option<PartialWorld>,
}

#[derive(Default, Deserialize)]
struct PartialPlayer {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    level: Option<u32>,
}

#[derive(Deserialize)]
struct PartialWorld {
    #[serde(default)]
    day: Option<u32>,
}
