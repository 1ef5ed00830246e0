//! The authoritative game state threaded from turn to turn.

use mr_core::{Choice, Enemy, LogEntry, Player, World};
use mr_mechanics::{Opening, Shop};

use crate::lifecycle::{Lifecycle, Mode};

/// Everything a turn reads and produces.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// The player character.
    pub player: Player,
    /// The world.
    pub world: World,
    /// Enemy and shop.
    pub lifecycle: Lifecycle,
    /// Turn history.
    pub log: Vec<LogEntry>,
    /// Choices currently offered.
    pub choices: Vec<Choice>,
    /// Current scene image, if one was painted.
    pub scene_image: Option<String>,
}

impl GameState {
    /// The state right after character creation.
    pub fn from_opening(opening: Opening) -> Self {
        Self {
            player: opening.player,
            world: opening.world,
            lifecycle: Lifecycle::default(),
            log: opening.log,
            choices: opening.choices,
            scene_image: None,
        }
    }

    /// Current mode.
    pub fn view(&self) -> Mode {
        self.lifecycle.mode()
    }

    /// The active enemy.
    pub fn enemy(&self) -> Option<&Enemy> {
        self.lifecycle.enemy()
    }

    /// The open shop.
    pub fn shop(&self) -> Option<&Shop> {
        self.lifecycle.shop()
    }

    /// The last `n` log entries.
    pub fn recent_log(&self, n: usize) -> &[LogEntry] {
        let start = self.log.len().saturating_sub(n);
        &self.log[start..]
    }
}
