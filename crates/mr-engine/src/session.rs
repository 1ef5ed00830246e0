//! A running game bound to a save slot.
//!
//! The session owns the latest committed [`GameState`] and gates every
//! mutation behind a single in-flight flag. A turn is split in two so the
//! narrator round trip can happen outside the session:
//! [`Session::begin_turn`] records the action and hands out a request, and
//! [`Session::complete_turn`] takes the raw reply and commits or reports.

use mr_core::{Catalog, Choice, Intent, Item, LogEntry, LogKind, Slot};
use mr_mechanics::{CharacterDraft, EquipOutcome, create_character};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::apply::{ApplyContext, apply};
use crate::config::EngineConfig;
use crate::envelope::extract;
use crate::error::{EngineError, EngineResult};
use crate::failure::{FailureKind, FailureReport, ServiceError};
use crate::narrator::{NarrativeRequest, Narrator, SceneArtist};
use crate::persistence::{SaveRecord, SaveStore};
use crate::state::GameState;

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing happened: blank action or a turn already in flight.
    Ignored,
    /// The reply was applied and a new state committed.
    Advanced,
    /// The turn failed; only an error entry and fallback choices were added.
    Failed(FailureKind),
}

/// What picking a choice did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// A system choice; the caller should perform this action.
    System(String),
    /// A narrated turn ran.
    Turn(TurnOutcome),
}

/// A game in progress.
pub struct Session {
    slot: String,
    state: GameState,
    catalog: Catalog,
    rng: StdRng,
    processing: bool,
    local: Box<dyn SaveStore>,
    remote: Option<Box<dyn SaveStore>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("slot", &self.slot)
            .field("processing", &self.processing)
            .field("view", &self.state.view())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Wrap an existing state. Nothing is written until the first commit.
    pub fn new(
        slot: impl Into<String>,
        state: GameState,
        config: &EngineConfig,
        local: Box<dyn SaveStore>,
    ) -> Self {
        Self::with_catalog(slot.into(), state, Catalog::standard(), config, local)
    }

    fn with_catalog(
        slot: String,
        state: GameState,
        catalog: Catalog,
        config: &EngineConfig,
        local: Box<dyn SaveStore>,
    ) -> Self {
        Self {
            slot,
            state,
            catalog,
            rng: StdRng::seed_from_u64(config.seed),
            processing: false,
            local,
            remote: None,
        }
    }

    /// Mirror every commit to a second store whose failures are only logged.
    pub fn with_remote(mut self, remote: Box<dyn SaveStore>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Create a character in `slot`, replacing whatever was saved there.
    pub fn create(
        slot: &str,
        draft: CharacterDraft,
        config: &EngineConfig,
        local: Box<dyn SaveStore>,
    ) -> EngineResult<Self> {
        check_slot(config, slot)?;
        let catalog = Catalog::standard();
        let opening = create_character(draft, &catalog)?;
        info!(slot, name = %opening.player.name, "character created");
        let state = GameState::from_opening(opening);
        let mut session = Self::with_catalog(slot.to_string(), state, catalog, config, local);
        session.persist()?;
        Ok(session)
    }

    /// Resume the game saved in `slot`.
    pub fn resume(slot: &str, config: &EngineConfig, local: Box<dyn SaveStore>) -> EngineResult<Self> {
        check_slot(config, slot)?;
        let record = local
            .load(slot)?
            .ok_or_else(|| EngineError::EmptySlot(slot.to_string()))?;
        info!(slot, name = %record.player.name, "game resumed");
        Ok(Self::new(slot, record.into_state(), config, local))
    }

    /// The slot this session saves to.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The latest committed state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Item, class and spell lookups.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether a turn is in flight.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Start a turn. Returns `None` for blank text or while a turn is in flight.
    pub fn begin_turn<'a>(&'a mut self, action: &'a str) -> Option<NarrativeRequest<'a>> {
        let action = action.trim();
        if action.is_empty() || self.processing {
            debug!(processing = self.processing, "action ignored");
            return None;
        }
        self.processing = true;
        let kind = if self.state.enemy().is_some() {
            LogKind::Combat
        } else {
            LogKind::Player
        };
        self.state.log.push(LogEntry::new(kind, action));
        Some(NarrativeRequest {
            action,
            player: &self.state.player,
            world: &self.state.world,
            enemy: self.state.enemy(),
        })
    }

    /// Finish the in-flight turn with the narrator's raw reply.
    ///
    /// A reply that cannot be read is treated like a service failure. Only a
    /// failing local save is returned as an error, and by then the new state
    /// is already committed.
    pub fn complete_turn(
        &mut self,
        reply: Result<String, ServiceError>,
        artist: &mut dyn SceneArtist,
    ) -> EngineResult<TurnOutcome> {
        if !self.processing {
            warn!("reply received with no turn in flight");
            return Ok(TurnOutcome::Ignored);
        }
        self.processing = false;

        let parsed = reply
            .map_err(|e| e.to_string())
            .and_then(|raw| extract(&raw).map_err(|e| e.to_string()));
        match parsed {
            Ok(response) => {
                let mut ctx = ApplyContext {
                    catalog: &self.catalog,
                    rng: &mut self.rng,
                    artist,
                };
                self.state = apply(&self.state, &response, &mut ctx);
                debug!(view = %self.state.view(), day = self.state.world.day, "turn committed");
                self.persist()?;
                Ok(TurnOutcome::Advanced)
            }
            Err(message) => {
                let report = FailureReport::from_message(&message);
                warn!(kind = ?report.kind, error = %message, "turn failed");
                self.state.log.push(LogEntry::new(LogKind::Error, report.message));
                self.state.choices = report.choices;
                Ok(TurnOutcome::Failed(report.kind))
            }
        }
    }

    /// Run a whole turn against `narrator`.
    pub fn take_turn(
        &mut self,
        action: &str,
        narrator: &mut dyn Narrator,
        artist: &mut dyn SceneArtist,
    ) -> EngineResult<TurnOutcome> {
        let reply = match self.begin_turn(action) {
            Some(request) => narrator.narrate(&request),
            None => return Ok(TurnOutcome::Ignored),
        };
        self.complete_turn(reply, artist)
    }

    /// Act on a choice. System choices never reach the narrator.
    pub fn choose(
        &mut self,
        choice: &Choice,
        narrator: &mut dyn Narrator,
        artist: &mut dyn SceneArtist,
    ) -> EngineResult<ChoiceOutcome> {
        if choice.intent == Intent::System {
            return Ok(ChoiceOutcome::System(choice.id.clone()));
        }
        self.take_turn(&choice.label, narrator, artist)
            .map(ChoiceOutcome::Turn)
    }

    /// Equip the inventory item at `index`.
    pub fn equip(&mut self, index: usize) -> EngineResult<EquipOutcome> {
        self.ensure_idle()?;
        let item = self
            .state
            .player
            .inventory
            .get(index)
            .cloned()
            .ok_or(EngineError::InventoryIndex(index))?;
        let outcome = mr_mechanics::equip(&mut self.state.player, &item);
        if matches!(outcome, EquipOutcome::Equipped { .. }) {
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Move whatever is in `slot` back to the inventory.
    pub fn unequip(&mut self, slot: Slot) -> EngineResult<bool> {
        self.ensure_idle()?;
        let moved = mr_mechanics::unequip(&mut self.state.player, slot);
        if moved {
            self.persist()?;
        }
        Ok(moved)
    }

    /// Buy the shop item at `index`.
    pub fn buy(&mut self, index: usize) -> EngineResult<Item> {
        self.ensure_idle()?;
        let GameState {
            player, lifecycle, ..
        } = &mut self.state;
        let shop = lifecycle.shop_mut().ok_or(EngineError::NoShop)?;
        let item = shop
            .stock
            .get(index)
            .cloned()
            .ok_or(EngineError::ShopIndex(index))?;
        mr_mechanics::buy(player, shop, &item)?;
        self.persist()?;
        Ok(item)
    }

    /// Sell the inventory item at `index`. Returns the price received.
    pub fn sell(&mut self, index: usize) -> EngineResult<u64> {
        self.ensure_idle()?;
        let GameState {
            player, lifecycle, ..
        } = &mut self.state;
        let shop = lifecycle.shop_mut().ok_or(EngineError::NoShop)?;
        let price = mr_mechanics::sell(player, shop, index)?;
        self.persist()?;
        Ok(price)
    }

    /// Leave the open shop. Returns whether one was open.
    pub fn close_shop(&mut self) -> EngineResult<bool> {
        self.ensure_idle()?;
        let closed = self.state.lifecycle.close_shop().is_some();
        if closed {
            self.persist()?;
        }
        Ok(closed)
    }

    /// Write the current state to the stores.
    pub fn save(&mut self) -> EngineResult<()> {
        self.ensure_idle()?;
        self.persist()
    }

    fn ensure_idle(&self) -> EngineResult<()> {
        if self.processing {
            return Err(EngineError::Busy);
        }
        Ok(())
    }

    fn persist(&mut self) -> EngineResult<()> {
        let record = SaveRecord::from_state(&self.state);
        self.local.save(&self.slot, &record)?;
        if let Some(remote) = self.remote.as_mut()
            && let Err(e) = remote.save(&self.slot, &record)
        {
            warn!(slot = %self.slot, error = %e, "remote save failed");
        }
        Ok(())
    }
}

fn check_slot(config: &EngineConfig, slot: &str) -> EngineResult<()> {
    if config.is_valid_slot(slot) {
        Ok(())
    } else {
        Err(EngineError::UnknownSlot(slot.to_string()))
    }
}
