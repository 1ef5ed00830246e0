//! Turn engine for Mythic Realms.
//!
//! Each turn sends the player's action to a [`Narrator`], pulls a response
//! object out of the raw reply, and folds its patch into the previous
//! [`GameState`] with [`apply`]. [`Session`] drives this loop for one save
//! slot: it gates input while a turn is in flight, reports collaborator
//! failures without touching committed state, and writes every commit to a
//! [`SaveStore`].
//!
//! ```no_run
//! use mr_engine::{EngineConfig, FileStore, NoArtist, ScriptedNarrator, Session};
//!
//! # fn main() -> mr_engine::EngineResult<()> {
//! let config = EngineConfig::default();
//! let store = FileStore::new(&config.save_dir)?;
//! let mut session = Session::resume("slot1", &config, Box::new(store))?;
//! let mut narrator = ScriptedNarrator::new().reply(r#"{"narration":"The road is quiet."}"#);
//! session.take_turn("walk north", &mut narrator, &mut NoArtist)?;
//! # Ok(())
//! # }
//! ```

pub mod apply;
pub mod config;
pub mod envelope;
pub mod error;
pub mod failure;
pub mod lenient;
pub mod lifecycle;
pub mod narrator;
pub mod patch;
pub mod persistence;
pub mod session;
pub mod state;

pub use apply::{ApplyContext, apply};
pub use config::EngineConfig;
pub use envelope::{NarrativeResponse, extract};
pub use error::{EngineError, EngineResult};
pub use failure::{FailureKind, FailureReport, ServiceError};
pub use lifecycle::{Lifecycle, Mode};
pub use narrator::{NarrativeRequest, Narrator, NoArtist, SceneArtist, ScriptedArtist, ScriptedNarrator};
pub use patch::Patch;
pub use persistence::{FileStore, MemoryStore, SaveRecord, SaveStore, SlotSummary};
pub use session::{ChoiceOutcome, Session, TurnOutcome};
pub use state::GameState;
