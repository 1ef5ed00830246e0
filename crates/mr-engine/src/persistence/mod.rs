//! Save slots.
//!
//! A store only moves record text in and out of named slots; encoding and
//! summaries are shared provided methods on [`SaveStore`].

mod file;
mod memory;
mod record;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{SaveRecord, SlotSummary, UNKNOWN_HERO};

use crate::error::EngineResult;

/// Storage for save records keyed by slot id.
pub trait SaveStore {
    /// Raw record text in `slot`, if any.
    fn read(&self, slot: &str) -> EngineResult<Option<String>>;

    /// Replace the record text in `slot`.
    fn write(&mut self, slot: &str, json: &str) -> EngineResult<()>;

    /// Remove `slot`. Returns whether anything was there.
    fn delete(&mut self, slot: &str) -> EngineResult<bool>;

    /// Encode and store a record.
    fn save(&mut self, slot: &str, record: &SaveRecord) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        self.write(slot, &json)
    }

    /// Load and decode the record in `slot`.
    fn load(&self, slot: &str) -> EngineResult<Option<SaveRecord>> {
        match self.read(slot)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Summary of one slot. Read failures report an empty slot.
    fn summary(&self, slot: &str) -> SlotSummary {
        match self.read(slot) {
            Ok(Some(json)) => SlotSummary::from_json(slot, &json),
            Ok(None) => SlotSummary::empty(slot),
            Err(e) => {
                tracing::warn!(slot, error = %e, "could not read save slot");
                SlotSummary::empty(slot)
            }
        }
    }

    /// Summaries of `slot1..slot{count}`.
    fn summaries(&self, count: u32) -> Vec<SlotSummary> {
        (1..=count)
            .map(|n| self.summary(&format!("slot{n}")))
            .collect()
    }
}
