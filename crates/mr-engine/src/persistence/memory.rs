//! In-memory save slots.

use std::collections::BTreeMap;

use super::SaveStore;
use crate::error::EngineResult;

/// Slots held in a map. Backs tests and stands in for a remote backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SaveStore for MemoryStore {
    fn read(&self, slot: &str) -> EngineResult<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, json: &str) -> EngineResult<()> {
        self.slots.insert(slot.to_string(), json.to_string());
        Ok(())
    }

    fn delete(&mut self, slot: &str) -> EngineResult<bool> {
        Ok(self.slots.remove(slot).is_some())
    }
}
