//! Engine configuration.

use std::path::PathBuf;

/// Configuration for a game session and its saves.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible level-up rolls.
    pub seed: u64,
    /// Number of save slots (1-9).
    pub slots: u32,
    /// Directory holding save files.
    pub save_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            slots: 3,
            save_dir: PathBuf::from("saves"),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of save slots (clamped to 1-9).
    pub fn with_slots(mut self, slots: u32) -> Self {
        self.slots = slots.clamp(1, 9);
        self
    }

    /// Set the save directory.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Slot ids `slot1..slotN`.
    pub fn slot_ids(&self) -> Vec<String> {
        (1..=self.slots).map(|n| format!("slot{n}")).collect()
    }

    /// Whether `slot` is one of the configured slot ids.
    pub fn is_valid_slot(&self, slot: &str) -> bool {
        slot.strip_prefix("slot")
            .and_then(|n| n.parse::<u32>().ok())
            .is_some_and(|n| (1..=self.slots).contains(&n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.slots, 3);
        assert_eq!(cfg.save_dir, PathBuf::from("saves"));
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(7)
            .with_slots(5)
            .with_save_dir("/tmp/realm");
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.slots, 5);
        assert_eq!(cfg.save_dir, PathBuf::from("/tmp/realm"));
    }

    #[test]
    fn slots_clamped() {
        assert_eq!(EngineConfig::default().with_slots(0).slots, 1);
        assert_eq!(EngineConfig::default().with_slots(40).slots, 9);
    }

    #[test]
    fn slot_ids_and_validation() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.slot_ids(), ["slot1", "slot2", "slot3"]);
        assert!(cfg.is_valid_slot("slot2"));
        assert!(!cfg.is_valid_slot("slot4"));
        assert!(!cfg.is_valid_slot("slot0"));
        assert!(!cfg.is_valid_slot("save1"));
    }
}
