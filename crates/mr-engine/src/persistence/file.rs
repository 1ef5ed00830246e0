//! Save slots as JSON files in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::SaveStore;
use crate::error::EngineResult;

/// File name prefix for save files.
pub const FILE_PREFIX: &str = "mythic_realms_";

/// One `mythic_realms_<slot>.json` file per slot.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Open a store, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> EngineResult<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// The directory holding the save files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("{FILE_PREFIX}{slot}.json"))
    }
}

impl SaveStore for FileStore {
    fn read(&self, slot: &str) -> EngineResult<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        debug!(slot, path = %path.display(), "loaded save");
        Ok(Some(json))
    }

    fn write(&mut self, slot: &str, json: &str) -> EngineResult<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        info!(slot, path = %path.display(), "saved game");
        Ok(())
    }

    fn delete(&mut self, slot: &str) -> EngineResult<bool> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        info!(slot, "deleted save");
        Ok(true)
    }
}
