//! Error types for the turn engine.

use thiserror::Error;

use mr_core::CoreError;
use mr_mechanics::MechError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running turns or touching saves.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The narrator reply contains no `{ ... }` span.
    #[error("no JSON object found in narrator reply")]
    NoEnvelope,

    /// The envelope span is not a valid response object.
    #[error("invalid JSON in narrator reply: {0}")]
    Json(#[from] serde_json::Error),

    /// A turn is already being processed.
    #[error("a turn is already in progress")]
    Busy,

    /// The operation needs an open shop.
    #[error("no shop is open")]
    NoShop,

    /// An index did not point at a shop item.
    #[error("no shop item at index {0}")]
    ShopIndex(usize),

    /// An index did not point at an inventory item.
    #[error("no inventory item at index {0}")]
    InventoryIndex(usize),

    /// A slot id is not one of the configured slots.
    #[error("unknown save slot: {0}")]
    UnknownSlot(String),

    /// There is no save in the slot.
    #[error("save slot {0} is empty")]
    EmptySlot(String),

    /// A save file could not be read or written.
    #[error("save I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A rule rejected the operation.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// A catalog lookup failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
