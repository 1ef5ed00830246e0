//! Error types for game rules.

use mr_core::CoreError;

/// Errors that can occur when applying a rule.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The player cannot pay for an item.
    #[error("cannot afford {item}: costs {cost}, have {available}")]
    Unaffordable {
        /// Item name.
        item: String,
        /// Price in copper.
        cost: u64,
        /// Player currency in copper.
        available: u64,
    },

    /// The item is not in the shop's stock.
    #[error("{0} is not for sale here")]
    NotInStock(String),

    /// An inventory index is out of range.
    #[error("no inventory item at index {index} (inventory holds {len})")]
    InventoryIndex {
        /// Requested index.
        index: usize,
        /// Inventory length.
        len: usize,
    },

    /// A catalog lookup failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for rule operations.
pub type MechResult<T> = Result<T, MechError>;
