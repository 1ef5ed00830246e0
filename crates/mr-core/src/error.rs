//! Error types for catalog lookups and character data.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when resolving catalog entries.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The race is not in the catalog.
    #[error("unknown race: \"{0}\"")]
    UnknownRace(String),

    /// The class is not in the catalog.
    #[error("unknown class: \"{0}\"")]
    UnknownClass(String),

    /// The background is not in the catalog.
    #[error("unknown background: \"{0}\"")]
    UnknownBackground(String),

    /// The item id is not in the catalog.
    #[error("unknown item id: \"{0}\"")]
    UnknownItem(String),

    /// A slot name could not be parsed.
    #[error("unknown equipment slot: \"{0}\"")]
    UnknownSlot(String),
}
