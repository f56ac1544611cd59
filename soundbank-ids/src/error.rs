//! Registry errors.

use crate::category::Category;

/// Error returned when a symbol or snapshot cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// The name does not exist in that category for the selected revision.
    #[error("unknown {category} symbol '{name}' in soundbank revision {revision}")]
    UnknownSymbol {
        category: Category,
        name: String,
        revision: u32,
    },

    #[error("no soundbank IDs were generated for revision {0}")]
    UnknownRevision(u32),

    /// Content built against one snapshot is being used with another.
    #[error(
        "soundbank revision {revision} fingerprint is {actual:016x}, expected {expected:016x}"
    )]
    FingerprintMismatch {
        revision: u32,
        expected: u64,
        actual: u64,
    },

    #[error("unknown symbol category '{0}'")]
    UnknownCategory(String),
}
