//! Sound-engine symbol IDs for every generated soundbank revision.
//!
//! The authoring tool assigns each event, state, game parameter, trigger,
//! bank, bus and output device a 32-bit ID. Each regeneration of the
//! soundbanks produces a new snapshot of those IDs; every snapshot lives in
//! its own generated module under [`generated`] and is never edited by hand.
//!
//! # Compile-time lookup
//!
//! Generated constants mirror the header namespaces, so a symbol that does
//! not exist in a revision is a build error:
//!
//! ```
//! use soundbank_ids::generated::v1;
//!
//! assert_eq!(v1::EVENTS::PLAY_BIRDATTACK, 2435460859);
//! assert_eq!(v1::STATES::WAVE_STATE::STATE::PEACE1, 1350254358);
//! ```
//!
//! # Load-time lookup
//!
//! When the name is only known at runtime, go through a [`Snapshot`]:
//!
//! ```
//! use soundbank_ids::{Category, snapshot};
//!
//! let rev1 = snapshot(1).unwrap();
//! assert_eq!(rev1.lookup(Category::Bank, "INIT").unwrap(), 1355168291);
//! assert!(rev1.lookup(Category::Event, "PLAY_DAMAGE").is_err());
//! ```

pub mod category;
pub mod diff;
pub mod entry;
pub mod error;
pub mod generated;
pub mod hash;
pub mod snapshot;

pub use category::Category;
pub use diff::{IdChange, SnapshotDiff};
pub use entry::{StateGroup, SymbolEntry};
pub use error::SymbolError;
pub use generated::current;
pub use hash::short_id;
pub use snapshot::{Section, Snapshot, Symbols};

/// Every generated snapshot, oldest revision first.
pub fn snapshots() -> &'static [&'static Snapshot] {
    generated::SNAPSHOTS
}

/// Select the snapshot generated for `revision`.
pub fn snapshot(revision: u32) -> Result<&'static Snapshot, SymbolError> {
    generated::SNAPSHOTS
        .iter()
        .copied()
        .find(|s| s.revision == revision)
        .ok_or(SymbolError::UnknownRevision(revision))
}

/// The newest generated snapshot.
pub fn latest() -> &'static Snapshot {
    generated::LATEST
}
