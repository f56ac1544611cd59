//! Comparison of two generated snapshots.

use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use crate::category::Category;
use crate::entry::SymbolEntry;
use crate::snapshot::Snapshot;

type EntryKey = (Category, Option<&'static str>, &'static str);

fn key(entry: &SymbolEntry) -> EntryKey {
    (entry.category, entry.group, entry.name)
}

/// A symbol present in both snapshots whose ID changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdChange {
    pub entry: &'static SymbolEntry,
    pub old_id: u32,
}

/// Symbols added, removed and re-identified between two revisions.
///
/// Renaming a symbol in the authoring tool shows up as one removal and one
/// addition, since the ID is derived from the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotDiff {
    pub from: u32,
    pub to: u32,
    pub added: Vec<&'static SymbolEntry>,
    pub removed: Vec<&'static SymbolEntry>,
    pub changed: Vec<IdChange>,
    pub unchanged: usize,
}

impl SnapshotDiff {
    pub fn between(old: &Snapshot, new: &Snapshot) -> Self {
        let old_entries: HashMap<EntryKey, &'static SymbolEntry> =
            old.entries().map(|e| (key(e), e)).collect();
        let new_keys: HashSet<EntryKey> = new.entries().map(key).collect();

        let mut diff = SnapshotDiff {
            from: old.revision,
            to: new.revision,
            ..Default::default()
        };

        for entry in new.entries() {
            match old_entries.get(&key(entry)) {
                Some(previous) if previous.id == entry.id => diff.unchanged += 1,
                Some(previous) => diff.changed.push(IdChange {
                    entry,
                    old_id: previous.id,
                }),
                None => diff.added.push(entry),
            }
        }

        diff.removed = old
            .entries()
            .filter(|e| !new_keys.contains(&key(e)))
            .collect();

        tracing::debug!(
            from = diff.from,
            to = diff.to,
            added = diff.added.len(),
            removed = diff.removed.len(),
            changed = diff.changed.len(),
            "Compared soundbank snapshots"
        );

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
