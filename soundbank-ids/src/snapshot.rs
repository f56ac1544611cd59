//! One generated revision of the soundbank ID tables.

use std::iter::FusedIterator;
use std::slice;

use xxhash_rust::xxh3::Xxh3;

use crate::category::Category;
use crate::entry::{StateGroup, SymbolEntry};
use crate::error::SymbolError;

/// All entries of one flat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub entries: &'static [SymbolEntry],
}

/// Immutable ID tables produced by one regeneration of the soundbanks.
///
/// Snapshots are `static` items in the generated modules; nothing mutates
/// them after generation. A regeneration replaces the whole table.
#[derive(Debug)]
pub struct Snapshot {
    /// Ordinal of this regeneration, starting at 1.
    pub revision: u32,
    pub label: &'static str,
    /// Header the tables were generated from, relative to the workspace root.
    pub source: &'static str,
    pub sections: &'static [Section],
    pub state_groups: &'static [StateGroup],
}

impl Snapshot {
    /// Resolve `name` within `category` to its ID.
    ///
    /// State values take the group-qualified form `WAVE_STATE.PEACE1`.
    pub fn lookup(&self, category: Category, name: &str) -> Result<u32, SymbolError> {
        self.find(category, name)
            .map(|entry| entry.id)
            .ok_or_else(|| SymbolError::UnknownSymbol {
                category,
                name: name.to_string(),
                revision: self.revision,
            })
    }

    pub fn find(&self, category: Category, name: &str) -> Option<&'static SymbolEntry> {
        match category {
            Category::StateGroup => self.state_group(name).map(|g| &g.entry),
            Category::StateValue => {
                let (group, value) = name.split_once('.')?;
                self.state_group(group)?.state(value)
            }
            _ => self
                .section_entries(category)
                .iter()
                .find(|entry| entry.name == name),
        }
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.find(category, name).is_some()
    }

    pub fn state_group(&self, name: &str) -> Option<&'static StateGroup> {
        let groups: &'static [StateGroup] = self.state_groups;
        groups.iter().find(|g| g.name() == name)
    }

    /// Resolve the `(group, value)` ID pair used to set a state.
    pub fn state(&self, group: &str, value: &str) -> Result<(u32, u32), SymbolError> {
        let state_group = self
            .state_group(group)
            .ok_or_else(|| SymbolError::UnknownSymbol {
                category: Category::StateGroup,
                name: group.to_string(),
                revision: self.revision,
            })?;

        let state = state_group
            .state(value)
            .ok_or_else(|| SymbolError::UnknownSymbol {
                category: Category::StateValue,
                name: format!("{}.{}", group, value),
                revision: self.revision,
            })?;

        Ok((state_group.id(), state.id))
    }

    /// Iterate every entry of `category` in generated order.
    ///
    /// The iterator is lazy and can be cloned to restart it.
    pub fn enumerate(&self, category: Category) -> Symbols {
        let groups: &'static [StateGroup] = self.state_groups;
        let inner = match category {
            Category::StateGroup => SymbolsInner::Groups(groups.iter()),
            Category::StateValue => {
                let empty: &'static [SymbolEntry] = &[];
                SymbolsInner::States {
                    groups: groups.iter(),
                    current: empty.iter(),
                }
            }
            _ => SymbolsInner::Entries(self.section_entries(category).iter()),
        };
        Symbols { inner }
    }

    /// Iterate every entry of every category, in [`Category::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = &'static SymbolEntry> + Clone + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.enumerate(category))
    }

    pub fn count(&self, category: Category) -> usize {
        self.enumerate(category).count()
    }

    /// Content hash over every (category, group, name, id) in generated order.
    ///
    /// Record it alongside anything built against this snapshot and compare
    /// with [`Snapshot::check_fingerprint`] to detect stale IDs.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        for entry in self.entries() {
            hasher.update(&[entry.category.tag()]);
            if let Some(group) = entry.group {
                hasher.update(group.as_bytes());
            }
            hasher.update(&[0]);
            hasher.update(entry.name.as_bytes());
            hasher.update(&[0]);
            hasher.update(&entry.id.to_le_bytes());
        }
        hasher.digest()
    }

    pub fn check_fingerprint(&self, expected: u64) -> Result<(), SymbolError> {
        let actual = self.fingerprint();
        if actual != expected {
            tracing::warn!(
                revision = self.revision,
                "Soundbank IDs are stale: fingerprint {:016x}, expected {:016x}",
                actual,
                expected
            );
            return Err(SymbolError::FingerprintMismatch {
                revision: self.revision,
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn section_entries(&self, category: Category) -> &'static [SymbolEntry] {
        let sections: &'static [Section] = self.sections;
        sections
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.entries)
            .unwrap_or(&[])
    }
}

/// Lazy iterator over the entries of one category.
#[derive(Debug, Clone)]
pub struct Symbols {
    inner: SymbolsInner,
}

#[derive(Debug, Clone)]
enum SymbolsInner {
    Entries(slice::Iter<'static, SymbolEntry>),
    Groups(slice::Iter<'static, StateGroup>),
    States {
        groups: slice::Iter<'static, StateGroup>,
        current: slice::Iter<'static, SymbolEntry>,
    },
}

impl Iterator for Symbols {
    type Item = &'static SymbolEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            SymbolsInner::Entries(entries) => entries.next(),
            SymbolsInner::Groups(groups) => groups.next().map(|g| &g.entry),
            SymbolsInner::States { groups, current } => loop {
                if let Some(state) = current.next() {
                    return Some(state);
                }
                *current = groups.next()?.states.iter();
            },
        }
    }
}

impl FusedIterator for Symbols {}

#[cfg(test)]
mod tests {
    use super::*;

    static TINY: Snapshot = Snapshot {
        revision: 7,
        label: "tiny",
        source: "soundbanks/tiny/Wwise_IDs.h",
        sections: &[Section {
            category: Category::Event,
            entries: &[
                SymbolEntry {
                    category: Category::Event,
                    group: None,
                    name: "PLAY_A",
                    id: 1,
                },
                SymbolEntry {
                    category: Category::Event,
                    group: None,
                    name: "PLAY_B",
                    id: 2,
                },
            ],
        }],
        state_groups: &[
            StateGroup {
                entry: SymbolEntry {
                    category: Category::StateGroup,
                    group: None,
                    name: "EMPTY",
                    id: 10,
                },
                states: &[],
            },
            StateGroup {
                entry: SymbolEntry {
                    category: Category::StateGroup,
                    group: None,
                    name: "MOOD",
                    id: 20,
                },
                states: &[
                    SymbolEntry {
                        category: Category::StateValue,
                        group: Some("MOOD"),
                        name: "CALM",
                        id: 21,
                    },
                    SymbolEntry {
                        category: Category::StateValue,
                        group: Some("MOOD"),
                        name: "TENSE",
                        id: 22,
                    },
                ],
            },
        ],
    };

    #[test]
    fn lookup_flat_symbols() {
        assert_eq!(TINY.lookup(Category::Event, "PLAY_B"), Ok(2));
        assert_eq!(
            TINY.lookup(Category::Event, "PLAY_C"),
            Err(SymbolError::UnknownSymbol {
                category: Category::Event,
                name: "PLAY_C".to_string(),
                revision: 7,
            })
        );
    }

    #[test]
    fn lookup_is_scoped_by_category() {
        assert!(TINY.lookup(Category::Trigger, "PLAY_A").is_err());
        assert!(TINY.lookup(Category::StateGroup, "PLAY_A").is_err());
    }

    #[test]
    fn lookup_state_values_by_qualified_name() {
        assert_eq!(TINY.lookup(Category::StateValue, "MOOD.TENSE"), Ok(22));
        assert!(TINY.lookup(Category::StateValue, "TENSE").is_err());
        assert!(TINY.lookup(Category::StateValue, "EMPTY.TENSE").is_err());
        assert_eq!(TINY.lookup(Category::StateGroup, "MOOD"), Ok(20));
    }

    #[test]
    fn state_pair() {
        assert_eq!(TINY.state("MOOD", "CALM"), Ok((20, 21)));

        let err = TINY.state("MOOD", "ANGRY").unwrap_err();
        assert!(matches!(
            err,
            SymbolError::UnknownSymbol { category: Category::StateValue, ref name, .. }
                if name == "MOOD.ANGRY"
        ));

        let err = TINY.state("WEATHER", "CALM").unwrap_err();
        assert!(matches!(
            err,
            SymbolError::UnknownSymbol { category: Category::StateGroup, .. }
        ));
    }

    #[test]
    fn enumerate_skips_empty_groups() {
        let states: Vec<_> = TINY
            .enumerate(Category::StateValue)
            .map(|e| e.qualified_name())
            .collect();
        assert_eq!(states, vec!["MOOD.CALM", "MOOD.TENSE"]);

        let groups: Vec<_> = TINY.enumerate(Category::StateGroup).map(|e| e.name).collect();
        assert_eq!(groups, vec!["EMPTY", "MOOD"]);
    }

    #[test]
    fn enumerate_missing_category_is_empty() {
        assert_eq!(TINY.enumerate(Category::Bus).next(), None);
        assert_eq!(TINY.count(Category::Device), 0);
    }

    #[test]
    fn enumerate_is_restartable() {
        let events = TINY.enumerate(Category::Event);
        let first: Vec<_> = events.clone().collect();
        let second: Vec<_> = events.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn entries_cover_all_categories() {
        assert_eq!(TINY.entries().count(), 2 + 2 + 2);
    }

    #[test]
    fn fingerprint_check() {
        let fingerprint = TINY.fingerprint();
        assert_eq!(fingerprint, TINY.fingerprint());
        assert!(TINY.check_fingerprint(fingerprint).is_ok());

        let err = TINY.check_fingerprint(fingerprint ^ 1).unwrap_err();
        assert_eq!(
            err,
            SymbolError::FingerprintMismatch {
                revision: 7,
                expected: fingerprint ^ 1,
                actual: fingerprint,
            }
        );
    }
}
