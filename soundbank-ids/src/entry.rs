//! Individual symbols and state groups.

use std::fmt;

use serde::Serialize;

use crate::category::Category;

/// One generated symbol: a name and the ID the authoring tool assigned it.
///
/// State values also record the state group that owns them, since the same
/// value name (`NONE`) appears under several groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolEntry {
    pub category: Category,
    pub group: Option<&'static str>,
    pub name: &'static str,
    pub id: u32,
}

impl SymbolEntry {
    /// Name as accepted by [`Snapshot::lookup`](crate::Snapshot::lookup).
    ///
    /// State values are qualified with their group: `WAVE_STATE.PEACE1`.
    pub fn qualified_name(&self) -> String {
        match self.group {
            Some(group) => format!("{}.{}", group, self.name),
            None => self.name.to_string(),
        }
    }
}

impl fmt::Display for SymbolEntry {
    /// Formats the entry as its path in the generated header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let namespace = self.category.namespace();
        match (self.category, self.group) {
            (Category::StateGroup, _) => {
                write!(f, "{}.{}.GROUP = {}", namespace, self.name, self.id)
            }
            (Category::StateValue, Some(group)) => {
                write!(f, "{}.{}.STATE.{} = {}", namespace, group, self.name, self.id)
            }
            _ => write!(f, "{}.{} = {}", namespace, self.name, self.id),
        }
    }
}

/// A state group and the state values nested under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateGroup {
    /// The group's own entry (`STATES.<GROUP>.GROUP`).
    pub entry: SymbolEntry,
    pub states: &'static [SymbolEntry],
}

impl StateGroup {
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    pub fn id(&self) -> u32 {
        self.entry.id
    }

    /// Find a state value of this group by name.
    pub fn state(&self, name: &str) -> Option<&'static SymbolEntry> {
        let states: &'static [SymbolEntry] = self.states;
        states.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WAVE_TYPE: StateGroup = StateGroup {
        entry: SymbolEntry {
            category: Category::StateGroup,
            group: None,
            name: "WAVE_TYPE",
            id: 3590821249,
        },
        states: &[
            SymbolEntry {
                category: Category::StateValue,
                group: Some("WAVE_TYPE"),
                name: "PEACE",
                id: 103389341,
            },
            SymbolEntry {
                category: Category::StateValue,
                group: Some("WAVE_TYPE"),
                name: "WAR",
                id: 1113986025,
            },
        ],
    };

    #[test]
    fn display_uses_header_paths() {
        let event = SymbolEntry {
            category: Category::Event,
            group: None,
            name: "PLAY_BIRDATTACK",
            id: 2435460859,
        };
        assert_eq!(event.to_string(), "EVENTS.PLAY_BIRDATTACK = 2435460859");
        assert_eq!(WAVE_TYPE.entry.to_string(), "STATES.WAVE_TYPE.GROUP = 3590821249");
        assert_eq!(
            WAVE_TYPE.states[1].to_string(),
            "STATES.WAVE_TYPE.STATE.WAR = 1113986025"
        );
    }

    #[test]
    fn state_values_are_qualified() {
        assert_eq!(WAVE_TYPE.states[0].qualified_name(), "WAVE_TYPE.PEACE");
        assert_eq!(WAVE_TYPE.entry.qualified_name(), "WAVE_TYPE");
    }

    #[test]
    fn group_state_lookup() {
        assert_eq!(WAVE_TYPE.state("WAR").map(|s| s.id), Some(1113986025));
        assert!(WAVE_TYPE.state("NONE").is_none());
    }
}
