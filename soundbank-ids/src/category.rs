//! Symbol categories and the header namespaces they are generated into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SymbolError;

/// Kind of symbol a generated ID belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Event,
    StateGroup,
    StateValue,
    GameParameter,
    Trigger,
    Bank,
    Bus,
    AuxBus,
    Device,
}

impl Category {
    /// All categories in generated order.
    pub const ALL: [Category; 9] = [
        Category::Event,
        Category::StateGroup,
        Category::StateValue,
        Category::GameParameter,
        Category::Trigger,
        Category::Bank,
        Category::Bus,
        Category::AuxBus,
        Category::Device,
    ];

    /// Categories stored as a single flat namespace of constants.
    ///
    /// State groups and values are nested under `STATES` instead.
    pub const FLAT: [Category; 7] = [
        Category::Event,
        Category::GameParameter,
        Category::Trigger,
        Category::Bank,
        Category::Bus,
        Category::AuxBus,
        Category::Device,
    ];

    /// Namespace name used by the generated header and Rust modules.
    pub const fn namespace(self) -> &'static str {
        match self {
            Category::Event => "EVENTS",
            Category::StateGroup | Category::StateValue => "STATES",
            Category::GameParameter => "GAME_PARAMETERS",
            Category::Trigger => "TRIGGERS",
            Category::Bank => "BANKS",
            Category::Bus => "BUSSES",
            Category::AuxBus => "AUX_BUSSES",
            Category::Device => "AUDIO_DEVICES",
        }
    }

    /// Resolve a flat namespace name back to its category.
    ///
    /// `STATES` is not flat and yields `None`.
    pub fn from_namespace(namespace: &str) -> Option<Category> {
        Category::FLAT
            .into_iter()
            .find(|c| c.namespace() == namespace)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Event => "event",
            Category::StateGroup => "state_group",
            Category::StateValue => "state_value",
            Category::GameParameter => "game_parameter",
            Category::Trigger => "trigger",
            Category::Bank => "bank",
            Category::Bus => "bus",
            Category::AuxBus => "aux_bus",
            Category::Device => "device",
        }
    }

    /// Stable one-byte tag used when fingerprinting snapshot contents.
    pub const fn tag(self) -> u8 {
        match self {
            Category::Event => 0,
            Category::StateGroup => 1,
            Category::StateValue => 2,
            Category::GameParameter => 3,
            Category::Trigger => 4,
            Category::Bank => 5,
            Category::Bus => 6,
            Category::AuxBus => 7,
            Category::Device => 8,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SymbolError;

    /// Accepts `event`, `EVENT`, `state-value` and flat namespace names such as `BUSSES`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        if let Some(category) = Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
        {
            return Ok(category);
        }

        Category::from_namespace(&normalized.to_ascii_uppercase())
            .ok_or_else(|| SymbolError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_namespaces_round_trip() {
        for category in Category::FLAT {
            assert_eq!(Category::from_namespace(category.namespace()), Some(category));
        }
        assert_eq!(Category::from_namespace("STATES"), None);
        assert_eq!(Category::from_namespace("SWITCHES"), None);
    }

    #[test]
    fn parses_names_and_namespaces() {
        assert_eq!("event".parse::<Category>().unwrap(), Category::Event);
        assert_eq!("AUX_BUS".parse::<Category>().unwrap(), Category::AuxBus);
        assert_eq!("state-value".parse::<Category>().unwrap(), Category::StateValue);
        assert_eq!("busses".parse::<Category>().unwrap(), Category::Bus);
        assert_eq!("AUDIO_DEVICES".parse::<Category>().unwrap(), Category::Device);
        assert!("switch".parse::<Category>().is_err());
    }

    #[test]
    fn tags_are_distinct() {
        let mut tags: Vec<u8> = Category::ALL.iter().map(|c| c.tag()).collect();
        tags.dedup();
        assert_eq!(tags.len(), Category::ALL.len());
    }
}
