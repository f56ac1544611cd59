//! Project descriptions: display names per category, hashed into an ID model
//!
//! ```toml
//! events = ["Play_BirdAttack", "Stop_All"]
//! busses = ["2D SFX", "Master Binaural"]
//!
//! [[state_groups]]
//! name = "Wave_Type"
//! states = ["None", "Peace", "War"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use soundbank_ids::{short_id, Category};

use crate::model::{identifier_for, Constant, IdModel, StateGroupModel};

/// Symbols of a sound project, by display name
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDescription {
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub state_groups: Vec<StateGroupDescription>,
    #[serde(default)]
    pub game_parameters: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub banks: Vec<String>,
    #[serde(default)]
    pub busses: Vec<String>,
    #[serde(default)]
    pub aux_busses: Vec<String>,
    #[serde(default)]
    pub audio_devices: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateGroupDescription {
    pub name: String,
    #[serde(default)]
    pub states: Vec<String>,
}

impl ProjectDescription {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid project description {}", path.display()))
    }

    fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Event => &self.events,
            Category::GameParameter => &self.game_parameters,
            Category::Trigger => &self.triggers,
            Category::Bank => &self.banks,
            Category::Bus => &self.busses,
            Category::AuxBus => &self.aux_busses,
            Category::Device => &self.audio_devices,
            Category::StateGroup | Category::StateValue => &[],
        }
    }

    /// Hash every display name the way the authoring tool does
    ///
    /// Order is preserved; the result is validated for duplicate identifiers.
    pub fn to_model(&self) -> Result<IdModel> {
        let mut model = IdModel::default();

        for category in Category::FLAT {
            let names = self.names(category);
            if names.is_empty() {
                continue;
            }
            model.section_mut(category).constants = names.iter().map(|n| constant(n)).collect();
        }

        model.state_groups = self
            .state_groups
            .iter()
            .map(|group| StateGroupModel {
                name: identifier_for(&group.name),
                id: short_id(&group.name),
                states: group.states.iter().map(|n| constant(n)).collect(),
            })
            .collect();

        model.validate()?;
        Ok(model)
    }
}

fn constant(display_name: &str) -> Constant {
    Constant {
        name: identifier_for(display_name),
        id: short_id(display_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_display_names() {
        let description: ProjectDescription = toml::from_str(
            r#"
            events = ["Play_BirdTarget_Deprecated"]
            busses = ["2D SFX", "3D Music"]

            [[state_groups]]
            name = "Wave_State"
            states = ["Peace1", "War5"]
            "#,
        )
        .unwrap();

        let model = description.to_model().unwrap();

        let events = model.section(Category::Event).unwrap();
        assert_eq!(events.constants[0].name, "PLAY_BIRDTARGET_DEPRECATED");
        assert_eq!(events.constants[0].id, 4054685192);

        let busses = model.section(Category::Bus).unwrap();
        assert_eq!(busses.constants[0].name, "_2D_SFX");
        assert_eq!(busses.constants[0].id, 1191978290);
        assert_eq!(busses.constants[1].id, 2352922065);

        let group = &model.state_groups[0];
        assert_eq!((group.name.as_str(), group.id), ("WAVE_STATE", 108563492));
        assert_eq!(group.states[1].id, 1873893374);
    }

    #[test]
    fn rejects_names_that_collide_after_sanitizing() {
        let description: ProjectDescription =
            toml::from_str(r#"events = ["Play Hit", "Play_Hit"]"#).unwrap();
        assert!(description.to_model().is_err());
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(toml::from_str::<ProjectDescription>(r#"switches = ["Surface"]"#).is_err());
    }
}
