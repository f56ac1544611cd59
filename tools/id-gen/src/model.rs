//! Intermediate representation of one generated ID table

use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use soundbank_ids::{short_id, Category};

/// Complete ID model extracted from a header or project description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdModel {
    pub sections: Vec<Section>,
    pub state_groups: Vec<StateGroupModel>,
}

/// Constants of one flat namespace (EVENTS, BUSSES, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub category: Category,
    pub constants: Vec<Constant>,
}

/// Single `NAME = id` definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    pub id: u32,
}

/// State group with its nested state values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateGroupModel {
    pub name: String,
    pub id: u32,
    pub states: Vec<Constant>,
}

/// How many IDs can be reproduced by hashing their identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashReport {
    pub matching: usize,
    /// Identifiers whose ID was hashed from a different display name (`_2D_SFX` from "2D SFX")
    pub derived: Vec<String>,
}

impl IdModel {
    /// Constants of a flat category, if any were defined
    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Section for a flat category, created on first use
    pub fn section_mut(&mut self, category: Category) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.category == category) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    category,
                    constants: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Total number of symbols, counting groups and their values
    pub fn symbol_count(&self) -> usize {
        let flat: usize = self.sections.iter().map(|s| s.constants.len()).sum();
        let states: usize = self.state_groups.iter().map(|g| 1 + g.states.len()).sum();
        flat + states
    }

    /// Check that every name is unique within its category (and state values within their group)
    pub fn validate(&self) -> Result<()> {
        let mut seen_categories = HashSet::new();
        for section in &self.sections {
            if matches!(section.category, Category::StateGroup | Category::StateValue) {
                bail!("{} cannot be stored as a flat section", section.category);
            }
            if !seen_categories.insert(section.category) {
                bail!("Section {} defined twice", section.category.namespace());
            }
            check_unique(section.category.namespace(), &section.constants)?;
        }

        let mut group_names = HashSet::new();
        for group in &self.state_groups {
            if !group_names.insert(group.name.as_str()) {
                bail!("Duplicate state group {}", group.name);
            }
            check_unique(&format!("STATES::{}", group.name), &group.states)?;
        }

        Ok(())
    }

    /// Compare every ID with `short_id` of its identifier
    pub fn hash_report(&self) -> HashReport {
        let mut report = HashReport::default();
        let mut record = |path: String, name: &str, id: u32| {
            if short_id(name) == id {
                report.matching += 1;
            } else {
                report.derived.push(path);
            }
        };

        for section in &self.sections {
            for constant in &section.constants {
                record(
                    format!("{}::{}", section.category.namespace(), constant.name),
                    &constant.name,
                    constant.id,
                );
            }
        }
        for group in &self.state_groups {
            record(format!("STATES::{}", group.name), &group.name, group.id);
            for state in &group.states {
                record(
                    format!("STATES::{}::STATE::{}", group.name, state.name),
                    &state.name,
                    state.id,
                );
            }
        }

        report
    }
}

fn check_unique(scope: &str, constants: &[Constant]) -> Result<()> {
    let mut names = HashSet::new();
    for constant in constants {
        if !names.insert(constant.name.as_str()) {
            bail!("Duplicate symbol {}::{}", scope, constant.name);
        }
    }
    Ok(())
}

/// Turn an authoring display name into the identifier the header uses
///
/// Upper-cases ASCII letters, replaces anything else that is not alphanumeric
/// with `_` and prefixes a leading digit with `_` ("2D SFX" -> "_2D_SFX").
pub fn identifier_for(display_name: &str) -> String {
    let mut identifier: String = display_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    identifier
}
