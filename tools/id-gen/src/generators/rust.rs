//! Rust registry module generator

use anyhow::{bail, Result};
use soundbank_ids::Category;
use std::fmt::Write as FmtWrite;

use crate::model::{IdModel, Section, StateGroupModel};

/// Metadata stamped into a generated snapshot module
#[derive(Debug, Clone, Copy)]
pub struct ModuleMeta<'a> {
    pub revision: u32,
    pub label: &'a str,
    /// Header path relative to the workspace root, with `/` separators
    pub source: &'a str,
}

/// Generate the `vN.rs` module for one snapshot
///
/// Constants mirror the header namespaces so unknown symbols fail to compile;
/// `SNAPSHOT` exposes the same data for lookups by name.
pub fn generate_rust_module(model: &IdModel, meta: &ModuleMeta<'_>) -> Result<String> {
    let mut output = String::new();

    let sections: Vec<&Section> = Category::FLAT
        .iter()
        .filter_map(|&category| model.section(category))
        .filter(|section| !section.constants.is_empty())
        .collect();
    let groups = &model.state_groups;

    writeln!(output, "// GENERATED FILE - DO NOT EDIT")?;
    writeln!(output, "// Source: {}", meta.source)?;
    writeln!(output, "// Generator: tools/id-gen")?;
    writeln!(output)?;
    if meta.label.is_empty() {
        writeln!(output, "//! Soundbank revision {}.", meta.revision)?;
    } else {
        writeln!(output, "//! Soundbank revision {}: {}.", meta.revision, meta.label)?;
    }
    writeln!(output)?;
    writeln!(output, "#![allow(non_snake_case)]")?;
    writeln!(output)?;

    // Imports, limited to what the tables below reference
    let has_entries = !sections.is_empty() || !groups.is_empty();
    if has_entries {
        writeln!(output, "use crate::category::Category;")?;
    }
    if !groups.is_empty() {
        writeln!(output, "use crate::entry::{{StateGroup, SymbolEntry}};")?;
    } else if has_entries {
        writeln!(output, "use crate::entry::SymbolEntry;")?;
    }
    if sections.is_empty() {
        writeln!(output, "use crate::snapshot::Snapshot;")?;
    } else {
        writeln!(output, "use crate::snapshot::{{Section, Snapshot}};")?;
    }
    writeln!(output)?;

    // Constant modules, in header order
    for category in Category::FLAT {
        if category == Category::GameParameter && !groups.is_empty() {
            write_states_module(&mut output, groups)?;
        }

        let Some(section) = sections.iter().find(|s| s.category == category) else {
            continue;
        };

        writeln!(output, "pub mod {} {{", category.namespace())?;
        for constant in &section.constants {
            writeln!(output, "    pub const {}: u32 = {};", constant.name, constant.id)?;
        }
        writeln!(output, "}}")?;
        writeln!(output)?;
    }

    // Runtime table
    writeln!(output, "pub static SNAPSHOT: Snapshot = Snapshot {{")?;
    writeln!(output, "    revision: {},", meta.revision)?;
    writeln!(output, "    label: {:?},", meta.label)?;
    writeln!(output, "    source: {:?},", meta.source)?;

    if sections.is_empty() {
        writeln!(output, "    sections: &[],")?;
    } else {
        writeln!(output, "    sections: &[")?;
        for section in &sections {
            let namespace = section.category.namespace();
            writeln!(output, "        Section {{")?;
            writeln!(output, "            category: Category::{:?},", section.category)?;
            writeln!(output, "            entries: &[")?;
            for constant in &section.constants {
                writeln!(
                    output,
                    "                SymbolEntry {{ category: Category::{:?}, group: None, name: {:?}, id: {}::{} }},",
                    section.category, constant.name, namespace, constant.name
                )?;
            }
            writeln!(output, "            ],")?;
            writeln!(output, "        }},")?;
        }
        writeln!(output, "    ],")?;
    }

    if groups.is_empty() {
        writeln!(output, "    state_groups: &[],")?;
    } else {
        writeln!(output, "    state_groups: &[")?;
        for group in groups {
            writeln!(output, "        StateGroup {{")?;
            writeln!(
                output,
                "            entry: SymbolEntry {{ category: Category::StateGroup, group: None, name: {:?}, id: STATES::{}::GROUP }},",
                group.name, group.name
            )?;
            if group.states.is_empty() {
                writeln!(output, "            states: &[],")?;
            } else {
                writeln!(output, "            states: &[")?;
                for state in &group.states {
                    writeln!(
                        output,
                        "                SymbolEntry {{ category: Category::StateValue, group: Some({:?}), name: {:?}, id: STATES::{}::STATE::{} }},",
                        group.name, state.name, group.name, state.name
                    )?;
                }
                writeln!(output, "            ],")?;
            }
            writeln!(output, "        }},")?;
        }
        writeln!(output, "    ],")?;
    }

    writeln!(output, "}};")?;

    Ok(output)
}

fn write_states_module(output: &mut String, groups: &[StateGroupModel]) -> Result<()> {
    writeln!(output, "pub mod STATES {{")?;
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            writeln!(output)?;
        }
        writeln!(output, "    pub mod {} {{", group.name)?;
        writeln!(output, "        pub const GROUP: u32 = {};", group.id)?;
        writeln!(output)?;
        writeln!(output, "        pub mod STATE {{")?;
        for state in &group.states {
            writeln!(output, "            pub const {}: u32 = {};", state.name, state.id)?;
        }
        writeln!(output, "        }}")?;
        writeln!(output, "    }}")?;
    }
    writeln!(output, "}}")?;
    writeln!(output)?;
    Ok(())
}

/// Generate the `mod.rs` index listing every snapshot module
pub fn generate_index(revisions: &[u32]) -> Result<String> {
    let mut revisions = revisions.to_vec();
    revisions.sort_unstable();
    revisions.dedup();

    let Some(&latest) = revisions.last() else {
        bail!("Cannot generate a snapshot index without any revisions");
    };

    let mut output = String::new();

    writeln!(output, "// GENERATED FILE - DO NOT EDIT")?;
    writeln!(output, "// Generator: tools/id-gen")?;
    writeln!(output)?;
    writeln!(output, "//! Generated soundbank ID tables, one module per revision.")?;
    writeln!(output)?;

    for revision in &revisions {
        writeln!(output, "pub mod v{};", revision)?;
    }
    writeln!(output)?;
    writeln!(output, "pub use v{} as current;", latest)?;
    writeln!(output)?;
    writeln!(output, "use crate::snapshot::Snapshot;")?;
    writeln!(output)?;

    let all: Vec<String> = revisions
        .iter()
        .map(|r| format!("&v{}::SNAPSHOT", r))
        .collect();
    writeln!(output, "/// Every generated snapshot, oldest first.")?;
    writeln!(output, "pub static SNAPSHOTS: &[&Snapshot] = &[{}];", all.join(", "))?;
    writeln!(output)?;
    writeln!(output, "/// The newest generated snapshot.")?;
    writeln!(output, "pub static LATEST: &Snapshot = &v{}::SNAPSHOT;", latest)?;

    Ok(output)
}
