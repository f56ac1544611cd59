//! Parser for the authoring tool's generated ID header (`Wwise_IDs.h` layout)
//!
//! The header nests one `namespace` per category under `AK`:
//!
//! ```text
//! namespace AK
//! {
//!     namespace EVENTS
//!     {
//!         static const AkUniqueID PLAY_BIRDATTACK = 2435460859U;
//!     } // namespace EVENTS
//!
//!     namespace STATES
//!     {
//!         namespace WAVE_STATE
//!         {
//!             static const AkUniqueID GROUP = 108563492U;
//!
//!             namespace STATE
//!             {
//!                 static const AkUniqueID PEACE1 = 1350254358U;
//!             } // namespace STATE
//!         } // namespace WAVE_STATE
//!     } // namespace STATES
//! }// namespace AK
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::Regex;
use soundbank_ids::Category;

use crate::model::{Constant, IdModel, StateGroupModel};

const ROOT_NAMESPACE: &str = "AK";
const STATES_NAMESPACE: &str = "STATES";
const GROUP_CONSTANT: &str = "GROUP";
const STATE_NAMESPACE: &str = "STATE";
const CONSTANT_PREFIX: &str = "static const AkUniqueID";

/// Parse a header file from disk
pub fn parse_header_file(path: impl AsRef<Path>) -> Result<IdModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_header_source(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse header source text into an [`IdModel`]
///
/// Sections the registry has no category for (`SWITCHES`, `EXTERNAL_SOURCES`, ...)
/// are skipped with a warning.
pub fn parse_header_source(source: &str) -> Result<IdModel> {
    let namespace_re = Regex::new(r"^namespace\s+([A-Za-z_][A-Za-z0-9_]*)\s*(\{)?$")?;
    let constant_re =
        Regex::new(r"^static\s+const\s+AkUniqueID\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(\d+)U?\s*;$")?;

    let mut builder = ModelBuilder::default();
    let mut stack: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(captures) = namespace_re.captures(line) {
            let name = captures[1].to_string();
            if captures.get(2).is_some() {
                stack.push(name);
            } else {
                pending = Some(name);
            }
            continue;
        }

        if line == "{" {
            match pending.take() {
                Some(name) => stack.push(name),
                None => bail!("line {}: '{{' without a namespace", line_no),
            }
            continue;
        }

        if line == "}" || line == "};" {
            if stack.pop().is_none() {
                bail!("line {}: unbalanced '}}'", line_no);
            }
            continue;
        }

        if let Some(captures) = constant_re.captures(line) {
            let name = &captures[1];
            let id: u32 = captures[2].parse().with_context(|| {
                format!("line {}: {} = {} is not a 32-bit ID", line_no, name, &captures[2])
            })?;
            builder.add(&stack, name, id, line_no)?;
            continue;
        }

        if line.starts_with(CONSTANT_PREFIX) {
            bail!("line {}: malformed ID definition: {}", line_no, line);
        }

        tracing::trace!(line = line_no, "Skipping unrecognized line: {}", line);
    }

    if let Some(open) = stack.last() {
        bail!("Unbalanced braces: namespace {} is never closed", open);
    }

    builder.finish()
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(index) => &line[..index],
        None => line,
    }
}

#[derive(Default)]
struct ModelBuilder {
    model: IdModel,
    groups: Vec<GroupBuilder>,
    skipped: HashSet<String>,
}

struct GroupBuilder {
    name: String,
    id: Option<u32>,
    states: Vec<Constant>,
}

impl ModelBuilder {
    fn add(&mut self, stack: &[String], name: &str, id: u32, line_no: usize) -> Result<()> {
        let path: Vec<&str> = stack.iter().map(String::as_str).collect();

        match path.as_slice() {
            [ROOT_NAMESPACE, STATES_NAMESPACE] => {
                bail!("line {}: {} must be nested in a state group", line_no, name)
            }
            [ROOT_NAMESPACE, STATES_NAMESPACE, group] => {
                if name != GROUP_CONSTANT {
                    bail!(
                        "line {}: unexpected constant {} in state group {}",
                        line_no,
                        name,
                        group
                    );
                }
                let group = self.group_mut(group);
                if group.id.replace(id).is_some() {
                    bail!("line {}: state group {} has two GROUP ids", line_no, group.name);
                }
            }
            [ROOT_NAMESPACE, STATES_NAMESPACE, group, STATE_NAMESPACE] => {
                let group = self.group_mut(group);
                push_unique(&mut group.states, name, id, line_no)?;
            }
            [ROOT_NAMESPACE, STATES_NAMESPACE, ..] => bail!(
                "line {}: {} is nested too deep under STATES::{}",
                line_no,
                name,
                path[2..].join("::")
            ),
            [ROOT_NAMESPACE, namespace] => match Category::from_namespace(namespace) {
                Some(category) => {
                    let section = self.model.section_mut(category);
                    push_unique(&mut section.constants, name, id, line_no)?;
                }
                None => self.skip(namespace),
            },
            [ROOT_NAMESPACE, namespace, ..] => self.skip(namespace),
            _ => bail!(
                "line {}: constant {} is outside of any known section",
                line_no,
                name
            ),
        }

        Ok(())
    }

    fn group_mut(&mut self, name: &str) -> &mut GroupBuilder {
        let index = match self.groups.iter().position(|g| g.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(GroupBuilder {
                    name: name.to_string(),
                    id: None,
                    states: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    fn skip(&mut self, namespace: &str) {
        if self.skipped.insert(namespace.to_string()) {
            tracing::warn!("Skipping unsupported section {}", namespace);
        }
    }

    fn finish(mut self) -> Result<IdModel> {
        for group in self.groups {
            let Some(id) = group.id else {
                bail!("State group {} has no GROUP id", group.name);
            };
            self.model.state_groups.push(StateGroupModel {
                name: group.name,
                id,
                states: group.states,
            });
        }
        Ok(self.model)
    }
}

fn push_unique(constants: &mut Vec<Constant>, name: &str, id: u32, line_no: usize) -> Result<()> {
    if constants.iter().any(|c| c.name == name) {
        bail!("line {}: duplicate symbol {}", line_no, name);
    }
    constants.push(Constant {
        name: name.to_string(),
        id,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
/////////////////////////////////////
// Audiokinetic Wwise generated include file. Do not edit.
/////////////////////////////////////

#ifndef __WWISE_IDS_H__
#define __WWISE_IDS_H__

#include <AK/SoundEngine/Common/AkTypes.h>

namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID PLAY_BIRDATTACK = 2435460859U;
        static const AkUniqueID STOP_ALL = 452547817U;
    } // namespace EVENTS

    namespace STATES
    {
        namespace WAVE_TYPE
        {
            static const AkUniqueID GROUP = 3590821249U;

            namespace STATE
            {
                static const AkUniqueID NONE = 748895195U;
                static const AkUniqueID WAR = 1113986025U;
            } // namespace STATE
        } // namespace WAVE_TYPE

    } // namespace STATES

    namespace SWITCHES
    {
        namespace SURFACE
        {
            static const AkUniqueID GROUP = 1834394558U;
        } // namespace SURFACE
    } // namespace SWITCHES

    namespace BUSSES
    {
        static const AkUniqueID _2D_SFX = 1191978290U;
    } // namespace BUSSES

}// namespace AK

#endif // __WWISE_IDS_H__
"#;

    #[test]
    fn parses_sections_and_state_groups() {
        let model = parse_header_source(SAMPLE).unwrap();

        let events = model.section(Category::Event).unwrap();
        assert_eq!(events.constants.len(), 2);
        assert_eq!(events.constants[0].name, "PLAY_BIRDATTACK");
        assert_eq!(events.constants[0].id, 2435460859);

        assert_eq!(model.state_groups.len(), 1);
        let group = &model.state_groups[0];
        assert_eq!(group.name, "WAVE_TYPE");
        assert_eq!(group.id, 3590821249);
        assert_eq!(group.states.len(), 2);
        assert_eq!(group.states[1].name, "WAR");

        let busses = model.section(Category::Bus).unwrap();
        assert_eq!(busses.constants[0].name, "_2D_SFX");
    }

    #[test]
    fn skips_unsupported_sections() {
        let model = parse_header_source(SAMPLE).unwrap();
        assert_eq!(model.sections.len(), 2);
        assert_eq!(model.symbol_count(), 2 + 3 + 1);
    }

    #[test]
    fn accepts_brace_on_namespace_line() {
        let source = "namespace AK {\nnamespace BANKS {\nstatic const AkUniqueID INIT = 1355168291U;\n}\n}\n";
        let model = parse_header_source(source).unwrap();
        assert_eq!(model.section(Category::Bank).unwrap().constants[0].id, 1355168291);
    }

    #[test]
    fn rejects_unbalanced_braces() {
        let err = parse_header_source("namespace AK\n{\n    namespace EVENTS\n    {\n}\n").unwrap_err();
        assert!(err.to_string().contains("never closed"));

        let err = parse_header_source("namespace AK\n{\n}\n}\n").unwrap_err();
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn rejects_ids_that_overflow() {
        let source = "namespace AK\n{\nnamespace EVENTS\n{\nstatic const AkUniqueID BIG = 4294967296U;\n}\n}\n";
        let err = parse_header_source(source).unwrap_err();
        assert!(err.to_string().contains("line 5"));
    }

    #[test]
    fn rejects_malformed_ids() {
        for (definition, line) in [
            ("PLAY_HEX = 0x10U;", 6),
            ("PLAY_LL = 5ULL;", 6),
            ("PLAY_NEG = -5;", 6),
        ] {
            let source = format!(
                "namespace AK\n{{\nnamespace EVENTS\n{{\nstatic const AkUniqueID PLAY_A = 1U;\n\
                 static const AkUniqueID {}\n}}\n}}\n",
                definition
            );
            let err = parse_header_source(&source).unwrap_err();
            assert!(
                err.to_string().contains(&format!("line {}: malformed", line)),
                "{}: {}",
                definition,
                err
            );
        }
    }

    #[test]
    fn rejects_states_nested_too_deep() {
        let source = "namespace AK\n{\nnamespace STATES\n{\nnamespace MOOD\n{\n\
            static const AkUniqueID GROUP = 1U;\nnamespace STATE\n{\nnamespace EXTRA\n{\n\
            static const AkUniqueID CALM = 2U;\n}\n}\n}\n}\n}\n";
        let err = parse_header_source(source).unwrap_err();
        assert!(err.to_string().contains("line 12"), "{}", err);
        assert!(err.to_string().contains("MOOD::STATE::EXTRA"), "{}", err);
    }

    #[test]
    fn rejects_duplicates() {
        let source = "namespace AK\n{\nnamespace EVENTS\n{\n\
            static const AkUniqueID PLAY_A = 1U;\n\
            static const AkUniqueID PLAY_A = 2U;\n}\n}\n";
        let err = parse_header_source(source).unwrap_err();
        assert!(err.to_string().contains("duplicate symbol PLAY_A"));
    }

    #[test]
    fn rejects_constant_outside_sections() {
        let err = parse_header_source("static const AkUniqueID LOOSE = 1U;\n").unwrap_err();
        assert!(err.to_string().contains("outside of any known section"));
    }

    #[test]
    fn rejects_group_without_id() {
        let source = "namespace AK\n{\nnamespace STATES\n{\nnamespace MOOD\n{\nnamespace STATE\n{\n\
            static const AkUniqueID CALM = 1U;\n}\n}\n}\n}\n";
        let err = parse_header_source(source).unwrap_err();
        assert!(err.to_string().contains("MOOD has no GROUP id"));
    }
}
