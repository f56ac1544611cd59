//! C++ ID header generator
//!
//! Emits the same layout the authoring tool writes, so a header parsed and
//! regenerated comes back byte-for-byte.

use anyhow::Result;
use soundbank_ids::Category;
use std::fmt::Write as FmtWrite;

use crate::model::{IdModel, StateGroupModel};

const BANNER_RULE: usize = 101;

/// Generate a `Wwise_IDs.h`-style header from the ID model
pub fn generate_c_header(model: &IdModel) -> Result<String> {
    let mut output = String::new();
    let rule = "/".repeat(BANNER_RULE);

    // Header comment
    writeln!(output, "{}", rule)?;
    writeln!(output, "//")?;
    writeln!(output, "// Audiokinetic Wwise generated include file. Do not edit.")?;
    writeln!(output, "//")?;
    writeln!(output, "{}", rule)?;
    writeln!(output)?;

    // Header guard
    writeln!(output, "#ifndef __WWISE_IDS_H__")?;
    writeln!(output, "#define __WWISE_IDS_H__")?;
    writeln!(output)?;
    writeln!(output, "#include <AK/SoundEngine/Common/AkTypes.h>")?;
    writeln!(output)?;

    writeln!(output, "namespace AK")?;
    writeln!(output, "{{")?;

    let mut first = true;
    for category in Category::FLAT {
        if category == Category::GameParameter && !model.state_groups.is_empty() {
            if !first {
                writeln!(output)?;
            }
            first = false;
            write_states(&mut output, &model.state_groups)?;
        }

        let Some(section) = model.section(category) else {
            continue;
        };
        if section.constants.is_empty() {
            continue;
        }

        if !first {
            writeln!(output)?;
        }
        first = false;

        let namespace = category.namespace();
        writeln!(output, "    namespace {}", namespace)?;
        writeln!(output, "    {{")?;
        for constant in &section.constants {
            writeln!(
                output,
                "        static const AkUniqueID {} = {}U;",
                constant.name, constant.id
            )?;
        }
        writeln!(output, "    }} // namespace {}", namespace)?;
    }

    writeln!(output)?;
    writeln!(output, "}}// namespace AK")?;
    writeln!(output)?;
    writeln!(output, "#endif // __WWISE_IDS_H__")?;

    Ok(output)
}

fn write_states(output: &mut String, groups: &[StateGroupModel]) -> Result<()> {
    writeln!(output, "    namespace STATES")?;
    writeln!(output, "    {{")?;
    for group in groups {
        writeln!(output, "        namespace {}", group.name)?;
        writeln!(output, "        {{")?;
        writeln!(output, "            static const AkUniqueID GROUP = {}U;", group.id)?;
        writeln!(output)?;
        writeln!(output, "            namespace STATE")?;
        writeln!(output, "            {{")?;
        for state in &group.states {
            writeln!(
                output,
                "                static const AkUniqueID {} = {}U;",
                state.name, state.id
            )?;
        }
        writeln!(output, "            }} // namespace STATE")?;
        writeln!(output, "        }} // namespace {}", group.name)?;
        writeln!(output)?;
    }
    writeln!(output, "    }} // namespace STATES")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Constant;
    use crate::parser::parse_header_source;

    #[test]
    fn generates_flat_sections() {
        let mut model = IdModel::default();
        model.section_mut(Category::AuxBus).constants.push(Constant {
            name: "REVERB".to_string(),
            id: 348963605,
        });

        let header = generate_c_header(&model).unwrap();

        assert!(header.contains("#ifndef __WWISE_IDS_H__"));
        assert!(header.contains(
            "    namespace AUX_BUSSES\n    {\n        static const AkUniqueID REVERB = 348963605U;\n    } // namespace AUX_BUSSES\n"
        ));
        assert!(header.ends_with("}// namespace AK\n\n#endif // __WWISE_IDS_H__\n"));
    }

    #[test]
    fn separates_states_without_events() {
        let mut model = IdModel::default();
        model.state_groups.push(StateGroupModel {
            name: "MOOD".to_string(),
            id: 1,
            states: vec![],
        });
        model.section_mut(Category::Bank).constants.push(Constant {
            name: "INIT".to_string(),
            id: 1355168291,
        });

        let header = generate_c_header(&model).unwrap();

        assert!(header.contains("namespace AK\n{\n    namespace STATES\n"));
        assert!(header.contains("    } // namespace STATES\n\n    namespace BANKS\n"));
        assert_eq!(generate_c_header(&parse_header_source(&header).unwrap()).unwrap(), header);
    }

    #[test]
    fn round_trips_through_parser() {
        let mut model = IdModel::default();
        model.section_mut(Category::Event).constants.push(Constant {
            name: "PLAY_DAMAGE".to_string(),
            id: 784302017,
        });
        model.state_groups.push(StateGroupModel {
            name: "MENU_STATE".to_string(),
            id: 3941853002,
            states: vec![Constant {
                name: "MAIN".to_string(),
                id: 3161908922,
            }],
        });
        model.section_mut(Category::Device).constants.push(Constant {
            name: "SYSTEM".to_string(),
            id: 3859886410,
        });

        let header = generate_c_header(&model).unwrap();
        let parsed = parse_header_source(&header).unwrap();

        assert_eq!(parsed.section(Category::Event), model.section(Category::Event));
        assert_eq!(parsed.section(Category::Device), model.section(Category::Device));
        assert_eq!(parsed.state_groups, model.state_groups);
        assert_eq!(generate_c_header(&parsed).unwrap(), header);
    }
}
