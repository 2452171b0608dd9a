use std::io::Write;

use serde::Serialize;

use crate::io::error::Error;
use crate::model::interaction::{Interaction, InteractionUnit, UnitKind};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InteractionRecord<'a> {
    interactor_a: UnitRecord<'a>,
    interactor_b: UnitRecord<'a>,
    reaction: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reaction_name: Option<&'a str>,
    evidence: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UnitRecord<'a> {
    st_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    kind: &'static str,
    identifiers: Vec<String>,
}

impl<'a> From<&'a InteractionUnit> for UnitRecord<'a> {
    fn from(unit: &'a InteractionUnit) -> Self {
        Self {
            st_id: &unit.st_id,
            display_name: unit.display_name.as_deref(),
            kind: match unit.kind {
                UnitKind::Simple => "simple",
                UnitKind::Accessioned => "accessioned",
            },
            identifiers: unit.identifiers.iter().map(|x| x.to_string()).collect(),
        }
    }
}

impl<'a> From<&'a Interaction> for InteractionRecord<'a> {
    fn from(interaction: &'a Interaction) -> Self {
        Self {
            interactor_a: (&interaction.a).into(),
            interactor_b: (&interaction.b).into(),
            reaction: &interaction.context.st_id,
            reaction_name: interaction.context.display_name.as_deref(),
            evidence: interaction
                .context
                .evidence
                .iter()
                .map(|x| x.to_string())
                .collect(),
        }
    }
}

pub fn write<W: Write>(mut writer: W, interactions: &[Interaction]) -> Result<(), Error> {
    let records: Vec<InteractionRecord<'_>> = interactions.iter().map(Into::into).collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
