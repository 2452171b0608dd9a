use std::io::Write;

use crate::io::error::Error;
use crate::model::interaction::{Interaction, InteractionUnit};
use crate::model::xref::{CrossReference, REACTOME_DATABASE};

/// Column names of the interaction table, in output order.
pub const TSV_HEADER: [&str; 8] = [
    "#ID(s) interactor A",
    "ID(s) interactor B",
    "Alt. ID(s) interactor A",
    "Alt. ID(s) interactor B",
    "Alias(es) interactor A",
    "Alias(es) interactor B",
    "Interaction identifier(s)",
    "Publication Identifier(s)",
];

const EMPTY_FIELD: &str = "-";
const LIST_SEPARATOR: &str = "|";

pub fn write<W: Write>(mut writer: W, interactions: &[Interaction]) -> Result<(), Error> {
    writeln!(writer, "{}", TSV_HEADER.join("\t"))?;

    for interaction in interactions {
        let (a, b) = (&interaction.a, &interaction.b);
        let fields = [
            primary_field(a),
            primary_field(b),
            alternative_field(a),
            alternative_field(b),
            alias_field(a),
            alias_field(b),
            format_xref(&CrossReference::new(
                REACTOME_DATABASE,
                &interaction.context.st_id,
            )),
            list_field(interaction.context.evidence.iter()),
        ];
        writeln!(writer, "{}", fields.join("\t"))?;
    }

    writer.flush()?;
    Ok(())
}

fn primary_field(unit: &InteractionUnit) -> String {
    unit.primary_identifier()
        .map(format_xref)
        .unwrap_or_else(|| EMPTY_FIELD.to_string())
}

fn alternative_field(unit: &InteractionUnit) -> String {
    list_field(unit.alternative_identifiers())
}

fn alias_field(unit: &InteractionUnit) -> String {
    match unit.display_name.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            format!("{}:\"{}\"", REACTOME_DATABASE, sanitize(name))
        }
        _ => EMPTY_FIELD.to_string(),
    }
}

fn list_field<'a>(xrefs: impl Iterator<Item = &'a CrossReference>) -> String {
    let items: Vec<String> = xrefs.map(format_xref).collect();
    if items.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        items.join(LIST_SEPARATOR)
    }
}

fn format_xref(xref: &CrossReference) -> String {
    format!("{}:{}", sanitize(&xref.database), sanitize(&xref.identifier))
}

/// Replaces characters that would break the column or list structure.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' | '|' => ' ',
            '"' => '\'',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::PhysicalEntity;
    use crate::model::interaction::ReactionContext;

    fn unit(entity: PhysicalEntity, identifiers: Vec<CrossReference>) -> InteractionUnit {
        InteractionUnit::from_entity(&entity, identifiers).unwrap()
    }

    fn write_to_string(interactions: &[Interaction]) -> String {
        let mut out = Vec::new();
        write(&mut out, interactions).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_only_for_no_interactions() {
        let text = write_to_string(&[]);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("#ID(s) interactor A\tID(s) interactor B\t"));
        assert_eq!(text.trim_end().split('\t').count(), TSV_HEADER.len());
    }

    #[test]
    fn writes_one_row_per_interaction() {
        let a = unit(
            PhysicalEntity::accessioned("R-HSA-181902", None).with_name("AKT1 [cytosol]"),
            vec![
                CrossReference::new("uniprotkb", "P31749"),
                CrossReference::new("ENSEMBL", "ENSG00000142208"),
            ],
        );
        let b = unit(PhysicalEntity::simple("R-ALL-113560", None), Vec::new());
        let mut context = ReactionContext::new("R-HSA-3301345");
        context.evidence.push(CrossReference::new("pubmed", "22078491"));
        context.evidence.push(CrossReference::new("pubmed", "12345"));

        let text = write_to_string(&[Interaction { a, b, context }]);
        let row: Vec<&str> = text.lines().nth(1).unwrap().split('\t').collect();

        assert_eq!(
            row,
            [
                "uniprotkb:P31749",
                "reactome:R-ALL-113560",
                "reactome:R-HSA-181902|ENSEMBL:ENSG00000142208",
                "-",
                "reactome:\"AKT1 [cytosol]\"",
                "-",
                "reactome:R-HSA-3301345",
                "pubmed:22078491|pubmed:12345",
            ]
        );
    }

    #[test]
    fn sanitizes_separators() {
        assert_eq!(sanitize("a\tb|c\"d\""), "a b c'd'");
    }
}
