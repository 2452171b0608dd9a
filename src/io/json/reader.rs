use std::io::BufRead;

use serde::Deserialize;

use crate::io::{Format, ReactionDocument, error::Error};
use crate::model::entity::{EntityKind, PhysicalEntity, ReferenceEntity, SetKind};
use crate::model::graph::EntityGraph;
use crate::model::reaction::Reaction;
use crate::model::xref::CrossReference;

#[derive(Debug, Deserialize)]
struct RawDocument {
    reaction: RawReaction,
    #[serde(default)]
    entities: Vec<RawEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReaction {
    st_id: String,
    display_name: Option<String>,
    #[serde(default)]
    input: Vec<String>,
    #[serde(default)]
    output: Vec<String>,
    #[serde(default)]
    catalyst: Vec<String>,
    #[serde(default)]
    literature_reference: Vec<RawCrossReference>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCrossReference {
    database_name: String,
    identifier: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaClass")]
enum RawEntity {
    SimpleEntity(RawConcrete),
    EntityWithAccessionedSequence(RawConcrete),
    Complex(RawComplex),
    DefinedSet(RawSet),
    CandidateSet(RawSet),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCommon {
    st_id: String,
    display_name: Option<String>,
    #[serde(default)]
    cross_reference: Vec<RawCrossReference>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConcrete {
    #[serde(flatten)]
    common: RawCommon,
    reference_entity: Option<RawReferenceEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComplex {
    #[serde(flatten)]
    common: RawCommon,
    #[serde(default)]
    has_component: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSet {
    #[serde(flatten)]
    common: RawCommon,
    #[serde(default)]
    has_member: Vec<String>,
    #[serde(default)]
    has_candidate: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReferenceEntity {
    database_name: String,
    identifier: String,
    variant_identifier: Option<String>,
    #[serde(default)]
    cross_reference: Vec<RawCrossReference>,
    #[serde(default)]
    other_identifier: Vec<String>,
}

pub fn read<R: BufRead>(reader: R) -> Result<ReactionDocument, Error> {
    let raw: RawDocument = serde_json::from_reader(reader)?;

    if raw.reaction.st_id.trim().is_empty() {
        return Err(Error::parse(Format::Json, 0, "reaction stId must not be empty"));
    }

    let mut graph = EntityGraph::new();
    for raw_entity in raw.entities {
        let entity = convert_entity(raw_entity);
        if entity.st_id.trim().is_empty() {
            return Err(Error::parse(Format::Json, 0, "entity stId must not be empty"));
        }
        if graph.contains(&entity.st_id) {
            return Err(Error::DuplicateEntity(entity.st_id));
        }
        graph.insert(entity);
    }

    Ok(ReactionDocument {
        reaction: convert_reaction(raw.reaction),
        graph,
    })
}

fn convert_reaction(raw: RawReaction) -> Reaction {
    Reaction {
        st_id: raw.st_id,
        display_name: raw.display_name,
        inputs: raw.input,
        outputs: raw.output,
        catalysts: raw.catalyst,
        literature: convert_xrefs(raw.literature_reference),
    }
}

fn convert_entity(raw: RawEntity) -> PhysicalEntity {
    let (common, kind) = match raw {
        RawEntity::SimpleEntity(c) => (
            c.common,
            EntityKind::Simple {
                reference: c.reference_entity.map(convert_reference),
            },
        ),
        RawEntity::EntityWithAccessionedSequence(c) => (
            c.common,
            EntityKind::Accessioned {
                reference: c.reference_entity.map(convert_reference),
            },
        ),
        RawEntity::Complex(c) => (
            c.common,
            EntityKind::Complex {
                components: c.has_component,
            },
        ),
        RawEntity::DefinedSet(s) => (s.common, set_kind(SetKind::Defined, s.has_member, Vec::new())),
        RawEntity::CandidateSet(s) => (
            s.common,
            set_kind(SetKind::Candidate, s.has_member, s.has_candidate),
        ),
    };

    PhysicalEntity {
        st_id: common.st_id,
        display_name: common.display_name,
        cross_references: convert_xrefs(common.cross_reference),
        kind,
    }
}

/// Candidate sets list confirmed members before candidates.
fn set_kind(kind: SetKind, mut members: Vec<String>, candidates: Vec<String>) -> EntityKind {
    members.extend(candidates);
    EntityKind::Set { kind, members }
}

fn convert_reference(raw: RawReferenceEntity) -> ReferenceEntity {
    ReferenceEntity {
        database_name: raw.database_name,
        identifier: raw.identifier,
        variant_identifier: raw.variant_identifier,
        cross_references: convert_xrefs(raw.cross_reference),
        other_identifiers: raw.other_identifier,
    }
}

fn convert_xrefs(raw: Vec<RawCrossReference>) -> Vec<CrossReference> {
    raw.into_iter()
        .map(|x| CrossReference {
            database: x.database_name,
            identifier: x.identifier,
            description: x.description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "reaction": {
            "stId": "R-HSA-3301345",
            "displayName": "NUP binds",
            "input": ["R-ALL-113560", "R-HSA-4549252"],
            "catalyst": ["R-HSA-3318407"],
            "literatureReference": [{ "databaseName": "pubmed", "identifier": "22078491" }]
        },
        "entities": [
            {
                "schemaClass": "SimpleEntity",
                "stId": "R-ALL-113560",
                "displayName": "H2O [nucleoplasm]",
                "referenceEntity": { "databaseName": "ChEBI", "identifier": "15377" }
            },
            {
                "schemaClass": "EntityWithAccessionedSequence",
                "stId": "R-HSA-181902",
                "crossReference": [{ "databaseName": "go", "identifier": "GO:0005654" }],
                "referenceEntity": {
                    "databaseName": "uniprotkb",
                    "identifier": "P31749",
                    "variantIdentifier": "P31749-1",
                    "otherIdentifier": ["EntrezGene:207", "ENSG00000142208"]
                }
            },
            { "schemaClass": "EntityWithAccessionedSequence", "stId": "R-HSA-193948" },
            { "schemaClass": "Complex", "stId": "R-HSA-3318407", "hasComponent": ["R-HSA-193948"] },
            { "schemaClass": "CandidateSet", "stId": "R-HSA-4657030", "hasMember": ["R-HSA-193948"], "hasCandidate": ["R-HSA-181902"] },
            { "schemaClass": "DefinedSet", "stId": "R-HSA-4549252", "hasMember": ["R-HSA-181902", "R-HSA-4657030"] }
        ]
    }"#;

    #[test]
    fn reads_reaction_and_entities() {
        let doc = read(DOCUMENT.as_bytes()).unwrap();

        assert_eq!(doc.reaction.st_id, "R-HSA-3301345");
        assert_eq!(doc.reaction.inputs, ["R-ALL-113560", "R-HSA-4549252"]);
        assert_eq!(doc.reaction.catalysts, ["R-HSA-3318407"]);
        assert!(doc.reaction.outputs.is_empty());
        assert_eq!(
            doc.reaction.literature,
            [CrossReference::new("pubmed", "22078491")]
        );
        assert_eq!(doc.graph.len(), 6);
    }

    #[test]
    fn reads_reference_entity() {
        let doc = read(DOCUMENT.as_bytes()).unwrap();
        let ewas = doc.graph.get("R-HSA-181902").unwrap();
        let reference = ewas.reference_entity().unwrap();

        assert_eq!(reference.effective_identifier(), "P31749-1");
        assert_eq!(
            reference.other_identifiers,
            ["EntrezGene:207", "ENSG00000142208"]
        );
        assert_eq!(
            ewas.cross_references,
            [CrossReference::new("go", "GO:0005654")]
        );
    }

    #[test]
    fn candidate_set_members_precede_candidates() {
        let doc = read(DOCUMENT.as_bytes()).unwrap();
        let set = doc.graph.get("R-HSA-4657030").unwrap();
        assert!(matches!(
            set.kind,
            EntityKind::Set {
                kind: SetKind::Candidate,
                ..
            }
        ));
        assert_eq!(set.children(), ["R-HSA-193948", "R-HSA-181902"]);
    }

    #[test]
    fn duplicate_entities_are_rejected() {
        let doc = r#"{
            "reaction": { "stId": "R-HSA-1" },
            "entities": [
                { "schemaClass": "SimpleEntity", "stId": "R-ALL-1" },
                { "schemaClass": "SimpleEntity", "stId": "R-ALL-1" }
            ]
        }"#;
        match read(doc.as_bytes()) {
            Err(Error::DuplicateEntity(st_id)) => assert_eq!(st_id, "R-ALL-1"),
            other => panic!("expected DuplicateEntity, got {other:?}"),
        }
    }

    #[test]
    fn unknown_schema_class_is_a_parse_error() {
        let doc = r#"{
            "reaction": { "stId": "R-HSA-1" },
            "entities": [{ "schemaClass": "Polymer", "stId": "R-HSA-2" }]
        }"#;
        assert!(matches!(
            read(doc.as_bytes()),
            Err(Error::Parse {
                format: Format::Json,
                ..
            })
        ));
    }

    #[test]
    fn malformed_json_reports_line() {
        let doc = "{\n\"reaction\": {\n\"stId\": }\n}";
        match read(doc.as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn empty_reaction_id_is_rejected() {
        let doc = r#"{ "reaction": { "stId": " " } }"#;
        assert!(matches!(read(doc.as_bytes()), Err(Error::Parse { .. })));
    }
}
