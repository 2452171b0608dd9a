//! Reading reaction documents and writing interaction records.
//!
//! The exporter core works on in-memory values only; this module is the
//! boundary where a reaction and its entity graph are loaded from a document
//! and where assembled interactions are written out.
//!
//! | Format | Read | Write |
//! | --- | --- | --- |
//! | [`Format::Json`] | reaction document | interaction records |
//! | [`Format::Tsv`] | – | MITAB-style table |

use std::fmt;
use std::io::{BufRead, Write};

pub mod error;

mod json;
mod tsv;

pub use error::Error;
pub use tsv::TSV_HEADER;

use crate::model::graph::EntityGraph;
use crate::model::interaction::Interaction;
use crate::model::reaction::Reaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Tsv,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Tsv => write!(f, "TSV"),
        }
    }
}

/// A reaction together with every entity its participants refer to.
#[derive(Debug, Clone, Default)]
pub struct ReactionDocument {
    pub reaction: Reaction,
    pub graph: EntityGraph,
}

pub fn read_document<R: BufRead>(reader: R, format: Format) -> Result<ReactionDocument, Error> {
    match format {
        Format::Json => json::read(reader),
        Format::Tsv => Err(Error::UnsupportedReadFormat(format)),
    }
}

pub fn write_interactions<W: Write>(
    writer: W,
    interactions: &[Interaction],
    format: Format,
) -> Result<(), Error> {
    match format {
        Format::Json => json::write(writer, interactions),
        Format::Tsv => tsv::write(writer, interactions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsv_cannot_be_read() {
        let result = read_document("".as_bytes(), Format::Tsv);
        assert!(matches!(
            result,
            Err(Error::UnsupportedReadFormat(Format::Tsv))
        ));
    }

    #[test]
    fn format_display() {
        assert_eq!(Format::Json.to_string(), "JSON");
        assert_eq!(Format::Tsv.to_string(), "TSV");
    }

    const NECROSOME: &str = r#"{
        "reaction": {
            "stId": "R-HSA-5213466",
            "displayName": "RIPK1 binds RIPK3",
            "input": ["R-ALL-29358", "R-HSA-5213454"],
            "catalyst": ["R-HSA-5218900"],
            "literatureReference": [{ "databaseName": "pubmed", "identifier": "21052097" }]
        },
        "entities": [
            {
                "schemaClass": "SimpleEntity",
                "stId": "R-ALL-29358",
                "displayName": "ATP [cytosol]",
                "referenceEntity": { "databaseName": "ChEBI", "identifier": "30616" }
            },
            {
                "schemaClass": "EntityWithAccessionedSequence",
                "stId": "R-HSA-5213454",
                "displayName": "RIPK1 [cytosol]",
                "referenceEntity": {
                    "databaseName": "uniprotkb",
                    "identifier": "Q13546",
                    "otherIdentifier": ["EntrezGene:8737", "ENSG00000137275", "RIPK1_HUMAN"]
                }
            },
            {
                "schemaClass": "EntityWithAccessionedSequence",
                "stId": "R-HSA-5213456",
                "displayName": "RIPK3 [cytosol]",
                "referenceEntity": {
                    "databaseName": "uniprotkb",
                    "identifier": "Q9Y572",
                    "crossReference": [{ "databaseName": "KEGG Gene", "identifier": "hsa:11035" }]
                }
            },
            {
                "schemaClass": "EntityWithAccessionedSequence",
                "stId": "R-HSA-5218890",
                "referenceEntity": {
                    "databaseName": "uniprotkb",
                    "identifier": "Q9Y572",
                    "variantIdentifier": "Q9Y572-2"
                }
            },
            {
                "schemaClass": "DefinedSet",
                "stId": "R-HSA-5218900",
                "hasMember": ["R-HSA-5213456", "R-HSA-5218890"]
            }
        ]
    }"#;

    #[test]
    fn exports_document_to_golden_tsv() {
        let document = read_document(NECROSOME.as_bytes(), Format::Json).unwrap();
        let exported = crate::export::export(
            &document.reaction,
            &document.graph,
            &crate::export::ExportConfig::default(),
        )
        .unwrap();
        assert!(!exported.is_truncated());

        let mut out = Vec::new();
        write_interactions(&mut out, &exported.interactions, Format::Tsv).unwrap();
        let text = String::from_utf8(out).unwrap();

        let atp = ["ChEBI:30616", "reactome:R-ALL-29358", "reactome:\"ATP [cytosol]\""];
        let ripk1 = [
            "uniprotkb:Q13546",
            "reactome:R-HSA-5213454|entrezgene/locuslink:8737|ENSEMBL:ENSG00000137275",
            "reactome:\"RIPK1 [cytosol]\"",
        ];
        let ripk3 = ["uniprotkb:Q9Y572", "reactome:R-HSA-5213456", "reactome:\"RIPK3 [cytosol]\""];
        let isoform = ["uniprotkb:Q9Y572-2", "reactome:R-HSA-5218890", "-"];
        let row = |a: &[&str; 3], b: &[&str; 3]| {
            [
                a[0],
                b[0],
                a[1],
                b[1],
                a[2],
                b[2],
                "reactome:R-HSA-5213466",
                "pubmed:21052097",
            ]
            .join("\t")
        };

        let mut expected = vec![TSV_HEADER.join("\t")];
        expected.push(row(&atp, &ripk1));
        expected.push(row(&atp, &ripk3));
        expected.push(row(&atp, &isoform));
        expected.push(row(&ripk1, &ripk3));
        expected.push(row(&ripk1, &isoform));
        expected.push(row(&ripk3, &isoform));

        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn exports_document_to_json_records() {
        let document = read_document(NECROSOME.as_bytes(), Format::Json).unwrap();
        let config = crate::export::ExportConfig {
            pairing: crate::export::PairingPolicy::AcrossGroups,
            ..Default::default()
        };
        let exported = crate::export::export(&document.reaction, &document.graph, &config).unwrap();

        let mut out = Vec::new();
        write_interactions(&mut out, &exported.interactions, Format::Json).unwrap();
        let records: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = records.as_array().unwrap();

        // Two inputs against two catalyst alternatives.
        assert_eq!(records.len(), 4);
        assert_eq!(records[0]["interactorA"]["stId"], "R-ALL-29358");
        assert_eq!(records[0]["interactorB"]["stId"], "R-HSA-5213456");
        assert_eq!(records[0]["reaction"], "R-HSA-5213466");
        assert_eq!(records[3]["interactorB"]["identifiers"][1], "uniprotkb:Q9Y572-2");
    }

    #[test]
    fn parse_error_message() {
        let err = Error::parse(Format::Json, 3, "expected value");
        assert_eq!(
            err.to_string(),
            "failed to parse JSON data: expected value (at line ~3)"
        );
    }
}
