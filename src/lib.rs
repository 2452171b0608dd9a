//! A pure Rust library for exporting biological reactions as binary molecular
//! interactions. It decomposes nested complexes and sets into the concrete
//! molecules they contain, annotates each molecule with whitelisted
//! cross-references to external databases, and pairs the molecules of a
//! reaction into interaction records.
//!
//! # Features
//!
//! - **Identifier resolution**: Canonical `reactome` identifier first, then
//!   attached cross-references, reference-entity accessions (isoform-aware),
//!   and EntrezGene / Ensembl identifiers recovered from free-form secondary
//!   accessions, filtered to a fixed set of recognised databases
//! - **Entity expansion**: Complex (all of) and set (one of) structures are
//!   flattened into distinct molecules with a per-participant size cap,
//!   deterministic truncation, and cycle detection
//! - **Interaction assembly**: All-pairs or across-group pairing without self
//!   pairs or repeated edges
//! - **I/O**: Read reaction documents (JSON); write MITAB-style TSV or JSON records
//!
//! # Quick Start
//!
//! The main entry point is the [`export`] function, which takes a [`Reaction`],
//! the [`EntityGraph`] holding its participants, and an [`ExportConfig`]:
//!
//! ```
//! use interaction_exporter::{CrossReference, EntityGraph, PhysicalEntity, ReferenceEntity, SetKind};
//! use interaction_exporter::{export, ExportConfig, ExportError, Reaction};
//!
//! let akt1 = ReferenceEntity::new("uniprotkb", "P31749").with_other_identifier("EntrezGene:207");
//! let akt2 = ReferenceEntity::new("uniprotkb", "P31751").with_other_identifier("ENSG00000105221");
//! let atp = ReferenceEntity::new("ChEBI", "30616");
//!
//! let graph: EntityGraph = [
//!     PhysicalEntity::accessioned("R-HSA-198357", Some(akt1)),
//!     PhysicalEntity::accessioned("R-HSA-198364", Some(akt2)),
//!     PhysicalEntity::simple("R-ALL-113592", Some(atp)),
//!     PhysicalEntity::set("R-HSA-202070", SetKind::Defined, ["R-HSA-198357", "R-HSA-198364"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let reaction = Reaction {
//!     inputs: vec!["R-ALL-113592".into()],
//!     catalysts: vec!["R-HSA-202070".into()],
//!     ..Reaction::new("R-HSA-198323")
//! };
//!
//! let exported = export(&reaction, &graph, &ExportConfig::default())?;
//!
//! // ATP pairs with each AKT alternative, and the alternatives with each other.
//! assert_eq!(exported.interactions.len(), 3);
//! assert!(exported.interactions[0].connects("R-ALL-113592", "R-HSA-198357"));
//!
//! // Every unit carries its reactome identifier first.
//! let akt1_unit = &exported.interactions[0].b;
//! assert_eq!(
//!     akt1_unit.identifiers,
//!     [
//!         CrossReference::reactome("R-HSA-198357"),
//!         CrossReference::new("uniprotkb", "P31749"),
//!         CrossReference::new("entrezgene/locuslink", "207"),
//!     ]
//! );
//! assert!(!exported.is_truncated());
//! # Ok::<(), ExportError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: Reaction documents in, interaction records out (JSON, TSV)
//! - [`export`]: Full pipeline for one reaction
//! - [`resolve_identifiers`], [`expand`], [`assemble_interactions`]: The individual stages
//!
//! # Data Types
//!
//! ## Input Structures
//!
//! - [`PhysicalEntity`]: Stable identifier, cross-references and an [`EntityKind`]
//! - [`ReferenceEntity`]: External record backing a simple or accessioned entity
//! - [`EntityGraph`]: Entities of one reaction keyed by stable identifier
//! - [`Reaction`]: Participants by [`ParticipantRole`] plus literature
//!
//! ## Output Structures
//!
//! - [`Expansion`]: Units of one root entity and whether the cap truncated it
//! - [`InteractionUnit`]: A concrete molecule with its resolved identifiers
//! - [`Interaction`]: Two units and their [`ReactionContext`]
//! - [`ReactionExport`]: Everything produced for one reaction
//!
//! ## Configuration
//!
//! - [`ExportConfig`]: Unit cap, pairing policy and participant roles
//! - [`PairingPolicy`]: All pairs or across groups only

mod export;
mod model;

pub mod io;

pub use model::entity::{EntityKind, PhysicalEntity, ReferenceEntity, SchemaClass, SetKind};
pub use model::graph::EntityGraph;
pub use model::interaction::{
    Expansion, Interaction, InteractionUnit, ReactionContext, UnitKind,
};
pub use model::reaction::{ParticipantRole, Reaction, UnitGroup};
pub use model::xref::{CrossReference, REACTOME_DATABASE};

pub use export::{
    DEFAULT_MAX_UNIT_SIZE, ExportConfig, PairingPolicy, RECOGNIZED_DATABASES, ReactionExport,
    assemble_interactions, expand, export, is_recognized_database, load_root,
    resolve_identifiers, resolve_other_identifier,
};

pub use export::Error as ExportError;
