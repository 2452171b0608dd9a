//! Data structures flowing through the exporter.
//!
//! - [`xref`] – Cross-references into external databases.
//! - [`entity`] – Physical entities (simple, accessioned, complex, set) and their reference records.
//! - [`graph`] – The arena holding one reaction's entities by stable identifier.
//! - [`reaction`] – Reactions, participant roles, and groups of expanded units.
//! - [`interaction`] – Expansion output and the pairwise interaction records built from it.
//!
//! Entities are read-only inputs; units and interactions are built fresh by
//! [`crate::export`] and hold their identifiers by value.

pub mod entity;
pub mod graph;
pub mod interaction;
pub mod reaction;
pub mod xref;
