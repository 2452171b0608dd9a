use std::fmt;

use super::xref::CrossReference;

/// The canonical external-database record backing a simple or accessioned entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntity {
    pub database_name: String,
    pub identifier: String,
    /// Isoform variant identifier, e.g. `P04637-2`.
    pub variant_identifier: Option<String>,
    pub cross_references: Vec<CrossReference>,
    /// Free-form secondary accessions, not yet matched to a known database.
    pub other_identifiers: Vec<String>,
}

impl ReferenceEntity {
    pub fn new(database_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            identifier: identifier.into(),
            variant_identifier: None,
            cross_references: Vec::new(),
            other_identifiers: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant_identifier: impl Into<String>) -> Self {
        self.variant_identifier = Some(variant_identifier.into());
        self
    }

    pub fn with_cross_reference(mut self, xref: CrossReference) -> Self {
        self.cross_references.push(xref);
        self
    }

    pub fn with_other_identifier(mut self, other: impl Into<String>) -> Self {
        self.other_identifiers.push(other.into());
        self
    }

    /// The identifier published for this record: the isoform variant when one
    /// is set and non-empty, the primary identifier otherwise.
    pub fn effective_identifier(&self) -> &str {
        match self.variant_identifier.as_deref() {
            Some(variant) if !variant.is_empty() => variant,
            _ => &self.identifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    Defined,
    Candidate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// Small molecule.
    Simple { reference: Option<ReferenceEntity> },
    /// Protein or other sequence-backed molecule.
    Accessioned { reference: Option<ReferenceEntity> },
    /// Components that are all present at once.
    Complex { components: Vec<String> },
    /// Members that stand in for one another.
    Set { kind: SetKind, members: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalEntity {
    pub st_id: String,
    pub display_name: Option<String>,
    pub cross_references: Vec<CrossReference>,
    pub kind: EntityKind,
}

impl PhysicalEntity {
    pub fn new(st_id: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            st_id: st_id.into(),
            display_name: None,
            cross_references: Vec::new(),
            kind,
        }
    }

    pub fn simple(st_id: impl Into<String>, reference: Option<ReferenceEntity>) -> Self {
        Self::new(st_id, EntityKind::Simple { reference })
    }

    pub fn accessioned(st_id: impl Into<String>, reference: Option<ReferenceEntity>) -> Self {
        Self::new(st_id, EntityKind::Accessioned { reference })
    }

    pub fn complex<I, S>(st_id: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            st_id,
            EntityKind::Complex {
                components: components.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn set<I, S>(st_id: impl Into<String>, kind: SetKind, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            st_id,
            EntityKind::Set {
                kind,
                members: members.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_cross_reference(mut self, xref: CrossReference) -> Self {
        self.cross_references.push(xref);
        self
    }

    /// The reference entity of a simple or accessioned entity.
    pub fn reference_entity(&self) -> Option<&ReferenceEntity> {
        match &self.kind {
            EntityKind::Simple { reference } | EntityKind::Accessioned { reference } => {
                reference.as_ref()
            }
            EntityKind::Complex { .. } | EntityKind::Set { .. } => None,
        }
    }

    /// Stable identifiers of the direct children, empty for concrete entities.
    pub fn children(&self) -> &[String] {
        match &self.kind {
            EntityKind::Complex { components } => components,
            EntityKind::Set { members, .. } => members,
            EntityKind::Simple { .. } | EntityKind::Accessioned { .. } => &[],
        }
    }

    #[inline]
    pub fn is_concrete(&self) -> bool {
        matches!(
            self.kind,
            EntityKind::Simple { .. } | EntityKind::Accessioned { .. }
        )
    }

    pub fn schema_class(&self) -> SchemaClass {
        match &self.kind {
            EntityKind::Simple { .. } => SchemaClass::SimpleEntity,
            EntityKind::Accessioned { .. } => SchemaClass::EntityWithAccessionedSequence,
            EntityKind::Complex { .. } => SchemaClass::Complex,
            EntityKind::Set {
                kind: SetKind::Defined,
                ..
            } => SchemaClass::DefinedSet,
            EntityKind::Set {
                kind: SetKind::Candidate,
                ..
            } => SchemaClass::CandidateSet,
        }
    }
}

/// Source-database class names of the entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaClass {
    SimpleEntity,
    EntityWithAccessionedSequence,
    Complex,
    DefinedSet,
    CandidateSet,
}

impl fmt::Display for SchemaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaClass::SimpleEntity => "SimpleEntity",
            SchemaClass::EntityWithAccessionedSequence => "EntityWithAccessionedSequence",
            SchemaClass::Complex => "Complex",
            SchemaClass::DefinedSet => "DefinedSet",
            SchemaClass::CandidateSet => "CandidateSet",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_identifier_prefers_variant() {
        let re = ReferenceEntity::new("UniProt", "P04637").with_variant("P04637-2");
        assert_eq!(re.effective_identifier(), "P04637-2");
    }

    #[test]
    fn effective_identifier_ignores_empty_variant() {
        let re = ReferenceEntity::new("UniProt", "P04637").with_variant("");
        assert_eq!(re.effective_identifier(), "P04637");

        let re = ReferenceEntity::new("UniProt", "P04637");
        assert_eq!(re.effective_identifier(), "P04637");
    }

    #[test]
    fn children_of_each_variant() {
        let complex = PhysicalEntity::complex("R-HSA-1", ["R-HSA-2", "R-HSA-3"]);
        assert_eq!(complex.children(), ["R-HSA-2", "R-HSA-3"]);
        assert!(!complex.is_concrete());

        let set = PhysicalEntity::set("R-HSA-4", SetKind::Candidate, ["R-HSA-5"]);
        assert_eq!(set.children(), ["R-HSA-5"]);
        assert_eq!(set.schema_class(), SchemaClass::CandidateSet);

        let simple = PhysicalEntity::simple("R-ALL-113560", None);
        assert!(simple.children().is_empty());
        assert!(simple.is_concrete());
    }

    #[test]
    fn reference_entity_only_on_concrete_variants() {
        let re = ReferenceEntity::new("ChEBI", "15422");
        let simple = PhysicalEntity::simple("R-ALL-113592", Some(re.clone()));
        assert_eq!(simple.reference_entity(), Some(&re));

        let complex = PhysicalEntity::complex("R-HSA-1", Vec::<String>::new());
        assert!(complex.reference_entity().is_none());
    }

    #[test]
    fn schema_class_display() {
        let ewas = PhysicalEntity::accessioned("R-HSA-193948", None);
        assert_eq!(
            ewas.schema_class().to_string(),
            "EntityWithAccessionedSequence"
        );
    }
}
