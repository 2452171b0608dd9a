use std::collections::HashSet;

use super::entity::{EntityKind, PhysicalEntity};
use super::xref::CrossReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Simple,
    Accessioned,
}

/// A concrete molecular participant produced by expansion.
///
/// `identifiers` is whitelisted, free of duplicate `(database, identifier)`
/// pairs, and always starts with the unit's own `reactome` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionUnit {
    pub st_id: String,
    pub display_name: Option<String>,
    pub kind: UnitKind,
    pub identifiers: Vec<CrossReference>,
}

impl InteractionUnit {
    /// Wraps a concrete entity, returning `None` for complexes and sets.
    pub fn from_entity(entity: &PhysicalEntity, identifiers: Vec<CrossReference>) -> Option<Self> {
        let kind = match entity.kind {
            EntityKind::Simple { .. } => UnitKind::Simple,
            EntityKind::Accessioned { .. } => UnitKind::Accessioned,
            EntityKind::Complex { .. } | EntityKind::Set { .. } => return None,
        };

        let mut unit = Self {
            st_id: entity.st_id.clone(),
            display_name: entity.display_name.clone(),
            kind,
            identifiers: Vec::with_capacity(identifiers.len() + 1),
        };
        unit.merge_identifiers(std::iter::once(CrossReference::reactome(&entity.st_id)));
        unit.merge_identifiers(identifiers);
        Some(unit)
    }

    /// Appends the identifiers not already present, keeping first-seen order.
    pub fn merge_identifiers<I>(&mut self, identifiers: I)
    where
        I: IntoIterator<Item = CrossReference>,
    {
        let mut seen: HashSet<CrossReference> = self.identifiers.iter().cloned().collect();
        for xref in identifiers {
            if seen.insert(xref.clone()) {
                self.identifiers.push(xref);
            }
        }
    }

    /// The identifier a consumer should show first: the first non-`reactome`
    /// reference when there is one, the `reactome` reference otherwise.
    pub fn primary_identifier(&self) -> Option<&CrossReference> {
        self.identifiers
            .iter()
            .find(|xref| !xref.is_reactome())
            .or_else(|| self.identifiers.first())
    }

    /// Every identifier except [`primary_identifier`](Self::primary_identifier).
    pub fn alternative_identifiers(&self) -> impl Iterator<Item = &CrossReference> {
        let primary = self.primary_identifier();
        self.identifiers
            .iter()
            .filter(move |xref| Some(*xref) != primary)
    }
}

/// The reaction an interaction was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionContext {
    pub st_id: String,
    pub display_name: Option<String>,
    /// Literature supporting the reaction, e.g. `pubmed` references.
    pub evidence: Vec<CrossReference>,
}

impl ReactionContext {
    pub fn new(st_id: impl Into<String>) -> Self {
        Self {
            st_id: st_id.into(),
            display_name: None,
            evidence: Vec::new(),
        }
    }
}

/// An unordered pair of units interacting within one reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub a: InteractionUnit,
    pub b: InteractionUnit,
    pub context: ReactionContext,
}

impl Interaction {
    /// Whether this interaction connects the two given stable identifiers,
    /// in either order.
    pub fn connects(&self, first: &str, second: &str) -> bool {
        (self.a.st_id == first && self.b.st_id == second)
            || (self.a.st_id == second && self.b.st_id == first)
    }
}

/// The units one root entity decomposes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub root: String,
    pub units: Vec<InteractionUnit>,
    /// Set when further distinct units existed beyond the size cap.
    pub truncated: bool,
}

impl Expansion {
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
