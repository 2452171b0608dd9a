//! Error types for interaction export.
//!
//! Only configuration and data-integrity problems are errors. Identifiers that
//! cannot be resolved and databases outside the recognised set are dropped
//! silently, and a size-capped expansion is reported through
//! [`Expansion::truncated`](crate::Expansion::truncated) rather than failing.

use thiserror::Error;

/// Errors that can occur while exporting a reaction's interactions.
#[derive(Debug, Error)]
pub enum Error {
    /// The unit size cap must allow at least one unit.
    #[error("invalid maximum unit size {0}: at least 1 is required")]
    InvalidMaxUnitSize(usize),

    /// A requested root entity is not part of the entity graph.
    #[error("entity '{0}' not found in the entity graph")]
    EntityNotFound(String),

    /// A complex or set refers to a child that is not in the entity graph.
    #[error("entity '{parent}' refers to missing child entity '{child}'")]
    MissingEntity {
        /// The complex or set holding the dangling reference.
        parent: String,
        /// The stable identifier that could not be resolved.
        child: String,
    },

    /// An entity transitively contains itself.
    #[error("entity '{st_id}' contains itself")]
    CyclicEntity {
        /// The first entity found on its own containment path.
        st_id: String,
    },

    /// None of the selected participant roles lists any entity.
    #[error("reaction '{0}' has no participants in the selected roles")]
    EmptyReaction(String),
}

impl Error {
    pub fn missing_entity(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::MissingEntity {
            parent: parent.into(),
            child: child.into(),
        }
    }

    pub fn cyclic_entity(st_id: impl Into<String>) -> Self {
        Self::CyclicEntity {
            st_id: st_id.into(),
        }
    }

    /// The stable identifier of the entity the error is about, if any.
    pub fn offending_entity(&self) -> Option<&str> {
        match self {
            Error::InvalidMaxUnitSize(_) => None,
            Error::EntityNotFound(st_id) | Error::EmptyReaction(st_id) => Some(st_id),
            Error::MissingEntity { parent, .. } => Some(parent),
            Error::CyclicEntity { st_id } => Some(st_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity() {
        let err = Error::missing_entity("R-HSA-4549252", "R-HSA-4657030");
        assert_eq!(
            err.to_string(),
            "entity 'R-HSA-4549252' refers to missing child entity 'R-HSA-4657030'"
        );
        assert_eq!(err.offending_entity(), Some("R-HSA-4549252"));

        let err = Error::cyclic_entity("R-HSA-3318420");
        assert_eq!(err.to_string(), "entity 'R-HSA-3318420' contains itself");
    }

    #[test]
    fn configuration_error_has_no_entity() {
        let err = Error::InvalidMaxUnitSize(0);
        assert!(err.offending_entity().is_none());
        assert!(err.to_string().contains("at least 1"));
    }
}
