use std::fmt;
use std::hash::{Hash, Hasher};

/// Database tag under which every entity's own stable identifier is published.
pub const REACTOME_DATABASE: &str = "reactome";

/// A pointer from an entity to a record in an external database.
///
/// Two references are equal when they name the same database and identifier;
/// the optional description is informational only and takes no part in
/// equality or hashing.
#[derive(Debug, Clone, Eq)]
pub struct CrossReference {
    pub database: String,
    pub identifier: String,
    pub description: Option<String>,
}

impl CrossReference {
    pub fn new(database: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            identifier: identifier.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The canonical `reactome:<st_id>` reference of an entity.
    pub fn reactome(st_id: impl Into<String>) -> Self {
        Self::new(REACTOME_DATABASE, st_id)
    }

    #[inline]
    pub fn is_reactome(&self) -> bool {
        self.database == REACTOME_DATABASE
    }
}

impl PartialEq for CrossReference {
    fn eq(&self, other: &Self) -> bool {
        self.database == other.database && self.identifier == other.identifier
    }
}

impl Hash for CrossReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.database.hash(state);
        self.identifier.hash(state);
    }
}

impl fmt::Display for CrossReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.database, self.identifier)?;
        if let Some(description) = &self.description {
            write!(f, "({})", description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_description() {
        let plain = CrossReference::new("uniprotkb", "P04637");
        let described = CrossReference::new("uniprotkb", "P04637").with_description("TP53");
        assert_eq!(plain, described);

        let mut set = HashSet::new();
        set.insert(plain);
        assert!(!set.insert(described));
    }

    #[test]
    fn equality_is_database_sensitive() {
        let a = CrossReference::new("ChEBI", "15422");
        let b = CrossReference::new("chebi", "15422");
        assert_ne!(a, b);
    }

    #[test]
    fn reactome_reference_uses_reserved_database() {
        let xref = CrossReference::reactome("R-HSA-193948");
        assert!(xref.is_reactome());
        assert_eq!(xref.identifier, "R-HSA-193948");
    }

    #[test]
    fn display_formats() {
        let xref = CrossReference::new("go", "GO:0005515");
        assert_eq!(xref.to_string(), "go:GO:0005515");
        let xref = xref.with_description("protein binding");
        assert_eq!(xref.to_string(), "go:GO:0005515(protein binding)");
    }
}
