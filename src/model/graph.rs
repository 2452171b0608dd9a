use std::collections::BTreeMap;

use super::entity::PhysicalEntity;

/// Arena of physical entities keyed by stable identifier.
///
/// Complexes and sets refer to their children by stable identifier, so a
/// graph is only meaningful when every referenced child is also present.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    entities: BTreeMap<String, PhysicalEntity>,
}

impl EntityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity, returning the one it replaced, if any.
    pub fn insert(&mut self, entity: PhysicalEntity) -> Option<PhysicalEntity> {
        self.entities.insert(entity.st_id.clone(), entity)
    }

    #[inline]
    pub fn get(&self, st_id: &str) -> Option<&PhysicalEntity> {
        self.entities.get(st_id)
    }

    #[inline]
    pub fn contains(&self, st_id: &str) -> bool {
        self.entities.contains_key(st_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhysicalEntity> {
        self.entities.values()
    }
}

impl FromIterator<PhysicalEntity> for EntityGraph {
    fn from_iter<T: IntoIterator<Item = PhysicalEntity>>(iter: T) -> Self {
        let mut graph = Self::new();
        for entity in iter {
            graph.insert(entity);
        }
        graph
    }
}

impl Extend<PhysicalEntity> for EntityGraph {
    fn extend<T: IntoIterator<Item = PhysicalEntity>>(&mut self, iter: T) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut graph = EntityGraph::new();
        assert!(graph.is_empty());

        assert!(graph.insert(PhysicalEntity::simple("R-ALL-113560", None)).is_none());
        assert!(graph.contains("R-ALL-113560"));
        assert_eq!(graph.len(), 1);
        assert!(graph.get("R-HSA-0").is_none());
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut graph = EntityGraph::new();
        graph.insert(PhysicalEntity::simple("R-ALL-1", None));
        let previous = graph.insert(PhysicalEntity::simple("R-ALL-1", None).with_name("ATP"));
        assert!(previous.is_some());
        assert_eq!(graph.len(), 1);
        assert_eq!(
            graph.get("R-ALL-1").and_then(|e| e.display_name.as_deref()),
            Some("ATP")
        );
    }

    #[test]
    fn collects_from_iterator() {
        let graph: EntityGraph = [
            PhysicalEntity::accessioned("R-HSA-2", None),
            PhysicalEntity::accessioned("R-HSA-1", None),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = graph.iter().map(|e| e.st_id.as_str()).collect();
        assert_eq!(ids, ["R-HSA-1", "R-HSA-2"]);
    }
}
