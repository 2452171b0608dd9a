//! Decomposition of a root entity into concrete interaction units.
//!
//! The walk is depth-first over an explicit stack, visiting children in their
//! declared order. Complexes and sets both contribute every unit reachable
//! through their children; they differ in meaning, not in what is reported.
//! Units are keyed by stable identifier so a molecule reached along several
//! paths is reported once, and the size cap counts those distinct units.
//! A complex or set shared by several parents is walked only the first time
//! it is reached.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::config::validate_max_unit_size;
use super::error::Error;
use super::identifiers::resolve_identifiers;
use crate::model::entity::PhysicalEntity;
use crate::model::graph::EntityGraph;
use crate::model::interaction::{Expansion, InteractionUnit};

/// Expands `root` into at most `max_unit_size` distinct interaction units.
///
/// Units appear in the order they are first reached by a pre-order,
/// left-to-right walk. When a further distinct unit is found after the cap is
/// full, the walk stops and the result is marked truncated.
///
/// # Errors
///
/// - [`Error::InvalidMaxUnitSize`] if `max_unit_size` is zero.
/// - [`Error::MissingEntity`] if a complex or set refers to an entity absent from `graph`.
/// - [`Error::CyclicEntity`] if an entity contains itself.
pub fn expand(
    graph: &EntityGraph,
    root: &PhysicalEntity,
    max_unit_size: usize,
) -> Result<Expansion, Error> {
    validate_max_unit_size(max_unit_size)?;

    let mut collector = UnitCollector::new(max_unit_size);

    if root.is_concrete() {
        collector.visit(root);
    } else {
        walk(graph, root, &mut collector)?;
    }

    let expansion = collector.finish(&root.st_id);
    debug!(
        root = %expansion.root,
        units = expansion.len(),
        truncated = expansion.truncated,
        "expanded entity"
    );
    Ok(expansion)
}

struct Frame<'g> {
    entity: &'g PhysicalEntity,
    next_child: usize,
}

fn walk<'g>(
    graph: &'g EntityGraph,
    root: &'g PhysicalEntity,
    collector: &mut UnitCollector,
) -> Result<(), Error> {
    let mut on_path: HashSet<&'g str> = HashSet::from([root.st_id.as_str()]);
    let mut done: HashSet<&'g str> = HashSet::new();
    let mut stack = vec![Frame {
        entity: root,
        next_child: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let parent = frame.entity;
        let Some(child_id) = parent.children().get(frame.next_child) else {
            on_path.remove(parent.st_id.as_str());
            done.insert(parent.st_id.as_str());
            stack.pop();
            continue;
        };
        frame.next_child += 1;

        let child = graph
            .get(child_id)
            .ok_or_else(|| Error::missing_entity(&parent.st_id, child_id))?;

        if child.is_concrete() {
            if !collector.visit(child) {
                break;
            }
            continue;
        }

        // Its units are already collected and resolve the same way again.
        if done.contains(child.st_id.as_str()) {
            continue;
        }
        if !on_path.insert(child.st_id.as_str()) {
            return Err(Error::cyclic_entity(&child.st_id));
        }
        stack.push(Frame {
            entity: child,
            next_child: 0,
        });
    }

    Ok(())
}

struct UnitCollector {
    max_unit_size: usize,
    units: Vec<InteractionUnit>,
    positions: HashMap<String, usize>,
    truncated: bool,
}

impl UnitCollector {
    fn new(max_unit_size: usize) -> Self {
        Self {
            max_unit_size,
            units: Vec::new(),
            positions: HashMap::new(),
            truncated: false,
        }
    }

    /// Records a concrete entity. Returns `false` once the cap stops the walk.
    fn visit(&mut self, entity: &PhysicalEntity) -> bool {
        if let Some(&position) = self.positions.get(&entity.st_id) {
            self.units[position].merge_identifiers(resolve_identifiers(entity));
            return true;
        }

        if self.units.len() >= self.max_unit_size {
            self.truncated = true;
            return false;
        }

        let Some(unit) = InteractionUnit::from_entity(entity, resolve_identifiers(entity)) else {
            return true;
        };
        self.positions.insert(unit.st_id.clone(), self.units.len());
        self.units.push(unit);
        true
    }

    fn finish(self, root: &str) -> Expansion {
        Expansion {
            root: root.to_string(),
            units: self.units,
            truncated: self.truncated,
        }
    }
}
