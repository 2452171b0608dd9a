mod assembler;
mod config;
mod error;
mod expander;
mod identifiers;

pub use assembler::assemble_interactions;
pub use config::{DEFAULT_MAX_UNIT_SIZE, ExportConfig, PairingPolicy};
pub use error::Error;
pub use expander::expand;
pub use identifiers::{
    RECOGNIZED_DATABASES, is_recognized_database, resolve_identifiers, resolve_other_identifier,
};

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::entity::PhysicalEntity;
use crate::model::graph::EntityGraph;
use crate::model::interaction::{Expansion, Interaction, InteractionUnit, ReactionContext};
use crate::model::reaction::{Reaction, UnitGroup};

/// Interactions of one reaction, with the expansions they were built from.
#[derive(Debug, Clone)]
pub struct ReactionExport {
    pub context: ReactionContext,
    pub groups: Vec<UnitGroup>,
    pub interactions: Vec<Interaction>,
    /// Participants whose expansion hit the unit cap, in participant order.
    pub truncated_roots: Vec<String>,
}

impl ReactionExport {
    #[inline]
    pub fn is_truncated(&self) -> bool {
        !self.truncated_roots.is_empty()
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.groups.iter().map(|g| g.units.len()).sum()
    }
}

/// Looks up a root entity by stable identifier.
pub fn load_root<'g>(graph: &'g EntityGraph, st_id: &str) -> Result<&'g PhysicalEntity, Error> {
    graph
        .get(st_id)
        .ok_or_else(|| Error::EntityNotFound(st_id.to_string()))
}

/// Expands every participant of `reaction` in the configured roles and pairs
/// the resulting units.
///
/// The configuration is validated before any entity is touched. Each root is
/// capped independently; roots that hit the cap are listed in
/// [`ReactionExport::truncated_roots`] and do not abort the export.
pub fn export(
    reaction: &Reaction,
    graph: &EntityGraph,
    config: &ExportConfig,
) -> Result<ReactionExport, Error> {
    config.validate()?;

    if config
        .roles
        .iter()
        .all(|&role| reaction.participants(role).is_empty())
    {
        return Err(Error::EmptyReaction(reaction.st_id.clone()));
    }

    let mut groups = Vec::with_capacity(config.roles.len());
    let mut truncated_roots = Vec::new();

    for &role in &config.roles {
        let mut units = Vec::new();
        let mut positions = HashMap::new();
        for st_id in reaction.participants(role) {
            let root = load_root(graph, st_id)?;
            let expansion = expand(graph, root, config.max_unit_size)?;
            if expansion.truncated {
                warn!(
                    reaction = %reaction.st_id,
                    root = %expansion.root,
                    max_unit_size = config.max_unit_size,
                    "participant expansion truncated"
                );
                truncated_roots.push(expansion.root.clone());
            }
            merge_expansion(&mut units, &mut positions, expansion);
        }
        groups.push(UnitGroup::new(role, units));
    }

    let context = reaction.context();
    let interactions = assemble_interactions(&groups, &context, config.pairing);
    debug!(
        reaction = %reaction.st_id,
        interactions = interactions.len(),
        "assembled interactions"
    );

    Ok(ReactionExport {
        context,
        groups,
        interactions,
        truncated_roots,
    })
}

fn merge_expansion(
    units: &mut Vec<InteractionUnit>,
    positions: &mut HashMap<String, usize>,
    expansion: Expansion,
) {
    for unit in expansion.units {
        match positions.get(&unit.st_id) {
            Some(&position) => units[position].merge_identifiers(unit.identifiers),
            None => {
                positions.insert(unit.st_id.clone(), units.len());
                units.push(unit);
            }
        }
    }
}
