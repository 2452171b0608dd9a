//! Pairing of expanded units into binary interactions.

use std::collections::{HashMap, HashSet};

use super::config::PairingPolicy;
use crate::model::interaction::{Interaction, InteractionUnit, ReactionContext};
use crate::model::reaction::UnitGroup;

/// Builds the interactions of one reaction from its expanded groups.
///
/// Pairs of the same stable identifier are never emitted, and each unordered
/// pair appears at most once, in the position it was first produced. For a
/// given input order the output order is fixed.
pub fn assemble_interactions(
    groups: &[UnitGroup],
    context: &ReactionContext,
    policy: PairingPolicy,
) -> Vec<Interaction> {
    let mut pairs = PairSink::new(context);

    match policy {
        PairingPolicy::AllPairs => {
            let pool = pool_units(groups.iter().flat_map(|g| g.units.iter()));
            for (i, a) in pool.iter().enumerate() {
                for b in &pool[i + 1..] {
                    pairs.push(a, b);
                }
            }
        }
        PairingPolicy::AcrossGroups => {
            for (g, first) in groups.iter().enumerate() {
                for second in &groups[g + 1..] {
                    for a in &first.units {
                        for b in &second.units {
                            pairs.push(a, b);
                        }
                    }
                }
            }
        }
    }

    pairs.into_interactions()
}

/// Merges units sharing a stable identifier, keeping first-seen order.
fn pool_units<'a, I>(units: I) -> Vec<InteractionUnit>
where
    I: IntoIterator<Item = &'a InteractionUnit>,
{
    let mut pool: Vec<InteractionUnit> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for unit in units {
        match positions.get(unit.st_id.as_str()) {
            Some(&position) => pool[position].merge_identifiers(unit.identifiers.iter().cloned()),
            None => {
                positions.insert(&unit.st_id, pool.len());
                pool.push(unit.clone());
            }
        }
    }

    pool
}

struct PairSink<'c> {
    context: &'c ReactionContext,
    seen: HashSet<(String, String)>,
    interactions: Vec<Interaction>,
}

impl<'c> PairSink<'c> {
    fn new(context: &'c ReactionContext) -> Self {
        Self {
            context,
            seen: HashSet::new(),
            interactions: Vec::new(),
        }
    }

    fn push(&mut self, a: &InteractionUnit, b: &InteractionUnit) {
        if a.st_id == b.st_id {
            return;
        }
        let key = if a.st_id < b.st_id {
            (a.st_id.clone(), b.st_id.clone())
        } else {
            (b.st_id.clone(), a.st_id.clone())
        };
        if !self.seen.insert(key) {
            return;
        }
        self.interactions.push(Interaction {
            a: a.clone(),
            b: b.clone(),
            context: self.context.clone(),
        });
    }

    fn into_interactions(self) -> Vec<Interaction> {
        self.interactions
    }
}
