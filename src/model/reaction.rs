use std::fmt;

use super::interaction::{InteractionUnit, ReactionContext};
use super::xref::CrossReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantRole {
    Input,
    Output,
    Catalyst,
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantRole::Input => write!(f, "input"),
            ParticipantRole::Output => write!(f, "output"),
            ParticipantRole::Catalyst => write!(f, "catalyst"),
        }
    }
}

/// A reaction and the stable identifiers of its participants by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    pub st_id: String,
    pub display_name: Option<String>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub catalysts: Vec<String>,
    pub literature: Vec<CrossReference>,
}

impl Reaction {
    pub fn new(st_id: impl Into<String>) -> Self {
        Self {
            st_id: st_id.into(),
            ..Default::default()
        }
    }

    pub fn participants(&self, role: ParticipantRole) -> &[String] {
        match role {
            ParticipantRole::Input => &self.inputs,
            ParticipantRole::Output => &self.outputs,
            ParticipantRole::Catalyst => &self.catalysts,
        }
    }

    #[inline]
    pub fn participant_count(&self) -> usize {
        self.inputs.len() + self.outputs.len() + self.catalysts.len()
    }

    pub fn context(&self) -> ReactionContext {
        ReactionContext {
            st_id: self.st_id.clone(),
            display_name: self.display_name.clone(),
            evidence: self.literature.clone(),
        }
    }
}

/// Expanded units of every participant sharing one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitGroup {
    pub role: ParticipantRole,
    pub units: Vec<InteractionUnit>,
}

impl UnitGroup {
    pub fn new(role: ParticipantRole, units: Vec<InteractionUnit>) -> Self {
        Self { role, units }
    }
}
