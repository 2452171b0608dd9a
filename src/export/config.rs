//! Configuration for interaction export.

use super::error::Error;
use crate::model::reaction::ParticipantRole;

/// Unit cap applied when none is configured.
pub const DEFAULT_MAX_UNIT_SIZE: usize = 4;

/// How expanded participant groups are combined into pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingPolicy {
    /// Every unit of every group is paired with every other unit.
    #[default]
    AllPairs,
    /// Units are only paired with units of a different group.
    AcrossGroups,
}

/// Main configuration for [`export`](super::export).
///
/// # Examples
///
/// ```
/// use interaction_exporter::{ExportConfig, PairingPolicy, ParticipantRole};
///
/// let config = ExportConfig {
///     max_unit_size: 40,
///     pairing: PairingPolicy::AcrossGroups,
///     roles: vec![ParticipantRole::Input, ParticipantRole::Output],
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Maximum number of distinct units one root participant may expand into.
    pub max_unit_size: usize,

    /// Pairing of the expanded groups.
    pub pairing: PairingPolicy,

    /// Participant roles taking part in interactions, one group per role in
    /// this order. Roles absent from the list are ignored.
    pub roles: Vec<ParticipantRole>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_unit_size: DEFAULT_MAX_UNIT_SIZE,
            pairing: PairingPolicy::AllPairs,
            roles: vec![ParticipantRole::Input, ParticipantRole::Catalyst],
        }
    }
}

impl ExportConfig {
    pub fn with_max_unit_size(mut self, max_unit_size: usize) -> Self {
        self.max_unit_size = max_unit_size;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_max_unit_size(self.max_unit_size)
    }
}

pub(crate) fn validate_max_unit_size(max_unit_size: usize) -> Result<(), Error> {
    if max_unit_size < 1 {
        return Err(Error::InvalidMaxUnitSize(max_unit_size));
    }
    Ok(())
}
