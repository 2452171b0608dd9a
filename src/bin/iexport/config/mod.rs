use interaction_exporter::{ExportConfig, ParticipantRole};

use crate::cli::{ExpansionOptions, PairingOptions};

pub fn build_export_config(expansion: &ExpansionOptions, pairing: &PairingOptions) -> ExportConfig {
    let defaults = ExportConfig::default();

    let mut roles: Vec<ParticipantRole> = Vec::with_capacity(pairing.roles.len());
    for &role in &pairing.roles {
        let role: ParticipantRole = role.into();
        if !roles.contains(&role) {
            roles.push(role);
        }
    }

    ExportConfig {
        max_unit_size: expansion.max_unit_size,
        pairing: pairing.pairing.into(),
        roles: if roles.is_empty() { defaults.roles } else { roles },
    }
}
