use interaction_exporter::io::Format;
use interaction_exporter::{PairingPolicy, ParticipantRole};

use crate::cli;

impl From<cli::Pairing> for PairingPolicy {
    fn from(p: cli::Pairing) -> Self {
        match p {
            cli::Pairing::AllPairs => Self::AllPairs,
            cli::Pairing::AcrossGroups => Self::AcrossGroups,
        }
    }
}

impl From<cli::Role> for ParticipantRole {
    fn from(r: cli::Role) -> Self {
        match r {
            cli::Role::Input => Self::Input,
            cli::Role::Output => Self::Output,
            cli::Role::Catalyst => Self::Catalyst,
        }
    }
}

impl From<cli::OutputFormat> for Format {
    fn from(f: cli::OutputFormat) -> Self {
        match f {
            cli::OutputFormat::Tsv => Self::Tsv,
            cli::OutputFormat::Json => Self::Json,
        }
    }
}

pub fn pairing_display_name(policy: PairingPolicy) -> &'static str {
    match policy {
        PairingPolicy::AllPairs => "all pairs",
        PairingPolicy::AcrossGroups => "across roles",
    }
}
