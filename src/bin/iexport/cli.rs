use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "iexport",
    about = "Export reaction participants as binary molecular interactions",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Log filter for library diagnostics (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export the interactions of a reaction document
    #[command(visible_alias = "e")]
    Export(ExportArgs),

    /// Show the units one entity of a reaction document expands into
    #[command(visible_alias = "x")]
    Expand(ExpandArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Reaction document (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Expansion options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Expansion")]
pub struct ExpansionOptions {
    /// Maximum number of distinct units one participant may expand into
    #[arg(
        long = "max-unit-size",
        value_name = "N",
        default_value_t = interaction_exporter::DEFAULT_MAX_UNIT_SIZE
    )]
    pub max_unit_size: usize,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (inferred from extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    #[command(flatten)]
    pub expansion: ExpansionOptions,

    #[command(flatten)]
    pub pairing: PairingOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Pairing")]
pub struct PairingOptions {
    /// How expanded participants are paired
    #[arg(long, value_name = "POLICY", default_value = "all-pairs")]
    pub pairing: Pairing,

    /// Participant roles to include, repeatable (default: input, catalyst)
    #[arg(long = "role", value_name = "ROLE", action = clap::ArgAction::Append)]
    pub roles: Vec<Role>,
}

#[derive(Args)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Stable identifier of the entity to expand (all participants if omitted)
    #[arg(short, long, value_name = "STID")]
    pub entity: Option<String>,

    #[command(flatten)]
    pub expansion: ExpansionOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// MITAB-style tab-separated table
    Tsv,
    /// JSON array of interaction records
    Json,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum Pairing {
    /// Every unit with every other unit
    #[default]
    AllPairs,
    /// Only units from different roles
    AcrossGroups,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Role {
    Input,
    Output,
    Catalyst,
}

pub fn parse() -> Cli {
    Cli::parse()
}
