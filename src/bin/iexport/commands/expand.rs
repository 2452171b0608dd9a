use std::io::Write;

use anyhow::{Context, Result, bail};

use interaction_exporter::io::{Format, ReactionDocument, read_document};
use interaction_exporter::{Expansion, ParticipantRole, expand, load_root};

use crate::cli::ExpandArgs;
use crate::display::{Context as DisplayContext, Progress, print_document_summary, print_expansion};
use crate::io::{create_output, open_input, stdin_is_tty};

const TOTAL_STEPS: u8 = 2;

pub fn run_expand(args: ExpandArgs, ctx: DisplayContext) -> Result<()> {
    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: iexport expand -i <DOCUMENT> or pipe a document via stdin."
        );
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading reaction document");
    let input = open_input(args.io.input.as_deref())?;
    let document =
        read_document(input, Format::Json).context("Failed to read reaction document")?;
    progress.complete_step("Reading reaction document", &[]);

    if ctx.interactive {
        print_document_summary(&document);
    }

    progress.step("Expanding entities");
    let roots = select_roots(&document, args.entity.as_deref());
    let mut expansions = Vec::with_capacity(roots.len());
    for st_id in &roots {
        let root = load_root(&document.graph, st_id)?;
        let expansion = expand(&document.graph, root, args.expansion.max_unit_size)
            .with_context(|| format!("Failed to expand entity '{}'", st_id))?;
        expansions.push(expansion);
    }
    let truncated = expansions.iter().filter(|e| e.truncated).count();
    let summary = format!(
        "Expanded {} root(s), {} truncated at {} units",
        expansions.len(),
        truncated,
        args.expansion.max_unit_size
    );
    progress.complete_step("Expanding entities", &[summary.as_str()]);

    if ctx.interactive {
        for expansion in &expansions {
            print_expansion(expansion);
        }
    }

    write_listing(&expansions)?;

    progress.finish();

    Ok(())
}

/// The requested entity, or every participant of the reaction in role order
/// with repeats removed.
fn select_roots(document: &ReactionDocument, entity: Option<&str>) -> Vec<String> {
    if let Some(st_id) = entity {
        return vec![st_id.to_string()];
    }

    let mut roots: Vec<String> = Vec::new();
    for role in [
        ParticipantRole::Input,
        ParticipantRole::Output,
        ParticipantRole::Catalyst,
    ] {
        for st_id in document.reaction.participants(role) {
            if !roots.contains(st_id) {
                roots.push(st_id.clone());
            }
        }
    }
    roots
}

fn write_listing(expansions: &[Expansion]) -> Result<()> {
    let mut out = create_output(None)?;

    for expansion in expansions {
        let marker = if expansion.truncated { " truncated" } else { "" };
        writeln!(out, "# {}{}", expansion.root, marker)?;
        for unit in &expansion.units {
            let identifiers: Vec<String> = unit.identifiers.iter().map(|x| x.to_string()).collect();
            writeln!(out, "{}\t{}", unit.st_id, identifiers.join("|"))?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
