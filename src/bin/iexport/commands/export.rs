use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use interaction_exporter::io::{Format, ReactionDocument, read_document, write_interactions};
use interaction_exporter::{ExportConfig, ReactionExport, export};

use crate::cli::ExportArgs;
use crate::config::build_export_config;
use crate::display::{
    Context as DisplayContext, Progress, print_document_summary, print_export_summary,
};
use crate::io::{create_output, infer_output_format, open_input, stdin_is_tty};
use crate::util::convert::pairing_display_name;

const TOTAL_STEPS: u8 = 3;

pub fn run_export(args: ExportArgs, ctx: DisplayContext) -> Result<()> {
    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: iexport export -i <DOCUMENT> or pipe a document via stdin."
        );
    }

    let output_format = resolve_output_format(&args)?;
    let config = build_export_config(&args.expansion, &args.pairing);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading reaction document");
    let document = read_reaction_document(args.io.input.as_deref())?;
    let read_substeps = build_read_substeps(&document);
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading reaction document", &read_substeps_ref);

    if ctx.interactive {
        print_document_summary(&document);
    }

    progress.step("Expanding participants");
    let exported = export(&document.reaction, &document.graph, &config)
        .with_context(|| format!("Failed to export reaction '{}'", document.reaction.st_id))?;
    let export_substeps = build_export_substeps(&exported, &config);
    let export_substeps_ref: Vec<&str> = export_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Expanding participants", &export_substeps_ref);

    if ctx.interactive {
        print_export_summary(&exported, &config);
    }

    progress.step("Writing interactions");
    write_records(&exported, args.output.as_deref(), output_format)?;
    let write_substep = build_write_substep(args.output.as_deref(), output_format);
    progress.complete_step("Writing interactions", &[write_substep.as_str()]);

    progress.finish();

    Ok(())
}

fn resolve_output_format(args: &ExportArgs) -> Result<Format> {
    if let Some(fmt) = args.output_format {
        return Ok(fmt.into());
    }

    match &args.output {
        Some(path) => infer_output_format(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot infer format from '{}'. Use --outfmt to specify.",
                path.display()
            )
        }),
        None => Ok(Format::Tsv),
    }
}

fn read_reaction_document(path: Option<&Path>) -> Result<ReactionDocument> {
    let input = open_input(path)?;
    read_document(input, Format::Json).context("Failed to read reaction document")
}

fn write_records(exported: &ReactionExport, path: Option<&Path>, format: Format) -> Result<()> {
    let mut writer = create_output(path)?;
    write_interactions(&mut writer, &exported.interactions, format)
        .context("Failed to write interaction records")?;
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

fn build_read_substeps(document: &ReactionDocument) -> Vec<String> {
    vec![
        format!("Parse reaction {}", document.reaction.st_id),
        format!(
            "Index {} entities for {} participants",
            document.graph.len(),
            document.reaction.participant_count()
        ),
    ]
}

fn build_export_substeps(exported: &ReactionExport, config: &ExportConfig) -> Vec<String> {
    let roles: Vec<String> = config.roles.iter().map(|r| r.to_string()).collect();

    let mut steps = vec![
        format!(
            "Expand {} roles (cap {} units each)",
            roles.join(", "),
            config.max_unit_size
        ),
        format!(
            "Pair {} units ({})",
            exported.unit_count(),
            pairing_display_name(config.pairing)
        ),
    ];

    if exported.is_truncated() {
        steps.push(format!(
            "Truncated {} participant(s) at the unit cap",
            exported.truncated_roots.len()
        ));
    }

    steps
}

fn build_write_substep(path: Option<&Path>, format: Format) -> String {
    let target = path
        .map(|p| {
            p.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| "stdout".to_string());

    format!("Write {} → {}", format, target)
}
