use std::io::{self, Write};

use interaction_exporter::io::ReactionDocument;
use interaction_exporter::{ExportConfig, Expansion, ParticipantRole, ReactionExport, UnitKind};

use crate::util::convert::pairing_display_name;
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_UNIT_ROWS: usize = 15;

pub fn print_document_summary(document: &ReactionDocument) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let reaction = &document.reaction;
    let mut rows = vec![("Reaction", reaction.st_id.clone())];
    if let Some(name) = &reaction.display_name {
        rows.push(("Name", name.clone()));
    }
    for role in [
        ParticipantRole::Input,
        ParticipantRole::Output,
        ParticipantRole::Catalyst,
    ] {
        rows.push((
            role_label(role),
            format!("{}", reaction.participants(role).len()),
        ));
    }
    rows.push(("Entities", format!("{}", document.graph.len())));
    rows.push(("Literature", format!("{}", reaction.literature.len())));

    print_kv_table(&mut out, "Reaction Summary", &rows);
}

pub fn print_export_summary(export: &ReactionExport, config: &ExportConfig) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Units", format!("{}", export.unit_count())),
        ("Interactions", format!("{}", export.interactions.len())),
        ("Pairing", pairing_display_name(config.pairing).to_string()),
        ("Max Unit Size", format!("{}", config.max_unit_size)),
    ];
    if export.is_truncated() {
        rows.push(("Truncated", export.truncated_roots.join(", ")));
    }
    print_kv_table(&mut out, "Export Summary", &rows);

    let groups: Vec<(String, usize)> = export
        .groups
        .iter()
        .map(|g| (g.role.to_string(), g.units.len()))
        .collect();
    print_distribution_table(&mut out, "Units by Role", &groups, export.unit_count());
}

pub fn print_expansion(expansion: &Expansion) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let id_w = 16usize;
    let kind_w = 11usize;
    let sep_overhead = 8;
    let primary_w = SAFE_TABLE_WIDTH.saturating_sub(id_w + kind_w + sep_overhead);

    let title = if expansion.truncated {
        format!("{} (truncated)", expansion.root)
    } else {
        expansion.root.clone()
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(&title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{id_line}┬{kind_line}┬{primary_line}┐",
        INDENT,
        id_line = "─".repeat(id_w + 2),
        kind_line = "─".repeat(kind_w + 2),
        primary_line = "─".repeat(primary_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<id_w$} │ {:<kind_w$} │ {:<primary_w$} │",
        INDENT,
        "Unit",
        "Kind",
        "Primary Identifier",
        id_w = id_w,
        kind_w = kind_w,
        primary_w = primary_w
    );
    let _ = writeln!(
        out,
        "{}├{id_line}┼{kind_line}┼{primary_line}┤",
        INDENT,
        id_line = "─".repeat(id_w + 2),
        kind_line = "─".repeat(kind_w + 2),
        primary_line = "─".repeat(primary_w + 2)
    );

    for unit in expansion.units.iter().take(MAX_UNIT_ROWS) {
        let primary = unit
            .primary_identifier()
            .map(|xref| xref.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{}│ {:<id_w$} │ {:<kind_w$} │ {:<primary_w$} │",
            INDENT,
            truncate(&unit.st_id, id_w),
            kind_label(unit.kind),
            truncate(&primary, primary_w),
            id_w = id_w,
            kind_w = kind_w,
            primary_w = primary_w
        );
    }

    if expansion.units.len() > MAX_UNIT_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:<id_w$} │ {:<kind_w$} │ {:<primary_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more units)", expansion.units.len() - MAX_UNIT_ROWS),
            id_w = id_w,
            kind_w = kind_w,
            primary_w = primary_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{id_line}┴{kind_line}┴{primary_line}┘",
        INDENT,
        id_line = "─".repeat(id_w + 2),
        kind_line = "─".repeat(kind_w + 2),
        primary_line = "─".repeat(primary_w + 2)
    );
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{name_line}┬{count_line}┬{dist_line}┐",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT,
        "Role",
        "Units",
        "Distribution",
        name_w = name_w,
        count_w = count_w,
        dist_w = dist_w
    );
    let _ = writeln!(
        out,
        "{}├{name_line}┼{count_line}┼{dist_line}┤",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );

    for (name, count) in data {
        let pct = if total == 0 {
            0.0
        } else {
            (*count as f64 / total as f64) * 100.0
        };
        let bar = make_bar(pct, max_bar_width);
        let dist_cell = format!("{}  {:>5.1}%", bar, pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            dist_cell,
            name_w = name_w,
            count_w = count_w,
            dist_w = dist_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{name_line}┴{count_line}┴{dist_line}┘",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn role_label(role: ParticipantRole) -> &'static str {
    match role {
        ParticipantRole::Input => "Inputs",
        ParticipantRole::Output => "Outputs",
        ParticipantRole::Catalyst => "Catalysts",
    }
}

fn kind_label(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Simple => "simple",
        UnitKind::Accessioned => "accessioned",
    }
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
