//! Console summaries rendered with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::staging::AnalysisReportPayload;
use crate::types::RunResult;

/// Print the per-stage summary of a full pipeline run.
pub fn print_run_summary(result: &RunResult) {
    println!("Source: {}", result.source);
    println!("Data dir: {}", result.data_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Detail"),
        header_cell("Records"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for stage in &result.stages {
        let output = stage
            .output
            .as_ref()
            .map(|path| Cell::new(path.display()))
            .unwrap_or_else(|| dim_cell("-"));
        table.add_row(vec![
            Cell::new(stage.stage)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&stage.detail),
            Cell::new(stage.records),
            output,
        ]);
    }
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

/// Print the headline numbers and top-ranked features of a report.
pub fn print_report_summary(payload: &AnalysisReportPayload) {
    println!(
        "Report: {} records, {} columns, target {}",
        payload.report.total_records, payload.report.total_columns, payload.target_field
    );
    if payload.report.best_features.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Feature"), header_cell("|corr|")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, correlation) in &payload.report.best_features {
        table.add_row(vec![
            Cell::new(field),
            Cell::new(format!("{correlation:.4}")),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
