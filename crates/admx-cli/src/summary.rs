use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use admx_report::{ReportMatch, TableDiff};

use crate::commands::ExtractOutcome;

pub fn print_summary(outcome: &ExtractOutcome) {
    let result = &outcome.result;
    println!("Output: {}", outcome.output_path.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Policies"),
        header_cell("Unresolved"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut total_policies = 0usize;
    let mut total_unresolved = 0usize;
    for file in &result.files {
        total_policies += file.policies;
        total_unresolved += file.unresolved_fields;
        table.add_row(vec![
            Cell::new(&file.source_file),
            Cell::new(file.policies),
            count_cell(file.unresolved_fields, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_policies).add_attribute(Attribute::Bold),
        count_cell(total_unresolved, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Skipped files:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_diff(diff: &TableDiff) {
    if diff.is_empty() {
        println!("Tables match on '{}'.", diff.key_column);
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Side"), header_cell(&diff.key_column)]);
    apply_table_style(&mut table);
    for key in &diff.left_only {
        table.add_row(vec![Cell::new("left only").fg(Color::Red), Cell::new(key)]);
    }
    for key in &diff.right_only {
        table.add_row(vec![
            Cell::new("right only").fg(Color::Green),
            Cell::new(key),
        ]);
    }
    println!("{table}");
    println!(
        "{} left-only, {} right-only",
        diff.left_only.len(),
        diff.right_only.len()
    );
}

pub fn print_matches(needle: &str, matches: &[ReportMatch]) {
    if matches.is_empty() {
        println!("No reports contain '{needle}'.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Report"), header_cell("Occurrences")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for m in matches {
        table.add_row(vec![
            Cell::new(m.path.display().to_string()),
            Cell::new(m.occurrences),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value)
    }
}
