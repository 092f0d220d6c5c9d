use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sppd_map::aliases_for;
use sppd_model::{CanonicalFieldId, RunReport, SourceReport};

use crate::commands::{ConvertResult, InspectedSource};

pub fn print_summary(result: &ConvertResult) {
    let mut lines = Vec::new();
    match (&result.output_path, result.dry_run) {
        (_, true) => lines.push("Output: (dry run, not written)".to_string()),
        (Some(path), false) => lines.push(format!("Output: {}", path.display())),
        (None, false) => {}
    }
    if let Some(path) = &result.report_path {
        lines.push(format!("Report: {}", path.display()));
    }
    lines.push(summary_table(result).to_string());

    for line in lines {
        if result.wrote_stdout() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

fn summary_table(result: &ConvertResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Header"),
        header_cell("Rows"),
        header_cell("Emitted"),
        header_cell("Empty"),
        header_cell("Footer"),
        header_cell("No ID"),
        header_cell("Duplicate"),
        header_cell("Degraded"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for index in 1..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let report = &result.output.report;
    for source in &report.per_source {
        table.add_row(source_row(source));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.rows_seen()).add_attribute(Attribute::Bold),
        Cell::new(report.rows_emitted()).add_attribute(Attribute::Bold),
        count_cell(sum(report, |s| s.skipped_empty), Color::Yellow),
        count_cell(sum(report, |s| s.skipped_footer), Color::Yellow),
        count_cell(sum(report, |s| s.skipped_no_identifier), Color::Yellow),
        count_cell(sum(report, |s| s.skipped_duplicate), Color::Yellow),
        count_cell(report.degraded_total(), Color::Red),
        dim_cell("-"),
    ]);
    table
}

fn source_row(source: &SourceReport) -> Vec<Cell> {
    let status = match &source.rejection {
        Some(rejection) => Cell::new(format!("rejected: {rejection}")).fg(Color::Red),
        None => Cell::new("converted").fg(Color::Green),
    };
    vec![
        Cell::new(&source.source)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        match source.header_row {
            Some(row) => Cell::new(row + 1),
            None => dim_cell("-"),
        },
        Cell::new(source.rows_seen),
        Cell::new(source.rows_emitted),
        count_cell(source.skipped_empty, Color::Yellow),
        count_cell(source.skipped_footer, Color::Yellow),
        count_cell(source.skipped_no_identifier, Color::Yellow),
        count_cell(source.skipped_duplicate, Color::Yellow),
        count_cell(source.degraded_total(), Color::Red),
        status,
    ]
}

fn sum(report: &RunReport, counter: impl Fn(&SourceReport) -> usize) -> usize {
    report.per_source.iter().map(counter).sum()
}

pub fn print_inspection(sources: &[InspectedSource]) {
    for source in sources {
        match &source.layout {
            Err(rejection) => {
                println!("{} ({} rows): {rejection}", source.name, source.rows);
            }
            Ok(layout) => {
                println!(
                    "{} ({} rows): header at row {}",
                    source.name,
                    source.rows,
                    layout.header_row + 1
                );
                let mut table = Table::new();
                table.set_header(vec![
                    header_cell("Field"),
                    header_cell("Column"),
                    header_cell("Label"),
                    header_cell("Match"),
                ]);
                apply_table_style(&mut table);
                align_column(&mut table, 1, CellAlignment::Right);
                for field in CanonicalFieldId::ALL {
                    let found = layout
                        .resolution
                        .matches
                        .iter()
                        .find(|m| m.field == field);
                    table.add_row(match found {
                        Some(found) => vec![
                            field_cell(field),
                            Cell::new(column_cell_text(found.column)),
                            Cell::new(&found.label),
                            Cell::new(found.kind.describe()),
                        ],
                        None => vec![
                            field_cell(field),
                            dim_cell("-"),
                            dim_cell("-"),
                            dim_cell("missing"),
                        ],
                    });
                }
                for (column, label) in &layout.resolution.unmapped {
                    table.add_row(vec![
                        dim_cell("(unmapped)"),
                        dim_cell(column_cell_text(*column)),
                        dim_cell(label),
                        dim_cell("-"),
                    ]);
                }
                println!("{table}");
            }
        }
    }
}

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Header labels"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in CanonicalFieldId::ALL {
        table.add_row(vec![
            field_cell(field),
            Cell::new(field.kind().as_str()),
            if field.is_mandatory() {
                Cell::new("yes").fg(Color::Yellow)
            } else {
                dim_cell("no")
            },
            Cell::new(aliases_for(field).join(", ")),
        ]);
    }
    println!("{table}");
}

fn column_cell_text(index: usize) -> String {
    format!("{} ({index})", column_letter(index))
}

/// Spreadsheet column name for a 0-based index (`0` -> `A`, `26` -> `AA`).
fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: CanonicalFieldId) -> Cell {
    Cell::new(field.as_str()).fg(Color::Blue)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
