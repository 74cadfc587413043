use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use coi_cli::pipeline::{AmBestResult, ExtractResult, SheetStats};
use coi_enrich::PassReport;
use coi_ingest::CplMerge;
use coi_store::StoreSummary;

pub fn print_sheets(source: &Path, sheets: &[SheetStats], columns: bool) {
    println!("Source: {}", source.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in sheets {
        table.add_row(vec![
            Cell::new(&sheet.name).fg(Color::Blue),
            count_cell(sheet.rows, Color::Reset),
            count_cell(sheet.columns, Color::Reset),
        ]);
    }
    println!("{table}");
    if columns {
        for sheet in sheets {
            print_headers(sheet);
        }
    }
}

fn print_headers(sheet: &SheetStats) {
    println!();
    println!("Sheet: {}", sheet.name);
    if sheet.headers.is_empty() {
        println!("No header names.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, name) in &sheet.headers {
        table.add_row(vec![dim_cell(position), Cell::new(name)]);
    }
    println!("{table}");
}

pub fn print_extract(result: &ExtractResult) {
    println!("Sheet: {}", result.table);
    println!("Created: {}", result.created);
    if result.skipped > 0 {
        println!("Skipped rows: {}", result.skipped);
    }
    match &result.destination {
        Some(path) => println!("Saved: {}", path.display()),
        None => println!("No records built; nothing saved."),
    }
}

pub fn print_cpl(store: &Path, merge: &CplMerge, dry_run: bool) {
    println!("Store: {}", store.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Result"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Updated"), count_cell(merge.updated, Color::Green)]);
    table.add_row(vec![
        Cell::new("Restricted"),
        count_cell(merge.restricted, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched codes"),
        count_cell(merge.unmatched, Color::DarkGrey),
    ]);
    println!("{table}");
    print_dry_run(dry_run);
}

pub fn print_passes(store: &Path, reports: &[PassReport], dry_run: bool) {
    println!("Store: {}", store.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pass"),
        header_cell("Updated"),
        header_cell("Breakdown"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            Cell::new(report.pass.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(report.updated, Color::Green),
            breakdown_cell(&report.breakdown),
        ]);
    }
    println!("{table}");
    print_dry_run(dry_run);
}

pub fn print_am_best(result: &AmBestResult) {
    println!("Carriers: {}", result.carriers);
    println!("Saved: {}", result.destination.display());
}

pub fn print_stores(dir: &Path, stores: &[StoreSummary]) {
    if stores.is_empty() {
        println!("No stores in {}", dir.display());
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Store"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for store in stores {
        let name = store
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| store.path.display().to_string());
        let records = match store.records {
            Some(count) => Cell::new(count),
            None => Cell::new("unreadable").fg(Color::Red),
        };
        table.add_row(vec![Cell::new(name), records]);
    }
    println!("{table}");
}

fn print_dry_run(dry_run: bool) {
    if dry_run {
        println!("Dry run: store not written.");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn breakdown_cell(breakdown: &[(&str, usize)]) -> Cell {
    if breakdown.is_empty() {
        return dim_cell("-");
    }
    let text = breakdown
        .iter()
        .map(|(value, count)| format!("{value}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    Cell::new(text)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
