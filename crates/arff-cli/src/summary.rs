use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use arff_cli::pipeline::{AttributeRole, AttributeSummary, NormalizeOutcome};
use arff_output::format_value;

use crate::cli::SummaryFormatArg;

pub fn print_summary(outcome: &NormalizeOutcome, format: SummaryFormatArg) {
    match format {
        SummaryFormatArg::Table => print_table(outcome),
        SummaryFormatArg::Json => match serde_json::to_string_pretty(outcome) {
            Ok(json) => println!("{json}"),
            Err(error) => eprintln!("error: failed to serialize summary: {error}"),
        },
        SummaryFormatArg::None => print_written(outcome),
    }
}

/// Progress lines kept even when the summary table is off.
fn print_written(outcome: &NormalizeOutcome) {
    println!("Min/max values written to {}", outcome.minmax_path.display());
    println!("Normalized data written to {}", outcome.normalized_path.display());
}

fn print_table(outcome: &NormalizeOutcome) {
    println!("Input: {} ({} rows)", outcome.input.display(), outcome.rows);
    print_written(outcome);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Attribute"),
        header_cell("Type"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Target"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for attribute in &outcome.attributes {
        table.add_row(vec![
            name_cell(attribute),
            dim_cell(&attribute.declared_type),
            Cell::new(format_value(attribute.min)),
            Cell::new(format_value(attribute.max)),
            target_cell(attribute),
            role_cell(attribute.role),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format!("{} normalized", outcome.normalized_count()))
            .add_attribute(Attribute::Bold),
        dim_cell(outcome.attributes.len()),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn name_cell(attribute: &AttributeSummary) -> Cell {
    match attribute.role {
        AttributeRole::Class => Cell::new(&attribute.name)
            .fg(Color::Magenta)
            .add_attribute(Attribute::Bold),
        AttributeRole::Normalized => Cell::new(&attribute.name).add_attribute(Attribute::Bold),
        AttributeRole::Unchanged => Cell::new(&attribute.name),
    }
}

fn target_cell(attribute: &AttributeSummary) -> Cell {
    match attribute.target {
        Some(target) => Cell::new(format!(
            "{} .. {}",
            format_value(target.min),
            format_value(target.max)
        ))
        .fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn role_cell(role: AttributeRole) -> Cell {
    match role {
        AttributeRole::Class => Cell::new("class").fg(Color::Magenta),
        AttributeRole::Normalized => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        AttributeRole::Unchanged => dim_cell("-"),
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
