use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use editstate_cli::check::CheckReport;
use editstate_cli::comment::CommentSession;
use editstate_model::FieldError;
use serde_json::Value;

pub fn print_comment_session(session: &CommentSession) {
    println!("Comment limit: {} characters", session.limit);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Input"),
        header_cell("Accepted"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, step) in session.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&step.input),
            accepted_cell(step.accepted),
            value_cell(step.value.as_ref()),
            error_cell(step.error.as_ref()),
        ]);
    }
    println!("{table}");
    if session.reset {
        println!("Reset after last edit");
    }
    println!("Valid: {}", if session.valid { "yes" } else { "no" });
    if let Some(error) = &session.error {
        println!("Error: {error}");
    }
    println!("Payload: {}", session.payload);
}

pub fn print_check_report(report: &CheckReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Kind"),
        header_cell("Accepted"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    table.add_row(vec![
        Cell::new(&report.input),
        Cell::new(report.kind.as_str()),
        accepted_cell(report.accepted),
        value_cell(report.value.as_ref()),
        match &report.error {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        },
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn accepted_cell(accepted: bool) -> Cell {
    if accepted {
        Cell::new("✓").fg(Color::Green)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}

fn value_cell(value: Option<&Value>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("(none)"),
    }
}

fn error_cell(error: Option<&FieldError>) -> Cell {
    match error {
        None => dim_cell("-"),
        Some(FieldError::Unset) => Cell::new(FieldError::Unset).fg(Color::Yellow),
        Some(error) => Cell::new(error.to_string()).fg(Color::Red),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
