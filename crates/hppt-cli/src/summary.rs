use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hppt_config::Configuration;
use hppt_model::{
    CrosshairParameters, ExperimentParameters, ExperimentType, GraphData, ModQUpdate, PlotType,
};

/// Key/value overview of one engine run.
pub fn calculation_table(experiment: &ExperimentParameters, graph: &GraphData) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Quantity"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Ei (meV)"), Cell::new(format_number(experiment.ei))]);
    table.add_row(vec![Cell::new("S2 (deg)"), Cell::new(format_number(experiment.s2))]);
    table.add_row(vec![
        Cell::new("alpha_p (deg)"),
        Cell::new(format_number(experiment.alpha_p)),
    ]);
    table.add_row(vec![
        Cell::new("Plot type"),
        Cell::new(experiment.plot_type.as_str()),
    ]);
    table.add_row(vec![
        Cell::new("ΔE range (meV)"),
        range_cell(extent(&graph.e)),
    ]);
    table.add_row(vec![Cell::new("Q_low range (1/Å)"), range_cell(extent(&graph.q_low))]);
    table.add_row(vec![Cell::new("Q_hi range (1/Å)"), range_cell(extent(&graph.q_hi))]);

    let total = graph.angular.rows() * graph.angular.cols();
    table.add_row(vec![
        Cell::new("Accessible cells"),
        Cell::new(format!("{} / {}", graph.accessible_count(), total)),
    ]);
    table.add_row(vec![
        Cell::new(format!("{} range", graph.plot_type.as_str()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        range_cell(graph.angular.finite_range()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn crosshair_table(
    experiment_type: ExperimentType,
    crosshair: &CrosshairParameters,
    update: ModQUpdate,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Crosshair"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Mode"), Cell::new(experiment_type.as_str())]);
    table.add_row(vec![
        Cell::new("ΔE (meV)"),
        Cell::new(format_number(crosshair.delta_e)),
    ]);
    table.add_row(vec![
        Cell::new("|Q| (1/Å)"),
        Cell::new(format_number(crosshair.mod_q)).add_attribute(Attribute::Bold),
    ]);
    let source = match update {
        ModQUpdate::Stored(_) => Cell::new("entered"),
        ModQUpdate::Derived(_) => Cell::new("lattice").fg(Color::Green),
        ModQUpdate::Rejected { derived } => Cell::new(format!(
            "rejected, lattice gives {}",
            format_number(derived)
        ))
        .fg(Color::Yellow)
        .add_attribute(Attribute::Bold),
    };
    table.add_row(vec![Cell::new("|Q| source"), source]);
    table
}

pub fn plot_types_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Label"),
        header_cell("Key"),
    ]);
    apply_table_style(&mut table);
    for plot_type in PlotType::all() {
        let name = if *plot_type == PlotType::default() {
            Cell::new(format!("{} (default)", plot_type.short_name()))
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(plot_type.short_name())
        };
        table.add_row(vec![
            name,
            Cell::new(plot_type.as_str()),
            dim_cell(plot_type.key()),
        ]);
    }
    table
}

pub fn config_table(config: &Configuration) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Settings"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("File"),
        Cell::new(config.config_file_path().display()),
    ]);
    let missing = config.missing_keys();
    let status = if missing.is_empty() {
        Cell::new("valid").fg(Color::Green)
    } else {
        Cell::new("outdated").fg(Color::Red).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![Cell::new("Status"), status]);
    if !missing.is_empty() {
        table.add_row(vec![Cell::new("Missing keys"), Cell::new(missing.join("\n"))]);
    }
    let invalid: Vec<String> = config.value_errors().iter().map(ToString::to_string).collect();
    if !invalid.is_empty() {
        table.add_row(vec![
            Cell::new("Invalid values"),
            Cell::new(invalid.join("\n")).fg(Color::Red),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn range_cell(range: Option<(f64, f64)>) -> Cell {
    match range {
        Some((low, high)) => Cell::new(format!(
            "{} .. {}",
            format_number(low),
            format_number(high)
        )),
        None => dim_cell("-"),
    }
}

/// Smallest and largest finite value.
fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((low, high)) => Some((low.min(v), high.max(v))),
        })
}

pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}
