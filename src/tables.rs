use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{Comparison, Dataset, Formula, Scenario, ScenarioKind, Simulation},
    fmt::Interpretation,
    quantity::{Percentage, Pesos},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn change_color(change: Percentage) -> Color {
    if change.is_negative() { Color::Red } else { Color::Green }
}

pub fn build_results_table(simulation: &Simulation) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Location", "Base Net Revenue", "Risk Impact", "Percentage Earned"]);
    for result in &simulation.results {
        table.add_row(vec![
            Cell::new(&result.location),
            Cell::new(result.net_revenue).set_alignment(CellAlignment::Right),
            Cell::new(result.impact).set_alignment(CellAlignment::Right).fg(
                if result.impact > Pesos::ZERO { Color::Green } else { Color::Reset },
            ),
            Cell::new(result.percentage).set_alignment(CellAlignment::Right).fg(
                if result.percentage > Percentage::ZERO { Color::Green } else { Color::Reset },
            ),
        ]);
    }
    table
}

pub fn build_formulas_table(scenario: &Scenario) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Location", "Net Revenue"]);
    for location in scenario {
        table.add_row(vec![
            Cell::new(&location.name).add_attribute(Attribute::Bold),
            Cell::new(Formula(location.params)),
        ]);
    }
    table
}

/// Formulas of both scenarios side by side, following the non-raining declaration order.
pub fn build_formula_comparison_table(dataset: &Dataset) -> Table {
    let raining = dataset.scenario(ScenarioKind::Raining);
    let mut table = new_table();
    table.set_header(vec!["Location", "Non-Raining Formula", "Raining Formula"]);
    for location in dataset.scenario(ScenarioKind::NonRaining) {
        table.add_row(vec![
            Cell::new(&location.name),
            Cell::new(Formula(location.params)),
            raining.get(&location.name).map_or_else(
                || Cell::new("n/a").add_attribute(Attribute::Dim),
                |params| Cell::new(Formula(*params)),
            ),
        ]);
    }
    table
}

pub fn build_changes_table(comparisons: &[Comparison]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Location", "Slope Change", "Intercept Change", "Interpretation"]);
    for comparison in comparisons {
        table.add_row(vec![
            Cell::new(&comparison.location).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", comparison.slope_change))
                .set_alignment(CellAlignment::Right)
                .fg(change_color(comparison.slope_change)),
            Cell::new(format!("{:.1}", comparison.intercept_change))
                .set_alignment(CellAlignment::Right)
                .fg(change_color(comparison.intercept_change)),
            Cell::new(Interpretation(comparison)),
        ]);
    }
    table
}
