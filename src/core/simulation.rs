use serde::Serialize;

use crate::{
    core::{ScenarioKind, error::Result, evaluator::aggregate},
    quantity::{Percentage, Pesos},
};

/// Outcome of evaluating one location for one input value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    pub location: String,

    /// Net revenue predicted by the location's line for the input.
    pub net_revenue: Pesos,

    /// Net revenue above the baseline intercept.
    pub impact: Pesos,

    /// Impact relative to the baseline intercept.
    pub percentage: Percentage,
}

/// Results of a single recomputation pass over a scenario.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Simulation {
    pub scenario: ScenarioKind,
    pub results: Vec<SimulationResult>,
}

impl Simulation {
    /// Mean percentage earned across all locations.
    pub fn mean_percentage(&self) -> Result<Percentage> {
        aggregate(&self.results).map(Percentage)
    }
}
