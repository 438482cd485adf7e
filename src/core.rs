pub mod comparison;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod scenario;
pub mod simulation;

pub use self::{
    comparison::Comparison,
    dataset::Dataset,
    error::Error,
    evaluator::Evaluator,
    formula::Formula,
    scenario::{Location, LocationParams, Scenario, ScenarioKind},
    simulation::Simulation,
};
