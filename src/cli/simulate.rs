use std::fmt::{Display, Formatter};

use clap::Parser;
use serde::Serialize;

use crate::{
    cli::risk::RiskArgs,
    core::{Evaluator, Simulation},
    prelude::*,
    quantity::Percentage,
    tables::build_results_table,
};

#[derive(Parser)]
pub struct SimulateArgs {
    /// Scenario to simulate: `raining` or `non-raining`.
    #[clap(long, short, env = "SCENARIO", default_value = "non-raining")]
    pub scenario: String,

    #[clap(flatten)]
    pub risk: RiskArgs,

    /// Print the results as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

impl SimulateArgs {
    #[instrument(skip_all, fields(scenario = %self.scenario))]
    pub fn run(self, evaluator: &Evaluator) -> Result {
        let report = Report::try_new(evaluator, &self.scenario, &self.risk)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{report}");
        }
        Ok(())
    }
}

/// Simulation of a scenario together with its aggregate.
#[derive(Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub simulation: Simulation,
    pub mean_percentage: Percentage,
}

impl Report {
    pub fn try_new(evaluator: &Evaluator, scenario: &str, risk: &RiskArgs) -> Result<Self> {
        let scenario = evaluator.dataset().get_scenario(scenario)?;
        let kind = scenario.kind();
        let inputs = risk.inputs(scenario);
        debug!(%kind, ?inputs, "evaluating…");
        let simulation = evaluator
            .simulate(kind, &inputs)
            .with_context(|| format!("failed to simulate the {kind} scenario"))?;
        let mean_percentage = simulation.mean_percentage()?;
        info!(n_locations = simulation.results.len(), %mean_percentage, "simulated");
        Ok(Self { simulation, mean_percentage })
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Location Net Revenue Simulation ({})", self.simulation.scenario.label())?;
        writeln!(f)?;
        for result in &self.simulation.results {
            writeln!(f, "{} Outlet", result.location)?;
            writeln!(f, "  Base net revenue:  {}", result.net_revenue)?;
            writeln!(f, "  Percentage earned: {}", result.percentage)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", build_results_table(&self.simulation))?;
        write!(f, "Overall average percentage earned: {}", self.mean_percentage)
    }
}
