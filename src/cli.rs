mod dashboard;
mod dataset;
mod formulas;
mod risk;
mod simulate;
mod summary;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        dashboard::DashboardArgs,
        dataset::DatasetArgs,
        formulas::Formulas,
        simulate::SimulateArgs,
        summary::SummaryArgs,
    },
    core::Evaluator,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Log debugging details.
    #[clap(long, short, global = true, env = "VERBOSE")]
    pub verbose: bool,

    #[clap(flatten)]
    pub dataset: DatasetArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub const fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::INFO }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Simulate net revenue of every location in a scenario.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Show the net revenue formulas of both scenarios.
    #[clap(name = "formulas")]
    Formulas,

    /// Compare the raining scenario against the non-raining one.
    #[clap(name = "summary")]
    Summary(SummaryArgs),

    /// Everything at once: both simulations, the formulas, and the summary.
    #[clap(name = "dashboard")]
    Dashboard(Box<DashboardArgs>),
}

impl Command {
    pub fn run(self, evaluator: &Evaluator) -> Result {
        match self {
            Self::Simulate(args) => args.run(evaluator),
            Self::Formulas => {
                println!("{}", Formulas(evaluator.dataset()));
                Ok(())
            }
            Self::Summary(args) => args.run(evaluator),
            Self::Dashboard(args) => args.run(evaluator),
        }
    }
}
