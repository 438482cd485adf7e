use std::fmt::{Display, Formatter};

use clap::Parser;

use crate::{
    core::{Comparison, Dataset, Evaluator},
    fmt::KEY_TAKEAWAYS,
    prelude::*,
    tables::{build_changes_table, build_formula_comparison_table},
};

#[derive(Parser)]
pub struct SummaryArgs {
    /// Print the comparison as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

impl SummaryArgs {
    #[instrument(skip_all)]
    pub fn run(self, evaluator: &Evaluator) -> Result {
        let comparisons = compare(evaluator.dataset())?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&comparisons)?);
        } else {
            println!("{}", Summary { dataset: evaluator.dataset(), comparisons: &comparisons });
        }
        Ok(())
    }
}

pub fn compare(dataset: &Dataset) -> Result<Vec<Comparison>> {
    let comparisons = Comparison::all(dataset).context("failed to compare the scenarios")?;
    info!(n_locations = comparisons.len(), "compared");
    Ok(comparisons)
}

/// Side-by-side formulas, changes due to rain, and the key takeaways.
pub struct Summary<'a> {
    pub dataset: &'a Dataset,
    pub comparisons: &'a [Comparison],
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Summary of Results")?;
        writeln!(f, "{}", build_formula_comparison_table(self.dataset))?;
        writeln!(f)?;
        writeln!(f, "Percentage changes due to rain:")?;
        writeln!(f, "{}", build_changes_table(self.comparisons))?;
        writeln!(f)?;
        write!(f, "Key takeaways:")?;
        for takeaway in KEY_TAKEAWAYS {
            write!(f, "\n- {takeaway}")?;
        }
        Ok(())
    }
}
