use std::fmt::{Display, Formatter};

use clap::Parser;

use crate::{
    cli::{
        formulas::Formulas,
        risk::RiskArgs,
        simulate::Report,
        summary::{Summary, compare},
    },
    core::{Comparison, Dataset, Evaluator, ScenarioKind},
    prelude::*,
};

#[derive(Parser)]
pub struct DashboardArgs {
    #[clap(flatten)]
    pub risk: RiskArgs,
}

impl DashboardArgs {
    #[instrument(skip_all)]
    pub fn run(self, evaluator: &Evaluator) -> Result {
        println!("{}", Dashboard::try_new(evaluator, &self.risk)?);
        Ok(())
    }
}

/// Simulations of every scenario, followed by the formulas and the summary.
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    reports: Vec<Report>,
    comparisons: Vec<Comparison>,
}

impl<'a> Dashboard<'a> {
    pub fn try_new(evaluator: &'a Evaluator, risk: &RiskArgs) -> Result<Self> {
        let reports = ScenarioKind::ALL
            .into_iter()
            .map(|kind| Report::try_new(evaluator, kind.key(), risk))
            .collect::<Result<Vec<_>>>()?;
        let comparisons = compare(evaluator.dataset())?;
        Ok(Self { dataset: evaluator.dataset(), reports, comparisons })
    }
}

impl Display for Dashboard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for report in &self.reports {
            writeln!(f, "{report}")?;
            writeln!(f)?;
        }
        writeln!(f, "{}", Formulas(self.dataset))?;
        writeln!(f)?;
        write!(f, "{}", Summary { dataset: self.dataset, comparisons: &self.comparisons })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_args() {
        let args =
            DashboardArgs::try_parse_from(["dashboard", "--default-risk", "600", "--risk", "Luzon=7000"])
                .unwrap();
        assert_abs_diff_eq!(args.risk.default_risk, 600.0);
        assert_eq!(args.risk.overrides.len(), 1);
        assert!(DashboardArgs::try_parse_from(["dashboard", "--default-risk", "7000.3"]).is_err());
    }

    #[test]
    fn test_sections_in_order() {
        let evaluator = Evaluator::new(Dataset::builtin().unwrap());
        let risk = RiskArgs::try_parse_from(["risk", "--default-risk", "600"]).unwrap();
        let rendered = Dashboard::try_new(&evaluator, &risk).unwrap().to_string();
        let positions: Vec<_> = [
            "Location Net Revenue Simulation (Non-Raining)",
            "Location Net Revenue Simulation (Raining)",
            "Revenue Calculation Formulas",
            "Summary of Results",
            "Key takeaways:",
        ]
        .into_iter()
        .map(|section| rendered.find(section).unwrap())
        .collect();
        assert!(positions.is_sorted());
    }

    #[test]
    fn test_unknown_location_fails() {
        let evaluator = Evaluator::new(Dataset::builtin().unwrap());
        let risk = RiskArgs::try_parse_from(["risk", "--risk", "Palawan=3"]).unwrap();
        assert!(Dashboard::try_new(&evaluator, &risk).is_err());
    }
}
