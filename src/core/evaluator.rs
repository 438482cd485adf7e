use std::collections::BTreeMap;

use crate::core::{
    Dataset,
    Location,
    LocationParams,
    ScenarioKind,
    error::{Error, Result},
    simulation::{Simulation, SimulationResult},
};

/// Net revenue of the line `(slope / 4) × input + intercept`.
///
/// The input is not clamped: keeping it within the allowed range is up to the caller.
pub fn evaluate(input_value: f64, slope: f64, intercept: f64) -> Result<f64> {
    if !slope.is_finite() {
        return Err(Error::InvalidParameter { name: "slope", value: slope });
    }
    if !intercept.is_finite() {
        return Err(Error::InvalidParameter { name: "intercept", value: intercept });
    }
    ensure_finite("net revenue", slope / 4.0 * input_value + intercept)
}

/// Net revenue above the baseline.
#[must_use]
pub fn impact(net_revenue: f64, intercept: f64) -> f64 {
    net_revenue - intercept
}

pub fn percentage_earned(impact: f64, intercept: f64) -> Result<f64> {
    if intercept == 0.0 {
        return Err(Error::DivisionByZero { divisor: "intercept" });
    }
    ensure_finite("percentage earned", impact / intercept * 100.0)
}

pub(super) fn ensure_finite(operation: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() { Ok(value) } else { Err(Error::NonFiniteResult { operation }) }
}

/// Arithmetic mean of the percentages earned.
pub fn aggregate(results: &[SimulationResult]) -> Result<f64> {
    if results.is_empty() {
        return Err(Error::EmptyInput);
    }
    #[allow(clippy::cast_precision_loss)]
    let n_results = results.len() as f64;
    Ok(results.iter().map(|result| result.percentage.0).sum::<f64>() / n_results)
}

/// Evaluates scenarios of a dataset fixed at construction.
#[must_use]
pub struct Evaluator {
    dataset: Dataset,
}

impl Evaluator {
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Evaluate every location of the scenario in declaration order.
    ///
    /// Locations missing from `inputs` are evaluated at zero.
    pub fn simulate(
        &self,
        kind: ScenarioKind,
        inputs: &BTreeMap<String, f64>,
    ) -> Result<Simulation> {
        let scenario = self.dataset.scenario(kind);
        if let Some(unknown) = inputs.keys().find(|name| scenario.get(name).is_none()) {
            return Err(Error::UnknownLocation { scenario: kind.key(), location: unknown.clone() });
        }
        let results = scenario
            .iter()
            .map(|location| {
                let input_value = inputs.get(&location.name).copied().unwrap_or_default();
                Self::evaluate_location(location, input_value)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Simulation { scenario: kind, results })
    }

    pub fn evaluate_location(location: &Location, input_value: f64) -> Result<SimulationResult> {
        let LocationParams { slope, intercept } = location.params;
        let net_revenue = evaluate(input_value, slope, intercept)?;
        let impact = impact(net_revenue, intercept);
        let percentage = percentage_earned(impact, intercept)?;
        Ok(SimulationResult {
            location: location.name.clone(),
            net_revenue: net_revenue.into(),
            impact: impact.into(),
            percentage: percentage.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::quantity::{Percentage, Pesos};

    fn simulate(kind: ScenarioKind, inputs: &[(&str, f64)]) -> Result<Simulation> {
        let inputs = inputs.iter().map(|(name, value)| ((*name).to_string(), *value)).collect();
        Evaluator::new(Dataset::builtin().unwrap()).simulate(kind, &inputs)
    }

    #[test]
    fn test_evaluate_formula() {
        for (input, slope, intercept) in
            [(0.3, 44.74, 511_429.68), (1234.5, -2.0, 10.0), (7000.0, 0.0, -3.5)]
        {
            assert_abs_diff_eq!(
                evaluate(input, slope, intercept).unwrap(),
                slope / 4.0 * input + intercept
            );
        }
    }

    #[test]
    fn test_evaluate_at_zero_input() {
        assert_abs_diff_eq!(evaluate(0.0, 188.12, 9_924_341.11).unwrap(), 9_924_341.11);
    }

    #[test]
    fn test_evaluate_does_not_clamp() {
        assert_abs_diff_eq!(evaluate(-4.0, 1.0, 10.0).unwrap(), 9.0);
        assert_abs_diff_eq!(evaluate(8000.0, 4.0, 0.0).unwrap(), 8000.0);
    }

    #[test]
    fn test_evaluate_rejects_non_finite() {
        assert!(matches!(
            evaluate(1.0, f64::NAN, 1.0),
            Err(Error::InvalidParameter { name: "slope", .. }),
        ));
        assert!(matches!(
            evaluate(1.0, 1.0, f64::NEG_INFINITY),
            Err(Error::InvalidParameter { name: "intercept", .. }),
        ));
    }

    #[test]
    fn test_evaluate_rejects_overflow() {
        assert_eq!(
            evaluate(7000.0, 1e308, 1e308),
            Err(Error::NonFiniteResult { operation: "net revenue" }),
        );
        assert_eq!(
            Evaluator::evaluate_location(&Location::new("Huge", 1e308, 1.0), 7000.0),
            Err(Error::NonFiniteResult { operation: "net revenue" }),
        );
    }

    #[test]
    fn test_percentage_earned_rejects_overflow() {
        assert_eq!(
            percentage_earned(1.0, 1e-320),
            Err(Error::NonFiniteResult { operation: "percentage earned" }),
        );
        assert_eq!(
            Evaluator::evaluate_location(&Location::new("Tiny", 4.0, 1e-320), 7000.0),
            Err(Error::NonFiniteResult { operation: "percentage earned" }),
        );
    }

    #[test]
    fn test_impact_depends_only_on_slope_and_input() {
        for intercept in [1.0, 81_293.22, 9_924_341.11] {
            let net_revenue = evaluate(6999.9, 12.93, intercept).unwrap();
            assert_relative_eq!(
                impact(net_revenue, intercept),
                12.93 / 4.0 * 6999.9,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_percentage_earned_zero_intercept() {
        for impact in [0.0, 78_295.0] {
            assert_eq!(
                percentage_earned(impact, 0.0),
                Err(Error::DivisionByZero { divisor: "intercept" }),
            );
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn test_aggregate_mean() {
        let result = |percentage| SimulationResult {
            location: String::new(),
            net_revenue: Pesos::ZERO,
            impact: Pesos::ZERO,
            percentage: Percentage(percentage),
        };
        assert_abs_diff_eq!(aggregate(&[result(10.0), result(20.0), result(0.0)]).unwrap(), 10.0);
    }

    #[test]
    fn test_luzon_non_raining_at_max_risk() {
        let simulation = simulate(ScenarioKind::NonRaining, &[("Luzon", 7000.0)]).unwrap();
        let luzon = &simulation.results[0];
        assert_eq!(luzon.location, "Luzon");
        assert_relative_eq!(luzon.net_revenue.0, 589_724.68, max_relative = 1e-12);
        assert_relative_eq!(luzon.impact.0, 78_295.0, max_relative = 1e-9);
        assert_abs_diff_eq!(luzon.percentage.0, 15.31, epsilon = 0.005);
    }

    #[test]
    fn test_mindanao_raining_at_zero_risk() {
        let simulation = simulate(ScenarioKind::Raining, &[]).unwrap();
        let mindanao =
            simulation.results.iter().find(|result| result.location == "Mindanao").unwrap();
        assert_abs_diff_eq!(mindanao.net_revenue.0, 81_293.22);
        assert_abs_diff_eq!(mindanao.impact.0, 0.0);
        assert_abs_diff_eq!(mindanao.percentage.0, 0.0);
    }

    #[test]
    fn test_simulate_keeps_declaration_order() {
        let simulation = simulate(ScenarioKind::Raining, &[("Mindanao", 3.0)]).unwrap();
        let names: Vec<_> =
            simulation.results.iter().map(|result| result.location.as_str()).collect();
        assert_eq!(names, ["Luzon", "Visayas", "Mindanao"]);
        assert_eq!(simulation.scenario, ScenarioKind::Raining);
    }

    #[test]
    fn test_simulate_unknown_location() {
        assert_eq!(
            simulate(ScenarioKind::NonRaining, &[("Palawan", 1.0)]).unwrap_err(),
            Error::UnknownLocation { scenario: "non_raining", location: "Palawan".to_string() },
        );
    }

    #[test]
    fn test_simulate_is_idempotent() {
        let inputs = [("Luzon", 120.3), ("Visayas", 6999.9)];
        let first = simulate(ScenarioKind::NonRaining, &inputs).unwrap();
        let second = simulate(ScenarioKind::NonRaining, &inputs).unwrap();
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn test_mean_percentage() {
        let simulation = simulate(ScenarioKind::NonRaining, &[("Luzon", 7000.0)]).unwrap();
        assert_abs_diff_eq!(
            simulation.mean_percentage().unwrap().0,
            simulation.results[0].percentage.0 / 3.0
        );
    }
}
