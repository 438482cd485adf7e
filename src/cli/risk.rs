use std::{collections::BTreeMap, str::FromStr};

use clap::Parser;

use crate::{core::Scenario, prelude::*};

pub const MIN_RISK: f64 = 0.0;
pub const MAX_RISK: f64 = 7000.0;
pub const RISK_STEP: f64 = 0.3;

/// Parse a risk amount, checking that it lies on the slider grid.
///
/// The upper bound is accepted as is even though it is not a multiple of the step.
pub fn parse_risk(value: &str) -> Result<f64> {
    let risk: f64 =
        value.trim().parse().with_context(|| format!("`{value}` is not a risk amount"))?;
    ensure!(
        (MIN_RISK..=MAX_RISK).contains(&risk),
        "risk amount {risk} is outside of {MIN_RISK}..={MAX_RISK}",
    );
    let n_steps = risk / RISK_STEP;
    ensure!(
        risk >= MAX_RISK || (n_steps - n_steps.round()).abs() < 1e-6,
        "risk amount {risk} is not a multiple of {RISK_STEP}",
    );
    Ok(risk)
}

/// Risk amount for a single location, written as `LOCATION=VALUE`.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskInput {
    pub location: String,
    pub value: f64,
}

impl FromStr for RiskInput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (location, value) =
            s.split_once('=').with_context(|| format!("expected `LOCATION=VALUE`, got `{s}`"))?;
        let location = location.trim();
        ensure!(!location.is_empty(), "location name is empty in `{s}`");
        Ok(Self { location: location.to_string(), value: parse_risk(value)? })
    }
}

#[derive(Parser)]
pub struct RiskArgs {
    /// Risk amount for a location as `LOCATION=VALUE`, may be repeated.
    #[clap(long = "risk", value_name = "LOCATION=VALUE")]
    pub overrides: Vec<RiskInput>,

    /// Risk amount for the locations without an explicit `--risk`.
    #[clap(long, env = "DEFAULT_RISK", default_value = "0", value_parser = parse_risk)]
    pub default_risk: f64,
}

impl RiskArgs {
    /// Input value per location, the explicit ones taking precedence over the default.
    #[must_use]
    pub fn inputs(&self, scenario: &Scenario) -> BTreeMap<String, f64> {
        scenario
            .iter()
            .map(|location| (location.name.clone(), self.default_risk))
            .chain(self.overrides.iter().map(|input| (input.location.clone(), input.value)))
            .collect()
    }
}
