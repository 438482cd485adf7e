use crate::core::{
    Location,
    Scenario,
    ScenarioKind,
    error::{Error, Result},
    evaluator::ensure_finite,
};

/// Slopes and intercepts of both scenarios, fixed for the lifetime of the process.
#[must_use]
#[derive(Clone, Debug)]
pub struct Dataset {
    non_raining: Scenario,
    raining: Scenario,
}

impl Dataset {
    /// Regressions evaluated for the Philippine business locations over 2005–2006.
    ///
    /// The raining lines are fitted on the top 80% of days with the highest precipitation
    /// during working hours.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            non_raining: Scenario::try_new(
                ScenarioKind::NonRaining,
                vec![
                    Location::new("Luzon", 44.74, 511_429.68),
                    Location::new("Visayas", 88.12, 9_924_341.11),
                    Location::new("Mindanao", 2.93, 81_293.22),
                ],
            )?,
            raining: Scenario::try_new(
                ScenarioKind::Raining,
                vec![
                    Location::new("Luzon", 144.74, 511_429.68),
                    Location::new("Visayas", 188.12, 9_924_341.11),
                    Location::new("Mindanao", 12.93, 81_293.22),
                ],
            )?,
        })
    }

    pub fn try_new(non_raining: Scenario, raining: Scenario) -> Result<Self> {
        for (scenario, expected) in
            [(&non_raining, ScenarioKind::NonRaining), (&raining, ScenarioKind::Raining)]
        {
            if scenario.kind() != expected {
                return Err(Error::MisplacedScenario {
                    expected: expected.key(),
                    actual: scenario.kind().key(),
                });
            }
        }
        Ok(Self { non_raining, raining })
    }

    pub const fn scenario(&self, kind: ScenarioKind) -> &Scenario {
        match kind {
            ScenarioKind::NonRaining => &self.non_raining,
            ScenarioKind::Raining => &self.raining,
        }
    }

    /// Look the scenario up by its name, `raining` or `non_raining`.
    pub fn get_scenario(&self, name: &str) -> Result<&Scenario> {
        Ok(self.scenario(name.parse()?))
    }

    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        ScenarioKind::ALL.into_iter().map(|kind| self.scenario(kind))
    }
}

/// Relative change from `old` to `new`, in percent.
pub fn percentage_difference(old: f64, new: f64) -> Result<f64> {
    if old == 0.0 {
        return Err(Error::DivisionByZero { divisor: "old" });
    }
    ensure_finite("percentage difference", (new - old) / old * 100.0)
}
