use std::{
    collections::HashSet,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Regression over all working days.
    NonRaining,

    /// Regression over the days with the highest working-hours precipitation.
    Raining,
}

impl ScenarioKind {
    pub const ALL: [Self; 2] = [Self::NonRaining, Self::Raining];

    /// Dataset key of the scenario.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NonRaining => "non_raining",
            Self::Raining => "raining",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NonRaining => "Non-Raining",
            Self::Raining => "Raining",
        }
    }
}

impl Display for ScenarioKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "non_raining" | "non-raining" => Ok(Self::NonRaining),
            "raining" => Ok(Self::Raining),
            _ => Err(Error::UnknownScenario(name.to_string())),
        }
    }
}

/// Precomputed regression line of a single location.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LocationParams {
    /// Check that the parameters can be evaluated and compared.
    pub fn validate(self) -> Result<Self> {
        if !self.slope.is_finite() {
            return Err(Error::InvalidParameter { name: "slope", value: self.slope });
        }
        if !self.intercept.is_finite() {
            return Err(Error::InvalidParameter { name: "intercept", value: self.intercept });
        }
        if self.intercept == 0.0 {
            return Err(Error::DivisionByZero { divisor: "intercept" });
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub name: String,
    pub params: LocationParams,
}

impl Location {
    pub fn new(name: impl Into<String>, slope: f64, intercept: f64) -> Self {
        Self { name: name.into(), params: LocationParams { slope, intercept } }
    }
}

/// Locations of a scenario, in declaration order.
#[must_use]
#[derive(Clone, Debug)]
pub struct Scenario {
    kind: ScenarioKind,
    locations: Vec<Location>,
}

impl Scenario {
    pub fn try_new(kind: ScenarioKind, locations: Vec<Location>) -> Result<Self> {
        if locations.is_empty() {
            return Err(Error::EmptyScenario(kind.key()));
        }
        let mut seen = HashSet::with_capacity(locations.len());
        for location in &locations {
            if !seen.insert(location.name.as_str()) {
                return Err(Error::DuplicateLocation {
                    scenario: kind.key(),
                    location: location.name.clone(),
                });
            }
            location.params.validate()?;
        }
        Ok(Self { kind, locations })
    }

    pub const fn kind(&self) -> ScenarioKind {
        self.kind
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LocationParams> {
        self.locations.iter().find(|location| location.name == name).map(|location| &location.params)
    }
}

impl<'a> IntoIterator for &'a Scenario {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
