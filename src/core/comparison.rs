use serde::Serialize;

use crate::{
    core::{Dataset, ScenarioKind, dataset::percentage_difference, error::Result},
    quantity::Percentage,
};

/// How rain changes a location's line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub location: String,

    /// Change of the slope, that is of the risk effectiveness.
    pub slope_change: Percentage,

    /// Change of the intercept, that is of the base revenue.
    pub intercept_change: Percentage,
}

impl Comparison {
    /// Compare the raining scenario against the non-raining one.
    ///
    /// Follows the non-raining declaration order and skips locations missing from either scenario.
    pub fn all(dataset: &Dataset) -> Result<Vec<Self>> {
        let raining = dataset.scenario(ScenarioKind::Raining);
        dataset
            .scenario(ScenarioKind::NonRaining)
            .iter()
            .filter_map(|location| {
                raining.get(&location.name).map(|raining| (location, *raining))
            })
            .map(|(location, raining)| {
                Ok(Self {
                    location: location.name.clone(),
                    slope_change: Percentage(percentage_difference(
                        location.params.slope,
                        raining.slope,
                    )?),
                    intercept_change: Percentage(percentage_difference(
                        location.params.intercept,
                        raining.intercept,
                    )?),
                })
            })
            .collect()
    }
}
