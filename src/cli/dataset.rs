use std::{fs, path::PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::{
    core::{self, Dataset, Location, Scenario, ScenarioKind},
    prelude::*,
};

#[derive(Parser)]
pub struct DatasetArgs {
    /// TOML file with the scenario lines to use instead of the built-in ones.
    #[clap(long = "dataset", global = true, env = "DATASET_PATH")]
    pub path: Option<PathBuf>,
}

impl DatasetArgs {
    #[instrument(skip_all)]
    pub fn load(&self) -> Result<Dataset> {
        let Some(path) = &self.path else {
            debug!("using the built-in dataset");
            return Ok(Dataset::builtin()?);
        };
        info!(path = %path.display(), "loading the dataset…");
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        parse(&text).with_context(|| format!("invalid dataset in `{}`", path.display()))
    }
}

fn parse(text: &str) -> Result<Dataset> {
    Ok(toml::from_str::<DatasetFile>(text)?.try_into()?)
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    non_raining: Vec<LocationEntry>,
    raining: Vec<LocationEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationEntry {
    location: String,
    slope: f64,
    intercept: f64,
}

impl From<LocationEntry> for Location {
    fn from(entry: LocationEntry) -> Self {
        Self::new(entry.location, entry.slope, entry.intercept)
    }
}

impl TryFrom<DatasetFile> for Dataset {
    type Error = core::Error;

    fn try_from(file: DatasetFile) -> Result<Self, Self::Error> {
        let scenario = |kind, entries: Vec<LocationEntry>| {
            Scenario::try_new(kind, entries.into_iter().map(Location::from).collect())
        };
        Self::try_new(
            scenario(ScenarioKind::NonRaining, file.non_raining)?,
            scenario(ScenarioKind::Raining, file.raining)?,
        )
    }
}
