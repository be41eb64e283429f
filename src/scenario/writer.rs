//! Scenario serialization and file output
//!
//! Create, convert and write failures are reported as distinct errors;
//! all three are fatal to the run.

use std::io::Write;
use std::path::Path;

use crate::common::{Error, Result};

use super::model::Scenario;

/// Serialize a scenario to YAML.
pub fn to_yaml(scenario: &Scenario) -> Result<String> {
    serde_yaml::to_string(scenario).map_err(Error::ScenarioConvert)
}

/// Write a scenario document to `path` as YAML.
pub fn write(scenario: &Scenario, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path).map_err(Error::ScenarioCreate)?;
    let yaml = to_yaml(scenario)?;
    file.write_all(yaml.as_bytes())
        .map_err(Error::ScenarioWrite)?;
    Ok(())
}
