use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Error};
use parts::config::PartConfig;
use parts::factory::PartsFactory;
use parts::parts::Parts;
use tracing::Level;
use tracing::{info, trace};
use util::source::Source;

use crate::csv::PartConfigRecord;

pub type PartConfigsSource = Source;

/// Loads part configurations.
///
/// Files with a `.json` extension must contain an array of arrays, e.g. `[["chain", "10-speed"], ["front_shock", "Manitou", false]]`,
/// all other files are read as CSV with the headers `Name,Description[,NeedsSpare]`.
#[tracing::instrument(level = Level::DEBUG)]
pub fn load_part_configs(source: &PartConfigsSource) -> Result<Vec<PartConfig>, Error> {
    info!("Loading part configs. source: {}", source);

    match source.extension().as_deref() {
        Some("json") => load_json(source),
        _ => load_csv(source),
    }
}

/// Loads the part configurations and builds the parts from them.
#[tracing::instrument(level = Level::DEBUG)]
pub fn load_parts(source: &PartConfigsSource) -> Result<Parts, Error> {
    let configs = load_part_configs(source)?;

    let parts = PartsFactory::build(&configs).with_context(|| format!("Building parts. source: {}", source))?;

    Ok(parts)
}

fn load_csv(source: &PartConfigsSource) -> Result<Vec<PartConfig>, Error> {
    let path = source.path();

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Error reading part configs. file: {}", path.display()))?;

    let mut configs: Vec<PartConfig> = vec![];

    for result in csv_reader.deserialize() {
        let record: PartConfigRecord = result.with_context(|| "Deserializing part config record".to_string())?;

        trace!("{:?}", record);

        configs.push(record.build_part_config());
    }
    Ok(configs)
}

fn load_json(source: &PartConfigsSource) -> Result<Vec<PartConfig>, Error> {
    let path = source.path();

    let file = File::open(path).with_context(|| format!("Error reading part configs. file: {}", path.display()))?;

    let configs: Vec<PartConfig> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Deserializing part configs. file: {}", path.display()))?;

    trace!("{:?}", configs);

    Ok(configs)
}
