use anyhow::{Context, Error};
use csv::QuoteStyle;
use parts::part::PartDescriptor;
use tracing::{info, trace};
use util::source::Source;

use crate::csv::SpareRecord;

pub type SparesSource = Source;

pub fn store_spares<P: PartDescriptor>(source: &SparesSource, spares: &[&P]) -> Result<(), Error> {
    info!("Storing spares. source: '{}', count: {}", source, spares.len());

    let output_path = source.path();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_path(output_path)
        .with_context(|| format!("Error writing spares. file: {}", output_path.display()))?;

    // the header is written even when there are no spares
    writer.write_record(SpareRecord::HEADERS)?;

    for spare in spares {
        let record = SpareRecord {
            name: spare.name().to_string(),
            description: spare.description().to_string(),
        };
        trace!("{:?}", record);

        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
