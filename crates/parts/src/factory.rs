use thiserror::Error;
use tracing::debug;

use crate::config::ConfigValue;
use crate::part::Part;
use crate::parts::Parts;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Part configuration requires a name and a description. index: {index}, found: {found} element(s)")]
    MissingFields { index: usize, found: usize },
    #[error("Invalid 'needs spare' value, expected 'true' or 'false'. index: {index}, value: '{value}'")]
    InvalidNeedsSpare { index: usize, value: String },
}

/// Builds parts from configuration data.
pub struct PartsFactory;

impl PartsFactory {
    /// Builds a [`Parts`] collection, one part per configuration, in the same order.
    ///
    /// Fails on the first invalid configuration, no partial collection is returned.
    pub fn build<I, C>(configs: I) -> Result<Parts, ConfigurationError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[ConfigValue]>,
    {
        Self::build_into(configs)
    }

    /// As [`PartsFactory::build`], but collects into any collection of parts.
    pub fn build_into<T, I, C>(configs: I) -> Result<T, ConfigurationError>
    where
        T: FromIterator<Part>,
        I: IntoIterator<Item = C>,
        C: AsRef<[ConfigValue]>,
    {
        let parts = configs
            .into_iter()
            .enumerate()
            .map(|(index, config)| Self::create_part_at(index, config.as_ref()))
            .collect::<Result<Vec<Part>, _>>()?;

        debug!("Built parts. count: {}", parts.len());

        Ok(parts.into_iter().collect())
    }

    /// `[name, description, needs_spare?]`, `needs_spare` defaults to `true`; additional elements are ignored.
    pub fn create_part(config: &[ConfigValue]) -> Result<Part, ConfigurationError> {
        Self::create_part_at(0, config)
    }

    fn create_part_at(index: usize, config: &[ConfigValue]) -> Result<Part, ConfigurationError> {
        let (name, description) = match config {
            [name, description, ..] => (name, description),
            _ => {
                return Err(ConfigurationError::MissingFields {
                    index,
                    found: config.len(),
                })
            }
        };

        let needs_spare = match config.get(2) {
            None => true,
            Some(ConfigValue::Flag(flag)) => *flag,
            Some(ConfigValue::Text(text)) => {
                parse_needs_spare(text).ok_or_else(|| ConfigurationError::InvalidNeedsSpare {
                    index,
                    value: text.clone(),
                })?
            }
            Some(value @ ConfigValue::Number(_)) => {
                return Err(ConfigurationError::InvalidNeedsSpare {
                    index,
                    value: value.to_string(),
                })
            }
        };

        Ok(Part::with_needs_spare(
            name.to_string(),
            description.to_string(),
            needs_spare,
        ))
    }
}

/// `true` or `false`, ignoring ASCII case and surrounding whitespace.
fn parse_needs_spare(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
