use std::fmt::{Display, Formatter};

/// A single element of a part configuration.
///
/// Deserializes from a JSON string, boolean or number, so `["front_shock", "Manitou", false]` and `["tire_size", 23]`
/// are valid [`PartConfig`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
}

impl Display for ConfigValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::Text(text) => f.write_str(text),
            ConfigValue::Flag(flag) => write!(f, "{}", flag),
            ConfigValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Flag(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(value.into())
    }
}

/// Raw data describing one part, `[name, description, needs_spare?]`.
///
/// The factory reads the elements positionally, see [`crate::factory::PartsFactory::create_part`].
pub type PartConfig = Vec<ConfigValue>;

/// Builds a [`PartConfig`] from a list of values convertible to [`ConfigValue`].
///
/// ```
/// use parts::part_config;
///
/// let config = part_config!["front_shock", "Manitou", false];
/// assert_eq!(config.len(), 3);
/// ```
#[macro_export]
macro_rules! part_config {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::config::ConfigValue::from($value)),*]
    };
}
