use parts::config::{ConfigValue, PartConfig};

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct PartConfigRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Empty or missing means 'use the default'.
    #[serde(default)]
    pub needs_spare: Option<String>,
}

impl PartConfigRecord {
    /// Only the fields that are present are emitted, the factory checks the arity.
    ///
    /// The value of `NeedsSpare` is passed through as text, the factory decides if it is valid.
    pub fn build_part_config(&self) -> PartConfig {
        let mut config = vec![ConfigValue::Text(self.name.clone())];

        let Some(description) = &self.description else {
            return config;
        };
        config.push(ConfigValue::Text(description.clone()));

        if let Some(needs_spare) = self
            .needs_spare
            .as_ref()
            .filter(|value| !value.trim().is_empty())
        {
            config.push(ConfigValue::Text(needs_spare.clone()));
        }

        config
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all(serialize = "PascalCase"))]
pub struct SpareRecord {
    pub name: String,
    pub description: String,
}

impl SpareRecord {
    pub const HEADERS: [&'static str; 2] = ["Name", "Description"];
}
