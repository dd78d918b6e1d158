//! Built-in part configurations for common bicycle types.

use strum_macros::{Display, EnumString, VariantArray};

use crate::config::PartConfig;
use crate::part_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Preset {
    Road,
    Mountain,
}

impl Preset {
    pub fn configs(&self) -> Vec<PartConfig> {
        match self {
            Preset::Road => road_config(),
            Preset::Mountain => mountain_config(),
        }
    }
}

pub fn road_config() -> Vec<PartConfig> {
    vec![
        part_config!["chain", "10-speed"],
        part_config!["tire_size", "23"],
        part_config!["tape_color", "red"],
    ]
}

pub fn mountain_config() -> Vec<PartConfig> {
    vec![
        part_config!["chain", "10-speed"],
        part_config!["tire_size", "2.1"],
        part_config!["front_shock", "Manitou", false],
        part_config!["rear_shock", "Fox"],
    ]
}
