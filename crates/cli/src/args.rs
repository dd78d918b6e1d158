use clap::ValueEnum;
use parts::presets::Preset;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "lower")]
pub enum PresetArg {
    Road,
    Mountain,
}

impl From<PresetArg> for Preset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::Road => Self::Road,
            PresetArg::Mountain => Self::Mountain,
        }
    }
}
