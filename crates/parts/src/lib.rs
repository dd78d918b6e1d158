pub mod config;
pub mod factory;
pub mod part;
pub mod parts;
pub mod presets;
