pub mod part_configs;
