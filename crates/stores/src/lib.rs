/// Stores are for loading/storing different kinds of data.
///
/// Currently, all stores are just simple files, CSV or JSON.
pub mod csv;
pub mod part_configs;
pub mod spares;
