pub mod args;

#[cfg(feature = "tracing")]
pub mod tracing;
