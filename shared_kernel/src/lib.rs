pub mod configuration;
mod ids;
pub mod tracing;
