//! Bootstrap module - Application initialization and wiring
pub mod config;
pub mod tracing;
pub mod wiring;
