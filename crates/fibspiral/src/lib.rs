//! FibSpiral library: application logic for the spiral explorer.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
