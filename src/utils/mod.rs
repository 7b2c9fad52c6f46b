//! Shared utilities.

mod config;

pub use config::{load_config, Config, OutputConfig};
