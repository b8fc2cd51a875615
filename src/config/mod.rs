/// Product catalog loading from config.toml
pub mod catalog;

/// Runtime settings from environment variables
pub mod settings;
