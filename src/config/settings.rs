//! Runtime settings from environment variables.
//!
//! The only tunable is the catalog file location. It is read from the
//! environment (after an optional `.env` load in `main`) and falls back to a
//! sensible default, so the dashboard runs with no configuration at all.

use std::path::PathBuf;

/// Environment variable naming the catalog file to load.
pub const CONFIG_PATH_VAR: &str = "STOCKDECK_CONFIG";

/// Catalog path used when [`CONFIG_PATH_VAR`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Resolves the catalog file path from the environment, with fallback.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR).map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_never_empty() {
        // The variable may or may not be set in the test environment; either
        // way the resolved path must be usable.
        assert!(!config_path().as_os_str().is_empty());
    }
}
