//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use solid_core::precision::{Precision, DEFAULT_DECIMALS};

/// Decimals kept when truncating amounts.
pub const PRECISION_VAR: &str = "SOLID_PRECISION";

/// Path to a JSON catalog replacing the built-in sample.
pub const CATALOG_PATH_VAR: &str = "SOLID_CATALOG_PATH";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Decimals kept by the cart and the store (default: 2)
    pub precision_decimals: u32,

    /// JSON catalog file; `None` uses the built-in sample
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let precision_decimals = match lookup(PRECISION_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(PRECISION_VAR.to_string()))?,
            None => DEFAULT_DECIMALS,
        };

        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(AppConfig {
            precision_decimals,
            catalog_path,
        })
    }

    /// The truncation precision for this configuration.
    pub fn precision(&self) -> Result<Precision, ConfigError> {
        Precision::from_decimals(self.precision_decimals)
            .map_err(|_| ConfigError::InvalidValue(PRECISION_VAR.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            precision_decimals: DEFAULT_DECIMALS,
            catalog_path: None,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.precision().unwrap(), Precision::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (PRECISION_VAR, " 3 "),
            (CATALOG_PATH_VAR, "/tmp/catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.precision_decimals, 3);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.precision().unwrap().factor(), 1000.0);
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(CATALOG_PATH_VAR, "  ")])).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_invalid_precision() {
        let err = AppConfig::from_lookup(lookup(&[(PRECISION_VAR, "two")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SOLID_PRECISION");

        let config = AppConfig::from_lookup(lookup(&[(PRECISION_VAR, "9")])).unwrap();
        assert!(config.precision().is_err());
    }
}
