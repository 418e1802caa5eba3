//! Advisor configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

use mesa_core::DEFAULT_LOW_STOCK_THRESHOLD;

/// Largest restock budget accepted by default (whole pesos).
///
/// The table size is capped separately by [`DEFAULT_MAX_TABLE_CELLS`]; most
/// branches budget far less.
pub const DEFAULT_MAX_RESTOCK_BUDGET: i64 = 5_000_000;

/// Largest knapsack table `restock` will build by default: 50M cells of
/// `i64`, about 400 MB.
pub const DEFAULT_MAX_TABLE_CELLS: i64 = 50_000_000;

/// Advisor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// tracing filter directive (`MESA_LOG`)
    pub log_filter: String,

    /// Budget ceiling for `restock` (`MESA_MAX_RESTOCK_BUDGET`)
    pub max_restock_budget: i64,

    /// Default threshold for `low-stock` (`MESA_LOW_STOCK_THRESHOLD`)
    pub low_stock_threshold: i64,

    /// Knapsack table ceiling for `restock` (`MESA_MAX_TABLE_CELLS`)
    pub max_table_cells: i64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            log_filter: "info".to_string(),
            max_restock_budget: DEFAULT_MAX_RESTOCK_BUDGET,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AdvisorConfig::default();

        let config = AdvisorConfig {
            log_filter: lookup("MESA_LOG").unwrap_or(defaults.log_filter),

            max_restock_budget: match lookup("MESA_MAX_RESTOCK_BUDGET") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("MESA_MAX_RESTOCK_BUDGET".to_string()))?,
                None => defaults.max_restock_budget,
            },

            low_stock_threshold: match lookup("MESA_LOW_STOCK_THRESHOLD") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("MESA_LOW_STOCK_THRESHOLD".to_string()))?,
                None => defaults.low_stock_threshold,
            },

            max_table_cells: match lookup("MESA_MAX_TABLE_CELLS") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("MESA_MAX_TABLE_CELLS".to_string()))?,
                None => defaults.max_table_cells,
            },
        };

        if config.max_restock_budget <= 0 {
            return Err(ConfigError::OutOfRange {
                key: "MESA_MAX_RESTOCK_BUDGET".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if config.max_table_cells <= 0 {
            return Err(ConfigError::OutOfRange {
                key: "MESA_MAX_TABLE_CELLS".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if config.low_stock_threshold < 0 {
            return Err(ConfigError::OutOfRange {
                key: "MESA_LOW_STOCK_THRESHOLD".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{key} {reason}")]
    OutOfRange { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_overrides() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            ("MESA_LOG", "mesa_core=debug"),
            ("MESA_MAX_RESTOCK_BUDGET", " 800000 "),
            ("MESA_LOW_STOCK_THRESHOLD", "10"),
            ("MESA_MAX_TABLE_CELLS", "1000000"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "mesa_core=debug");
        assert_eq!(config.max_restock_budget, 800_000);
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.max_table_cells, 1_000_000);
    }

    #[test]
    fn test_invalid_values() {
        let err = AdvisorConfig::from_lookup(lookup_from(&[("MESA_MAX_RESTOCK_BUDGET", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = AdvisorConfig::from_lookup(lookup_from(&[("MESA_MAX_RESTOCK_BUDGET", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));

        let err = AdvisorConfig::from_lookup(lookup_from(&[("MESA_LOW_STOCK_THRESHOLD", "-3")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));

        let err = AdvisorConfig::from_lookup(lookup_from(&[("MESA_MAX_TABLE_CELLS", "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }
}
