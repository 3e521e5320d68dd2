// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Registry configuration
//!
//! Sizing parameters for [`SchemaMetadata`](crate::SchemaMetadata).
//!
//! ## Example
//!
//! ```rust
//! use sql_binder_catalog::RegistryConfig;
//!
//! let config: RegistryConfig =
//!     serde_json::from_str(r#"{ "initial_capacity": 256, "shard_amount": 16 }"#).unwrap();
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Default number of table slots reserved up front
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Registry sizing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Number of tables to reserve space for
    pub initial_capacity: usize,

    /// Number of lock shards in the underlying map
    ///
    /// Must be a power of two greater than one. `None` uses the map's
    /// default, which scales with the number of CPUs.
    pub shard_amount: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            shard_amount: None,
        }
    }
}

impl RegistryConfig {
    /// Create a configuration with the given initial capacity
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Default::default()
        }
    }

    /// Builder method: set shard amount
    pub fn with_shard_amount(mut self, shard_amount: usize) -> Self {
        self.shard_amount = Some(shard_amount);
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CatalogResult<()> {
        if let Some(shards) = self.shard_amount {
            if shards < 2 || !shards.is_power_of_two() {
                return Err(CatalogError::ConfigurationError(format!(
                    "shard_amount must be a power of two greater than 1, got {}",
                    shards
                )));
            }
        }

        Ok(())
    }
}
