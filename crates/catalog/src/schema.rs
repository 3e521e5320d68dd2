// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema metadata registry
//!
//! [`SchemaMetadata`] maps table names to [`TableMetadata`] for one schema.
//! The binder consults it, often from many threads at once, to resolve table
//! and column references.
//!
//! ## Case-insensitivity
//!
//! Every name crossing the API is passed through
//! [`normalize_identifier`] before the map is touched, so `Users`, `USERS`
//! and `users` always address the same entry. Stored keys are lowercase.
//!
//! ## Concurrency
//!
//! The registry is `Send + Sync` and every method takes `&self`; share it
//! behind an `Arc`. Single-key operations are atomic. [`SchemaMetadata::merge`]
//! is not: readers may observe a partially merged registry. Callers that need
//! cross-table consistency should build a new registry and swap it in rather
//! than merging into a live one.
//!
//! ## Usage
//!
//! ```rust
//! use sql_binder_catalog::{ColumnMetadata, DataType, SchemaMetadata, TableMetadata};
//!
//! let users = TableMetadata::new("Users", "app")
//!     .with_column(ColumnMetadata::new("ID", DataType::BigInt));
//! let schema = SchemaMetadata::new([("Users", users)]);
//!
//! assert!(schema.contains_table("USERS"));
//! assert!(schema.contains_column("users", "id"));
//! assert!(schema.all_column_names("orders").is_empty());
//! ```

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace, warn};

use crate::config::RegistryConfig;
use crate::error::CatalogResult;
use crate::metadata::{TableMetadata, normalize_identifier};
use crate::r#trait::Catalog;

/// Case-insensitive, thread-safe registry of table metadata
#[derive(Debug, Default)]
pub struct SchemaMetadata {
    /// Table metadata keyed by normalized table name
    tables: DashMap<String, Arc<TableMetadata>>,
}

impl SchemaMetadata {
    /// Build a registry from `(name, metadata)` pairs
    ///
    /// Names may use any case. When two names normalize to the same key, the
    /// pair that comes later in iteration order wins.
    pub fn new<I, K, V>(tables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Arc<TableMetadata>>,
    {
        let registry = Self::default();
        registry.insert_all(tables);
        debug!("Built schema metadata with {} tables", registry.len());
        registry
    }

    /// Build a registry sized by `config`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ConfigurationError` if the configuration is invalid.
    pub fn with_config<I, K, V>(config: &RegistryConfig, tables: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Arc<TableMetadata>>,
    {
        config.validate()?;

        let tables_map = match config.shard_amount {
            Some(shards) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
            }
            None => DashMap::with_capacity(config.initial_capacity),
        };

        let registry = Self { tables: tables_map };
        registry.insert_all(tables);
        debug!(
            "Built schema metadata with {} tables (capacity={}, shards={:?})",
            registry.len(),
            config.initial_capacity,
            config.shard_amount
        );
        Ok(registry)
    }

    /// Build a registry keyed by each table's own name
    pub fn from_tables(tables: impl IntoIterator<Item = TableMetadata>) -> Self {
        Self::new(tables.into_iter().map(|table| (table.name.clone(), table)))
    }

    /// Build a registry from the tables a catalog currently lists
    ///
    /// # Errors
    ///
    /// Propagates errors from the catalog and from configuration validation.
    pub async fn load<C>(catalog: &C, config: &RegistryConfig) -> CatalogResult<Self>
    where
        C: Catalog + ?Sized,
    {
        let tables = catalog.list_tables().await.inspect_err(|e| {
            warn!("Failed to load tables from catalog: {}", e);
        })?;

        Self::with_config(
            config,
            tables.into_iter().map(|table| (table.name.clone(), table)),
        )
    }

    /// Merge the tables a catalog currently lists into this registry
    ///
    /// Tables missing from the catalog are kept. Returns the number of tables
    /// merged.
    ///
    /// # Errors
    ///
    /// Propagates errors from the catalog; the registry is left untouched.
    pub async fn refresh_from<C>(&self, catalog: &C) -> CatalogResult<usize>
    where
        C: Catalog + ?Sized,
    {
        let tables = catalog.list_tables().await.inspect_err(|e| {
            warn!("Failed to refresh tables from catalog: {}", e);
        })?;

        let fresh = Self::from_tables(tables);
        self.merge(&fresh);
        Ok(fresh.len())
    }

    /// Normalized names of all tables
    ///
    /// Safe to call while other threads modify the registry; tables added or
    /// removed concurrently may or may not be included.
    pub fn all_table_names(&self) -> Vec<String> {
        self.tables.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Get table metadata by name (case-insensitive)
    pub fn get(&self, table_name: &str) -> Option<Arc<TableMetadata>> {
        self.tables
            .get(normalize_identifier(table_name).as_ref())
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Copy every table of `other` into this registry
    ///
    /// Tables of `other` replace tables of the same name here. Each table is
    /// written atomically, but the merge as a whole is not: concurrent readers
    /// may see some of `other`'s tables before the rest arrive.
    pub fn merge(&self, other: &SchemaMetadata) {
        if std::ptr::eq(self, other) {
            return;
        }

        // Snapshot first so no lock on `other` is held while writing here.
        let entries: Vec<(String, Arc<TableMetadata>)> = other
            .tables
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();

        let count = entries.len();
        for (name, table) in entries {
            self.tables.insert(name, table);
        }
        debug!("Merged {} tables into schema metadata", count);
    }

    /// Add or replace a table
    ///
    /// Returns the metadata previously stored under the same name.
    pub fn put(
        &self,
        table_name: &str,
        table: impl Into<Arc<TableMetadata>>,
    ) -> Option<Arc<TableMetadata>> {
        trace!("put table: {}", table_name);
        self.tables
            .insert(normalize_identifier(table_name).into_owned(), table.into())
    }

    /// Remove a table; does nothing if it is absent
    pub fn remove(&self, table_name: &str) -> Option<Arc<TableMetadata>> {
        trace!("remove table: {}", table_name);
        self.tables
            .remove(normalize_identifier(table_name).as_ref())
            .map(|(_, table)| table)
    }

    /// Check whether a table exists (case-insensitive)
    pub fn contains_table(&self, table_name: &str) -> bool {
        self.tables
            .contains_key(normalize_identifier(table_name).as_ref())
    }

    /// Check whether a table exists and has the given column
    pub fn contains_column(&self, table_name: &str, column_name: &str) -> bool {
        self.get(table_name)
            .is_some_and(|table| table.contains_column(column_name))
    }

    /// Normalized column names of a table, in declaration order
    ///
    /// Returns an empty vector if the table does not exist.
    pub fn all_column_names(&self, table_name: &str) -> Vec<String> {
        self.get(table_name)
            .map(|table| table.column_names().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn insert_all<I, K, V>(&self, tables: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Arc<TableMetadata>>,
    {
        for (name, table) in tables {
            self.tables
                .insert(normalize_identifier(name.as_ref()).into_owned(), table.into());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for SchemaMetadata
where
    K: AsRef<str>,
    V: Into<Arc<TableMetadata>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
