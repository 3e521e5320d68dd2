// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock catalog implementation for testing
//!
//! Provides an in-memory catalog with builder pattern for easy test setup

use std::sync::atomic::{AtomicUsize, Ordering};

use sql_binder_catalog::{Catalog, CatalogError, CatalogResult, TableMetadata};

use crate::fixtures::TableFixtures;

/// In-memory mock catalog for testing
#[derive(Debug, Default)]
pub struct MockCatalog {
    tables: Vec<TableMetadata>,
    failure: Option<CatalogError>,
    list_calls: AtomicUsize,
}

impl MockCatalog {
    /// Create a new empty mock catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table to the catalog
    pub fn add_table(mut self, table: TableMetadata) -> Self {
        self.tables.push(table);
        self
    }

    /// Make every `list_tables` call fail with `error`
    pub fn failing(mut self, error: CatalogError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Number of `list_tables` calls so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Catalog for MockCatalog {
    async fn list_tables(&self) -> CatalogResult<Vec<TableMetadata>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.tables.clone()),
        }
    }
}

/// Builder for creating mock catalogs with a fluent API
#[derive(Default)]
pub struct MockCatalogBuilder {
    catalog: MockCatalog,
}

impl MockCatalogBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the standard test schema (users, orders and products tables)
    pub fn with_standard_schema(mut self) -> Self {
        for table in TableFixtures::standard_tables() {
            self.catalog = self.catalog.add_table(table);
        }
        self
    }

    /// Add a custom table
    pub fn with_table(mut self, table: TableMetadata) -> Self {
        self.catalog = self.catalog.add_table(table);
        self
    }

    /// Make the catalog unavailable
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.catalog = self
            .catalog
            .failing(CatalogError::SourceUnavailable(reason.into()));
        self
    }

    /// Build the mock catalog
    pub fn build(self) -> MockCatalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog_list_tables() {
        let catalog = MockCatalogBuilder::new().with_standard_schema().build();
        let tables = catalog.list_tables().await.unwrap();

        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].name, "Users");
        assert_eq!(catalog.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_catalog_unavailable() {
        let catalog = MockCatalogBuilder::new()
            .with_standard_schema()
            .unavailable("connection refused")
            .build();

        let result = catalog.list_tables().await;
        assert_eq!(
            result.unwrap_err(),
            CatalogError::SourceUnavailable("connection refused".to_string())
        );
    }
}
