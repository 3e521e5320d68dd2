// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog trait for schema sources
//!
//! This module defines the async Catalog trait through which bootstrap and
//! refresh code supplies batches of table metadata to a
//! [`SchemaMetadata`](crate::SchemaMetadata) registry.

use crate::error::CatalogResult;
use crate::metadata::TableMetadata;

/// Catalog trait for schema sources
///
/// A catalog produces the current set of tables of one schema. The registry
/// keys every returned table by its `name`, case-insensitively.
///
/// # Examples
///
/// ```rust,ignore
/// use sql_binder_catalog::{Catalog, RegistryConfig, SchemaMetadata};
///
/// async fn bootstrap(catalog: &impl Catalog) -> CatalogResult<SchemaMetadata> {
///     SchemaMetadata::load(catalog, &RegistryConfig::default()).await
/// }
/// ```
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// List all tables in the schema
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SourceUnavailable` if the source cannot be read.
    /// Returns `CatalogError::SerializationError` if schema data is malformed.
    async fn list_tables(&self) -> CatalogResult<Vec<TableMetadata>>;
}
