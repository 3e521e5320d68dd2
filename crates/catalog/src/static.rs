// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Catalog
//!
//! This module provides a catalog backed by a fixed list of tables, either
//! built in code or read from a schema document (JSON or YAML).
//!
//! ## Document format
//!
//! ```yaml
//! schema: app
//! tables:
//!   - name: users
//!     columns:
//!       - { name: id, data_type: BigInt, is_primary_key: true }
//!       - { name: email, data_type: Text, nullable: true }
//! ```
//!
//! Tables without a `schema` inherit the document's.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sql_binder_catalog::{RegistryConfig, SchemaMetadata, StaticCatalog};
//!
//! let catalog = StaticCatalog::from_path("schema.yaml")?;
//! let schema = SchemaMetadata::load(&catalog, &RegistryConfig::default()).await?;
//! ```

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::metadata::TableMetadata;
use crate::{Catalog, CatalogError, CatalogResult};

/// Top-level shape of a schema document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDocument {
    #[serde(default)]
    schema: String,
    #[serde(default)]
    tables: Vec<TableMetadata>,
}

/// Static catalog with predefined schema data
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tables: Vec<TableMetadata>,
}

impl StaticCatalog {
    /// Create a static catalog from a list of tables
    pub fn new(tables: Vec<TableMetadata>) -> Self {
        Self { tables }
    }

    /// Parse a JSON schema document
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: SchemaDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Parse a YAML schema document
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let document: SchemaDocument = serde_yaml::from_str(yaml)?;
        Ok(Self::from_document(document))
    }

    /// Load a schema document from disk
    ///
    /// The format is chosen by extension: `.json`, `.yaml` or `.yml`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ConfigurationError` for other extensions,
    /// `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::SerializationError` if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> CatalogResult<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(CatalogError::ConfigurationError(format!(
                    "Unsupported schema file extension: {}",
                    path.display()
                )));
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let catalog = parse(&content)?;
        debug!(
            "Loaded {} tables from {}",
            catalog.tables.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn from_document(document: SchemaDocument) -> Self {
        let tables = document
            .tables
            .into_iter()
            .map(|mut table| {
                if table.schema.is_empty() {
                    table.schema = document.schema.clone();
                }
                table
            })
            .collect();

        Self { tables }
    }

    /// Tables held by this catalog
    pub fn tables(&self) -> &[TableMetadata] {
        &self.tables
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn list_tables(&self) -> CatalogResult<Vec<TableMetadata>> {
        Ok(self.tables.clone())
    }
}
