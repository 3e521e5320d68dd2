// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Binder - Catalog Layer
//!
//! This crate holds the schema metadata registry the SQL binder consults to
//! resolve table and column references.
//!
//! ## Architecture
//!
//! - [`SchemaMetadata`]: case-insensitive, thread-safe map from table name to
//!   [`TableMetadata`], with point lookups, existence checks and merges
//! - [`Catalog`]: async source of table batches used to build and refresh a
//!   registry
//! - [`StaticCatalog`]: catalog read from JSON/YAML schema documents
//! - [`RegistryConfig`]: registry sizing
//!
//! Missing tables and columns are never errors; [`CatalogError`] only covers
//! configuration and loading.
//!
//! ## Usage
//!
//! ```rust
//! use sql_binder_catalog::{ColumnMetadata, DataType, SchemaMetadata, TableMetadata};
//!
//! let schema = SchemaMetadata::new([(
//!     "Users",
//!     TableMetadata::new("Users", "app").with_column(ColumnMetadata::new("id", DataType::BigInt)),
//! )]);
//!
//! schema.merge(&SchemaMetadata::new([("Orders", TableMetadata::new("Orders", "app"))]));
//!
//! let mut names = schema.all_table_names();
//! names.sort();
//! assert_eq!(names, vec!["orders", "users"]);
//!
//! schema.remove("orders");
//! assert!(!schema.contains_table("ORDERS"));
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod schema;
pub mod r#static;
pub mod r#trait;

// Re-exports
pub use config::RegistryConfig;
pub use error::{CatalogError, CatalogResult};
pub use metadata::{
    ColumnMetadata, DataType, IndexMetadata, TableMetadata, TableReference, TableType,
    normalize_identifier,
};
pub use r#static::StaticCatalog;
pub use r#trait::Catalog;
pub use schema::SchemaMetadata;
