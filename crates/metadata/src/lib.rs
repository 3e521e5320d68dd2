// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Binder - Metadata Types
//!
//! This crate provides the value types that describe the shape of a table
//! as seen by the SQL binder:
//!
//! - [`TableMetadata`]: Table information including columns, indexes and table type
//! - [`ColumnMetadata`]: Column details including type, nullability, keys
//! - [`IndexMetadata`]: Index name, covered columns and uniqueness
//! - [`DataType`]: Unified SQL data type representation
//!
//! Every name that is used as a lookup key goes through
//! [`normalize_identifier`], so column and index lookups are
//! case-insensitive.
//!
//! ## Usage
//!
//! ```rust
//! use sql_binder_metadata::{ColumnMetadata, DataType, TableMetadata};
//!
//! let users = TableMetadata::new("Users", "app").with_columns(vec![
//!     ColumnMetadata::new("ID", DataType::BigInt).with_primary_key(),
//!     ColumnMetadata::new("Email", DataType::Varchar(Some(255))),
//! ]);
//!
//! assert!(users.contains_column("id"));
//! assert_eq!(users.column_names().collect::<Vec<_>>(), vec!["id", "email"]);
//! ```

pub mod metadata;
pub mod name;

// Re-exports
pub use metadata::{
    ColumnMetadata, DataType, IndexMetadata, TableMetadata, TableReference, TableType,
};
pub use name::normalize_identifier;
