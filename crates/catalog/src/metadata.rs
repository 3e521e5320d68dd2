// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for database schema information
//!
//! This module re-exports metadata types from the `sql-binder-metadata` crate.
//! These types define the shape of the tables held by the registry.

// Re-export all metadata types from the metadata crate
pub use sql_binder_metadata::{
    ColumnMetadata, DataType, IndexMetadata, TableMetadata, TableReference, TableType,
    normalize_identifier,
};
