// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for database schema information
//!
//! This module defines the types used to represent the shape of a table:
//! its columns, indexes and classification.
//!
//! Columns and indexes are stored in insertion order, keyed by their
//! normalized name. Two columns whose names differ only by case collapse
//! into one entry; the one added last wins.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::name::normalize_identifier;

/// SQL data types (unified across dialects)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DataType {
    // Numeric types
    Integer,
    BigInt,
    SmallInt,
    TinyInt,
    Decimal,
    Float,
    Double,

    // String types
    Varchar(Option<usize>),
    Char(Option<usize>),
    Text,

    // Binary types
    Binary,
    VarBinary(Option<usize>),
    Blob,

    // Date/Time types
    Date,
    Time,
    DateTime,
    Timestamp,

    // Boolean
    Boolean,

    // JSON
    Json,

    // Special types
    Uuid,
    Enum(Vec<String>),
    Array(Box<DataType>),

    // Unknown/Other (with original type name)
    Other(String),
}

/// Table type classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableType {
    #[default]
    Table,
    View,
    MaterializedView,
    Temporary,
    System,
    Other(String),
}

/// Reference to a table (for foreign keys)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableReference {
    pub table: String,
    pub column: String,
}

/// Metadata for a database column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name, as declared
    pub name: String,
    /// Data type
    pub data_type: DataType,
    /// Whether the column is nullable
    #[serde(default)]
    pub nullable: bool,
    /// Default value (as SQL expression string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Column comment/description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Whether this is a primary key column
    #[serde(default)]
    pub is_primary_key: bool,
    /// Referenced table (if foreign key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<TableReference>,
}

impl ColumnMetadata {
    /// Create a new column metadata with builder pattern
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
            default_value: None,
            comment: None,
            is_primary_key: false,
            references: None,
        }
    }

    /// Builder method: set nullable
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Builder method: set default value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    /// Builder method: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builder method: mark as primary key
    pub fn with_primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Builder method: set foreign key reference
    pub fn with_foreign_key(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.references = Some(TableReference {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    /// Whether this column references another table
    pub fn is_foreign_key(&self) -> bool {
        self.references.is_some()
    }
}

/// Metadata for a table index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Index name, as declared
    pub name: String,
    /// Covered columns, in key order
    #[serde(default)]
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness
    #[serde(default)]
    pub unique: bool,
}

impl IndexMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            unique: false,
        }
    }

    /// Builder method: set covered columns
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: mark as unique
    pub fn with_unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Metadata for a database table
///
/// Column and index lookups are case-insensitive. The serialized form lists
/// columns and indexes as arrays; keys are rebuilt on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableDefinition", into = "TableDefinition")]
pub struct TableMetadata {
    /// Table name
    pub name: String,
    /// Schema/database name
    pub schema: String,
    /// Estimated row count (for query planning)
    pub row_count_estimate: Option<u64>,
    /// Table comment/description
    pub comment: Option<String>,
    /// Table type (TABLE, VIEW, MATERIALIZED VIEW, etc.)
    pub table_type: TableType,
    columns: IndexMap<String, ColumnMetadata>,
    indexes: IndexMap<String, IndexMetadata>,
}

impl TableMetadata {
    /// Create new table metadata with builder pattern
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            row_count_estimate: None,
            comment: None,
            table_type: TableType::Table,
            columns: IndexMap::new(),
            indexes: IndexMap::new(),
        }
    }

    /// Builder method: replace columns
    pub fn with_columns(mut self, columns: Vec<ColumnMetadata>) -> Self {
        self.columns.clear();
        for column in columns {
            self.add_column(column);
        }
        self
    }

    /// Builder method: append a single column
    pub fn with_column(mut self, column: ColumnMetadata) -> Self {
        self.add_column(column);
        self
    }

    /// Builder method: replace indexes
    pub fn with_indexes(mut self, indexes: Vec<IndexMetadata>) -> Self {
        self.indexes.clear();
        for index in indexes {
            self.add_index(index);
        }
        self
    }

    /// Builder method: set row count estimate
    pub fn with_row_count(mut self, count: u64) -> Self {
        self.row_count_estimate = Some(count);
        self
    }

    /// Builder method: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builder method: set table type
    pub fn with_type(mut self, table_type: TableType) -> Self {
        self.table_type = table_type;
        self
    }

    /// Add or replace a column.
    ///
    /// Returns the column previously stored under the same normalized name.
    /// A replaced column keeps its original position.
    pub fn add_column(&mut self, column: ColumnMetadata) -> Option<ColumnMetadata> {
        let key = normalize_identifier(&column.name).into_owned();
        self.columns.insert(key, column)
    }

    /// Add or replace an index, keyed by its normalized name
    pub fn add_index(&mut self, index: IndexMetadata) -> Option<IndexMetadata> {
        let key = normalize_identifier(&index.name).into_owned();
        self.indexes.insert(key, index)
    }

    /// Get column by name (case-insensitive)
    pub fn get_column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.get(normalize_identifier(name).as_ref())
    }

    /// Check whether a column exists (case-insensitive)
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(normalize_identifier(name).as_ref())
    }

    /// Normalized column names, in declaration order
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Column definitions, in declaration order
    pub fn columns(&self) -> impl Iterator<Item = &ColumnMetadata> + '_ {
        self.columns.values()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get primary key columns
    pub fn primary_keys(&self) -> Vec<&ColumnMetadata> {
        self.columns.values().filter(|c| c.is_primary_key).collect()
    }

    /// Get index by name (case-insensitive)
    pub fn get_index(&self, name: &str) -> Option<&IndexMetadata> {
        self.indexes.get(normalize_identifier(name).as_ref())
    }

    pub fn contains_index(&self, name: &str) -> bool {
        self.indexes.contains_key(normalize_identifier(name).as_ref())
    }

    /// Index definitions, in declaration order
    pub fn indexes(&self) -> impl Iterator<Item = &IndexMetadata> + '_ {
        self.indexes.values()
    }
}

/// Serialized form of [`TableMetadata`]
#[derive(Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    name: String,
    #[serde(default)]
    schema: String,
    #[serde(default)]
    table_type: TableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    row_count_estimate: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(default)]
    columns: Vec<ColumnMetadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    indexes: Vec<IndexMetadata>,
}

impl From<TableDefinition> for TableMetadata {
    fn from(def: TableDefinition) -> Self {
        let mut table = TableMetadata::new(def.name, def.schema)
            .with_columns(def.columns)
            .with_indexes(def.indexes)
            .with_type(def.table_type);
        table.row_count_estimate = def.row_count_estimate;
        table.comment = def.comment;
        table
    }
}

impl From<TableMetadata> for TableDefinition {
    fn from(table: TableMetadata) -> Self {
        Self {
            name: table.name,
            schema: table.schema,
            table_type: table.table_type,
            row_count_estimate: table.row_count_estimate,
            comment: table.comment,
            columns: table.columns.into_values().collect(),
            indexes: table.indexes.into_values().collect(),
        }
    }
}
