// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample table metadata

use sql_binder_catalog::{
    ColumnMetadata, DataType, IndexMetadata, SchemaMetadata, TableMetadata, TableType,
};

/// Sample tables for testing
pub struct TableFixtures;

impl TableFixtures {
    /// `Users` table: id, email, name, created_at
    pub fn users() -> TableMetadata {
        TableMetadata::new("Users", "myapp")
            .with_columns(vec![
                ColumnMetadata::new("ID", DataType::BigInt)
                    .with_nullable(false)
                    .with_primary_key(),
                ColumnMetadata::new("Email", DataType::Varchar(Some(255))).with_nullable(false),
                ColumnMetadata::new("Name", DataType::Varchar(Some(100))).with_nullable(true),
                ColumnMetadata::new("created_at", DataType::Timestamp).with_nullable(true),
            ])
            .with_indexes(vec![
                IndexMetadata::new("PRIMARY").with_columns(["id"]).with_unique(),
                IndexMetadata::new("idx_users_email")
                    .with_columns(["email"])
                    .with_unique(),
            ])
            .with_row_count(50000)
            .with_comment("User account information")
    }

    /// `Orders` table: id, user_id, total, status, created_at
    pub fn orders() -> TableMetadata {
        TableMetadata::new("Orders", "myapp")
            .with_columns(vec![
                ColumnMetadata::new("id", DataType::BigInt)
                    .with_nullable(false)
                    .with_primary_key(),
                ColumnMetadata::new("user_id", DataType::BigInt)
                    .with_nullable(false)
                    .with_foreign_key("users", "id"),
                ColumnMetadata::new("total", DataType::Decimal).with_nullable(true),
                ColumnMetadata::new("status", DataType::Varchar(Some(50)))
                    .with_nullable(false)
                    .with_default("'pending'"),
                ColumnMetadata::new("created_at", DataType::Timestamp).with_nullable(true),
            ])
            .with_row_count(100000)
            .with_type(TableType::Table)
    }

    /// `products` table: id, name, price, stock
    pub fn products() -> TableMetadata {
        TableMetadata::new("products", "myapp")
            .with_columns(vec![
                ColumnMetadata::new("id", DataType::BigInt)
                    .with_nullable(false)
                    .with_primary_key(),
                ColumnMetadata::new("name", DataType::Varchar(Some(255))).with_nullable(false),
                ColumnMetadata::new("price", DataType::Decimal).with_nullable(false),
                ColumnMetadata::new("stock", DataType::Integer).with_nullable(true),
            ])
            .with_row_count(10000)
    }

    /// `active_users` view over `Users`
    pub fn active_users_view() -> TableMetadata {
        TableMetadata::new("Active_Users", "myapp")
            .with_columns(vec![
                ColumnMetadata::new("id", DataType::BigInt),
                ColumnMetadata::new("email", DataType::Varchar(Some(255))),
            ])
            .with_type(TableType::View)
    }

    /// Numbered table `t{n}` with columns `c0..c{columns}`
    pub fn numbered(n: usize, columns: usize) -> TableMetadata {
        TableMetadata::new(format!("T{}", n), "bench").with_columns(
            (0..columns)
                .map(|c| ColumnMetadata::new(format!("C{}", c), DataType::Integer))
                .collect(),
        )
    }

    /// All standard tables
    pub fn standard_tables() -> Vec<TableMetadata> {
        vec![Self::users(), Self::orders(), Self::products()]
    }

    /// Registry holding the standard tables
    pub fn standard_schema() -> SchemaMetadata {
        SchemaMetadata::from_tables(Self::standard_tables())
    }
}
