// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the catalog crate

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

use sql_binder_catalog::{
    CatalogError, ColumnMetadata, DataType, RegistryConfig, SchemaMetadata, StaticCatalog,
    TableMetadata, TableType,
};
use sql_binder_test_utils::{MockCatalogBuilder, TableFixtures, init_tracing};

fn name_set(schema: &SchemaMetadata) -> HashSet<String> {
    schema.all_table_names().into_iter().collect()
}

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_binder_walkthrough() {
    init_tracing();

    let users = Arc::new(TableFixtures::users());
    let schema = SchemaMetadata::new([("Users", Arc::clone(&users))]);

    assert!(Arc::ptr_eq(&schema.get("USERS").unwrap(), &users));

    schema.merge(&SchemaMetadata::new([("Orders", TableFixtures::orders())]));
    assert_eq!(name_set(&schema), set(&["users", "orders"]));

    assert!(schema.contains_column("users", "ID"));
    assert!(!schema.contains_column("users", "user_id"));

    schema.remove("orders");
    assert!(!schema.contains_table("ORDERS"));
    assert_eq!(name_set(&schema), set(&["users"]));
}

#[test]
fn test_case_variants_are_equivalent() {
    let schema = SchemaMetadata::default();
    schema.put("oRdErS", TableFixtures::orders());

    let variants = ["orders", "ORDERS", "Orders", "oRDERs"];
    let columns = ["user_id", "USER_ID", "User_Id"];

    for table in variants {
        assert!(schema.contains_table(table));
        assert_eq!(schema.get(table).unwrap().name, "Orders");
        for column in columns {
            assert!(schema.contains_column(table, column), "{}.{}", table, column);
        }
        assert_eq!(
            schema.all_column_names(table),
            vec!["id", "user_id", "total", "status", "created_at"]
        );
    }
}

#[test]
fn test_put_then_get_returns_same_metadata() {
    let schema = TableFixtures::standard_schema();
    let view = Arc::new(TableFixtures::active_users_view());

    schema.put("ACTIVE_USERS", Arc::clone(&view));

    let found = schema.get("active_users").unwrap();
    assert!(Arc::ptr_eq(&found, &view));
    assert_eq!(found.table_type, TableType::View);
}

#[test]
fn test_remove_twice() {
    let schema = TableFixtures::standard_schema();

    assert!(schema.remove("Products").is_some());
    assert!(schema.remove("products").is_none());
    assert!(!schema.contains_table("PRODUCTS"));
    assert_eq!(schema.len(), 2);
}

#[test]
fn test_merge_semantics() {
    let m1 = Arc::new(
        TableMetadata::new("A", "s").with_column(ColumnMetadata::new("old", DataType::Integer)),
    );
    let m2 = Arc::new(
        TableMetadata::new("A", "s").with_column(ColumnMetadata::new("new", DataType::Integer)),
    );
    let m3 = Arc::new(TableMetadata::new("B", "s"));

    let r1 = SchemaMetadata::new([("A", m1)]);
    let r2 = SchemaMetadata::new([("A", Arc::clone(&m2)), ("B", Arc::clone(&m3))]);

    r1.merge(&r2);

    assert_eq!(name_set(&r1), set(&["a", "b"]));
    assert!(Arc::ptr_eq(&r1.get("A").unwrap(), &m2));
    assert!(Arc::ptr_eq(&r1.get("B").unwrap(), &m3));
    assert!(r1.contains_column("a", "NEW"));
    assert!(!r1.contains_column("a", "old"));
}

#[test]
fn test_merge_keeps_tables_missing_from_other() {
    let schema = TableFixtures::standard_schema();
    schema.merge(&SchemaMetadata::default());
    assert_eq!(schema.len(), 3);
}

#[test]
fn test_unknown_table_queries() {
    let schema = TableFixtures::standard_schema();

    assert!(schema.get("invoices").is_none());
    assert!(!schema.contains_table("invoices"));
    assert!(!schema.contains_column("invoices", "id"));
    assert!(schema.all_column_names("invoices").is_empty());
}

#[test]
fn test_registry_does_not_copy_metadata() {
    let users = Arc::new(TableFixtures::users());
    let schema = SchemaMetadata::new([("users", Arc::clone(&users))]);

    assert_eq!(Arc::strong_count(&users), 2);
    drop(schema);
    assert_eq!(Arc::strong_count(&users), 1);
}

#[tokio::test]
async fn test_load_from_mock_catalog() {
    init_tracing();

    let catalog = MockCatalogBuilder::new().with_standard_schema().build();
    let schema = SchemaMetadata::load(&catalog, &RegistryConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.list_calls(), 1);
    assert_eq!(name_set(&schema), set(&["users", "orders", "products"]));
    assert!(schema.contains_column("Users", "email"));
}

#[tokio::test]
async fn test_load_propagates_catalog_error() {
    let catalog = MockCatalogBuilder::new().unavailable("down").build();
    let result = SchemaMetadata::load(&catalog, &RegistryConfig::default()).await;

    assert_eq!(
        result.unwrap_err(),
        CatalogError::SourceUnavailable("down".to_string())
    );
}

#[tokio::test]
async fn test_load_rejects_invalid_config() {
    let catalog = MockCatalogBuilder::new().with_standard_schema().build();
    let config = RegistryConfig::default().with_shard_amount(5);
    let result = SchemaMetadata::load(&catalog, &config).await;

    assert!(matches!(result, Err(CatalogError::ConfigurationError(_))));
}

#[tokio::test]
async fn test_refresh_merges_fresh_tables() {
    let schema = SchemaMetadata::new([("legacy", TableMetadata::new("legacy", "myapp"))]);
    let catalog = MockCatalogBuilder::new()
        .with_standard_schema()
        .with_table(TableFixtures::active_users_view())
        .build();

    let merged = schema.refresh_from(&catalog).await.unwrap();

    assert_eq!(merged, 4);
    assert_eq!(
        name_set(&schema),
        set(&["legacy", "users", "orders", "products", "active_users"])
    );
}

#[tokio::test]
async fn test_refresh_failure_leaves_registry_untouched() {
    let schema = TableFixtures::standard_schema();
    let catalog = MockCatalogBuilder::new().unavailable("timeout").build();

    assert!(schema.refresh_from(&catalog).await.is_err());
    assert_eq!(schema.len(), 3);
}

#[tokio::test]
async fn test_load_from_schema_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        file,
        r#"
schema: shop
tables:
  - name: Customers
    columns:
      - {{ name: Id, data_type: BigInt, is_primary_key: true }}
      - {{ name: Full_Name, data_type: Text }}
    indexes:
      - {{ name: PRIMARY, columns: [id], unique: true }}
"#
    )
    .unwrap();

    let catalog = StaticCatalog::from_path(file.path()).unwrap();
    let schema = SchemaMetadata::load(&catalog, &RegistryConfig::with_capacity(4))
        .await
        .unwrap();

    let customers = schema.get("CUSTOMERS").unwrap();
    assert_eq!(customers.schema, "shop");
    assert!(customers.contains_index("primary"));
    assert_eq!(schema.all_column_names("customers"), vec!["id", "full_name"]);
}
