// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the SQL binder catalog
//!
//! This crate provides common testing components including:
//! - Mock catalog implementations
//! - Sample table metadata
//! - Tracing setup for tests

pub mod fixtures;
pub mod logging;
pub mod mock_catalog;

// Re-exports for convenience
pub use fixtures::TableFixtures;
pub use logging::init_tracing;
pub use mock_catalog::{MockCatalog, MockCatalogBuilder};
