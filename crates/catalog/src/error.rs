// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for Catalog operations
//!
//! Registry lookups never fail: a missing table or column is a `None`, `false`
//! or empty result. These errors cover configuration and loading schema data
//! from a [`Catalog`](crate::Catalog).

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during Catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogError {
    /// Invalid registry or catalog configuration
    #[error("Invalid catalog configuration: {0}")]
    ConfigurationError(String),

    /// Failed to serialize or deserialize schema data
    #[error("Failed to serialize schema data: {0}")]
    SerializationError(String),

    /// Failed to read a schema document
    #[error("Failed to read schema file '{path}': {reason}")]
    Io { path: String, reason: String },

    /// The catalog could not produce table metadata
    #[error("Catalog source unavailable: {0}")]
    SourceUnavailable(String),

    /// The specified feature is not supported by this catalog implementation
    #[error("Feature not supported: {0}")]
    NotSupported(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Io {
            path: "schema.yaml".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read schema file 'schema.yaml': not found"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: CatalogError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }
}
