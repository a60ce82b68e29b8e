//! Catalog error types.

use std::path::PathBuf;

use crate::domain::{DomainError, InvalidLocation, InvalidLocationCode, LocationCode, TimeError};

/// Errors that can occur when building or loading a leg catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A location code failed validation
    #[error(transparent)]
    InvalidCode(#[from] InvalidLocationCode),

    /// A location has out-of-range coordinates
    #[error("location {code}: {source}")]
    InvalidLocation {
        code: LocationCode,
        source: InvalidLocation,
    },

    /// The same code was registered twice
    #[error("duplicate location {0}")]
    DuplicateLocation(LocationCode),

    /// A leg refers to a location that isn't in the catalog
    #[error("unknown location {0}")]
    UnknownLocation(LocationCode),

    /// A leg time failed to parse
    #[error("leg {index}: {source}")]
    InvalidTime { index: usize, source: TimeError },

    /// A leg failed validation
    #[error("leg {index}: {source}")]
    InvalidLeg { index: usize, source: DomainError },
}
