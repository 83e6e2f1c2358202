//! Catalog file loading.
//!
//! The catalog is a single JSON document: an object keyed by lowercase
//! category name, each holding an array of card objects. It is read once at
//! startup and never written back; a missing or unreadable file is fatal
//! before the filter engine runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Catalog;

/// Default catalog filename, resolved against the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "cards.json";

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a valid catalog document.
    #[error("catalog file '{path}' is not valid catalog JSON: {source}")]
    Json {
        /// The path that failed to parse.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only access to a catalog file on disk.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store for the given catalog path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the catalog.
    pub fn load(&self) -> Result<Catalog, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }
}
