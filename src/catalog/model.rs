//! Serde model for catalog files.
//!
//! A catalog file is an authored JSON document under `catalogs/`: a
//! `schema_version` marker, catalog metadata, one shared
//! `docs_instructions` string, and the descriptor list in documentation
//! order. Parsing performs no semantic checks beyond shape; those live in
//! [`crate::catalog::DatasetIndex`].

use crate::catalog::identity::{CatalogKey, DatasetId};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Version marker accepted for catalog files.
pub const CATALOG_SCHEMA_VERSION: &str = "dataset_catalog_v1";

/// A parsed catalog file.
#[derive(Clone, Debug, Deserialize)]
pub struct DatasetCatalog {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    /// Shared access-instructions text; entries inherit it unless they
    /// carry their own.
    pub docs_instructions: String,
    pub datasets: Vec<DatasetDescriptor>,
}

/// Metadata naming the catalog as a whole.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// One authored catalog entry.
///
/// `description`, `docs_instructions`, and `data_access` are HTML
/// fragments; the renderer embeds them as-is.
#[derive(Clone, Debug, Deserialize)]
pub struct DatasetDescriptor {
    pub id: DatasetId,
    #[serde(default)]
    pub pretty_name: Option<String>,
    pub description: String,
    #[serde(default)]
    pub docs_instructions: Option<String>,
    #[serde(default)]
    pub data_access: Option<String>,
    #[serde(default)]
    pub bibtex_ids: Vec<String>,
}

/// Parse a catalog file from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<DatasetCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing catalog {}", path.display()))
}

/// Parse a catalog from in-memory JSON (used for the embedded catalog).
pub fn load_catalog_from_str(data: &str) -> Result<DatasetCatalog> {
    serde_json::from_str(data).context("parsing embedded catalog")
}
