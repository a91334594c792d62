//! Dataset catalog wiring.
//!
//! This module wraps dataset catalogs on disk (for example
//! `catalogs/clueweb22_v1.json`) so tooling can load a validated snapshot
//! and expose consistent identifiers. Types here mirror the catalog file
//! fields; callers use `DatasetIndex` for lookups and ordered iteration
//! over the documented datasets.

pub mod identity;
pub mod index;
pub mod model;
pub mod schema;

pub use identity::{CatalogKey, DatasetId, DatasetKind, ROOT_ID};
pub use index::{BUILTIN_CATALOG, DatasetEntry, DatasetIndex};
pub use model::{
    CATALOG_SCHEMA_VERSION, CatalogMetadata, DatasetCatalog, DatasetDescriptor,
    load_catalog_from_path, load_catalog_from_str,
};
pub use schema::{CATALOG_SCHEMA, validate_catalog_file, validate_catalog_value};

/// Default relative path to the bundled catalog source file.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/clueweb22_v1.json";
