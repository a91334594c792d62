//! Catalog of ClueWeb22 dataset subsets.
//!
//! The crate ships the authored dataset catalog (documentation metadata
//! for every subset the corpus distributes), the typed model of the
//! corpus organization behind the catalog's id grammar, document id
//! parsing with on-disk path resolution, and discovery of a licensed
//! local corpus copy.

pub mod catalog;
pub mod corpus;
pub mod docid;
pub mod render;
pub mod subsets;

pub use catalog::{
    BUILTIN_CATALOG, CATALOG_SCHEMA, CATALOG_SCHEMA_VERSION, CatalogKey, CatalogMetadata,
    DEFAULT_CATALOG_PATH, DatasetCatalog, DatasetDescriptor, DatasetEntry, DatasetId, DatasetIndex,
    DatasetKind, ROOT_ID, load_catalog_from_path, load_catalog_from_str, validate_catalog_file,
    validate_catalog_value,
};
pub use corpus::{
    CorpusVersion, ENV_CORPUS_ROOT, corpus_readme, corpus_root_from_hint, corpus_version,
    find_corpus_root,
};
pub use docid::DocId;
pub use render::{CitationProvider, NoCitations, render_index, render_page};
pub use subsets::{Compression, Language, RecordFormat, Subset};
