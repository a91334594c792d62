//! Indexed view of a catalog instance.
//!
//! The index enforces the expected catalog schema version and the catalog
//! invariants: unique ids inside the closed id grammar, the exact authored
//! entry order, and root-only fields staying on the root. It is
//! intentionally strict so tooling cannot silently consume a catalog whose
//! id space has drifted from the corpus organization.

use crate::catalog::identity::{CatalogKey, DatasetId, DatasetKind, ROOT_ID};
use crate::catalog::model::{
    CATALOG_SCHEMA_VERSION, DatasetCatalog, DatasetDescriptor, load_catalog_from_path,
    load_catalog_from_str,
};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "CW22_ALLOWED_CATALOG_SCHEMAS";

/// The catalog shipped with the crate.
pub const BUILTIN_CATALOG: &str = include_str!("../../catalogs/clueweb22_v1.json");

/// Catalog plus a derived lookup table keyed by dataset id.
///
/// Entries keep the authored order; the id map only accelerates lookup.
#[derive(Debug)]
pub struct DatasetIndex {
    catalog: DatasetCatalog,
    by_id: BTreeMap<DatasetId, usize>,
}

/// One catalog entry with the shared alias values resolved.
///
/// Accessors never expose a half-built record: the descriptor comes
/// straight from the validated catalog and the shared `docs_instructions`
/// fallback is substituted on read.
#[derive(Clone, Copy, Debug)]
pub struct DatasetEntry<'a> {
    descriptor: &'a DatasetDescriptor,
    shared_docs_instructions: &'a str,
}

impl<'a> DatasetEntry<'a> {
    pub fn id(&self) -> &'a DatasetId {
        &self.descriptor.id
    }

    pub fn pretty_name(&self) -> Option<&'a str> {
        self.descriptor.pretty_name.as_deref()
    }

    pub fn description(&self) -> &'a str {
        &self.descriptor.description
    }

    /// Effective access instructions: the entry's own text or the
    /// catalog-wide shared value.
    pub fn docs_instructions(&self) -> &'a str {
        self.descriptor
            .docs_instructions
            .as_deref()
            .unwrap_or(self.shared_docs_instructions)
    }

    pub fn data_access(&self) -> Option<&'a str> {
        self.descriptor.data_access.as_deref()
    }

    pub fn bibtex_ids(&self) -> &'a [String] {
        &self.descriptor.bibtex_ids
    }

    /// Parsed form of the entry id.
    ///
    /// Ids were checked during validation, so entries handed out by the
    /// index always carry a parseable id.
    pub fn kind(&self) -> Result<DatasetKind> {
        DatasetKind::parse(self.descriptor.id.as_str())
    }
}

impl DatasetIndex {
    /// Load and validate a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog)
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_catalog(load_catalog_from_str(BUILTIN_CATALOG)?)
    }

    /// Validate an already-parsed catalog and build the id table.
    pub fn from_catalog(catalog: DatasetCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_metadata(&catalog)?;
        let by_id = build_index(&catalog)?;
        Ok(Self { catalog, by_id })
    }

    /// The catalog key declared in the loaded file.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog.catalog.key
    }

    pub fn title(&self) -> &str {
        &self.catalog.catalog.title
    }

    /// The shared access-instructions text every entry aliases by default.
    pub fn shared_docs_instructions(&self) -> &str {
        &self.catalog.docs_instructions
    }

    /// Resolve an entry by id.
    ///
    /// Returns `None` instead of erroring; an unknown id is non-fatal and
    /// callers surface it with whatever fallback fits their context.
    pub fn get(&self, id: &str) -> Option<DatasetEntry<'_>> {
        let position = *self.by_id.get(id)?;
        Some(self.entry_at(position))
    }

    /// Iterates entries in the authored order.
    pub fn iter(&self) -> impl Iterator<Item = DatasetEntry<'_>> {
        (0..self.catalog.datasets.len()).map(|position| self.entry_at(position))
    }

    /// Iterates ids in the authored order.
    pub fn ids(&self) -> impl Iterator<Item = &DatasetId> {
        self.catalog.datasets.iter().map(|descriptor| &descriptor.id)
    }

    pub fn len(&self) -> usize {
        self.catalog.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.datasets.is_empty()
    }

    fn entry_at(&self, position: usize) -> DatasetEntry<'_> {
        DatasetEntry {
            descriptor: &self.catalog.datasets[position],
            shared_docs_instructions: &self.catalog.docs_instructions,
        }
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(CATALOG_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_catalog_metadata(catalog: &DatasetCatalog) -> Result<()> {
    let key = &catalog.catalog.key;
    if key.0.is_empty() {
        bail!("catalog.key must not be empty");
    }
    if !key
        .0
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got {}", key.0);
    }
    if catalog.catalog.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    if catalog
        .catalog
        .labels
        .iter()
        .any(|label| label.trim().is_empty())
    {
        bail!("catalog.labels must not contain empty entries");
    }
    if catalog.docs_instructions.trim().is_empty() {
        bail!("docs_instructions must not be empty");
    }
    Ok(())
}

fn build_index(catalog: &DatasetCatalog) -> Result<BTreeMap<DatasetId, usize>> {
    if catalog.datasets.is_empty() {
        bail!("catalog contains no datasets");
    }

    let mut map = BTreeMap::new();
    for (position, descriptor) in catalog.datasets.iter().enumerate() {
        let id = &descriptor.id;
        if id.as_str().trim().is_empty() {
            bail!("encountered dataset with no id");
        }
        let kind = DatasetKind::parse(id.as_str())
            .with_context(|| format!("dataset id '{id}' is outside the catalog grammar"))?;
        if descriptor.description.trim().is_empty() {
            bail!("dataset {id} has an empty description");
        }
        if matches!(&descriptor.docs_instructions, Some(text) if text.trim().is_empty()) {
            bail!("dataset {id} overrides docs_instructions with empty text");
        }
        if kind != DatasetKind::Root {
            // pretty_name and data_access belong to the root entry alone.
            if descriptor.pretty_name.is_some() {
                bail!("dataset {id} must not set pretty_name");
            }
            if descriptor.data_access.is_some() {
                bail!("dataset {id} must not set data_access");
            }
        }
        if map.insert(id.clone(), position).is_some() {
            bail!("duplicate dataset id {id}");
        }
    }

    // The id space is closed: a catalog documents every dataset the corpus
    // ships, in the fixed order root, categories, languages, views.
    let expected = DatasetKind::catalog_order();
    if catalog.datasets.len() != expected.len() {
        bail!(
            "catalog lists {} datasets, expected {}",
            catalog.datasets.len(),
            expected.len()
        );
    }
    for (descriptor, kind) in catalog.datasets.iter().zip(&expected) {
        let expected_id = kind.id();
        if descriptor.id != expected_id {
            bail!(
                "dataset order mismatch: found '{}' where '{}' belongs",
                descriptor.id,
                expected_id
            );
        }
    }
    debug_assert_eq!(catalog.datasets[0].id.as_str(), ROOT_ID);

    Ok(map)
}
