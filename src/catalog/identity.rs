//! Typed identifiers for catalog entries.
//!
//! Catalog ids are hierarchical strings (`_`, `l`, `l/en`, `b/as-a`).
//! [`DatasetKind`] is the parsed form; the id grammar is closed over the
//! subset and language model, so an id either names a dataset the corpus
//! actually ships or fails to parse.

use crate::subsets::{Language, Subset};
use anyhow::{Result, bail};
use serde::Deserialize;
use std::borrow::Borrow;
use std::fmt;

/// Id of the catalog root entry.
pub const ROOT_ID: &str = "_";

/// Raw catalog entry id, e.g. `"b/as-a"`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct DatasetId(pub String);

impl DatasetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatasetId {
    fn from(value: &str) -> Self {
        DatasetId(value.to_string())
    }
}

impl Borrow<str> for DatasetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Key naming a whole catalog file, e.g. `"clueweb22"`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CatalogKey(pub String);

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed form of a catalog id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetKind {
    /// The corpus itself (`_`).
    Root,
    /// One category (`l`, `a`, `b`).
    Subset(Subset),
    /// A language partition of a category (`l/en`).
    Language(Subset, Language),
    /// A category read through a smaller category's record schema
    /// (`b/as-a`).
    View { subset: Subset, view: Subset },
}

impl DatasetKind {
    /// Parse a catalog id. Ids outside the closed grammar are rejected.
    pub fn parse(id: &str) -> Result<DatasetKind> {
        if id == ROOT_ID {
            return Ok(DatasetKind::Root);
        }
        let (subset_tag, rest) = match id.split_once('/') {
            Some((subset_tag, rest)) => (subset_tag, Some(rest)),
            None => (id, None),
        };
        let subset = Subset::try_from(subset_tag)?;
        let Some(rest) = rest else {
            return Ok(DatasetKind::Subset(subset));
        };
        if let Some(view_tag) = rest.strip_prefix("as-") {
            let view = Subset::try_from(view_tag)?;
            if !subset.views().contains(&view) {
                bail!("category '{subset_tag}' has no '{rest}' view");
            }
            return Ok(DatasetKind::View { subset, view });
        }
        let language = Language::try_from(rest)?;
        Ok(DatasetKind::Language(subset, language))
    }

    /// The canonical string form of this id.
    pub fn id(&self) -> DatasetId {
        DatasetId(self.to_string())
    }

    /// Fully qualified dataset name, e.g. `clueweb22/b/as-a`.
    pub fn qualified(&self, corpus: &str) -> String {
        match self {
            DatasetKind::Root => corpus.to_string(),
            other => format!("{corpus}/{other}"),
        }
    }

    /// Every catalog id, in the authored order: root first, then each
    /// category followed by its language partitions and its views.
    pub fn catalog_order() -> Vec<DatasetKind> {
        let mut order = vec![DatasetKind::Root];
        for subset in Subset::ALL {
            order.push(DatasetKind::Subset(subset));
            for language in Language::ALL {
                order.push(DatasetKind::Language(subset, language));
            }
            for view in subset.views() {
                order.push(DatasetKind::View { subset, view });
            }
        }
        order
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Root => f.write_str(ROOT_ID),
            DatasetKind::Subset(subset) => f.write_str(subset.tag()),
            DatasetKind::Language(subset, language) => {
                write!(f, "{}/{}", subset.tag(), language.tag())
            }
            DatasetKind::View { subset, view } => {
                write!(f, "{}/as-{}", subset.tag(), view.tag())
            }
        }
    }
}
