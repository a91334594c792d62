//! Local corpus root discovery.
//!
//! The catalog documents *what* the datasets are; this module knows the
//! convention for *where* a licensed copy lives. A corpus root is any
//! directory carrying the distribution's `version_<subset>_<major>.<minor>`
//! marker file. Discovery checks the `CLUEWEB22_ROOT` environment variable
//! first and falls back to `~/.clueweb22`.

use crate::subsets::Subset;
use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CORPUS_ROOT: &str = "CLUEWEB22_ROOT";
const DEFAULT_ROOT_DIR: &str = ".clueweb22";
const VERSION_MARKER_PREFIX: &str = "version_";
const README_FILE: &str = "README.txt";

/// Version recorded by the distribution's marker file, e.g. `version_B_1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorpusVersion {
    pub subset: Subset,
    pub major: u32,
    pub minor: u32,
}

fn is_corpus_root(candidate: &Path) -> bool {
    find_version_marker(candidate).is_ok_and(|marker| marker.is_some())
}

/// Validate a caller-supplied root candidate.
pub fn corpus_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_corpus_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

/// Locate the local corpus copy.
pub fn find_corpus_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ENV_CORPUS_ROOT) {
        if let Some(root) = corpus_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let conventional = home.join(DEFAULT_ROOT_DIR);
        if is_corpus_root(&conventional) {
            return Ok(conventional);
        }
    }

    bail!(
        "Unable to locate a ClueWeb22 corpus root. Set {ENV_CORPUS_ROOT} to the directory holding the version_* marker."
    );
}

/// Read the corpus version from the root's marker file.
///
/// Exactly one marker is expected; several markers mean the directory
/// mixes distributions and is rejected.
pub fn corpus_version(root: &Path) -> Result<CorpusVersion> {
    let Some(marker) = find_version_marker(root)? else {
        bail!("no version_* marker found under {}", root.display());
    };
    parse_version_marker(&marker)
        .with_context(|| format!("parsing version marker under {}", root.display()))
}

/// Read the distribution README shipped at the corpus root.
pub fn corpus_readme(root: &Path) -> Result<String> {
    let readme_path = root.join(README_FILE);
    fs::read_to_string(&readme_path)
        .with_context(|| format!("reading {}", readme_path.display()))
}

fn find_version_marker(root: &Path) -> Result<Option<String>> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return Ok(None),
    };
    let mut markers = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", root.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with(VERSION_MARKER_PREFIX) {
            markers.push(name.to_string());
        }
    }
    match markers.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(only.clone())),
        many => bail!(
            "multiple version_* markers under {}: {:?}",
            root.display(),
            many
        ),
    }
}

fn parse_version_marker(marker: &str) -> Result<CorpusVersion> {
    let [prefix, subset_id, version]: [&str; 3] = marker
        .split('_')
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| anyhow::anyhow!("malformed version marker '{marker}'"))?;
    if prefix != "version" {
        bail!("malformed version marker '{marker}'");
    }
    let Some(subset) = Subset::from_id(subset_id) else {
        bail!("version marker '{marker}' names unknown category '{subset_id}'");
    };
    let Some((major, minor)) = version.split_once('.') else {
        bail!("malformed version marker '{marker}'");
    };
    let major: u32 = major
        .parse()
        .with_context(|| format!("malformed version marker '{marker}'"))?;
    let minor: u32 = minor
        .parse()
        .with_context(|| format!("malformed version marker '{marker}'"))?;
    Ok(CorpusVersion {
        subset,
        major,
        minor,
    })
}
