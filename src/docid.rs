//! ClueWeb22 document identifiers.
//!
//! A document id such as `clueweb22-de0000-00-00366` encodes the language
//! partition, stream, subdirectory, file, and document number, and fully
//! determines where the document's records live on disk. Parsing here is
//! strict: ids that violate the published layout limits are rejected.

use crate::subsets::{Language, RecordFormat};
use anyhow::{Context, Result, bail};
use std::fmt;
use std::path::PathBuf;

// Layout limits from the corpus documentation.
const MAX_SUBDIRECTORIES_PER_STREAM: u32 = 80;
const MAX_FILES_PER_SUBDIRECTORY: u32 = 100;

const DOC_ID_PREFIX: &str = "clueweb22";

/// Parsed document id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocId {
    pub language: Language,
    pub stream: u32,
    pub subdirectory: u32,
    pub file: u32,
    pub doc: u32,
}

impl DocId {
    /// Parse an id of the form
    /// `clueweb22-<language><stream:2><subdir:2>-<file:2>-<doc:5>`.
    pub fn parse(doc_id: &str) -> Result<DocId> {
        let parts: Vec<&str> = doc_id.split('-').collect();
        if parts.len() != 4 {
            bail!("invalid ClueWeb22 id: {doc_id}");
        }
        let (prefix, subdirectory_part, file_part, doc_part) =
            (parts[0], parts[1], parts[2], parts[3]);
        if prefix != DOC_ID_PREFIX {
            bail!("invalid ClueWeb22 id: {doc_id}");
        }

        if subdirectory_part.len() <= 4 || !subdirectory_part.is_ascii() {
            bail!("invalid ClueWeb22 id: {doc_id}");
        }
        let split = subdirectory_part.len() - 4;
        let language = Language::from_id(&subdirectory_part[..split])
            .with_context(|| format!("invalid ClueWeb22 id: {doc_id}"))?;
        let stream: u32 = subdirectory_part[split..split + 2]
            .parse()
            .with_context(|| format!("invalid ClueWeb22 id: {doc_id}"))?;
        let subdirectory: u32 = subdirectory_part[split + 2..]
            .parse()
            .with_context(|| format!("invalid ClueWeb22 id: {doc_id}"))?;
        if subdirectory > MAX_SUBDIRECTORIES_PER_STREAM {
            bail!("invalid ClueWeb22 id: {doc_id}");
        }

        let file: u32 = file_part
            .parse()
            .with_context(|| format!("invalid ClueWeb22 id: {doc_id}"))?;
        if file > MAX_FILES_PER_SUBDIRECTORY {
            bail!("invalid ClueWeb22 id: {doc_id}");
        }

        let doc: u32 = doc_part
            .parse()
            .with_context(|| format!("invalid ClueWeb22 id: {doc_id}"))?;

        Ok(DocId {
            language,
            stream,
            subdirectory,
            file,
            doc,
        })
    }

    /// Relative path of the file holding this document, without the format
    /// directory or extension:
    /// `<language>/<language><stream>/<language><stream><subdir>/…-<file>`.
    pub fn file_stem(&self) -> String {
        let language = self.language.id();
        let stream = format!("{language}{:02}", self.stream);
        let subdirectory = format!("{stream}{:02}", self.subdirectory);
        format!(
            "{language}/{stream}/{subdirectory}/{subdirectory}-{:02}",
            self.file
        )
    }

    /// Full relative path of this document's file for one record format,
    /// or `None` while the format's layout is unpublished.
    ///
    /// Chinese outlink files live under a shortened stream directory
    /// (`outlink/zh_chs/zh00/zh_chs0000/…` where every other format uses
    /// `zh_chs/zh_chs00/…`), matching the published distribution.
    pub fn record_path(&self, format: RecordFormat) -> Option<PathBuf> {
        let extension = format.extension()?;
        let mut stem = self.file_stem();
        if format == RecordFormat::Outlink && self.language == Language::Zh {
            stem = stem.replace("zh_chs/zh_chs", "zh_chs/zh");
        }
        Some(PathBuf::from(format!("{}/{stem}{extension}", format.id())))
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DOC_ID_PREFIX}-{}{:02}{:02}-{:02}-{:05}",
            self.language.id(),
            self.stream,
            self.subdirectory,
            self.file,
            self.doc
        )
    }
}
