//! Corpus organization model: categories, languages, and record formats.
//!
//! This module centralizes how the ClueWeb22 categories (`L`, `A`, `B`) map
//! to record formats, language partitions, and catalog id tags. Callers
//! should rely on this model instead of hard-coding tag strings so the
//! catalog id grammar, path resolution, and documentation stay in one place.

use anyhow::{Result, bail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zip,
}

/// One of the per-document record types shipped with the corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RecordFormat {
    Txt,
    Html,
    Inlink,
    Outlink,
    Vdom,
    Jpg,
}

impl RecordFormat {
    pub const ALL: [RecordFormat; 6] = [
        RecordFormat::Txt,
        RecordFormat::Html,
        RecordFormat::Inlink,
        RecordFormat::Outlink,
        RecordFormat::Vdom,
        RecordFormat::Jpg,
    ];

    /// Top-level directory name of this format in the distribution.
    pub fn id(self) -> &'static str {
        match self {
            RecordFormat::Txt => "txt",
            RecordFormat::Html => "html",
            RecordFormat::Inlink => "inlink",
            RecordFormat::Outlink => "outlink",
            RecordFormat::Vdom => "vdom",
            RecordFormat::Jpg => "jpg",
        }
    }

    /// File extension of one compressed file, `None` while unpublished.
    // TODO Fill in the jpg layout once the screenshots are released.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            RecordFormat::Txt | RecordFormat::Inlink | RecordFormat::Outlink => Some(".json.gz"),
            RecordFormat::Html => Some(".warc.gz"),
            RecordFormat::Vdom => Some(".zip"),
            RecordFormat::Jpg => None,
        }
    }

    /// Extension of the companion offset file, where the format has one.
    pub fn offset_extension(self) -> Option<&'static str> {
        match self {
            RecordFormat::Txt | RecordFormat::Inlink | RecordFormat::Outlink => Some(".offset"),
            RecordFormat::Html => Some(".warc.offset"),
            RecordFormat::Vdom | RecordFormat::Jpg => None,
        }
    }

    pub fn compression(self) -> Option<Compression> {
        match self {
            RecordFormat::Txt
            | RecordFormat::Html
            | RecordFormat::Inlink
            | RecordFormat::Outlink => Some(Compression::Gzip),
            RecordFormat::Vdom => Some(Compression::Zip),
            RecordFormat::Jpg => None,
        }
    }

    /// Extension of members inside the archive, for archive-packed formats.
    pub fn archive_member_extension(self) -> Option<&'static str> {
        match self {
            RecordFormat::Vdom => Some(".bin"),
            _ => None,
        }
    }
}

/// A language partition of the corpus.
///
/// The ten explicit languages each hold one partition; everything else is
/// collected under [`Language::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    De,
    En,
    Es,
    Fr,
    It,
    Ja,
    Nl,
    Po,
    Pt,
    Zh,
    Other,
}

impl Language {
    /// All partitions, in the order the catalog documents them.
    pub const ALL: [Language; 11] = [
        Language::De,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::It,
        Language::Ja,
        Language::Nl,
        Language::Po,
        Language::Pt,
        Language::Zh,
        Language::Other,
    ];

    /// The ten explicitly partitioned languages, without the catch-all.
    pub const EXPLICIT: [Language; 10] = [
        Language::De,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::It,
        Language::Ja,
        Language::Nl,
        Language::Po,
        Language::Pt,
        Language::Zh,
    ];

    /// Directory id used in document identifiers and on-disk paths.
    pub fn id(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Ja => "ja",
            Language::Nl => "nl",
            Language::Po => "po",
            Language::Pt => "pt",
            Language::Zh => "zh_chs",
            Language::Other => "other",
        }
    }

    /// Suffix used in catalog ids.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::Other => "other-languages",
            other => other.id(),
        }
    }

    pub fn from_id(id: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|language| language.id() == id)
    }
}

impl TryFrom<&str> for Language {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match Language::ALL.into_iter().find(|language| language.tag() == value) {
            Some(language) => Ok(language),
            None => bail!("unknown language tag: {value}"),
        }
    }
}

/// A corpus category. Categories nest: `B` is a subset of `A`, which is a
/// subset of `L`, and each category extends the record set of the one it
/// is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Subset {
    L,
    A,
    B,
}

impl Subset {
    pub const ALL: [Subset; 3] = [Subset::L, Subset::A, Subset::B];

    /// Category name as published, e.g. in `version_B_1.0` markers.
    pub fn id(self) -> &'static str {
        match self {
            Subset::L => "L",
            Subset::A => "A",
            Subset::B => "B",
        }
    }

    /// Lowercase tag used in catalog ids.
    pub fn tag(self) -> &'static str {
        match self {
            Subset::L => "l",
            Subset::A => "a",
            Subset::B => "b",
        }
    }

    pub fn from_id(id: &str) -> Option<Subset> {
        Subset::ALL.into_iter().find(|subset| subset.id() == id)
    }

    /// Record formats required to construct one document of this category.
    pub fn formats(self) -> &'static [RecordFormat] {
        match self {
            Subset::L => &[RecordFormat::Txt],
            // TODO Add RecordFormat::Jpg to B once the screenshots are
            // released.
            Subset::A | Subset::B => &[
                RecordFormat::Txt,
                RecordFormat::Html,
                RecordFormat::Inlink,
                RecordFormat::Outlink,
                RecordFormat::Vdom,
            ],
        }
    }

    /// The category this one extends, if any.
    pub fn extends(self) -> Option<Subset> {
        match self {
            Subset::L => None,
            Subset::A => Some(Subset::L),
            Subset::B => Some(Subset::A),
        }
    }

    /// Categories this one can be read as, smallest record set first.
    ///
    /// A category contains every record type of the categories it extends,
    /// so its data can be viewed through their schemas. These views generate
    /// the `as-<tag>` catalog entries.
    pub fn views(self) -> Vec<Subset> {
        let mut chain = Vec::new();
        let mut current = self.extends();
        while let Some(subset) = current {
            chain.push(subset);
            current = subset.extends();
        }
        chain.reverse();
        chain
    }

    /// Formats this category adds over the categories it can be viewed as.
    pub fn diff_formats(self) -> Vec<RecordFormat> {
        let inherited: Vec<RecordFormat> = self
            .views()
            .iter()
            .flat_map(|view| view.formats().iter().copied())
            .collect();
        self.formats()
            .iter()
            .copied()
            .filter(|format| !inherited.contains(format))
            .collect()
    }
}

impl TryFrom<&str> for Subset {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match Subset::ALL.into_iter().find(|subset| subset.tag() == value) {
            Some(subset) => Ok(subset),
            None => bail!("unknown category tag: {value}"),
        }
    }
}
