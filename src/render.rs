//! Documentation page rendering.
//!
//! Emits the human-facing HTML fragments a catalog browser embeds: one
//! page per dataset entry plus an index page listing every id in catalog
//! order. Descriptions and instructions are authored as HTML and pass
//! through untouched; only the surrounding structure is produced here.

use crate::catalog::{DatasetEntry, DatasetIndex};
use std::fmt::Write;

/// Resolves bibtex citation keys to full bibtex records.
///
/// The citation store is a collaborator outside this crate; unresolved
/// keys render as plain keys.
pub trait CitationProvider {
    fn bibtex(&self, key: &str) -> Option<String>;
}

/// Provider for contexts without a citation store.
pub struct NoCitations;

impl CitationProvider for NoCitations {
    fn bibtex(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Render one dataset entry as a documentation page fragment.
pub fn render_page(entry: &DatasetEntry<'_>, citations: &dyn CitationProvider) -> String {
    let mut page = String::new();
    let heading = entry.pretty_name().unwrap_or(entry.id().as_str());
    let _ = writeln!(page, "<h1>{heading}</h1>");
    let _ = writeln!(page, "{}", entry.description());
    if let Some(data_access) = entry.data_access() {
        let _ = writeln!(page, "<h2>Data access</h2>");
        let _ = writeln!(page, "{data_access}");
    }
    let _ = writeln!(page, "<h2>Access instructions</h2>");
    let _ = writeln!(page, "{}", entry.docs_instructions());
    if !entry.bibtex_ids().is_empty() {
        let _ = writeln!(page, "<h2>Citation</h2>");
        for key in entry.bibtex_ids() {
            match citations.bibtex(key) {
                Some(record) => {
                    let _ = writeln!(page, "<pre>{record}</pre>");
                }
                None => {
                    let _ = writeln!(page, "<p><code>{key}</code></p>");
                }
            }
        }
    }
    page
}

/// Render the index page: every dataset id in catalog order.
pub fn render_index(index: &DatasetIndex) -> String {
    let mut page = String::new();
    let _ = writeln!(page, "<h1>{}</h1>", index.title());
    let _ = writeln!(page, "<ul>");
    for entry in index.iter() {
        let _ = writeln!(page, "<li><code>{}</code></li>", entry.id());
    }
    let _ = writeln!(page, "</ul>");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct MapCitations(BTreeMap<String, String>);

    impl CitationProvider for MapCitations {
        fn bibtex(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn root_page_carries_every_section() {
        let index = DatasetIndex::builtin().expect("builtin catalog");
        let root = index.get("_").expect("root entry");
        let page = render_page(&root, &NoCitations);
        assert!(page.contains("<h1>ClueWeb22</h1>"));
        assert!(page.contains("<h2>Data access</h2>"));
        assert!(page.contains("<h2>Access instructions</h2>"));
        assert!(page.contains("<code>Overwijk2022ClueWeb22</code>"));
    }

    #[test]
    fn resolved_citations_render_as_records() {
        let index = DatasetIndex::builtin().expect("builtin catalog");
        let root = index.get("_").expect("root entry");
        let citations = MapCitations(BTreeMap::from([(
            "Overwijk2022ClueWeb22".to_string(),
            "@inproceedings{Overwijk2022ClueWeb22, ...}".to_string(),
        )]));
        let page = render_page(&root, &citations);
        assert!(page.contains("<pre>@inproceedings{Overwijk2022ClueWeb22"));
    }

    #[test]
    fn entries_without_pretty_name_fall_back_to_the_id() {
        let index = DatasetIndex::builtin().expect("builtin catalog");
        let entry = index.get("b/as-a").expect("entry");
        let page = render_page(&entry, &NoCitations);
        assert!(page.starts_with("<h1>b/as-a</h1>"));
    }

    #[test]
    fn index_page_lists_ids_in_catalog_order() {
        let index = DatasetIndex::builtin().expect("builtin catalog");
        let page = render_index(&index);
        let root_at = page.find("<code>_</code>").expect("root listed");
        let last_at = page.find("<code>b/as-a</code>").expect("last listed");
        assert!(root_at < last_at);
    }
}
