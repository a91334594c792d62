// Catalog store guard rails: lookup, iteration order, and the invariants
// the index enforces on catalog files.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use clueweb22_catalog::{DatasetIndex, DatasetKind, Language, Subset};
use common::{index_from_value, sample_catalog_value, write_catalog};
use serde_json::json;

const EXPECTED_ORDER: [&str; 40] = [
    "_",
    "l",
    "l/de",
    "l/en",
    "l/es",
    "l/fr",
    "l/it",
    "l/ja",
    "l/nl",
    "l/po",
    "l/pt",
    "l/zh",
    "l/other-languages",
    "a",
    "a/de",
    "a/en",
    "a/es",
    "a/fr",
    "a/it",
    "a/ja",
    "a/nl",
    "a/po",
    "a/pt",
    "a/zh",
    "a/other-languages",
    "a/as-l",
    "b",
    "b/de",
    "b/en",
    "b/es",
    "b/fr",
    "b/it",
    "b/ja",
    "b/nl",
    "b/po",
    "b/pt",
    "b/zh",
    "b/other-languages",
    "b/as-l",
    "b/as-a",
];

fn code_tokens(text: &str) -> Vec<&str> {
    text.split("<code>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</code>").next())
        .collect()
}

#[test]
fn every_entry_has_description_and_instructions() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    for entry in index.iter() {
        assert!(
            !entry.description().trim().is_empty(),
            "{} has an empty description",
            entry.id()
        );
        assert!(
            !entry.docs_instructions().trim().is_empty(),
            "{} has empty access instructions",
            entry.id()
        );
    }
    Ok(())
}

#[test]
fn iteration_reproduces_the_authored_order() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    let ids: Vec<&str> = index.ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, EXPECTED_ORDER);
    let canonical: Vec<String> = DatasetKind::catalog_order()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(ids, canonical);
    Ok(())
}

#[test]
fn language_children_are_identical_across_categories() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    let children_of = |category: &str| -> Vec<String> {
        let prefix = format!("{category}/");
        index
            .ids()
            .filter_map(|id| id.as_str().strip_prefix(&prefix))
            .filter(|suffix| !suffix.starts_with("as-"))
            .map(str::to_string)
            .collect()
    };
    let l = children_of("l");
    assert_eq!(l, children_of("a"));
    assert_eq!(l, children_of("b"));
    let expected: Vec<String> = Language::ALL
        .into_iter()
        .map(|language| language.tag().to_string())
        .collect();
    assert_eq!(l, expected);
    Ok(())
}

#[test]
fn other_languages_lists_exactly_the_explicit_codes() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    let explicit: Vec<&str> = Language::EXPLICIT.into_iter().map(Language::tag).collect();
    for subset in Subset::ALL {
        let id = format!("{}/other-languages", subset.tag());
        let entry = index.get(&id).expect("other-languages entry present");
        let mentioned: Vec<&str> = code_tokens(entry.description())
            .into_iter()
            .filter(|token| Language::ALL.iter().any(|language| language.tag() == *token))
            .collect();
        assert_eq!(mentioned, explicit, "{id} must list the ten explicit codes");
    }
    Ok(())
}

#[test]
fn docs_instructions_alias_the_shared_value() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    let shared = index.shared_docs_instructions();
    for entry in index.iter() {
        assert_eq!(
            entry.docs_instructions(),
            shared,
            "{} does not alias the shared instructions",
            entry.id()
        );
    }
    Ok(())
}

#[test]
fn unknown_id_lookup_is_not_found() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    for id in ["c", "", "l/xx", "as-l", "b/as-b"] {
        assert!(index.get(id).is_none(), "{id:?} should not resolve");
    }
    Ok(())
}

#[test]
fn root_entry_carries_name_access_and_citations() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    let root = index.get("_").expect("root entry");
    assert_eq!(root.pretty_name(), Some("ClueWeb22"));
    assert!(root.data_access().is_some_and(|text| !text.is_empty()));
    assert!(!root.bibtex_ids().is_empty());
    Ok(())
}

#[test]
fn non_root_entries_leave_root_fields_unset() -> Result<()> {
    let index = DatasetIndex::builtin()?;
    for entry in index.iter().skip(1) {
        assert_eq!(entry.pretty_name(), None, "{}", entry.id());
        assert_eq!(entry.data_access(), None, "{}", entry.id());
    }
    Ok(())
}

#[test]
fn sample_catalog_loads_from_disk() -> Result<()> {
    let file = write_catalog(&sample_catalog_value())?;
    let index = DatasetIndex::load(file.path())?;
    assert_eq!(index.len(), EXPECTED_ORDER.len());
    assert_eq!(index.key().0, "sample_corpus");
    Ok(())
}

#[test]
fn rejects_unknown_schema_version() -> Result<()> {
    let mut value = sample_catalog_value();
    value["schema_version"] = json!("unexpected");
    assert!(index_from_value(&value).is_err());
    Ok(())
}

#[test]
fn rejects_duplicate_ids() -> Result<()> {
    let mut value = sample_catalog_value();
    let duplicate = value["datasets"][1].clone();
    value["datasets"][39] = duplicate;
    assert!(index_from_value(&value).is_err());
    Ok(())
}

#[test]
fn rejects_missing_entries() -> Result<()> {
    let mut value = sample_catalog_value();
    value["datasets"]
        .as_array_mut()
        .expect("datasets array")
        .pop();
    assert!(index_from_value(&value).is_err());
    Ok(())
}

#[test]
fn rejects_reordered_entries() -> Result<()> {
    let mut value = sample_catalog_value();
    value["datasets"]
        .as_array_mut()
        .expect("datasets array")
        .swap(2, 3);
    assert!(index_from_value(&value).is_err());
    Ok(())
}

#[test]
fn rejects_ids_outside_the_grammar() -> Result<()> {
    let mut value = sample_catalog_value();
    value["datasets"][39]["id"] = json!("b/as-b");
    assert!(index_from_value(&value).is_err());
    Ok(())
}

#[test]
fn rejects_root_fields_on_other_entries() -> Result<()> {
    let mut value = sample_catalog_value();
    value["datasets"][1]["data_access"] = json!("<p>stray</p>");
    assert!(index_from_value(&value).is_err());
    Ok(())
}
