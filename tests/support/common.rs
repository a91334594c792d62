#![allow(dead_code)]

use anyhow::{Context, Result};
use clueweb22_catalog::{DatasetCatalog, DatasetIndex, DatasetKind, ROOT_ID};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// A complete, well-formed catalog value covering the whole id space,
/// generated from the canonical enumeration so tests can mutate single
/// aspects without re-authoring forty entries.
pub fn sample_catalog_value() -> Value {
    let datasets: Vec<Value> = DatasetKind::catalog_order()
        .iter()
        .map(|kind| {
            let id = kind.to_string();
            if id == ROOT_ID {
                json!({
                    "id": id,
                    "pretty_name": "Sample corpus",
                    "description": "<p>sample root</p>",
                    "data_access": "<p>sample access steps</p>",
                    "bibtex_ids": ["Sample2022"]
                })
            } else {
                json!({
                    "id": id,
                    "description": format!("<p>sample entry {id}</p>")
                })
            }
        })
        .collect();
    json!({
        "schema_version": "dataset_catalog_v1",
        "catalog": {"key": "sample_corpus", "title": "Sample corpus"},
        "docs_instructions": "<p>sample shared instructions</p>",
        "datasets": datasets
    })
}

pub fn index_from_value(value: &Value) -> Result<DatasetIndex> {
    let catalog: DatasetCatalog =
        serde_json::from_value(value.clone()).context("parsing sample catalog value")?;
    DatasetIndex::from_catalog(catalog)
}

pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("creating catalog temp file")?;
    serde_json::to_writer(&mut file, value).context("writing catalog temp file")?;
    Ok(file)
}
