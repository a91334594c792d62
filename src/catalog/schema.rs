//! JSON Schema contract for catalog files.
//!
//! The index in this crate validates catalog semantics; the bundled JSON
//! Schema exists so authored files can also be checked by external tooling
//! that speaks JSON Schema. `cw22 validate` runs both.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The bundled contract for `dataset_catalog_v1` files.
pub const CATALOG_SCHEMA: &str = include_str!("../../schemas/dataset_catalog_v1.schema.json");

/// Validate a raw catalog value against the bundled contract.
pub fn validate_catalog_value(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parsing bundled catalog schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling bundled catalog schema: {err}"))?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| format!("{} (at {})", err, err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog failed schema validation:\n{details}");
    }
    Ok(())
}

/// Validate a catalog file on disk against the bundled contract.
pub fn validate_catalog_file(path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let value: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    validate_catalog_value(&value)
        .with_context(|| format!("validating catalog {}", path.display()))
}
