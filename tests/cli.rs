// End-to-end coverage of the cw22 binary.

use anyhow::Result;
use std::process::{Command, Output};

fn cw22(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_cw22")).args(args).output()?;
    Ok(output)
}

#[test]
fn list_prints_every_id_in_order() -> Result<()> {
    let output = cw22(&["list"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.len(), 40);
    assert_eq!(ids.first(), Some(&"_"));
    assert_eq!(ids.last(), Some(&"b/as-a"));
    Ok(())
}

#[test]
fn show_renders_a_page() -> Result<()> {
    let output = cw22(&["show", "b/as-a"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("<h1>b/as-a</h1>"));
    assert!(stdout.contains("<h2>Access instructions</h2>"));
    Ok(())
}

#[test]
fn show_reports_unknown_ids_without_crashing() -> Result<()> {
    let output = cw22(&["show", "c"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unknown dataset id 'c'"));
    // The error lists the valid ids as the fallback.
    assert!(stderr.contains("b/as-a"));
    Ok(())
}

#[test]
fn doc_prints_record_paths() -> Result<()> {
    let output = cw22(&["doc", "clueweb22-de0000-00-00366"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("txt/de/de00/de0000/de0000-00.json.gz"));
    assert!(stdout.contains("(layout not published)"));
    Ok(())
}

#[test]
fn doc_rejects_malformed_ids() -> Result<()> {
    let output = cw22(&["doc", "clueweb22-de0000"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn validate_accepts_the_embedded_catalog() -> Result<()> {
    let output = cw22(&["validate"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("ok: 40 datasets in catalog 'clueweb22'"));
    Ok(())
}
