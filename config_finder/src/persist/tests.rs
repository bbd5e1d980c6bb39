//! Tests for non-clobbering persistence.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

use super::{SaveOutcome, format_for_location, save_config};
use crate::ConfigFormat;

#[fixture]
fn temp_dir() -> Result<TempDir> {
    TempDir::new().context("create persistence directory")
}

fn greeting() -> Value {
    json!({ "hello": "Hello, World" })
}

#[rstest]
#[case("app.json", ConfigFormat::Yaml, ConfigFormat::Json)]
#[case("app.js", ConfigFormat::Yaml, ConfigFormat::Json)]
#[case("app.yaml", ConfigFormat::Json, ConfigFormat::Yaml)]
#[case("app.yml", ConfigFormat::Json, ConfigFormat::Json)]
#[case("app", ConfigFormat::Json, ConfigFormat::Json)]
#[case(".app", ConfigFormat::Yaml, ConfigFormat::Yaml)]
fn location_extension_picks_format(
    #[case] location: &str,
    #[case] preferred: ConfigFormat,
    #[case] expected: ConfigFormat,
) {
    assert_eq!(
        format_for_location(&PathBuf::from(location), preferred),
        expected
    );
}

#[rstest]
fn writes_compact_json(temp_dir: Result<TempDir>) -> Result<()> {
    let temp = temp_dir?;
    let target = temp.path().join("wrongconfig");
    let outcome = save_config(&target, &greeting(), ConfigFormat::Json)?;
    ensure!(outcome == SaveOutcome::Written, "unexpected outcome {outcome:?}");
    let written = std::fs::read_to_string(&target).context("read persisted file")?;
    ensure!(
        written.trim() == r#"{"hello":"Hello, World"}"#,
        "unexpected json output {written:?}"
    );
    Ok(())
}

#[rstest]
fn writes_yaml_that_parses_back(temp_dir: Result<TempDir>) -> Result<()> {
    let temp = temp_dir?;
    let target = temp.path().join("wrongconfig");
    save_config(&target, &greeting(), ConfigFormat::Yaml)?;
    let written = std::fs::read_to_string(&target).context("read persisted file")?;
    ensure!(written.starts_with("hello:"), "unexpected yaml output {written:?}");
    let parsed: Value = serde_yaml::from_str(&written).context("parse persisted yaml")?;
    ensure!(parsed == greeting(), "round trip mismatch: {parsed}");
    Ok(())
}

#[rstest]
fn refuses_to_overwrite(temp_dir: Result<TempDir>) -> Result<()> {
    let temp = temp_dir?;
    let target = temp.path().join("app.json");
    std::fs::write(&target, "{\"keep\":true}").context("seed existing file")?;
    let outcome = save_config(&target, &greeting(), ConfigFormat::Json)?;
    ensure!(outcome == SaveOutcome::AlreadyExists, "unexpected outcome {outcome:?}");
    ensure!(!outcome.is_written());
    let contents = std::fs::read_to_string(&target).context("read existing file")?;
    ensure!(contents == "{\"keep\":true}", "existing file was modified");
    Ok(())
}

#[rstest]
fn creates_missing_parent_directories(temp_dir: Result<TempDir>) -> Result<()> {
    let temp = temp_dir?;
    let target = temp.path().join("nested").join("deeper").join(".app.yaml");
    let outcome = save_config(&target, &greeting(), ConfigFormat::Json)?;
    ensure!(outcome.is_written());
    ensure!(target.is_file(), "expected {} to exist", target.display());
    Ok(())
}

#[rstest]
fn output_is_deterministic(temp_dir: Result<TempDir>) -> Result<()> {
    let temp = temp_dir?;
    let value = json!({ "b": 1, "a": { "z": [1, 2], "y": null } });
    let first = temp.path().join("first.json");
    let second = temp.path().join("second.json");
    save_config(&first, &value, ConfigFormat::Json)?;
    save_config(&second, &value, ConfigFormat::Json)?;
    let left = std::fs::read(&first).context("read first")?;
    let right = std::fs::read(&second).context("read second")?;
    ensure!(left == right, "encodings differ");
    Ok(())
}
