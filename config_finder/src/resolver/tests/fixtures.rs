//! Shared fixtures for resolver tests.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cap_std::{ambient_authority, fs::Dir};
use rstest::fixture;
use serde_json::Value;
use tempfile::TempDir;

use crate::{ConfigResolver, ConfigResolverBuilder, FixedHomeDir, Resolved};

/// Two sibling directories holding overlapping configuration files.
pub(super) struct DataTree {
    _temp: TempDir,
    pub(super) root: PathBuf,
}

impl DataTree {
    pub(super) fn dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Builder searching `dirs` in order with `.json` then `.yaml`.
    pub(super) fn builder(&self, dirs: &[&str]) -> ConfigResolverBuilder {
        ConfigResolver::builder()
            .home_dir_provider(FixedHomeDir(None))
            .search_paths(dirs.iter().map(|d| self.dir(d)))
            .extensions([".json", ".yaml"])
    }
}

fn write_file(dir: &Dir, name: &str, contents: &str) -> Result<()> {
    let mut file = dir.create(name).with_context(|| format!("create {name}"))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write {name}"))?;
    Ok(())
}

fn populate(root: &Path, dir_name: &str, files: &[(&str, &str)]) -> Result<()> {
    let path = root.join(dir_name);
    std::fs::create_dir_all(&path).with_context(|| format!("create {dir_name}"))?;
    let dir = Dir::open_ambient_dir(&path, ambient_authority())
        .with_context(|| format!("open {dir_name}"))?;
    for (name, contents) in files {
        write_file(&dir, name, contents)?;
    }
    Ok(())
}

#[fixture]
pub(super) fn data_tree() -> Result<DataTree> {
    let temp = TempDir::new().context("create data tree")?;
    let root = temp.path().to_path_buf();
    populate(
        &root,
        "config1",
        &[
            ("appconfig.json", r#"{"content": "config1/appconfig.json"}"#),
            ("appconfig.yaml", "content: config1/appconfig.yaml\n"),
            ("appconfig", r#"{"content": "config1/appconfig"}"#),
            ("foobar.json", r#"{"content": "config1/foobar.json"}"#),
            ("broken.json", "content: [unclosed\n"),
        ],
    )?;
    populate(
        &root,
        "config2",
        &[
            ("appconfig.json", r#"{"content": "config2/appconfig.json"}"#),
            ("appconfig.yaml", "content: config2/appconfig.yaml\n"),
            ("appconfig", "content: config2/appconfig\n"),
            ("broken.json", r#"{"content": "config2/broken.json"}"#),
        ],
    )?;
    Ok(DataTree { _temp: temp, root })
}

/// Extracts the `content` marker written into every sample file.
pub(super) fn content(resolved: &Resolved) -> Option<String> {
    resolved
        .value()
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
