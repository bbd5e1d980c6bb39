//! Runtime loading entrypoints for single configuration files.

use std::path::Path;

use serde_json::Value;

use crate::format::{ConfigFormat, FormatPlan};
use crate::{ConfigError, ConfigResult};

fn read_body(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `path` and parses it according to `plan`.
///
/// # Errors
///
/// Returns [`ConfigError::File`] when the file cannot be read and
/// [`ConfigError::InvalidFormat`] when every planned format rejects it.
pub fn load_with_plan(path: &Path, plan: &FormatPlan) -> ConfigResult<Value> {
    let body = read_body(path)?;
    plan.parse(&body)
        .map_err(|attempts| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            attempts,
        })
}

/// Loads a configuration file, choosing the parser from its extension.
///
/// `.json`/`.js` and `.yaml` files are parsed by exactly that
/// format. Any other name is parsed with `hint` first and the other format
/// second. `hint` defaults to YAML.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use config_finder::{ConfigFormat, load_config_file};
///
/// # fn run() -> config_finder::ConfigResult<()> {
/// let value = load_config_file(Path::new("settings"), Some(ConfigFormat::Json))?;
/// println!("{value}");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::File`] when the file cannot be read and
/// [`ConfigError::InvalidFormat`] when no applicable parser accepts it.
pub fn load_config_file(path: &Path, hint: Option<ConfigFormat>) -> ConfigResult<Value> {
    let plan = FormatPlan::for_path(path, hint.unwrap_or_default());
    load_with_plan(path, &plan)
}

/// Loads `path` as JSON regardless of its extension.
///
/// # Errors
///
/// See [`load_with_plan`].
pub fn load_json(path: &Path) -> ConfigResult<Value> {
    read_body(path).and_then(|body| parse_single(path, ConfigFormat::Json, &body))
}

/// Loads `path` as YAML regardless of its extension.
///
/// # Errors
///
/// See [`load_with_plan`].
pub fn load_yaml(path: &Path) -> ConfigResult<Value> {
    read_body(path).and_then(|body| parse_single(path, ConfigFormat::Yaml, &body))
}

fn parse_single(path: &Path, format: ConfigFormat, body: &str) -> ConfigResult<Value> {
    format
        .parse(body)
        .map_err(|attempt| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            attempts: vec![attempt],
        })
}
