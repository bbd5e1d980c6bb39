//! Writing a default configuration to disk without clobbering.
//!
//! The target is opened with create-new semantics, so an existing file is
//! reported as [`SaveOutcome::AlreadyExists`] and left untouched. Writes are
//! not atomic: a crash mid-write can leave a partial file.

mod helpers;

use std::io::Write as _;
use std::path::Path;

use cap_std::fs::OpenOptions;
use serde_json::Value;

use crate::format::ConfigFormat;
use crate::{ConfigError, ConfigResult};

use helpers::{create_parent_dir, open_parent_dir_and_name};

/// Result of a [`save_config`] call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was created and the value written.
    Written,
    /// A file already exists at the location; nothing was written.
    AlreadyExists,
}

impl SaveOutcome {
    /// Returns `true` if the value reached disk.
    #[must_use]
    pub const fn is_written(self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Returns the format [`save_config`] will use for `location`.
///
/// The extension decides when recognised; otherwise `preferred` is used.
#[must_use]
pub fn format_for_location(location: &Path, preferred: ConfigFormat) -> ConfigFormat {
    ConfigFormat::from_path(location).unwrap_or(preferred)
}

/// Writes `value` to `location` unless something already exists there.
///
/// Missing parent directories are created first.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use config_finder::{ConfigFormat, SaveOutcome, save_config};
///
/// # fn run() -> config_finder::ConfigResult<()> {
/// let value = serde_json::json!({ "hello": "Hello, World" });
/// let outcome = save_config(Path::new("app.json"), &value, ConfigFormat::Yaml)?;
/// assert_eq!(outcome, SaveOutcome::Written);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if the value cannot be encoded and
/// [`ConfigError::Write`] if directories or the file cannot be written.
pub fn save_config(
    location: &Path,
    value: &Value,
    preferred: ConfigFormat,
) -> ConfigResult<SaveOutcome> {
    if location.exists() {
        return Ok(SaveOutcome::AlreadyExists);
    }
    let format = format_for_location(location, preferred);
    let encoded = format
        .encode(value)
        .map_err(|source| ConfigError::Serialize {
            path: location.to_path_buf(),
            format,
            source,
        })?;

    let write_error = |source: std::io::Error| ConfigError::Write {
        path: location.to_path_buf(),
        source,
    };
    create_parent_dir(location).map_err(write_error)?;
    let (dir, name) = open_parent_dir_and_name(location).map_err(write_error)?;
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = match dir.open_with(&name, &options) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            return Ok(SaveOutcome::AlreadyExists);
        }
        Err(err) => return Err(write_error(err)),
    };
    file.write_all(encoded.as_bytes()).map_err(write_error)?;
    Ok(SaveOutcome::Written)
}

#[cfg(test)]
mod tests;
