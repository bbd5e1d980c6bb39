//! Shared filesystem helpers for persisting configuration files.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
pub(super) fn parent_or_dot(path: &Path) -> &Path {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Create the parent directory of `path` and any missing ancestors.
pub(super) fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    Dir::create_ambient_dir_all(parent_or_dot(path), ambient_authority())
}

/// Open the parent directory of `path` via `cap-std` and extract the file name.
///
/// # Errors
///
/// Returns an [`std::io::Error`] if the file name cannot be determined or the
/// parent directory cannot be opened.
pub(super) fn open_parent_dir_and_name(path: &Path) -> std::io::Result<(Dir, std::ffi::OsString)> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::other("cannot determine file name for configuration file path")
    })?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
    Ok((dir, file_name.to_os_string()))
}
