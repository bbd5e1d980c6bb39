//! Home-directory lookup behind an injectable provider.
//!
//! The resolver only needs the home directory to build its default search
//! paths, so the lookup sits behind [`HomeDirProvider`] and tests can swap
//! in [`FixedHomeDir`] instead of editing the process environment.

use std::ffi::OsString;
use std::path::PathBuf;

#[cfg(windows)]
const HOME_VARS: [&str; 3] = ["USERPROFILE", "HOME", "HOMEPATH"];
#[cfg(not(windows))]
const HOME_VARS: [&str; 3] = ["HOME", "HOMEPATH", "USERPROFILE"];

/// Source of the user's home directory.
pub trait HomeDirProvider: std::fmt::Debug + Send + Sync {
    /// Returns the home directory, or `None` when it cannot be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Reads the home directory from environment variables.
///
/// The first non-empty variable wins. Unix checks `HOME`, `HOMEPATH`, then
/// `USERPROFILE`; Windows checks `USERPROFILE` first.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvHomeDir;

impl EnvHomeDir {
    /// Variables consulted, in order of preference.
    #[must_use]
    pub const fn variables() -> &'static [&'static str] {
        &HOME_VARS
    }

    fn lookup_with<F>(lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        HOME_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

impl HomeDirProvider for EnvHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        Self::lookup_with(|key| std::env::var_os(key))
    }
}

/// Asks the operating system via [`dirs::home_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHomeDir;

impl HomeDirProvider for SystemHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Always reports the same answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHomeDir(pub Option<PathBuf>);

impl HomeDirProvider for FixedHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Best-effort home directory from the environment.
///
/// Shorthand for [`EnvHomeDir`].
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    EnvHomeDir.home_dir()
}
