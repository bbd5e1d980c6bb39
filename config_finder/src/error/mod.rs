//! Error types produced while locating, loading, and persisting configuration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::ConfigFormat;

/// Convenience alias for results produced by this crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// One failed parse of a configuration body.
///
/// Collected by the loader so a total failure reports every attempt in the
/// order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAttempt {
    /// Format the loader tried.
    pub format: ConfigFormat,
    /// Parser diagnostic for the attempt.
    pub message: String,
}

impl fmt::Display for ParseAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.format, self.message)
    }
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file exists but no applicable parser accepted its contents.
    #[error("Invalid format for '{path}': {}", render_attempts(.attempts))]
    InvalidFormat {
        /// File that failed to parse.
        path: PathBuf,
        /// Every parse attempt, in the order they were made.
        attempts: Vec<ParseAttempt>,
    },

    /// A preferred format other than `json` or `yaml` was requested.
    #[error("config file preferred format should be either 'json' or 'yaml', got '{value}'")]
    InvalidArgument {
        /// The rejected value.
        value: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    File {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The default value could not be encoded for persistence.
    #[error("Failed to encode configuration for '{path}' as {format}: {source}")]
    Serialize {
        /// Target location of the write.
        path: PathBuf,
        /// Format the encoder was asked to produce.
        format: ConfigFormat,
        /// Encoder diagnostic.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The default value could not be written to disk.
    #[error("Failed to write configuration file '{path}': {source}")]
    Write {
        /// Target location of the write.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

fn render_attempts(attempts: &[ParseAttempt]) -> String {
    if attempts.is_empty() {
        return String::from("no parser accepted the contents");
    }
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    /// Returns `true` when the error reports unparseable file contents.
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns the file path associated with the error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InvalidFormat { path, .. }
            | Self::File { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. } => Some(path.as_path()),
            Self::InvalidArgument { .. } => None,
        }
    }
}
