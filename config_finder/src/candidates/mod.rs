//! Candidate-path generation for configuration lookup.
//!
//! Candidates are produced by walking search paths, then extensions, then
//! basenames, emitting each plain filename immediately before its hidden
//! (dot-prefixed) twin. Nothing is deduplicated and nothing touches the
//! filesystem.

use std::path::{Path, PathBuf};

/// One directory searched for configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchPath {
    /// The process working directory. Candidates are bare filenames with no
    /// directory prefix.
    CurrentDir,
    /// A directory joined with each candidate filename.
    Dir(PathBuf),
}

impl SearchPath {
    /// Builds the candidate for `file_name` under this search path.
    #[must_use]
    pub fn join(&self, file_name: &str) -> PathBuf {
        match self {
            Self::CurrentDir => PathBuf::from(file_name),
            Self::Dir(dir) => dir.join(file_name),
        }
    }
}

impl From<PathBuf> for SearchPath {
    fn from(dir: PathBuf) -> Self {
        Self::Dir(dir)
    }
}

impl From<&Path> for SearchPath {
    fn from(dir: &Path) -> Self {
        Self::Dir(dir.to_path_buf())
    }
}

impl From<&str> for SearchPath {
    fn from(dir: &str) -> Self {
        Self::Dir(PathBuf::from(dir))
    }
}

impl From<String> for SearchPath {
    fn from(dir: String) -> Self {
        Self::Dir(PathBuf::from(dir))
    }
}

impl From<camino::Utf8PathBuf> for SearchPath {
    fn from(dir: camino::Utf8PathBuf) -> Self {
        Self::Dir(dir.into_std_path_buf())
    }
}

/// Generates the ordered candidate list.
///
/// The loops nest as paths, then extensions, then basenames. An empty
/// extension appends nothing. Single values can be passed as one-element
/// slices.
///
/// # Examples
///
/// ```rust
/// use std::path::PathBuf;
/// use config_finder::{SearchPath, generate_candidates};
///
/// let candidates = generate_candidates(
///     &[SearchPath::CurrentDir, SearchPath::from("etc")],
///     &[".json"],
///     &["app"],
/// );
/// assert_eq!(
///     candidates,
///     vec![
///         PathBuf::from("app.json"),
///         PathBuf::from(".app.json"),
///         PathBuf::from("etc/app.json"),
///         PathBuf::from("etc/.app.json"),
///     ]
/// );
/// ```
#[must_use]
pub fn generate_candidates<E, B>(
    paths: &[SearchPath],
    extensions: &[E],
    basenames: &[B],
) -> Vec<PathBuf>
where
    E: AsRef<str>,
    B: AsRef<str>,
{
    let mut candidates =
        Vec::with_capacity(paths.len() * extensions.len() * basenames.len() * 2);
    for path in paths {
        for extension in extensions {
            let ext = extension.as_ref();
            for basename in basenames {
                let file_name = format!("{}{ext}", basename.as_ref());
                candidates.push(path.join(&file_name));
                candidates.push(path.join(&format!(".{file_name}")));
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests;
