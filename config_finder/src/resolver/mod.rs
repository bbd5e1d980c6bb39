//! Resolution of an application's configuration file.
//!
//! [`ConfigResolver`] walks the candidates produced by
//! [`generate_candidates`], loads the first one that exists, and falls back
//! to a registered default (optionally persisting it) when nothing usable is
//! found. Load failures never escape [`ConfigResolver::get`]; a malformed
//! file behaves like a missing one.
//!
//! Each call re-walks the filesystem. Nothing is cached.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::ConfigResult;
use crate::candidates::{SearchPath, generate_candidates};
use crate::file::load_config_file;
use crate::format::ConfigFormat;
use crate::persist::{SaveOutcome, save_config};

mod builder;
mod outcome;

pub use builder::{ConfigResolverBuilder, DEFAULT_APP_NAME, DEFAULT_EXTENSIONS};
pub use outcome::Resolved;

/// Locates and loads configuration using a fixed set of search settings.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    search_paths: Vec<SearchPath>,
    extensions: Vec<String>,
    app_names: Vec<String>,
    default_value: Option<Arc<Value>>,
    save_default_if_not_found: bool,
    preferred_format: ConfigFormat,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        ConfigResolverBuilder::new().build()
    }
}

impl ConfigResolver {
    /// Starts a [`ConfigResolverBuilder`] with the stock settings.
    #[must_use]
    pub fn builder() -> ConfigResolverBuilder {
        ConfigResolverBuilder::new()
    }

    /// Starts a builder seeded with this resolver's settings.
    #[must_use]
    pub fn to_builder(&self) -> ConfigResolverBuilder {
        let builder = ConfigResolverBuilder::new()
            .search_paths(self.search_paths.iter().cloned())
            .extensions(self.extensions.iter().cloned())
            .app_names(self.app_names.iter().cloned())
            .save_default_if_not_found(self.save_default_if_not_found)
            .preferred_format(self.preferred_format);
        match &self.default_value {
            Some(value) => builder.default_value(Arc::clone(value)),
            None => builder,
        }
    }

    /// Directories searched, in priority order.
    #[must_use]
    pub fn search_paths(&self) -> &[SearchPath] {
        &self.search_paths
    }

    /// Extensions searched, in priority order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Basenames used when [`get`](Self::get) is called without a name.
    #[must_use]
    pub fn app_names(&self) -> &[String] {
        &self.app_names
    }

    /// Format tried first for files whose extension does not decide.
    #[must_use]
    pub const fn preferred_format(&self) -> ConfigFormat {
        self.preferred_format
    }

    /// The registered default, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&Arc<Value>> {
        self.default_value.as_ref()
    }

    /// Whether the default is written to disk when nothing loads.
    #[must_use]
    pub const fn saves_default_if_not_found(&self) -> bool {
        self.save_default_if_not_found
    }

    /// Candidates for the configured application name(s).
    #[must_use]
    pub fn candidates(&self) -> Vec<PathBuf> {
        generate_candidates(&self.search_paths, &self.extensions, &self.app_names)
    }

    /// Candidates for `names` instead of the configured application name(s).
    #[must_use]
    pub fn candidates_for<I, S>(&self, names: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let basenames: Vec<S> = names.into_iter().collect();
        generate_candidates(&self.search_paths, &self.extensions, &basenames)
    }

    /// Candidates as [`camino::Utf8PathBuf`] values.
    ///
    /// Paths that cannot be represented as UTF-8 are omitted.
    #[must_use]
    pub fn utf8_candidates(&self) -> Vec<camino::Utf8PathBuf> {
        self.candidates()
            .into_iter()
            .filter_map(|path| camino::Utf8PathBuf::from_path_buf(path).ok())
            .collect()
    }

    /// First candidate that exists as a file, without loading it.
    #[must_use]
    pub fn find_existing(&self) -> Option<PathBuf> {
        first_existing(&self.candidates()).map(Path::to_path_buf)
    }

    /// Resolves the configuration for the configured application name(s).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use config_finder::{ConfigResolver, Resolved, SearchPath};
    /// use serde_json::json;
    ///
    /// let default = Arc::new(json!({ "hello": "Hello, World" }));
    /// let resolver = ConfigResolver::builder()
    ///     .search_paths(Vec::<SearchPath>::new())
    ///     .default_value(Arc::clone(&default))
    ///     .build();
    /// match resolver.get() {
    ///     Resolved::Defaulted { value, .. } => assert!(Arc::ptr_eq(&value, &default)),
    ///     other => panic!("unexpected outcome: {other:?}"),
    /// }
    /// ```
    #[must_use]
    pub fn get(&self) -> Resolved {
        self.resolve(&self.candidates())
    }

    /// Resolves the configuration using `names` as basenames for this call.
    #[must_use]
    pub fn get_named<I, S>(&self, names: I) -> Resolved
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolve(&self.candidates_for(names))
    }

    /// Writes `value` to `location` using this resolver's preferred format.
    ///
    /// # Errors
    ///
    /// See [`save_config`].
    pub fn save_config(&self, location: &Path, value: &Value) -> ConfigResult<SaveOutcome> {
        save_config(location, value, self.preferred_format)
    }

    fn resolve(&self, candidates: &[PathBuf]) -> Resolved {
        if let Some(path) = first_existing(candidates) {
            match load_config_file(path, Some(self.preferred_format)) {
                Ok(value) => {
                    debug!(path = %path.display(), "loaded configuration file");
                    return Resolved::Loaded {
                        path: path.to_path_buf(),
                        value,
                    };
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring unusable configuration file");
                }
            }
        } else {
            debug!(candidates = candidates.len(), "no configuration file found");
        }
        self.fall_back(candidates.first().map(PathBuf::as_path))
    }

    fn fall_back(&self, first_candidate: Option<&Path>) -> Resolved {
        let Some(default) = &self.default_value else {
            return Resolved::Empty;
        };
        let persisted_to = match first_candidate {
            Some(location) if self.save_default_if_not_found => {
                self.persist_default(location, default)
            }
            _ => None,
        };
        Resolved::Defaulted {
            value: Arc::clone(default),
            persisted_to,
        }
    }

    fn persist_default(&self, location: &Path, default: &Value) -> Option<PathBuf> {
        match save_config(location, default, self.preferred_format) {
            Ok(SaveOutcome::Written) => {
                info!(path = %location.display(), "wrote default configuration");
                Some(location.to_path_buf())
            }
            Ok(SaveOutcome::AlreadyExists) => {
                debug!(path = %location.display(), "default not written; file already exists");
                None
            }
            Err(err) => {
                warn!(path = %location.display(), error = %err, "failed to write default configuration");
                None
            }
        }
    }
}

fn first_existing(candidates: &[PathBuf]) -> Option<&Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests;
