//! Builder for [`ConfigResolver`].
//!
//! Settings accumulate on the builder and are frozen by
//! [`ConfigResolverBuilder::build`]; the resulting resolver is immutable.

use std::sync::Arc;

use serde_json::Value;

use crate::ConfigResult;
use crate::candidates::SearchPath;
use crate::format::ConfigFormat;
use crate::home::{EnvHomeDir, HomeDirProvider};

use super::ConfigResolver;

/// Application name used when none is configured.
pub const DEFAULT_APP_NAME: &str = "config";

/// Extensions searched when none are configured, in order.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["", ".json", ".yaml"];

/// Builder for [`ConfigResolver`].
///
/// # Examples
///
/// ```rust,no_run
/// use config_finder::{ConfigFormat, ConfigResolver, SearchPath};
/// use serde_json::json;
///
/// let resolver = ConfigResolver::builder()
///     .app_name("hello_world")
///     .search_paths([SearchPath::CurrentDir, SearchPath::from("/etc/hello_world")])
///     .extensions([".yaml", ".json"])
///     .default_value(json!({ "greeting": "Hello" }))
///     .preferred_format(ConfigFormat::Yaml)
///     .save_default_if_not_found(true)
///     .build();
/// let config = resolver.get();
/// println!("{}", config.value());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolverBuilder {
    search_paths: Option<Vec<SearchPath>>,
    extensions: Vec<String>,
    app_names: Vec<String>,
    default_value: Option<Arc<Value>>,
    save_default_if_not_found: bool,
    preferred_format: ConfigFormat,
    home: Arc<dyn HomeDirProvider>,
}

impl Default for ConfigResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolverBuilder {
    /// Creates a builder with the stock search settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_paths: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_owned()).collect(),
            app_names: vec![DEFAULT_APP_NAME.to_owned()],
            default_value: None,
            save_default_if_not_found: false,
            preferred_format: ConfigFormat::default(),
            home: Arc::new(EnvHomeDir),
        }
    }

    /// Registers the value returned when no configuration file loads.
    ///
    /// Passing an existing `Arc` keeps its identity: the resolver hands back
    /// clones of that same allocation.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Arc<Value>>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Replaces the searched directories.
    ///
    /// The default is the current directory followed by the home directory.
    #[must_use]
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<SearchPath>,
    {
        self.search_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a directory after the configured (or default) ones.
    #[must_use]
    pub fn add_search_path(mut self, path: impl Into<SearchPath>) -> Self {
        let mut paths = self
            .search_paths
            .take()
            .unwrap_or_else(|| default_search_paths(self.home.as_ref()));
        paths.push(path.into());
        self.search_paths = Some(paths);
        self
    }

    /// Replaces the searched extensions. `""` means no suffix.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a single application name used as the candidate basename.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_names = vec![name.into()];
        self
    }

    /// Sets several candidate basenames, tried in order.
    #[must_use]
    pub fn app_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.app_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Writes the default to the first candidate when nothing loads.
    #[must_use]
    pub const fn save_default_if_not_found(mut self, enabled: bool) -> Self {
        self.save_default_if_not_found = enabled;
        self
    }

    /// Sets the format tried first for extensionless files and used when
    /// persisting to a location without a recognised extension.
    #[must_use]
    pub const fn preferred_format(mut self, format: ConfigFormat) -> Self {
        self.preferred_format = format;
        self
    }

    /// Sets the preferred format from its name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`](crate::ConfigError::InvalidArgument)
    /// unless `format` is exactly `json` or `yaml`.
    pub fn try_preferred_format(self, format: &str) -> ConfigResult<Self> {
        let parsed = format.parse::<ConfigFormat>()?;
        Ok(self.preferred_format(parsed))
    }

    /// Overrides how the home directory is discovered for the default
    /// search paths.
    #[must_use]
    pub fn home_dir_provider(mut self, provider: impl HomeDirProvider + 'static) -> Self {
        self.home = Arc::new(provider);
        self
    }

    /// Freezes the settings into a [`ConfigResolver`].
    #[must_use]
    pub fn build(self) -> ConfigResolver {
        let search_paths = self
            .search_paths
            .unwrap_or_else(|| default_search_paths(self.home.as_ref()));
        ConfigResolver {
            search_paths,
            extensions: self.extensions,
            app_names: self.app_names,
            default_value: self.default_value,
            save_default_if_not_found: self.save_default_if_not_found,
            preferred_format: self.preferred_format,
        }
    }
}

/// The current directory, then the home directory when one is known.
fn default_search_paths(home: &dyn HomeDirProvider) -> Vec<SearchPath> {
    let mut paths = vec![SearchPath::CurrentDir];
    if let Some(dir) = home.home_dir() {
        paths.push(SearchPath::Dir(dir));
    }
    paths
}
