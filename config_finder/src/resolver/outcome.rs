//! Tagged result of a resolution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use figment::{Figment, providers::Serialized};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// What [`ConfigResolver::get`](super::ConfigResolver::get) found.
///
/// Callers that only want data can use [`Resolved::value`]; callers that
/// care about provenance match on the variant.
#[derive(Debug, Clone)]
pub enum Resolved {
    /// A candidate file existed and parsed.
    Loaded {
        /// File the value came from.
        path: PathBuf,
        /// Parsed contents.
        value: Value,
    },
    /// Nothing usable was found and the registered default was returned.
    Defaulted {
        /// The registered default. `Arc::ptr_eq` against the registered
        /// handle holds.
        value: Arc<Value>,
        /// Location the default was written to during this call, if any.
        persisted_to: Option<PathBuf>,
    },
    /// Nothing usable was found and no default is registered.
    Empty,
}

impl Resolved {
    /// Borrows the configuration value; [`Resolved::Empty`] yields `{}`.
    #[must_use]
    pub fn value(&self) -> Cow<'_, Value> {
        match self {
            Self::Loaded { value, .. } => Cow::Borrowed(value),
            Self::Defaulted { value, .. } => Cow::Borrowed(value.as_ref()),
            Self::Empty => Cow::Owned(Value::Object(Map::new())),
        }
    }

    /// Consumes the outcome and returns the configuration value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Loaded { value, .. } => value,
            Self::Defaulted { value, .. } => Arc::unwrap_or_clone(value),
            Self::Empty => Value::Object(Map::new()),
        }
    }

    /// File the value was loaded from, if it came from disk.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        match self {
            Self::Loaded { path, .. } => Some(path.as_path()),
            Self::Defaulted { .. } | Self::Empty => None,
        }
    }

    /// Whether the registered default was returned.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }

    /// Whether the value was read from a file.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Deserializes the value into `T`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the value does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.value().into_owned())
    }

    /// Seeds a [`Figment`] with the value so callers can merge further
    /// providers (environment, CLI) on top before extracting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_finder::ConfigResolver;
    /// use serde_json::json;
    ///
    /// let resolved = ConfigResolver::builder()
    ///     .search_paths(Vec::<config_finder::SearchPath>::new())
    ///     .default_value(json!({ "port": 8080 }))
    ///     .build()
    ///     .get();
    /// let port: u16 = resolved.figment().extract_inner("port").expect("port present");
    /// assert_eq!(port, 8080);
    /// ```
    #[must_use]
    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(self.value().into_owned()))
    }
}
