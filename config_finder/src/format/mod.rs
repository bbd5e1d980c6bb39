//! Supported configuration formats and the order in which they are tried.
//!
//! A file whose extension names a format is parsed by that format alone.
//! Anything else gets a two-step [`FormatPlan`]: the preferred format first,
//! the other one second.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ConfigError, ParseAttempt};

/// Serialisation formats understood by the loader and the persister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// JSON, also used for `.js` files.
    Json,
    /// YAML. The default preference when a file name does not decide.
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// Returns the lowercase name used on the command line and in files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Returns the format that is not `self`.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Json => Self::Yaml,
            Self::Yaml => Self::Json,
        }
    }

    /// Infers a format from the extension of `path`.
    ///
    /// Recognises exactly `json` and `js` as JSON and `yaml` as YAML. Any
    /// other spelling, including `JSON` or `yml`, is left to the hint.
    /// Hidden files such as `.app` have no extension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use config_finder::ConfigFormat;
    ///
    /// assert_eq!(ConfigFormat::from_path(Path::new("app.yaml")), Some(ConfigFormat::Yaml));
    /// assert_eq!(ConfigFormat::from_path(Path::new("app.yml")), None);
    /// assert_eq!(ConfigFormat::from_path(Path::new(".app")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json" | "js") => Some(Self::Json),
            Some("yaml") => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parses `body` in this format.
    ///
    /// A blank body, or a YAML document with no content (only comments or
    /// a bare `---`), yields an empty object rather than an error.
    ///
    /// # Errors
    ///
    /// Returns the failed [`ParseAttempt`] when the body is not valid.
    pub fn parse(self, body: &str) -> Result<Value, ParseAttempt> {
        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        let parsed = match self {
            Self::Json => serde_json::from_str::<Value>(body).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str::<Value>(body).map_err(|e| e.to_string()),
        };
        match parsed {
            Ok(Value::Null) if self == Self::Yaml => Ok(Value::Object(Map::new())),
            Ok(value) => Ok(value),
            Err(message) => Err(ParseAttempt {
                format: self,
                message,
            }),
        }
    }

    /// Encodes `value` in this format.
    ///
    /// JSON output is compact and newline-terminated; YAML output comes
    /// straight from the emitter. Both are deterministic for equal input.
    ///
    /// # Errors
    ///
    /// Returns the encoder's error when `value` cannot be represented.
    pub fn encode(self, value: &Value) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Self::Json => {
                let mut out = serde_json::to_string(value)?;
                out.push('\n');
                Ok(out)
            }
            Self::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    /// Accepts exactly `json` or `yaml`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(ConfigError::InvalidArgument {
                value: other.to_owned(),
            }),
        }
    }
}

/// Ordered list of formats to try for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPlan {
    formats: Vec<ConfigFormat>,
    inferred: bool,
}

impl FormatPlan {
    /// Builds the plan for `path`.
    ///
    /// A recognised extension produces a single-entry plan and the hint is
    /// ignored. Otherwise the plan is `[hint, hint.other()]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use config_finder::{ConfigFormat, FormatPlan};
    ///
    /// let plan = FormatPlan::for_path(Path::new("app"), ConfigFormat::Json);
    /// assert_eq!(plan.formats(), &[ConfigFormat::Json, ConfigFormat::Yaml]);
    ///
    /// let plan = FormatPlan::for_path(Path::new("app.yaml"), ConfigFormat::Json);
    /// assert_eq!(plan.formats(), &[ConfigFormat::Yaml]);
    /// ```
    #[must_use]
    pub fn for_path(path: &Path, hint: ConfigFormat) -> Self {
        ConfigFormat::from_path(path).map_or_else(
            || Self {
                formats: vec![hint, hint.other()],
                inferred: false,
            },
            |format| Self {
                formats: vec![format],
                inferred: true,
            },
        )
    }

    /// Formats in attempt order.
    #[must_use]
    pub fn formats(&self) -> &[ConfigFormat] {
        &self.formats
    }

    /// Whether the plan was fixed by the file extension.
    #[must_use]
    pub const fn is_inferred(&self) -> bool {
        self.inferred
    }

    /// Runs the plan against `body`, stopping at the first success.
    ///
    /// # Errors
    ///
    /// Returns every failed attempt when no format accepts the body.
    pub fn parse(&self, body: &str) -> Result<Value, Vec<ParseAttempt>> {
        let mut failures = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            match format.parse(body) {
                Ok(value) => return Ok(value),
                Err(attempt) => failures.push(attempt),
            }
        }
        Err(failures)
    }
}
