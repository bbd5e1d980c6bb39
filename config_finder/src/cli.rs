//! Command-line interface definitions for `config-finder`.

use std::path::PathBuf;

use clap::Parser;
use config_finder::{ConfigFormat, ConfigResolver, ConfigResolverBuilder, SearchPath};
use serde_json::Value;

/// Parsed CLI arguments for `config-finder`.
#[derive(Debug, Parser)]
#[command(name = "config-finder")]
#[command(about = "Locate and print an application's JSON or YAML configuration")]
#[command(version)]
pub struct Args {
    /// Directory to search (repeat for several; `.` is the working directory).
    #[arg(long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,
    /// Extension to try, including the dot (repeat for several; `""` for none).
    #[arg(long = "ext", value_name = "EXT", allow_hyphen_values = true)]
    pub extensions: Vec<String>,
    /// Basename to look for (repeat for several).
    #[arg(long = "name", value_name = "NAME")]
    pub names: Vec<String>,
    /// Format tried first when a file's extension does not decide.
    #[arg(long, value_name = "json|yaml")]
    pub format: Option<ConfigFormat>,
    /// JSON value returned when no configuration file loads.
    #[arg(long = "default", value_name = "JSON", value_parser = parse_json)]
    pub default_value: Option<Value>,
    /// Write the default to the first candidate location when nothing loads.
    #[arg(long = "save-default", requires = "default_value")]
    pub should_save_default: bool,
    /// Print the candidate locations instead of resolving.
    #[arg(long = "candidates", conflicts_with = "file")]
    pub should_list_candidates: bool,
    /// Load exactly this file instead of searching.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid JSON: {err}"))
}

impl Args {
    /// Maps the search flags onto a resolver; unset flags keep the defaults.
    pub fn resolver(&self) -> ConfigResolver {
        let mut builder: ConfigResolverBuilder = ConfigResolver::builder();
        if !self.paths.is_empty() {
            builder = builder.search_paths(self.paths.iter().map(|path| to_search_path(path)));
        }
        if !self.extensions.is_empty() {
            builder = builder.extensions(self.extensions.iter().cloned());
        }
        if !self.names.is_empty() {
            builder = builder.app_names(self.names.iter().cloned());
        }
        if let Some(format) = self.format {
            builder = builder.preferred_format(format);
        }
        if let Some(value) = &self.default_value {
            builder = builder.default_value(value.clone());
        }
        builder
            .save_default_if_not_found(self.should_save_default)
            .build()
    }
}

fn to_search_path(path: &std::path::Path) -> SearchPath {
    if path == std::path::Path::new(".") {
        SearchPath::CurrentDir
    } else {
        SearchPath::from(path)
    }
}
