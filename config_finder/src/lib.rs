//! Find, load, and bootstrap an application's configuration file.
//!
//! [`ConfigResolver`] searches a prioritised list of directories, extensions,
//! and basenames (plain and dot-prefixed), parses the first file that exists
//! as JSON or YAML, and falls back to a registered default when nothing
//! usable is found, optionally writing that default to disk.
//!
//! ```rust,no_run
//! use config_finder::{ConfigResolver, Resolved};
//! use serde_json::json;
//!
//! let resolver = ConfigResolver::builder()
//!     .app_name("hello_world")
//!     .default_value(json!({ "greeting": "Hello" }))
//!     .save_default_if_not_found(true)
//!     .build();
//! match resolver.get() {
//!     Resolved::Loaded { path, value } => println!("{}: {value}", path.display()),
//!     Resolved::Defaulted { value, .. } => println!("default: {value}"),
//!     Resolved::Empty => println!("no configuration"),
//! }
//! ```

pub mod candidates;
mod error;
mod file;
pub mod format;
mod home;
mod persist;
mod resolver;

pub use candidates::{SearchPath, generate_candidates};
pub use error::{ConfigError, ConfigResult, ParseAttempt};
pub use file::{load_config_file, load_json, load_with_plan, load_yaml};
pub use format::{ConfigFormat, FormatPlan};
pub use home::{EnvHomeDir, FixedHomeDir, HomeDirProvider, SystemHomeDir, home_dir};
pub use persist::{SaveOutcome, format_for_location, save_config};
pub use resolver::{
    ConfigResolver, ConfigResolverBuilder, DEFAULT_APP_NAME, DEFAULT_EXTENSIONS, Resolved,
};

pub use figment;
pub use serde_json;
