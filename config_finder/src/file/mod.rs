//! Reading configuration files from disk.

mod loader;

pub use loader::{load_config_file, load_json, load_with_plan, load_yaml};
