//! Configuration for chatroi.
//!
//! A `.chatroi.toml` in the working directory (or up to ten ancestors),
//! falling back to the per-user config directory. Every section is
//! optional; invalid values are reported and replaced by defaults.

mod core;
mod loader;
pub mod validation;

pub use self::core::{ChatroiConfig, DefaultsConfig, DisplayConfig, OutputConfig};
pub use loader::{
    config_search_paths, directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
pub use validation::{sanitize_config, validate_config, validate_config_result, ConfigIssue};
