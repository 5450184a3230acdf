//! Configuration management for Etapa.
//!
//! This crate handles loading the optional `etapa.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, discover_config, find_config_file, load_config, load_config_or_default,
};
pub use schema::{ChangelogConfig, Config, ScaffoldConfig};
