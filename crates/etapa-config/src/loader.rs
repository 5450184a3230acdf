//! Configuration discovery and loading.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "etapa.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist, or an error
/// if it cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;

    Ok(toml::from_str(&content)?)
}

/// Returns the nearest [`CONFIG_FILE_NAME`] in `start_dir` or its ancestors.
#[must_use]
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    start_dir
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the nearest configuration above `start_dir`, or the defaults when
/// there is none.
///
/// # Errors
///
/// Returns an error if a configuration file is found but cannot be read or
/// parsed.
pub fn discover_config(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    match find_config_file(&start_dir) {
        Some(path) => load_config(path),
        None => {
            debug!(start = ?start_dir.as_ref(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }
}

/// [`discover_config`] from the current directory.
///
/// # Errors
///
/// Returns an error if the current directory is unavailable, or if a
/// configuration file is found but cannot be read or parsed.
pub fn load_config_or_default() -> ConfigResult<Config> {
    discover_config(std::env::current_dir()?)
}
