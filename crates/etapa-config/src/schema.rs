//! Configuration schema.

use std::path::PathBuf;

use etapa_scaffold::{LicenseKind, Visibility};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Changelog command configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Scaffolding command configuration.
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

/// Changelog command configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Changelog file to update.
    #[serde(default = "default_changelog_file")]
    pub file: PathBuf,

    /// Repository URL used to link commit references.
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: default_changelog_file(),
            repo_url: None,
        }
    }
}

fn default_changelog_file() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

/// Scaffolding command configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory new projects are created in.
    #[serde(default = "default_base_path")]
    pub path: PathBuf,

    /// License written to new projects.
    #[serde(default)]
    pub license: LicenseKind,

    /// Repository visibility recorded for new projects.
    #[serde(default)]
    pub visibility: Visibility,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            path: default_base_path(),
            license: LicenseKind::default(),
            visibility: Visibility::default(),
        }
    }
}

fn default_base_path() -> PathBuf {
    PathBuf::from(".")
}
