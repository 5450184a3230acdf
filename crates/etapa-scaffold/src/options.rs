//! Scaffold input.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// License written to the new project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseKind {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "Proprietary")]
    Proprietary,
}

impl LicenseKind {
    /// Returns the license identifier, e.g. `Apache-2.0`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0",
            Self::Proprietary => "Proprietary",
        }
    }
}

impl fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intended repository visibility. Recorded only; the generated files are
/// the same either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Private => "private",
        })
    }
}

/// What to scaffold and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Project name, also the name of the created directory.
    pub project_name: String,

    /// Directory the project directory is created in.
    pub base_path: PathBuf,

    /// License to write.
    pub license: LicenseKind,

    /// Repository visibility.
    pub visibility: Visibility,
}

impl ProjectOptions {
    /// Creates options with the default base path (`.`), license and
    /// visibility.
    #[must_use]
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            base_path: PathBuf::from("."),
            license: LicenseKind::default(),
            visibility: Visibility::default(),
        }
    }

    /// Sets the base path.
    #[must_use]
    pub fn base_path(mut self, path: impl AsRef<Path>) -> Self {
        self.base_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the license.
    #[must_use]
    pub fn license(mut self, license: LicenseKind) -> Self {
        self.license = license;
        self
    }

    /// Sets the visibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns `base_path/project_name`.
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.base_path.join(&self.project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ProjectOptions::new("demo");
        assert_eq!(options.base_path, PathBuf::from("."));
        assert_eq!(options.license, LicenseKind::Mit);
        assert_eq!(options.visibility, Visibility::Private);
        assert_eq!(options.root(), PathBuf::from("./demo"));
    }

    #[test]
    fn test_builder() {
        let options = ProjectOptions::new("demo")
            .base_path("/srv/projects")
            .license(LicenseKind::Gpl3)
            .visibility(Visibility::Public);

        assert_eq!(options.root(), PathBuf::from("/srv/projects/demo"));
        assert_eq!(options.license, LicenseKind::Gpl3);
        assert_eq!(options.visibility, Visibility::Public);
    }

    #[test]
    fn test_license_display() {
        assert_eq!(LicenseKind::Apache2.to_string(), "Apache-2.0");
        assert_eq!(LicenseKind::Proprietary.to_string(), "Proprietary");
        assert_eq!(Visibility::Public.to_string(), "public");
    }
}
