//! Project tree writer.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::templates::{FILES, TRAILING_FILES};
use crate::{ProjectOptions, ScaffoldError, ScaffoldResult, TemplateVars, license_template};

/// Directories created in every new project, relative to its root.
pub const DIRECTORIES: &[&str] = &[
    ".agent/hub",
    ".agent/skills/commiter",
    ".agent/skills/changelog-updater/scripts",
    ".agent/config",
    "architecture",
    "tools",
    "templates",
    ".tmp",
];

/// What a scaffold run created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// The project root.
    pub root: PathBuf,

    /// Directories created, relative to the root.
    pub directories: Vec<PathBuf>,

    /// Files written, relative to the root, in write order.
    pub files: Vec<PathBuf>,
}

/// Creates a new project tree from a [`ProjectOptions`].
///
/// The run stops at the first failure and leaves whatever was already
/// written in place.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    options: ProjectOptions,
}

impl Scaffolder {
    /// Creates a scaffolder for `options`.
    #[must_use]
    pub fn new(options: ProjectOptions) -> Self {
        Self { options }
    }

    /// Returns the project options.
    #[must_use]
    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }

    /// Checks that nothing exists at the project root yet.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::AlreadyExists`] if the root is taken by a
    /// file or directory.
    pub fn ensure_vacant(&self) -> ScaffoldResult<()> {
        let root = self.options.root();
        if root.exists() {
            return Err(ScaffoldError::AlreadyExists(root));
        }
        Ok(())
    }

    /// Writes the project tree, dating documents with `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::AlreadyExists`] before touching the
    /// filesystem if the project root exists, or the first I/O failure.
    pub fn run(&self, today: NaiveDate) -> ScaffoldResult<ScaffoldReport> {
        self.ensure_vacant()?;
        let root = self.options.root();

        info!(
            root = %root.display(),
            license = %self.options.license,
            visibility = %self.options.visibility,
            "scaffolding project"
        );

        let mut report = ScaffoldReport {
            root: root.clone(),
            directories: Vec::with_capacity(DIRECTORIES.len()),
            files: Vec::new(),
        };

        for dir in DIRECTORIES {
            create_dir(&root.join(dir))?;
            report.directories.push(PathBuf::from(dir));
        }

        let vars = TemplateVars::new(&self.options.project_name, today);
        let mut write = |relative: &str, template: &str| -> ScaffoldResult<()> {
            write_file(&root.join(relative), &vars.render(template))?;
            report.files.push(PathBuf::from(relative));
            Ok(())
        };

        for (relative, template) in FILES {
            write(relative, template)?;
        }
        match license_template(self.options.license) {
            Some(template) => write("LICENSE", template)?,
            None => debug!(license = %self.options.license, "no license body, skipping LICENSE"),
        }
        for (relative, template) in TRAILING_FILES {
            write(relative, template)?;
        }

        Ok(report)
    }
}

fn create_dir(path: &Path) -> ScaffoldResult<()> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `content` in one call, creating the parent directory first.
fn write_file(path: &Path, content: &str) -> ScaffoldResult<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, content).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}
