//! New project command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};

use etapa_config::ScaffoldConfig;
use etapa_scaffold::{LicenseKind, ProjectOptions, ScaffoldReport, Scaffolder, Visibility};

/// License argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LicenseArg {
    /// MIT License
    #[value(name = "MIT")]
    Mit,
    /// Apache License 2.0
    #[value(name = "Apache-2.0")]
    Apache2,
    /// GNU General Public License v3.0
    #[value(name = "GPL-3.0")]
    Gpl3,
    /// All rights reserved
    #[value(name = "Proprietary")]
    Proprietary,
}

impl From<LicenseArg> for LicenseKind {
    fn from(arg: LicenseArg) -> Self {
        match arg {
            LicenseArg::Mit => LicenseKind::Mit,
            LicenseArg::Apache2 => LicenseKind::Apache2,
            LicenseArg::Gpl3 => LicenseKind::Gpl3,
            LicenseArg::Proprietary => LicenseKind::Proprietary,
        }
    }
}

/// Visibility argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VisibilityArg {
    Public,
    Private,
}

impl From<VisibilityArg> for Visibility {
    fn from(arg: VisibilityArg) -> Self {
        match arg {
            VisibilityArg::Public => Visibility::Public,
            VisibilityArg::Private => Visibility::Private,
        }
    }
}

/// Arguments for the new command.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name, also the directory created
    pub name: String,

    /// Directory to create the project in (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// License for the project (default: MIT)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub license: Option<LicenseArg>,

    /// Intended repository visibility (default: private)
    #[arg(long, value_enum)]
    pub visibility: Option<VisibilityArg>,
}

impl NewArgs {
    /// Resolves the scaffold input, flags taking precedence over `config`.
    fn options(&self, config: &ScaffoldConfig) -> ProjectOptions {
        ProjectOptions::new(&self.name)
            .base_path(self.path.as_ref().unwrap_or(&config.path))
            .license(self.license.map_or(config.license, Into::into))
            .visibility(self.visibility.map_or(config.visibility, Into::into))
    }
}

/// Runs the new command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: NewArgs, config: &ScaffoldConfig) -> Result<()> {
    scaffold(&args, config, Local::now().date_naive())
}

fn scaffold(args: &NewArgs, config: &ScaffoldConfig, today: NaiveDate) -> Result<()> {
    let scaffolder = Scaffolder::new(args.options(config));
    let failed = || format!("failed to create project '{}'", args.name);

    // A refused run prints nothing but the error.
    scaffolder.ensure_vacant().with_context(failed)?;

    let options = scaffolder.options();
    println!("Creating project: {}", options.project_name);
    println!("Location: {}", options.root().display());
    println!("License: {}", options.license);
    println!("Visibility: {}", options.visibility);

    let report = scaffolder.run(today).with_context(failed)?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &ScaffoldReport) {
    println!();
    for dir in &report.directories {
        println!("  created {}/", dir.display());
    }
    for file in &report.files {
        println!("  created {}", file.display());
    }

    println!();
    println!("Project ready at {}", report.root.display());
    println!();
    println!("Next steps:");
    println!("  cd {}", report.root.display());
    println!("  git init");
    println!("  # fill in genesis.md, then plan the first phase in task_plan.md");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn args(name: &str) -> NewArgs {
        NewArgs {
            name: name.to_string(),
            path: None,
            license: None,
            visibility: None,
        }
    }

    #[test]
    fn test_license_arg_conversion() {
        assert_eq!(LicenseKind::from(LicenseArg::Mit), LicenseKind::Mit);
        assert_eq!(LicenseKind::from(LicenseArg::Apache2), LicenseKind::Apache2);
        assert_eq!(LicenseKind::from(LicenseArg::Gpl3), LicenseKind::Gpl3);
        assert_eq!(
            LicenseKind::from(LicenseArg::Proprietary),
            LicenseKind::Proprietary
        );
    }

    #[test]
    fn test_license_arg_names() {
        assert!(LicenseArg::from_str("Apache-2.0", false).is_ok());
        assert!(LicenseArg::from_str("gpl-3.0", true).is_ok());
        assert!(LicenseArg::from_str("BSD", true).is_err());
    }

    #[test]
    fn test_options_use_config_defaults() {
        let config = ScaffoldConfig {
            path: PathBuf::from("/srv/projects"),
            license: LicenseKind::Gpl3,
            visibility: Visibility::Public,
        };

        let options = args("demo").options(&config);
        assert_eq!(options.root(), PathBuf::from("/srv/projects/demo"));
        assert_eq!(options.license, LicenseKind::Gpl3);
        assert_eq!(options.visibility, Visibility::Public);
    }

    #[test]
    fn test_flags_override_config() {
        let config = ScaffoldConfig {
            path: PathBuf::from("/srv/projects"),
            license: LicenseKind::Gpl3,
            visibility: Visibility::Public,
        };
        let args = NewArgs {
            name: "demo".to_string(),
            path: Some(PathBuf::from("/tmp")),
            license: Some(LicenseArg::Proprietary),
            visibility: Some(VisibilityArg::Private),
        };

        let options = args.options(&config);
        assert_eq!(options.root(), PathBuf::from("/tmp/demo"));
        assert_eq!(options.license, LicenseKind::Proprietary);
        assert_eq!(options.visibility, Visibility::Private);
    }

    #[test]
    fn test_scaffold_creates_project() {
        let temp_dir = TempDir::new().unwrap();
        let config = ScaffoldConfig {
            path: temp_dir.path().to_path_buf(),
            ..ScaffoldConfig::default()
        };

        scaffold(&args("demo"), &config, today()).unwrap();

        let root = temp_dir.path().join("demo");
        assert!(root.join("genesis.md").is_file());
        assert!(root.join("LICENSE").is_file());
    }

    #[test]
    fn test_scaffold_existing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("demo")).unwrap();
        let config = ScaffoldConfig {
            path: temp_dir.path().to_path_buf(),
            ..ScaffoldConfig::default()
        };

        let err = scaffold(&args("demo"), &config, today()).unwrap_err();
        assert!(format!("{err:#}").contains("already exists"));
    }
}
