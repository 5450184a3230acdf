//! Changelog command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use etapa_changelog::{ChangelogWriter, EntryFormatter};
use etapa_config::ChangelogConfig;
use etapa_git::{CommitReader, GitCli};
use etapa_parser::ConventionalParser;

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Changelog file (default: CHANGELOG.md)
    #[arg(short, long, env = "ETAPA_CHANGELOG_FILE")]
    pub file: Option<PathBuf>,

    /// Repository URL used to link commits (e.g. https://github.com/user/repo)
    #[arg(long, env = "ETAPA_REPO_URL")]
    pub repo_url: Option<String>,

    /// Print the updated changelog instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Runs the changelog command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ChangelogArgs, config: &ChangelogConfig) -> Result<()> {
    update(&args, config, &GitCli::new(), Local::now().date_naive())
}

/// Reads the latest commit from `reader` and files it under `today`.
///
/// Nothing is written when the commit cannot be read.
fn update(
    args: &ChangelogArgs,
    config: &ChangelogConfig,
    reader: &dyn CommitReader,
    today: NaiveDate,
) -> Result<()> {
    let commit = reader
        .latest_commit()
        .context("no commit found, changelog left untouched")?;

    let parsed = ConventionalParser::new().parse(&commit);
    info!(
        id = %parsed.short_id(),
        change_type = %parsed.change_type,
        scope = ?parsed.scope,
        "parsed latest commit"
    );

    let mut formatter = EntryFormatter::new();
    if let Some(url) = args.repo_url.as_ref().or(config.repo_url.as_ref()) {
        formatter = formatter.with_repository_url(url);
    }
    let entry = formatter.format(&parsed);

    let path = args.file.as_ref().unwrap_or(&config.file);
    let writer = ChangelogWriter::new(path);

    println!("Recording: {}", entry.trim_end());

    if args.dry_run {
        let (document, _) = writer
            .preview(&entry, today)
            .with_context(|| format!("failed to read {}", path.display()))?;
        println!("\n{}", document.render());
        println!("Dry run: {} was not modified.", path.display());
    } else {
        writer
            .update(&entry, today)
            .with_context(|| format!("failed to update {}", path.display()))?;
        println!("Updated {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use etapa_commit::CommitRecord;
    use etapa_git::{GitError, GitResult};
    use tempfile::TempDir;

    struct FixedCommitReader(CommitRecord);

    impl CommitReader for FixedCommitReader {
        fn latest_commit(&self) -> GitResult<CommitRecord> {
            Ok(self.0.clone())
        }
    }

    struct MissingGit;

    impl CommitReader for MissingGit {
        fn latest_commit(&self) -> GitResult<CommitRecord> {
            Err(GitError::NotInstalled)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn args(file: PathBuf) -> ChangelogArgs {
        ChangelogArgs {
            file: Some(file),
            repo_url: None,
            dry_run: false,
        }
    }

    fn reader(subject: &str) -> FixedCommitReader {
        FixedCommitReader(CommitRecord::new(
            "abc1234ffffffffffffffffffffffffffffffff",
            subject,
            "",
        ))
    }

    #[test]
    fn test_update_creates_changelog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        update(
            &args(path.clone()),
            &ChangelogConfig::default(),
            &reader("feat: add login"),
            today(),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Changelog\n\n## [2024-01-15]\n\n- ✨ add login (`abc1234`)\n"
        );
    }

    #[test]
    fn test_non_conventional_subject_is_recorded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        update(
            &args(path.clone()),
            &ChangelogConfig::default(),
            &reader("cleanup temp files"),
            today(),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("- 📝 cleanup temp files (`abc1234`)\n"));
    }

    #[test]
    fn test_read_failure_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        let err = update(
            &args(path.clone()),
            &ChangelogConfig::default(),
            &MissingGit,
            today(),
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("git is not installed"));
        assert!(!path.exists());
    }

    #[test]
    fn test_repo_url_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");
        let config = ChangelogConfig {
            file: path.clone(),
            repo_url: Some("https://github.com/user/repo/".to_string()),
        };
        let args = ChangelogArgs {
            file: None,
            repo_url: None,
            dry_run: false,
        };

        update(&args, &config, &reader("fix(api): handle null"), today()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(
            "- 🐛 **(api)** handle null [`abc1234`](https://github.com/user/repo/commit/abc1234ffffffffffffffffffffffffffffffff)\n"
        ));
    }

    #[test]
    fn test_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let configured = temp_dir.path().join("CONFIGURED.md");
        let flagged = temp_dir.path().join("FLAGGED.md");
        let config = ChangelogConfig {
            file: configured.clone(),
            repo_url: None,
        };

        update(&args(flagged.clone()), &config, &reader("docs: readme"), today()).unwrap();

        assert!(flagged.exists());
        assert!(!configured.exists());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");
        fs::write(&path, "# Changelog\n\n## [2024-01-01]\n\n- old\n").unwrap();
        let args = ChangelogArgs {
            file: Some(path.clone()),
            repo_url: None,
            dry_run: true,
        };

        update(&args, &ChangelogConfig::default(), &reader("feat: x"), today()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Changelog\n\n## [2024-01-01]\n\n- old\n"
        );
    }
}
