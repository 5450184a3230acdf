//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use etapa_config::{Config, load_config, load_config_or_default};

use crate::commands;

/// Keep a changelog from your commits and start projects from a template.
#[derive(Debug, Parser)]
#[command(name = "etapa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: nearest etapa.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add the latest commit to the changelog
    Changelog(commands::changelog::ChangelogArgs),

    /// Create a new project from the built-in template
    New(commands::new::NewArgs),
}

impl Cli {
    /// Loads the configuration.
    fn config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => load_config_or_default().context("failed to load configuration"),
        }
    }

    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = self.config()?;
        match self.command {
            Commands::Changelog(args) => commands::changelog::run(args, &config.changelog),
            Commands::New(args) => commands::new::run(args, &config.scaffold),
        }
    }
}
