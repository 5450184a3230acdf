//! Subcommands.

pub mod changelog;
pub mod new;
