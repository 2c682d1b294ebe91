//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use projboard_core::BoardConfig;
use std::path::PathBuf;

pub mod demo;
pub mod run;
pub mod show_config;

/// Projboard - drag projects from active to finished
#[derive(Parser)]
#[command(name = "projboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Board configuration file (TOML)
    #[arg(short, long, global = true, env = "PROJBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive board session (default)
    Run,

    /// Fill a board with sample projects and print it
    Demo,

    /// Print the effective board configuration
    Config,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = BoardConfig::load(self.config.as_deref()).with_context(|| match &self.config {
            Some(path) => format!("Failed to load board config from {}", path.display()),
            None => "Failed to build default board config".to_string(),
        })?;

        match self.command.unwrap_or(Commands::Run) {
            Commands::Run => run::execute(&config),
            Commands::Demo => demo::execute(&config),
            Commands::Config => show_config::execute(&config),
        }
    }
}
