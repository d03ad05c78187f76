//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordlang_core::dictionary::load_dir;
use wordlang_core::LanguageDictionary;

use crate::config::CliConfig;
use crate::error::CliError;

pub mod detect;
pub mod list;
pub mod validate;

/// Dictionary-based language detection
#[derive(Debug, Parser)]
#[command(name = "wordlang", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress progress and log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Initialize logging and run the selected command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Detect(args) => args.execute(self.quiet),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the language of text, files, or stdin lines
    Detect(detect::DetectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Check that a dictionary directory loads cleanly
    Validate(validate::ValidateArgs),
}

/// Where dictionaries and configuration come from
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Directory of `<language>.txt` frequency tables
    #[arg(short, long, value_name = "DIR", env = "WORDLANG_DICTIONARIES")]
    pub dictionaries: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    /// Read the configuration file, or defaults when none was given
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::from_file(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Dictionary directory: command line first, then configuration
    pub fn dictionary_dir(&self, config: &CliConfig) -> PathBuf {
        self.dictionaries
            .clone()
            .unwrap_or_else(|| config.dictionaries.directory.clone())
    }

    /// Load every frequency table from the resolved directory
    pub fn load_dictionary(&self, config: &CliConfig) -> Result<LanguageDictionary> {
        let dir = self.dictionary_dir(config);
        if !dir.is_dir() {
            return Err(CliError::DictionaryNotFound(dir.display().to_string()).into());
        }

        log::info!("Loading language dictionaries from {}", dir.display());
        load_dir(&dir)
            .with_context(|| format!("Failed to load dictionaries from {}", dir.display()))
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A second initialization (e.g. from tests) is harmless
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
