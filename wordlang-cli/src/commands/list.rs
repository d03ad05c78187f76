//! List command implementation

use anyhow::Result;
use clap::Subcommand;

use super::detect::OutputFormat;
use super::SourceArgs;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages found in the dictionary directory
    Languages(SourceArgs),

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages(source) => {
                let config = source.load_config()?;
                let dictionary = source.load_dictionary(&config)?;
                for (language, table) in dictionary.iter() {
                    println!("{language}\t{} words", table.len());
                }
            }
            ListCommands::Formats => {
                for format in OutputFormat::all() {
                    println!("{}", format.as_str());
                }
            }
        }
        Ok(())
    }
}
