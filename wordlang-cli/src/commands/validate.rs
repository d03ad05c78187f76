//! Validate command implementation

use anyhow::Result;
use clap::Args;

use super::SourceArgs;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let config = self.source.load_config()?;
        let dir = self.source.dictionary_dir(&config);

        println!("Validating dictionaries: {}", dir.display());

        match self.source.load_dictionary(&config) {
            Ok(dictionary) => {
                println!("✓ Dictionaries are valid!");
                for (language, table) in dictionary.iter() {
                    println!("  {language}: {} words", table.len());
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionaries are invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
