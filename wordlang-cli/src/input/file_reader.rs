//! File and stdin reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

use super::InputText;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file into an input labelled with its path
    pub fn read_input(path: &Path) -> Result<InputText> {
        let text = Self::read_text(path)?;
        Ok(InputText::new(path.display().to_string(), text))
    }

    /// Read one input per non-blank line, labelled `stdin:<line>`
    pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<InputText>> {
        let mut inputs = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            inputs.push(InputText::new(format!("stdin:{}", idx + 1), line));
        }

        Ok(inputs)
    }
}
