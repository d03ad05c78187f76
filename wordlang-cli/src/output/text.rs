//! Plain text output formatter

use super::{OutputFormatter, UNKNOWN_LABEL};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one `source: language` line per input
pub struct TextFormatter<W: Write> {
    writer: W,
    show_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_source: true,
        }
    }

    /// Print only the language label, without the source prefix
    pub fn bare(writer: W) -> Self {
        Self {
            writer,
            show_source: false,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_detection(&mut self, source: &str, language: Option<&str>) -> Result<()> {
        let label = language.unwrap_or(UNKNOWN_LABEL);
        if self.show_source {
            writeln!(self.writer, "{source}: {label}")?;
        } else {
            writeln!(self.writer, "{label}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_with_source() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_detection("a.txt", Some("english")).unwrap();
        formatter.format_detection("b.txt", None).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(out, "a.txt: english\nb.txt: unknown\n");
    }

    #[test]
    fn test_bare_label() {
        let mut formatter = TextFormatter::bare(Vec::new());
        formatter.format_detection("<text>", Some("french")).unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(out, "french\n");
    }
}
