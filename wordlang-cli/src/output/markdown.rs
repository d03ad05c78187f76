//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs detections as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    input_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            input_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_detection(&mut self, source: &str, language: Option<&str>) -> Result<()> {
        self.input_count += 1;
        match language {
            Some(lang) => writeln!(self.writer, "{}. `{}`: **{}**", self.input_count, source, lang)?,
            None => writeln!(self.writer, "{}. `{}`: *unknown*", self.input_count, source)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total inputs: {}*", self.input_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_and_footer() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_detection("a.txt", Some("english")).unwrap();
        formatter.format_detection("b.txt", None).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert!(out.starts_with("1. `a.txt`: **english**\n2. `b.txt`: *unknown*\n"));
        assert!(out.ends_with("---\n*Total inputs: 2*\n"));
    }
}
