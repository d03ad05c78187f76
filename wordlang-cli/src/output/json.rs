//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs detections as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    detections: Vec<DetectionData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectionData {
    /// Where the text came from
    pub source: String,
    /// Detected language, `null` when undetected
    pub language: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            detections: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_detection(&mut self, source: &str, language: Option<&str>) -> Result<()> {
        self.detections.push(DetectionData {
            source: source.to_string(),
            language: language.map(str::to_string),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.detections)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.detections)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
