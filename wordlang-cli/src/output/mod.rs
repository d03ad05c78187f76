//! Output formatting module

use anyhow::Result;

/// Label printed for inputs no language matched
pub const UNKNOWN_LABEL: &str = "unknown";

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input
    fn format_detection(&mut self, source: &str, language: Option<&str>) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
