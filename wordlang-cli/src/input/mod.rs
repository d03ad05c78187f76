//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// One text to run detection on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// Where the text came from (file path, `stdin:N`, or `<text>`)
    pub source: String,
    /// The text itself
    pub text: String,
}

impl InputText {
    /// Create a new input
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}
