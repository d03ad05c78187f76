//! Detect command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordlang_core::LanguageDetector;

use super::SourceArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputText};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Text to detect (reads stdin lines when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of worker threads (default: from config, else all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `source: language` line per input
    Text,
    /// JSON array of detections
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Name used on the command line and in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// All formats, in display order
    pub fn all() -> [OutputFormat; 3] {
        [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown]
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::all()
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CliError::ConfigError(format!("unknown output format '{s}'")))
    }
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting language detection");

        let config = self.source.load_config()?;
        let dictionary = self.source.load_dictionary(&config)?;
        let detector = LanguageDetector::with_config(dictionary, config.detection.clone())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let inputs = self.collect_inputs()?;
        if inputs.is_empty() {
            return Err(CliError::NoInput.into());
        }
        log::info!("Detecting {} input(s)", inputs.len());

        let results = self.detect_all(&detector, &inputs, &config, quiet)?;

        let mut formatter = self.formatter(&config)?;
        for (input, language) in inputs.iter().zip(&results) {
            formatter.format_detection(&input.source, language.as_deref())?;
        }
        formatter.finish()?;

        log::info!("Detection complete");
        Ok(())
    }

    /// Gather the texts to detect, in output order
    fn collect_inputs(&self) -> Result<Vec<InputText>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputText::new("<text>", text.clone())]);
        }

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::debug!("Resolved {} file(s)", files.len());
            return files.iter().map(|path| FileReader::read_input(path)).collect();
        }

        FileReader::read_lines(io::stdin().lock())
    }

    /// Run detection over every input on a dedicated thread pool
    fn detect_all(
        &self,
        detector: &LanguageDetector,
        inputs: &[InputText],
        config: &CliConfig,
        quiet: bool,
    ) -> Result<Vec<Option<String>>> {
        let threads = self
            .threads
            .or(match config.performance.worker_threads {
                0 => None,
                n => Some(n),
            })
            .unwrap_or_else(num_cpus::get);
        log::debug!("Using {} worker thread(s)", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        let mut progress = ProgressReporter::new(quiet || self.input.is_empty());
        progress.init_files(inputs.len() as u64);

        let results: Vec<Option<String>> = pool.install(|| {
            inputs
                .par_iter()
                .map(|input| {
                    let language = detector.detect(&input.text);
                    progress.file_completed(&input.source);
                    language
                })
                .collect()
        });

        progress.finish();
        Ok(results)
    }

    /// Build the formatter for the requested format and destination
    fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text if self.text.is_some() => Box::new(TextFormatter::bare(writer)),
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}
