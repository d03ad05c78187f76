//! Detection pipeline
//!
//! Ties the stages together: text → tokens → score board → winning label.
//! A [`LanguageDetector`] holds the dictionary behind an `Arc`, so clones are
//! cheap and it can be shared across threads.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::DetectorConfig;
use crate::dictionary::LanguageDictionary;
use crate::error::ConfigError;
use crate::scorer::{self, ScoreBoard};
use crate::selector;
use crate::tokenizer::tokenize;

/// Dictionary-backed language detector
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    dictionary: Arc<LanguageDictionary>,
    config: DetectorConfig,
}

impl LanguageDetector {
    /// Create a detector with the default scoring policy
    pub fn new(dictionary: impl Into<Arc<LanguageDictionary>>) -> Self {
        Self {
            dictionary: dictionary.into(),
            config: DetectorConfig::default(),
        }
    }

    /// Create a detector with a custom scoring policy
    pub fn with_config(
        dictionary: impl Into<Arc<LanguageDictionary>>,
        config: DetectorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            dictionary: dictionary.into(),
            config,
        })
    }

    /// The shared dictionary
    pub fn dictionary(&self) -> &Arc<LanguageDictionary> {
        &self.dictionary
    }

    /// The scoring policy
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Score every language for `text`
    pub fn score(&self, text: &str) -> ScoreBoard {
        scorer::score(tokenize(text), &self.dictionary, &self.config)
    }

    /// Most likely language of `text`, or `None` when nothing matched
    pub fn detect(&self, text: &str) -> Option<String> {
        let board = self.score(text);
        let detected = selector::select(&board);
        log::debug!(
            "Detected {:?} ({} languages scored)",
            detected,
            board.len()
        );
        detected
    }

    /// Detect many texts; results keep the input order
    #[cfg(feature = "parallel")]
    pub fn detect_batch<S>(&self, texts: &[S]) -> Vec<Option<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.detect(text.as_ref())).collect()
    }

    /// Detect many texts; results keep the input order
    #[cfg(not(feature = "parallel"))]
    pub fn detect_batch<S>(&self, texts: &[S]) -> Vec<Option<String>>
    where
        S: AsRef<str>,
    {
        texts.iter().map(|text| self.detect(text.as_ref())).collect()
    }
}

/// Detect the language of `text` with the default scoring policy
pub fn detect_language(text: &str, dictionary: &LanguageDictionary) -> Option<String> {
    let board = scorer::score(tokenize(text), dictionary, &DetectorConfig::default());
    selector::select(&board)
}
