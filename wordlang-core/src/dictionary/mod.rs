//! Per-language word-frequency tables
//!
//! A [`LanguageDictionary`] maps a language identifier to its
//! [`FrequencyTable`]. Detection only ever reads these structures, so one
//! dictionary can be shared between threads behind an `Arc`.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::collections::{hash_map, BTreeMap, HashMap};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::DictionaryError;

pub use loader::{load_dir, parse_table};

/// Word → occurrence count for one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    words: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a word's frequency. The word is stored as given;
    /// callers are expected to pass lowercase words.
    pub fn insert(&mut self, word: impl Into<String>, frequency: u64) -> Option<u64> {
        self.words.insert(word.into(), frequency)
    }

    /// Frequency of an exact word
    pub fn get(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// Whether the word is a key of the table
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, frequency)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(word, &freq)| (word.as_str(), freq))
    }

    /// Iterate over the words in arbitrary order
    pub fn words(&self) -> hash_map::Keys<'_, String, u64> {
        self.words.keys()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|(w, f)| (w.into(), f)).collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, u64)> for FrequencyTable {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        self.words
            .extend(iter.into_iter().map(|(w, f)| (w.into(), f)));
    }
}

impl FromStr for FrequencyTable {
    type Err = DictionaryError;

    /// Parse `word frequency` records, one per line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_table(s.as_bytes(), PathBuf::from("<inline>"))
    }
}

/// Language identifier → frequency table
///
/// Keys are kept ordered so that iteration, and therefore tie resolution
/// during selection, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageDictionary {
    languages: BTreeMap<String, FrequencyTable>,
}

impl LanguageDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a language's table
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        table: FrequencyTable,
    ) -> Option<FrequencyTable> {
        self.languages.insert(language.into(), table)
    }

    /// Table for one language
    pub fn get(&self, language: &str) -> Option<&FrequencyTable> {
        self.languages.get(language)
    }

    /// Language identifiers in sorted order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Iterate over `(language, table)` pairs in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyTable)> {
        self.languages.iter().map(|(lang, table)| (lang.as_str(), table))
    }

    /// Number of languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is present
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Sum of the word counts of every table
    pub fn total_words(&self) -> usize {
        self.languages.values().map(FrequencyTable::len).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, FrequencyTable)> for LanguageDictionary {
    fn from_iter<I: IntoIterator<Item = (S, FrequencyTable)>>(iter: I) -> Self {
        Self {
            languages: iter.into_iter().map(|(l, t)| (l.into(), t)).collect(),
        }
    }
}
