//! Dictionary-based language identification
//!
//! Text is split into normalized word tokens, each token is scored against
//! per-language word-frequency tables (exact hits first, then the closest
//! word within a small edit distance), and the language with the highest
//! accumulated score wins.
//!
//! # Architecture
//!
//! - **tokenizer**: whitespace split, punctuation strip, case fold
//! - **distance**: Levenshtein edit distance
//! - **scorer**: exact and fuzzy scoring into a [`ScoreBoard`]
//! - **selector**: arg-max with a deterministic tie-break
//! - **dictionary**: frequency tables and the on-disk loader
//!
//! # Example
//!
//! ```rust
//! use wordlang_core::{FrequencyTable, LanguageDetector, LanguageDictionary};
//!
//! let mut dictionary = LanguageDictionary::new();
//! dictionary.insert("english", FrequencyTable::from_iter([("hello", 100), ("world", 50)]));
//! dictionary.insert("french", FrequencyTable::from_iter([("bonjour", 80)]));
//!
//! let detector = LanguageDetector::new(dictionary);
//! assert_eq!(detector.detect("Hello world").as_deref(), Some("english"));
//! assert_eq!(detector.detect("qqqq zzzz"), None);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod detector;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod scorer;
pub mod selector;
pub mod tokenizer;

// Re-export key types
pub use config::{DetectorConfig, DetectorConfigBuilder};
pub use detector::{detect_language, LanguageDetector};
pub use dictionary::{FrequencyTable, LanguageDictionary};
pub use distance::edit_distance;
pub use error::{ConfigError, DictionaryError, Result};
pub use scorer::{score, ScoreBoard};
pub use selector::select;
pub use tokenizer::{tokenize, Token};
