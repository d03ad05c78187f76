//! Per-token scoring against frequency tables
//!
//! Every token is scored independently against every language:
//!
//! - exact hit: `exact_bonus + frequency`
//! - otherwise the closest dictionary word within `max_distance` adds
//!   `fuzzy_ceiling - distance`, once per (token, language) pair
//! - otherwise nothing, and no board entry is created

use std::collections::BTreeMap;

use crate::config::DetectorConfig;
use crate::dictionary::{FrequencyTable, LanguageDictionary};
use crate::distance::{edit_distance, length_gap_exceeds};

/// Accumulated score per language for one detection call
///
/// Only languages that received a contribution appear on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: BTreeMap<String, u64>,
}

impl ScoreBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to a language, creating its entry on first contribution
    pub fn add(&mut self, language: &str, points: u64) {
        match self.scores.get_mut(language) {
            Some(score) => *score = score.saturating_add(points),
            None => {
                self.scores.insert(language.to_string(), points);
            }
        }
    }

    /// Score of one language
    pub fn get(&self, language: &str) -> Option<u64> {
        self.scores.get(language).copied()
    }

    /// Iterate over `(language, score)` in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.scores.iter().map(|(lang, &score)| (lang.as_str(), score))
    }

    /// Number of languages on the board
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no language scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Score a token sequence against every language of `dictionary`
pub fn score<I>(tokens: I, dictionary: &LanguageDictionary, config: &DetectorConfig) -> ScoreBoard
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut board = ScoreBoard::new();

    for token in tokens {
        let token = token.as_ref();
        for (language, table) in dictionary.iter() {
            if let Some(points) = score_token(token, table, config) {
                board.add(language, points);
            }
        }
    }

    log::trace!("Score board: {:?}", board);
    board
}

/// Contribution of a single token to a single language
pub fn score_token(token: &str, table: &FrequencyTable, config: &DetectorConfig) -> Option<u64> {
    if let Some(frequency) = table.get(token) {
        return Some(config.exact_bonus.saturating_add(frequency));
    }

    let distance = closest_distance(token, table, config)?;
    config.fuzzy_score(distance)
}

/// Smallest edit distance from `token` to any word of `table`, if it is
/// within `config.max_distance`
pub fn closest_distance(token: &str, table: &FrequencyTable, config: &DetectorConfig) -> Option<usize> {
    let token_len = token.chars().count();
    // Sentinel: one past the largest accepted distance
    let mut best = config.max_distance + 1;

    for word in table.words() {
        // Only a strictly smaller distance than `best` matters
        if config.prune_by_length && length_gap_exceeds(token_len, word.chars().count(), best - 1)
        {
            continue;
        }

        let distance = edit_distance(token, word);
        if distance < best {
            best = distance;
            if best == 0 {
                break;
            }
        }
    }

    (best <= config.max_distance).then_some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[(&str, u64)]) -> FrequencyTable {
        words.iter().map(|&(w, f)| (w, f)).collect()
    }

    #[test]
    fn test_exact_match_adds_bonus_and_frequency() {
        let config = DetectorConfig::default();
        let english = table(&[("hello", 100)]);
        assert_eq!(score_token("hello", &english, &config), Some(110));
    }

    #[test]
    fn test_exact_match_with_zero_frequency() {
        let config = DetectorConfig::default();
        let english = table(&[("rare", 0)]);
        assert_eq!(score_token("rare", &english, &config), Some(10));
    }

    #[test]
    fn test_fuzzy_scores_by_distance() {
        let config = DetectorConfig::default();
        let english = table(&[("hello", 100)]);
        assert_eq!(score_token("helo", &english, &config), Some(2));
        assert_eq!(score_token("hxlo", &english, &config), Some(1));
        assert_eq!(score_token("hxxo", &english, &config), None);
    }

    #[test]
    fn test_fuzzy_contributes_once_for_closest_word() {
        let config = DetectorConfig::default();
        // Several words within distance 2; only the closest counts
        let english = table(&[("cart", 1), ("care", 1), ("cat", 1), ("cast", 1)]);
        assert_eq!(score_token("cas", &english, &config), Some(2));
    }

    #[test]
    fn test_pruning_matches_exhaustive_scan() {
        let english = table(&[("a", 1), ("abcdefgh", 1), ("hello", 1), ("help", 1)]);
        for token in ["hel", "helloooo", "zz", "abcdef"] {
            assert_eq!(
                closest_distance(token, &english, &DetectorConfig::default()),
                closest_distance(token, &english, &DetectorConfig::exhaustive()),
                "token {token}"
            );
        }
    }

    #[test]
    fn test_no_entry_for_languages_without_contribution() {
        let dict: LanguageDictionary = [
            ("english", table(&[("hello", 100), ("world", 50)])),
            ("french", table(&[("bonjour", 80)])),
        ]
        .into_iter()
        .collect();

        let board = score(["hello", "world"], &dict, &DetectorConfig::default());
        assert_eq!(board.get("english"), Some(170));
        assert_eq!(board.get("french"), None);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_scores_accumulate_across_tokens() {
        let dict: LanguageDictionary = [("english", table(&[("hello", 1)]))]
            .into_iter()
            .collect();
        let board = score(["hello", "helo", "hello"], &dict, &DetectorConfig::default());
        assert_eq!(board.get("english"), Some(11 + 2 + 11));
    }

    #[test]
    fn test_empty_dictionary_gives_empty_board() {
        let board = score(["hello"], &LanguageDictionary::new(), &DetectorConfig::default());
        assert!(board.is_empty());
    }

    #[test]
    fn test_board_saturates() {
        let mut board = ScoreBoard::new();
        board.add("x", u64::MAX);
        board.add("x", 5);
        assert_eq!(board.get("x"), Some(u64::MAX));
    }
}
