//! Property-based tests for the tokenizer, edit distance and scorer

use proptest::prelude::*;
use wordlang_core::distance::edit_distance;
use wordlang_core::scorer::score_token;
use wordlang_core::{tokenize, DetectorConfig, FrequencyTable};

proptest! {
    #[test]
    fn distance_identity(s in "\\PC{0,16}") {
        prop_assert_eq!(edit_distance(&s, &s), 0);
    }

    #[test]
    fn distance_from_empty_is_length(s in "\\PC{0,16}") {
        prop_assert_eq!(edit_distance("", &s), s.chars().count());
    }

    #[test]
    fn distance_is_symmetric(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn distance_bounded_by_longer_length(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let d = edit_distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn tokens_are_normalized(text in "[ -~\\t\\n]{0,64}") {
        for token in tokenize(&text) {
            prop_assert!(token.chars().count() > 1);
            prop_assert!(!token.chars().any(|c| c.is_ascii_punctuation()));
            prop_assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn fuzzy_contribution_is_capped(
        token in "[a-d]{2,6}",
        words in prop::collection::vec("[a-d]{1,7}", 1..20),
    ) {
        let table: FrequencyTable = words.iter().map(|w| (w.as_str(), 1)).collect();
        prop_assume!(!table.contains(&token));

        let config = DetectorConfig::default();
        if let Some(points) = score_token(&token, &table, &config) {
            prop_assert!((1..=3).contains(&points));
        }
    }

    #[test]
    fn pruning_never_changes_scores(
        token in "[a-c]{2,8}",
        words in prop::collection::vec("[a-c]{1,10}", 0..25),
    ) {
        let table: FrequencyTable = words.iter().map(|w| (w.as_str(), 7)).collect();
        prop_assert_eq!(
            score_token(&token, &table, &DetectorConfig::default()),
            score_token(&token, &table, &DetectorConfig::exhaustive())
        );
    }
}
