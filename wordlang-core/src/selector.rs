//! Winning language selection

use crate::scorer::ScoreBoard;

/// Language with the strictly greatest positive score.
///
/// The board iterates in identifier order and only a strictly greater score
/// replaces the current best, so ties go to the lexicographically smallest
/// identifier. An empty or all-zero board yields `None`.
pub fn select(board: &ScoreBoard) -> Option<String> {
    let mut best: Option<(&str, u64)> = None;

    for (language, score) in board.iter() {
        let current = best.map_or(0, |(_, s)| s);
        if score > current {
            best = Some((language, score));
        }
    }

    best.map(|(language, _)| language.to_string())
}
