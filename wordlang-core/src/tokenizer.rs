//! Text normalization
//!
//! Turns raw input into the word tokens the scorer looks up: whitespace
//! split, ASCII punctuation removed, ASCII-lowercased, and single characters
//! dropped as noise.

use std::fmt;
use std::ops::Deref;
use std::str::SplitWhitespace;

/// A normalized word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// Normalize a single whitespace-free piece, returning `None` when
    /// nothing longer than one character survives.
    pub fn normalize(piece: &str) -> Option<Self> {
        let word: String = piece
            .chars()
            .filter(|ch| !ch.is_ascii_punctuation())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        (word.chars().count() > 1).then_some(Self(word))
    }

    /// Borrow the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the token
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume the token, returning the owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lazy iterator over the tokens of a text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pieces: SplitWhitespace<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.pieces.by_ref().find_map(Token::normalize)
    }
}

/// Split `text` into normalized tokens, in input order
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        pieces: text.split_whitespace(),
    }
}
