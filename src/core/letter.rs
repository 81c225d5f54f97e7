//! Board letter representation
//!
//! A `Letter` is a single uppercase ASCII letter as it appears on a tile or key.

use std::fmt;
use thiserror::Error;

/// One uppercase ASCII letter (A-Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for invalid letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("letter must be ASCII, got {0:?}")]
    NonAscii(char),
    #[error("letter must be alphabetic, got {0:?}")]
    NotAlphabetic(char),
    #[error("expected a single letter, got {0:?}")]
    NotSingle(String),
}

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `LetterError` if the character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::Letter;
    ///
    /// let letter = Letter::new('c').unwrap();
    /// assert_eq!(letter.as_char(), 'C');
    ///
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, LetterError> {
        if !ch.is_ascii() {
            return Err(LetterError::NonAscii(ch));
        }
        if !ch.is_ascii_alphabetic() {
            return Err(LetterError::NotAlphabetic(ch));
        }
        Ok(Self(ch.to_ascii_uppercase() as u8))
    }

    /// Parse a one-letter string, as used in the server's guess matrix
    ///
    /// # Errors
    /// Returns `LetterError::NotSingle` unless the string holds exactly one character.
    pub fn parse(text: &str) -> Result<Self, LetterError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(LetterError::NotSingle(text.to_string())),
        }
    }

    /// The letter as an uppercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_creation_uppercase_normalized() {
        assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'Z');
        assert_eq!(Letter::new('a').unwrap(), Letter::new('A').unwrap());
    }

    #[test]
    fn letter_creation_invalid() {
        assert_eq!(Letter::new('3'), Err(LetterError::NotAlphabetic('3')));
        assert_eq!(Letter::new(' '), Err(LetterError::NotAlphabetic(' ')));
        assert_eq!(Letter::new('é'), Err(LetterError::NonAscii('é')));
    }

    #[test]
    fn letter_parse_requires_single_char() {
        assert_eq!(Letter::parse("r").unwrap().as_char(), 'R');
        assert!(matches!(Letter::parse(""), Err(LetterError::NotSingle(_))));
        assert!(matches!(Letter::parse("ab"), Err(LetterError::NotSingle(_))));
    }

    #[test]
    fn letter_index_and_alphabet() {
        assert_eq!(Letter::new('A').unwrap().index(), 0);
        assert_eq!(Letter::new('z').unwrap().index(), 25);

        let all: String = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(all, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn letter_display() {
        let letter = Letter::new('q').unwrap();
        assert_eq!(format!("{letter}"), "Q");
    }
}
