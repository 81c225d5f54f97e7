//! Canonical key identifiers

use crate::core::Letter;
use crossterm::event::KeyCode;
use std::fmt;

/// A key the game reacts to, independent of the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    Letter(Letter),
    Enter,
    Backspace,
    Left,
    Right,
}

impl KeyId {
    /// Map a terminal key code, `None` for keys the board ignores
    #[must_use]
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Char(ch) => Letter::new(ch).ok().map(Self::Letter),
            _ => None,
        }
    }

    /// Label shown on the on-screen keyboard
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Left => "←".to_string(),
            Self::Right => "→".to_string(),
        }
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        let lower = KeyId::from_key_code(KeyCode::Char('e'));
        let upper = KeyId::from_key_code(KeyCode::Char('E'));
        assert_eq!(lower, upper);
        assert_eq!(lower, Some(KeyId::Letter(Letter::new('E').unwrap())));
    }

    #[test]
    fn special_keys_map() {
        assert_eq!(KeyId::from_key_code(KeyCode::Enter), Some(KeyId::Enter));
        assert_eq!(
            KeyId::from_key_code(KeyCode::Backspace),
            Some(KeyId::Backspace)
        );
        assert_eq!(KeyId::from_key_code(KeyCode::Left), Some(KeyId::Left));
        assert_eq!(KeyId::from_key_code(KeyCode::Right), Some(KeyId::Right));
    }

    #[test]
    fn other_keys_ignored() {
        assert_eq!(KeyId::from_key_code(KeyCode::Char('1')), None);
        assert_eq!(KeyId::from_key_code(KeyCode::Char(' ')), None);
        assert_eq!(KeyId::from_key_code(KeyCode::Up), None);
        assert_eq!(KeyId::from_key_code(KeyCode::F(1)), None);
    }

    #[test]
    fn labels() {
        assert_eq!(KeyId::Enter.label(), "ENTER");
        assert_eq!(KeyId::Letter(Letter::new('q').unwrap()).label(), "Q");
    }
}
