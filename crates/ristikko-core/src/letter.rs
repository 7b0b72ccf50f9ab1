//! The crossword letter alphabet.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A single uppercase letter that may be entered into a cell.
///
/// The alphabet is ASCII `A`–`Z` plus the Finnish/Swedish letters `Å`, `Ä` and `Ö`.
/// Lowercase input is normalized to uppercase; everything else is rejected.
///
/// # Examples
///
/// ```
/// use ristikko_core::Letter;
///
/// assert_eq!(Letter::from_char('a').map(Letter::as_char), Some('A'));
/// assert_eq!(Letter::from_char('ö').map(Letter::as_char), Some('Ö'));
/// assert_eq!(Letter::from_char('1'), None);
/// assert_eq!(Letter::from_char('é'), None);
///
/// let letter: Letter = "å".parse().unwrap();
/// assert_eq!(letter.to_string(), "Å");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Letters accepted beyond ASCII `A`–`Z`.
    pub const NORDIC: [char; 3] = ['Å', 'Ä', 'Ö'];

    /// Creates a letter from a character, normalizing case.
    ///
    /// Returns `None` if the character is outside the alphabet.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let upper = match ch {
            'a'..='z' => ch.to_ascii_uppercase(),
            'å' => 'Å',
            'ä' => 'Ä',
            'ö' => 'Ö',
            _ => ch,
        };
        match upper {
            'A'..='Z' | 'Å' | 'Ä' | 'Ö' => Some(Self(upper)),
            _ => None,
        }
    }

    /// Returns the uppercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

/// Error returned when text is not a valid [`Letter`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterError {
    /// The character is outside the alphabet.
    #[display("unsupported letter: {ch:?}")]
    Unsupported {
        /// The rejected character.
        ch: char,
    },
    /// The text is not exactly one character.
    #[display("expected a single letter, got {len} characters")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(LetterError::Unsupported { ch })
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(LetterError::WrongLength {
                len: s.chars().count(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_accepts_full_alphabet() {
        for ch in ('A'..='Z').chain(Letter::NORDIC) {
            assert_eq!(Letter::from_char(ch).map(Letter::as_char), Some(ch));
        }
        for (lower, upper) in [('q', 'Q'), ('å', 'Å'), ('ä', 'Ä'), ('ö', 'Ö')] {
            assert_eq!(Letter::from_char(lower).map(Letter::as_char), Some(upper));
        }
    }

    #[test]
    fn test_rejects_non_letters() {
        for ch in ['1', '$', ' ', '-', 'é', 'ß', 'Ø', '\n'] {
            assert_eq!(Letter::from_char(ch), None);
            assert_eq!(Letter::try_from(ch), Err(LetterError::Unsupported { ch }));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("k".parse::<Letter>().map(Letter::as_char), Ok('K'));
        assert_eq!(
            "".parse::<Letter>(),
            Err(LetterError::WrongLength { len: 0 })
        );
        assert_eq!(
            "AB".parse::<Letter>(),
            Err(LetterError::WrongLength { len: 2 })
        );
    }

    proptest! {
        #[test]
        fn prop_accepted_letters_are_uppercase(ch in any::<char>()) {
            if let Some(letter) = Letter::from_char(ch) {
                let c = letter.as_char();
                prop_assert!(c.is_ascii_uppercase() || Letter::NORDIC.contains(&c));
                prop_assert_eq!(Letter::from_char(c), Some(letter));
            }
        }
    }
}
