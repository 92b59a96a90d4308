//! Grid letter representation.

use std::fmt::{self, Display};

/// Error returned when a character is not one of the letters A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid letter: {ch:?}")]
pub struct ParseLetterError {
    /// The rejected character.
    pub ch: char,
}

/// An uppercase letter in the range A-Z.
///
/// Every cell of a finished grid holds exactly one `Letter`, so the type
/// guarantees that no other character can ever end up in a puzzle.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Letter;
///
/// let letter = Letter::try_from('q')?;
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(Letter::ALL.len(), 26);
/// # Ok::<(), wordhunt_core::ParseLetterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Array containing all letters from A to Z, in alphabetical order.
    pub const ALL: [Self; 26] = {
        let mut all = [Self(b'A'); 26];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 26 {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from an ASCII byte, accepting either case.
    ///
    /// Returns `None` if `byte` is not an ASCII letter.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Returns the uppercase ASCII byte of this letter.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Returns the uppercase character of this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl TryFrom<char> for Letter {
    type Error = ParseLetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        u8::try_from(ch)
            .ok()
            .and_then(Self::from_ascii)
            .ok_or(ParseLetterError { ch })
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_letters_in_order() {
        assert_eq!(Letter::ALL[0].as_char(), 'A');
        assert_eq!(Letter::ALL[25].as_char(), 'Z');
        for pair in Letter::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(Letter::try_from('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::try_from('Z').unwrap().as_char(), 'Z');
        assert_eq!(Letter::try_from('7'), Err(ParseLetterError { ch: '7' }));
        assert_eq!(Letter::try_from('é'), Err(ParseLetterError { ch: 'é' }));
        assert_eq!(Letter::try_from(' '), Err(ParseLetterError { ch: ' ' }));
    }

    #[test]
    fn test_display() {
        let letter = Letter::from_ascii(b'k').unwrap();
        assert_eq!(letter.to_string(), "K");
        assert_eq!(char::from(letter), 'K');
        assert_eq!(letter.as_byte(), b'K');
    }
}
