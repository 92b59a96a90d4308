use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`PuzzleSeed`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("invalid hex digit {ch:?} at position {position}")]
    InvalidDigit {
        /// The rejected character.
        ch: char,
        /// Zero-based character position.
        position: usize,
    },
}

/// The 256-bit seed a puzzle is generated from.
///
/// Generating with the same seed, words, and options always produces the same
/// puzzle. Seeds print and parse as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use wordhunt_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily-2026-10-18");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(parsed, seed);
/// # Ok::<(), wordhunt_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from an arbitrary phrase (SHA-256 of its UTF-8 bytes).
    ///
    /// Useful for shareable seeds such as one puzzle per calendar day.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random number generator driving one generation run.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                ch.to_digit(16)
                    .ok_or(ParseSeedError::InvalidDigit { ch, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            #[expect(clippy::cast_possible_truncation)]
            let value = ((pair[0] << 4) | pair[1]) as u8;
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore as _;

    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_display_and_parse_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(HEX.to_uppercase().parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &HEX[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidDigit {
                ch: 'g',
                position: 63
            })
        );
    }

    #[test]
    fn test_from_phrase_is_stable() {
        let a = PuzzleSeed::from_phrase("hello");
        let b = PuzzleSeed::from_phrase("hello");
        let c = PuzzleSeed::from_phrase("hello!");
        assert_eq!(a, b);
        assert_ne!(a, c);
        // SHA-256("hello")
        assert_eq!(
            a.to_string(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = PuzzleSeed::from_phrase("stream");
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
