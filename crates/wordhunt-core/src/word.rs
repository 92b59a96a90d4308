//! Target words and their canonical letter form.

use std::{borrow::Borrow, fmt};

use crate::Letter;

/// Fewest letters a word may have.
///
/// A single cell is never accepted as a selection, so shorter words could not
/// be found.
pub const MIN_WORD_LEN: usize = 2;

/// Identifier of a target word, unique within one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct WordId(String);

impl WordId {
    /// Creates a word id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Error returned when a word cannot be turned into grid letters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has no letters left after canonicalization.
    #[display("word {id} has no letters")]
    Empty {
        /// Id of the offending word.
        id: WordId,
    },
    /// The word contains a character outside A-Z.
    #[display("word {id} contains unsupported character {ch:?}")]
    InvalidCharacter {
        /// Id of the offending word.
        id: WordId,
        /// The unsupported character.
        ch: char,
    },
    /// The word has fewer than [`MIN_WORD_LEN`] letters.
    #[display("word {id} is too short ({len} letter(s))")]
    TooShort {
        /// Id of the offending word.
        id: WordId,
        /// Number of canonical letters.
        len: usize,
    },
}

/// A word as supplied by the caller.
///
/// `value` is the text hidden in the grid, `label` the text shown to the
/// player. They usually differ only in case and spacing, e.g. value
/// `"THEHORIZON"` with label `"The Horizon"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Unique id of the word.
    pub id: WordId,
    /// Text to hide in the grid.
    pub value: String,
    /// Text to display.
    pub label: String,
}

impl WordEntry {
    /// Creates a word entry.
    #[must_use]
    pub fn new(id: impl Into<WordId>, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            label: label.into(),
        }
    }

    /// Creates an entry from a display label alone.
    ///
    /// The hidden value is the label itself, and the id is the label's
    /// uppercase form with whitespace and punctuation removed.
    ///
    /// ```
    /// use wordhunt_core::WordEntry;
    ///
    /// let entry = WordEntry::from_label("Road trip");
    /// assert_eq!(entry.id.as_str(), "ROADTRIP");
    /// assert_eq!(entry.value, "Road trip");
    /// assert_eq!(entry.label, "Road trip");
    /// ```
    #[must_use]
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let id: String = label
            .chars()
            .filter(|ch| !is_ignored(*ch))
            .flat_map(char::to_uppercase)
            .collect();
        Self::new(id, label.clone(), label)
    }

    /// Converts the value into its canonical letters.
    ///
    /// Letters are uppercased; whitespace and ASCII punctuation are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::InvalidCharacter`] for any other character outside
    /// A-Z (digits, accented letters, ...), [`WordError::Empty`] if no
    /// letter remains, and [`WordError::TooShort`] if fewer than
    /// [`MIN_WORD_LEN`] letters remain.
    ///
    /// ```
    /// use wordhunt_core::{WordEntry, WordError};
    ///
    /// let word = WordEntry::new("W", "W-Motors", "W Motors").canonicalize()?;
    /// assert_eq!(word.to_string(), "WMOTORS");
    ///
    /// let err = WordEntry::new("G", "G700", "G700").canonicalize().unwrap_err();
    /// assert!(matches!(err, WordError::InvalidCharacter { ch: '7', .. }));
    /// # Ok::<(), WordError>(())
    /// ```
    pub fn canonicalize(&self) -> Result<CanonicalWord, WordError> {
        let letters = self
            .value
            .chars()
            .filter(|ch| !is_ignored(*ch))
            .map(|ch| {
                Letter::try_from(ch).map_err(|_| WordError::InvalidCharacter {
                    id: self.id.clone(),
                    ch,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if letters.is_empty() {
            return Err(WordError::Empty {
                id: self.id.clone(),
            });
        }
        if letters.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort {
                id: self.id.clone(),
                len: letters.len(),
            });
        }
        Ok(CanonicalWord {
            id: self.id.clone(),
            label: self.label.clone(),
            letters,
        })
    }
}

fn is_ignored(ch: char) -> bool {
    ch.is_whitespace() || ch.is_ascii_punctuation()
}

/// A word reduced to the letters that are placed in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalWord {
    id: WordId,
    label: String,
    letters: Vec<Letter>,
}

impl CanonicalWord {
    /// Returns the word id.
    #[must_use]
    pub fn id(&self) -> &WordId {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the canonical letters.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; canonical words have at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for CanonicalWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|letter| fmt::Display::fmt(letter, f))
    }
}
