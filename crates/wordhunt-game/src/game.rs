use std::collections::BTreeSet;

use rand::{Rng, seq::IndexedRandom as _};
use wordhunt_core::{CellPosition, Puzzle, WordId};

use crate::{GameError, MIN_SELECTION_LEN, validate_selection};

/// Number of hints a new session starts with.
pub const DEFAULT_HINTS: u32 = 3;

/// Whether a session still accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// Some words are still hidden.
    InProgress,
    /// Every word has been found. Terminal.
    Completed,
}

/// Result of submitting a selection to a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The selection has fewer than two cells and was not checked.
    TooShort,
    /// The selection matches no hidden word.
    NoMatch,
    /// The selection matches a word that was already found.
    AlreadyFound(WordId),
    /// The selection uncovers a new word.
    Found {
        /// Id of the found word.
        word: WordId,
        /// Flattened indices of the word's cells, in word order.
        cells: Vec<usize>,
        /// `true` if this was the last hidden word.
        completed: bool,
    },
}

/// A revealed hint: the first cell of a word not yet found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Id of the hinted word.
    pub word: WordId,
    /// Cell holding the word's first letter.
    pub cell: CellPosition,
}

/// A word-search play session.
///
/// Tracks which words the player has found in one [`Puzzle`]. The session
/// moves from [`GameStatus::InProgress`] to [`GameStatus::Completed`] exactly
/// when every word is found, and never back. Playing another puzzle means
/// creating another `Game`.
///
/// # Example
///
/// ```
/// use wordhunt_core::WordEntry;
/// use wordhunt_game::{Game, SelectionOutcome};
/// use wordhunt_generator::{GridGenerator, PuzzleSeed};
///
/// let words = ["Road", "Map"].map(WordEntry::from_label);
/// let generated = GridGenerator::default().generate_with_seed(&words, PuzzleSeed::from_phrase("ex"))?;
/// let mut game = Game::new(generated);
///
/// let road: Vec<usize> = game.puzzle().placements().get("ROAD").unwrap().indices().collect();
/// let outcome = game.submit_selection(&road)?;
/// assert!(outcome.is_found());
/// assert!(game.status().is_in_progress());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    found: BTreeSet<WordId>,
    found_cells: BTreeSet<usize>,
    hints_remaining: u32,
}

impl Game {
    /// Starts a session with [`DEFAULT_HINTS`] hints.
    #[must_use]
    pub fn new(puzzle: impl Into<Puzzle>) -> Self {
        Self::with_hints(puzzle, DEFAULT_HINTS)
    }

    /// Starts a session with the given hint budget.
    #[must_use]
    pub fn with_hints(puzzle: impl Into<Puzzle>, hints: u32) -> Self {
        Self {
            puzzle: puzzle.into(),
            found: BTreeSet::new(),
            found_cells: BTreeSet::new(),
            hints_remaining: hints,
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the current session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.found.len() == self.puzzle.word_count() {
            GameStatus::Completed
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns `true` once every word has been found.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status().is_completed()
    }

    /// Returns the ids of the words found so far.
    #[must_use]
    pub fn found_words(&self) -> &BTreeSet<WordId> {
        &self.found
    }

    /// Returns the flattened indices of every cell covered by a found word.
    #[must_use]
    pub fn found_cells(&self) -> &BTreeSet<usize> {
        &self.found_cells
    }

    /// Returns the ids of the words not found yet, ordered by id.
    pub fn remaining_words(&self) -> impl Iterator<Item = &WordId> {
        self.puzzle
            .placements()
            .ids()
            .filter(|id| !self.found.contains(*id))
    }

    /// Returns the number of hints left.
    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    /// Checks a player's selection and records a newly found word.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyCompleted`] if every word was already found.
    pub fn submit_selection(&mut self, selection: &[usize]) -> Result<SelectionOutcome, GameError> {
        if self.is_completed() {
            return Err(GameError::AlreadyCompleted);
        }
        if selection.len() < MIN_SELECTION_LEN {
            return Ok(SelectionOutcome::TooShort);
        }
        let Some(word) = validate_selection(selection, self.puzzle.placements()) else {
            return Ok(SelectionOutcome::NoMatch);
        };
        if self.found.contains(word) {
            return Ok(SelectionOutcome::AlreadyFound(word.clone()));
        }

        let word = word.clone();
        let cells: Vec<usize> = self
            .puzzle
            .placements()
            .get(word.as_str())
            .map(|placement| placement.indices().collect())
            .unwrap_or_default();
        self.found_cells.extend(cells.iter().copied());
        self.found.insert(word.clone());

        let completed = self.is_completed();
        log::debug!(
            "found {word} ({}/{})",
            self.found.len(),
            self.puzzle.word_count()
        );
        Ok(SelectionOutcome::Found {
            word,
            cells,
            completed,
        })
    }

    /// Reveals the first cell of a random word not found yet.
    ///
    /// Consumes one hint.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyCompleted`] if every word was already found,
    /// and [`GameError::NoHintsRemaining`] if the hint budget is spent.
    pub fn hint<R>(&mut self, rng: &mut R) -> Result<Hint, GameError>
    where
        R: Rng,
    {
        if self.is_completed() {
            return Err(GameError::AlreadyCompleted);
        }
        if self.hints_remaining == 0 {
            return Err(GameError::NoHintsRemaining);
        }

        let remaining: Vec<&WordId> = self.remaining_words().collect();
        let word = (*remaining.choose(rng).ok_or(GameError::AlreadyCompleted)?).clone();
        let cell = self
            .puzzle
            .placements()
            .get(word.as_str())
            .and_then(|placement| placement.first_cell())
            .ok_or(GameError::AlreadyCompleted)?;

        self.hints_remaining -= 1;
        Ok(Hint { word, cell })
    }
}
