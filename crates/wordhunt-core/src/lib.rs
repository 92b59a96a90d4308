//! Core data structures for word-search puzzles.
//!
//! This crate holds the vocabulary shared by puzzle generation and play:
//!
//! - [`Letter`]: a single grid letter, A-Z
//! - [`Direction`]: the eight straight and diagonal directions
//! - [`LetterGrid`] / [`FilledGrid`]: the grid under construction and the finished grid
//! - [`WordEntry`] / [`CanonicalWord`]: input words and their canonical letters
//! - [`Placement`] / [`PlacementMap`] / [`Puzzle`]: where every word is hidden
//!
//! The [`placer`] module provides the primitive placement operations used by
//! the generator.
//!
//! # Examples
//!
//! ```
//! use wordhunt_core::{Direction, LetterGrid, WordEntry, placer};
//!
//! let word = WordEntry::from_label("cat").canonicalize()?;
//! let mut grid = LetterGrid::new(3);
//!
//! assert!(placer::can_place_word(&grid, word.letters(), 0, 0, Direction::East));
//! let cells = placer::place_word(&mut grid, word.letters(), 0, 0, Direction::East)?;
//! assert_eq!(cells.iter().map(|c| c.index).collect::<Vec<_>>(), [0, 1, 2]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod placer;
pub mod puzzle;
pub mod word;

pub use self::{
    direction::Direction,
    grid::{CellPosition, FilledGrid, LetterGrid, ParseGridError},
    letter::{Letter, ParseLetterError},
    placer::PlacementError,
    puzzle::{Placement, PlacementMap, Puzzle, PuzzleError},
    word::{CanonicalWord, MIN_WORD_LEN, WordEntry, WordError, WordId},
};
