//! Primitive operations for laying a word into a grid.
//!
//! [`can_place_word`] checks a candidate placement without touching the grid;
//! [`place_word`] performs it. A placement may overlap letters already in the
//! grid, but only where the letters agree.

use std::ops::RangeInclusive;

use crate::{CellPosition, Direction, Letter, LetterGrid};

/// Error returned by [`place_word`] for an infeasible placement.
///
/// The grid is left untouched when this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The letter at offset `offset` would fall outside the grid.
    #[display("letter {offset} falls outside the grid")]
    OutOfBounds {
        /// Offset of the letter within the word.
        offset: usize,
    },
    /// The cell already holds a different letter.
    #[display("cell ({row}, {col}) holds {existing}, cannot write {letter}")]
    Conflict {
        /// Row of the conflicting cell.
        row: usize,
        /// Column of the conflicting cell.
        col: usize,
        /// Letter already in the cell.
        existing: Letter,
        /// Letter that would have been written.
        letter: Letter,
    },
}

/// Returns the legal start coordinates along one axis.
///
/// A word of `len` letters starting inside the returned range and moving by
/// `step` per letter stays within `0..size`. Returns an empty range when the
/// word is longer than the grid.
///
/// ```
/// use wordhunt_core::placer::start_bounds;
///
/// assert_eq!(start_bounds(5, 3, 1), 0..=2);
/// assert_eq!(start_bounds(5, 3, -1), 2..=4);
/// assert_eq!(start_bounds(5, 3, 0), 0..=4);
/// assert!(start_bounds(2, 3, 1).is_empty());
/// ```
#[must_use]
pub fn start_bounds(size: usize, len: usize, step: i8) -> RangeInclusive<usize> {
    if size == 0 || len > size {
        return RangeInclusive::new(1, 0);
    }
    match step.signum() {
        1 => 0..=size - len,
        -1 => len.saturating_sub(1)..=size - 1,
        _ => 0..=size - 1,
    }
}

/// Checks whether `word` fits at `(start_row, start_col)` running in `direction`.
///
/// Fails if any letter falls outside the grid or lands on a cell holding a
/// different letter. Cells already holding the same letter are shared.
///
/// ```
/// use wordhunt_core::{Direction, Letter, LetterGrid, placer::can_place_word};
///
/// let grid: LetterGrid = "..T\n...\n...".parse()?;
/// let cat: Vec<Letter> = "CAT".chars().map(|c| Letter::try_from(c).unwrap()).collect();
///
/// assert!(can_place_word(&grid, &cat, 0, 0, Direction::East));
/// assert!(!can_place_word(&grid, &cat, 0, 2, Direction::South));
/// assert!(!can_place_word(&grid, &cat, 1, 1, Direction::East));
/// # Ok::<(), wordhunt_core::ParseGridError>(())
/// ```
#[must_use]
pub fn can_place_word(
    grid: &LetterGrid,
    word: &[Letter],
    start_row: usize,
    start_col: usize,
    direction: Direction,
) -> bool {
    check_placement(grid, word, start_row, start_col, direction).is_ok()
}

/// Writes `word` into the grid and returns the covered cells in word order.
///
/// # Errors
///
/// Returns [`PlacementError`] if the placement is infeasible, i.e. whenever
/// [`can_place_word`] would return `false`. Nothing is written in that case.
pub fn place_word(
    grid: &mut LetterGrid,
    word: &[Letter],
    start_row: usize,
    start_col: usize,
    direction: Direction,
) -> Result<Vec<CellPosition>, PlacementError> {
    let positions = check_placement(grid, word, start_row, start_col, direction)?;
    for (pos, letter) in positions.iter().zip(word) {
        grid.set(pos.row, pos.col, *letter);
    }
    Ok(positions)
}

fn check_placement(
    grid: &LetterGrid,
    word: &[Letter],
    start_row: usize,
    start_col: usize,
    direction: Direction,
) -> Result<Vec<CellPosition>, PlacementError> {
    let size = grid.size();
    word.iter()
        .enumerate()
        .map(|(offset, &letter)| {
            let (row, col) = direction
                .advance(start_row, start_col, offset, size)
                .ok_or(PlacementError::OutOfBounds { offset })?;
            match grid.get(row, col) {
                Some(existing) if existing != letter => Err(PlacementError::Conflict {
                    row,
                    col,
                    existing,
                    letter,
                }),
                _ => Ok(CellPosition::new(row, col, size)),
            }
        })
        .collect()
}
