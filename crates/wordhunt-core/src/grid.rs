//! Square letter grids.
//!
//! Two grid types cover the two phases of a puzzle's life:
//!
//! - [`LetterGrid`] is the scratch buffer a generation attempt writes into.
//!   Cells may be empty.
//! - [`FilledGrid`] is the finished, immutable grid. Every cell holds a
//!   [`Letter`], so it can only be obtained once no empty cell remains.
//!
//! Both share a compact text form: one line per row, one character per cell,
//! with `.` marking an empty cell.
//!
//! ```
//! use wordhunt_core::{FilledGrid, LetterGrid};
//!
//! let grid: LetterGrid = "CAT\n...\n...".parse()?;
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid.empty_count(), 6);
//!
//! let filled: FilledGrid = "CAT\nDOG\nEMU".parse()?;
//! assert_eq!(filled.row(1).iter().map(|l| l.as_char()).collect::<String>(), "DOG");
//! # Ok::<(), wordhunt_core::ParseGridError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::Letter;

/// A cell coordinate together with its flattened index.
///
/// The flattened index is `row * size + col`, the single-number coordinate
/// shared by placements and player selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub col: usize,
    /// Flattened row-major index.
    pub index: usize,
}

impl CellPosition {
    /// Creates the position of `(row, col)` in a grid of side `size`.
    #[must_use]
    pub const fn new(row: usize, col: usize, size: usize) -> Self {
        Self {
            row,
            col,
            index: row * size + col,
        }
    }

    /// Creates the position with flattened `index` in a grid of side `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            row: index / size,
            col: index % size,
            index,
        }
    }
}

/// Error returned when parsing a grid from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contains no rows.
    #[display("grid is empty")]
    Empty,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {size}")]
    NotSquare {
        /// Zero-based row number.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Expected row length.
        size: usize,
    },
    /// A cell character is neither a letter nor `.`.
    #[display("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// Zero-based row number.
        row: usize,
        /// Zero-based column number.
        col: usize,
        /// The offending character.
        ch: char,
    },
    /// An empty cell was found where a filled grid was expected.
    #[display("grid has {empty} empty cells")]
    Incomplete {
        /// Number of empty cells.
        empty: usize,
    },
}

/// A mutable `size`×`size` grid whose cells may still be empty.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Letter, LetterGrid};
///
/// let mut grid = LetterGrid::new(2);
/// grid.set(0, 1, Letter::ALL[0]);
/// assert_eq!(grid.get(0, 1), Some(Letter::ALL[0]));
/// assert_eq!(grid.get(1, 1), None);
/// assert_eq!(grid.to_string(), ".A\n..");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates a grid of side `size` with every cell empty.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `(row, col)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Returns the letter at `(row, col)`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Letter> {
        assert!(self.contains(row, col), "cell ({row}, {col}) out of bounds");
        self.cells[row * self.size + col]
    }

    /// Writes `letter` into `(row, col)`, replacing any previous content.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, letter: Letter) {
        assert!(self.contains(row, col), "cell ({row}, {col}) out of bounds");
        self.cells[row * self.size + col] = Some(letter);
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fills every empty cell with a letter drawn from `fill` and freezes the grid.
    ///
    /// `fill` is called once per empty cell, in row-major order.
    #[must_use]
    pub fn fill_empty_with<F>(self, mut fill: F) -> FilledGrid
    where
        F: FnMut() -> Letter,
    {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(&mut fill))
            .collect();
        FilledGrid {
            size: self.size,
            cells,
        }
    }

    /// Freezes the grid if every cell is set.
    ///
    /// # Errors
    ///
    /// Returns the grid unchanged if any cell is still empty.
    pub fn into_filled(self) -> Result<FilledGrid, Self> {
        match self.cells.iter().copied().collect::<Option<Box<[Letter]>>>() {
            Some(cells) => Ok(FilledGrid {
                size: self.size,
                cells,
            }),
            None => Err(self),
        }
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.map_or('.', Letter::as_char))?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(ParseGridError::Empty);
        }

        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, line) in rows.into_iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(ParseGridError::NotSquare { row, len, size });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let letter = Letter::try_from(ch)
                    .map_err(|_| ParseGridError::InvalidCell { row, col, ch })?;
                grid.set(row, col, letter);
            }
        }
        Ok(grid)
    }
}

/// A finished `size`×`size` grid with a letter in every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledGrid {
    size: usize,
    cells: Box<[Letter]>,
}

impl FilledGrid {
    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Letter {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds"
        );
        self.cells[row * self.size + col]
    }

    /// Returns the letter with flattened index `index`, if it exists.
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<Letter> {
        self.cells.get(index).copied()
    }

    /// Returns the letters of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Letter] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Letter] {
        &self.cells
    }
}

impl Index<CellPosition> for FilledGrid {
    type Output = Letter;

    fn index(&self, pos: CellPosition) -> &Letter {
        &self.cells[pos.index]
    }
}

impl Display for FilledGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for letter in row {
                f.write_char(letter.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for FilledGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid: LetterGrid = s.parse()?;
        grid.into_filled().map_err(|grid| ParseGridError::Incomplete {
            empty: grid.empty_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::try_from(ch).unwrap()
    }

    #[test]
    fn test_cell_position_index() {
        let pos = CellPosition::new(2, 1, 4);
        assert_eq!(pos.index, 9);
        assert_eq!(CellPosition::from_index(9, 4), pos);
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = LetterGrid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.empty_count(), 16);
        assert!(!grid.is_full());
        assert_eq!(grid.to_string(), "....\n....\n....\n....");
    }

    #[test]
    fn test_parse_round_trips_text_form() {
        let text = "C.T\n.A.\nT.C";
        let grid: LetterGrid = text.parse().unwrap();
        assert_eq!(grid.get(0, 0), Some(letter('C')));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LetterGrid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "AB\nC".parse::<LetterGrid>(),
            Err(ParseGridError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert_eq!(
            "A1\nCD".parse::<LetterGrid>(),
            Err(ParseGridError::InvalidCell {
                row: 0,
                col: 1,
                ch: '1'
            })
        );
        assert_eq!(
            "A.\nCD".parse::<FilledGrid>(),
            Err(ParseGridError::Incomplete { empty: 1 })
        );
    }

    #[test]
    fn test_into_filled_requires_every_cell() {
        let grid = LetterGrid::new(1);
        let mut grid = grid.into_filled().unwrap_err();
        assert_eq!(grid.empty_count(), 1);

        grid.set(0, 0, letter('Q'));
        let filled = grid.into_filled().unwrap();
        assert_eq!(filled.get(0, 0), letter('Q'));
    }

    #[test]
    fn test_fill_empty_with_keeps_existing_letters() {
        let grid: LetterGrid = "A.\n.B".parse().unwrap();
        let filled = grid.fill_empty_with(|| letter('X'));
        assert_eq!(filled.to_string(), "AX\nXB");
        assert_eq!(filled.letter_at(3), Some(letter('B')));
        assert_eq!(filled.letter_at(4), None);
        assert_eq!(filled[CellPosition::new(1, 0, 2)], letter('X'));
    }
}
