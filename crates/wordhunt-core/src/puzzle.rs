//! Placements and finished puzzles.

use std::collections::{BTreeMap, btree_map};

use crate::{CellPosition, Direction, FilledGrid, WordId};

/// The cells one word occupies, from its first letter to its last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    direction: Direction,
    cells: Vec<CellPosition>,
}

impl Placement {
    /// Creates a placement from its direction and ordered cells.
    #[must_use]
    pub fn new(direction: Direction, cells: Vec<CellPosition>) -> Self {
        Self { direction, cells }
    }

    /// Returns the direction the word runs in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the covered cells in word order.
    #[must_use]
    pub fn cells(&self) -> &[CellPosition] {
        &self.cells
    }

    /// Returns the flattened indices of the covered cells in word order.
    pub fn indices(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.cells.iter().map(|pos| pos.index)
    }

    /// Returns the number of covered cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the placement covers no cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell holding the word's first letter.
    #[must_use]
    pub fn first_cell(&self) -> Option<CellPosition> {
        self.cells.first().copied()
    }
}

/// Placements of every word of a puzzle, keyed by word id.
///
/// Iteration is ordered by id, so a given map is always walked the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementMap {
    placements: BTreeMap<WordId, Placement>,
}

impl PlacementMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the placement of `id`, returning any previous placement.
    pub fn insert(&mut self, id: WordId, placement: Placement) -> Option<Placement> {
        self.placements.insert(id, placement)
    }

    /// Returns the placement of the word with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Placement> {
        self.placements.get(id)
    }

    /// Returns `true` if the word with the given id is placed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.placements.contains_key(id)
    }

    /// Returns the number of placed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if no word is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns an iterator over the placed word ids.
    pub fn ids(&self) -> impl Iterator<Item = &WordId> {
        self.placements.keys()
    }

    /// Returns an iterator over `(id, placement)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, WordId, Placement> {
        self.placements.iter()
    }
}

impl<'a> IntoIterator for &'a PlacementMap {
    type Item = (&'a WordId, &'a Placement);
    type IntoIter = btree_map::Iter<'a, WordId, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(WordId, Placement)> for PlacementMap {
    fn from_iter<T: IntoIterator<Item = (WordId, Placement)>>(iter: T) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}

/// Error returned when a grid and a placement map do not fit together.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("placement of {id} covers cell {index} outside the {size}x{size} grid")]
pub struct PuzzleError {
    /// Id of the offending word.
    pub id: WordId,
    /// Flattened index of the offending cell.
    pub index: usize,
    /// Side length of the grid.
    pub size: usize,
}

/// A finished puzzle: the letter grid and where each word is hidden.
///
/// A puzzle is never modified after construction; starting over means
/// building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: FilledGrid,
    placements: PlacementMap,
}

impl Puzzle {
    /// Bundles a grid with its placements.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if a placement covers a cell outside the grid.
    pub fn new(grid: FilledGrid, placements: PlacementMap) -> Result<Self, PuzzleError> {
        let size = grid.size();
        for (id, placement) in &placements {
            if let Some(pos) = placement
                .cells()
                .iter()
                .find(|pos| pos.row >= size || pos.col >= size)
            {
                return Err(PuzzleError {
                    id: id.clone(),
                    index: pos.index,
                    size,
                });
            }
        }
        Ok(Self { grid, placements })
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &FilledGrid {
        &self.grid
    }

    /// Returns where each word is hidden.
    #[must_use]
    pub fn placements(&self) -> &PlacementMap {
        &self.placements
    }

    /// Returns the number of hidden words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the cells covered by `id`, in word order.
    #[must_use]
    pub fn word_cells(&self, id: &str) -> Option<&[CellPosition]> {
        self.placements.get(id).map(Placement::cells)
    }

    /// Reads the grid letters along the placement of `id`.
    ///
    /// Returns `None` if no word with that id is placed.
    #[must_use]
    pub fn read_word(&self, id: &str) -> Option<String> {
        let placement = self.placements.get(id)?;
        Some(
            placement
                .cells()
                .iter()
                .map(|&pos| self.grid[pos].as_char())
                .collect(),
        )
    }
}
