//! Text and JSON output of puzzles.

use std::{collections::BTreeSet, fmt};

use serde::Serialize;
use wordhunt_core::{Puzzle, WordEntry, WordId};
use wordhunt_generator::GeneratedPuzzle;

/// JSON form of a generated puzzle.
#[derive(Debug, Serialize)]
pub(crate) struct PuzzleDto {
    seed: String,
    size: usize,
    grid: Vec<String>,
    words: Vec<WordDto>,
}

#[derive(Debug, Serialize)]
struct WordDto {
    id: String,
    label: String,
    cells: Vec<usize>,
}

impl PuzzleDto {
    pub(crate) fn new(generated: &GeneratedPuzzle, words: &[WordEntry]) -> Self {
        let puzzle = &generated.puzzle;
        Self {
            seed: generated.seed.to_string(),
            size: puzzle.size(),
            grid: puzzle
                .grid()
                .rows()
                .map(|row| row.iter().map(|letter| letter.as_char()).collect())
                .collect(),
            words: words
                .iter()
                .map(|word| WordDto {
                    id: word.id.to_string(),
                    label: word.label.clone(),
                    cells: puzzle
                        .word_cells(word.id.as_str())
                        .map(|cells| cells.iter().map(|pos| pos.index).collect())
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// The grid with spaced letters and row/column numbers.
///
/// Cells in `highlight` are shown in lowercase; with `only_highlight`, every
/// other cell is shown as `.` instead.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridView<'a> {
    pub(crate) puzzle: &'a Puzzle,
    pub(crate) highlight: &'a BTreeSet<usize>,
    pub(crate) only_highlight: bool,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.puzzle.size();
        write!(f, "    ")?;
        for col in 0..size {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for (row, letters) in self.puzzle.grid().rows().enumerate() {
            write!(f, "{row:>3} ")?;
            for (col, letter) in letters.iter().enumerate() {
                let index = row * size + col;
                let ch = match (self.highlight.contains(&index), self.only_highlight) {
                    (true, _) => letter.as_char().to_ascii_lowercase(),
                    (false, true) => '.',
                    (false, false) => letter.as_char(),
                };
                write!(f, "{ch:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The word list, marking found words.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WordListView<'a> {
    pub(crate) words: &'a [WordEntry],
    pub(crate) found: &'a BTreeSet<WordId>,
}

impl fmt::Display for WordListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words {
            let mark = if self.found.contains(word.id.as_str()) { 'x' } else { ' ' };
            writeln!(f, "  [{mark}] {}", word.label)?;
        }
        Ok(())
    }
}

/// The answer key: every word with its start cell and direction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnswersView<'a> {
    pub(crate) puzzle: &'a Puzzle,
    pub(crate) words: &'a [WordEntry],
}

impl fmt::Display for AnswersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words {
            let Some(placement) = self.puzzle.placements().get(word.id.as_str()) else {
                continue;
            };
            let Some(first) = placement.first_cell() else {
                continue;
            };
            writeln!(
                f,
                "  {:<16} ({}, {}) {:?}",
                word.label,
                first.row,
                first.col,
                placement.direction()
            )?;
        }
        Ok(())
    }
}
