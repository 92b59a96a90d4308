//! Turning a drag gesture into a selection.

use std::cmp::Ordering;

use wordhunt_core::{CellPosition, Direction};

use crate::GameError;

/// Returns the straight cell path from `start` to `end` as flattened indices.
///
/// Both endpoints are `(row, col)` pairs. Horizontal, vertical, and exact
/// diagonal drags follow their line. Any other drag snaps to its dominant
/// axis: the path keeps the start cell's row or column and runs as far as the
/// larger of the two deltas. A drag that starts and ends on the same cell
/// selects that cell alone.
///
/// # Errors
///
/// Returns [`GameError::OutOfBounds`] if either endpoint lies outside the
/// `size`×`size` grid.
///
/// # Examples
///
/// ```
/// use wordhunt_game::selection_path;
///
/// // Diagonal from the top-left to the bottom-right of a 3x3 grid.
/// assert_eq!(selection_path(3, (0, 0), (2, 2))?, [0, 4, 8]);
/// // A slightly crooked drag snaps to the dominant (horizontal) axis.
/// assert_eq!(selection_path(4, (1, 0), (2, 3))?, [4, 5, 6, 7]);
/// # Ok::<(), wordhunt_game::GameError>(())
/// ```
pub fn selection_path(
    size: usize,
    start: (usize, usize),
    end: (usize, usize),
) -> Result<Vec<usize>, GameError> {
    for (row, col) in [start, end] {
        if row >= size || col >= size {
            return Err(GameError::OutOfBounds { row, col, size });
        }
    }

    let row_len = start.0.abs_diff(end.0);
    let col_len = start.1.abs_diff(end.1);
    let row_step = step(start.0, end.0);
    let col_step = step(start.1, end.1);

    let (row_step, col_step, len) = if row_len == col_len || row_len == 0 || col_len == 0 {
        (row_step, col_step, row_len.max(col_len))
    } else if row_len > col_len {
        (row_step, 0, row_len)
    } else {
        (0, col_step, col_len)
    };

    let Some(direction) = Direction::from_steps(row_step, col_step) else {
        return Ok(vec![CellPosition::new(start.0, start.1, size).index]);
    };
    Ok((0..=len)
        .filter_map(|i| direction.advance(start.0, start.1, i, size))
        .map(|(row, col)| CellPosition::new(row, col, size).index)
        .collect())
}

fn step(from: usize, to: usize) -> i8 {
    match to.cmp(&from) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}
