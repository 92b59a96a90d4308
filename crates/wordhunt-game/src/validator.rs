//! Matching a player's selection against the hidden words.

use wordhunt_core::{MIN_WORD_LEN, PlacementMap, WordId};

/// Shortest selection that can match a word.
pub const MIN_SELECTION_LEN: usize = MIN_WORD_LEN;

/// Returns the id of the word whose placement equals `selection`.
///
/// `selection` is the ordered list of flattened cell indices the player
/// dragged over. It matches a word if it equals the word's cells either
/// forwards or exactly reversed, so a word may be traced from either end.
/// Selections shorter than [`MIN_SELECTION_LEN`] never match.
///
/// The generator never gives two words the same index sequence in either
/// order, so at most one word of a generated puzzle can match.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{CellPosition, Direction, Placement, PlacementMap, WordId};
/// use wordhunt_game::validate_selection;
///
/// let cells = (0..3).map(|col| CellPosition::new(0, col, 3)).collect();
/// let cat = Placement::new(Direction::East, cells);
/// let placements: PlacementMap = [(WordId::new("CAT"), cat)].into_iter().collect();
///
/// let matched = |selection: &[usize]| validate_selection(selection, &placements).cloned();
/// assert_eq!(matched(&[0, 1, 2]), Some(WordId::new("CAT")));
/// assert_eq!(matched(&[2, 1, 0]), Some(WordId::new("CAT")));
/// assert_eq!(matched(&[0, 1]), None);
/// ```
#[must_use]
pub fn validate_selection<'a>(
    selection: &[usize],
    placements: &'a PlacementMap,
) -> Option<&'a WordId> {
    if selection.len() < MIN_SELECTION_LEN {
        return None;
    }

    placements
        .iter()
        .filter(|(_, placement)| placement.len() == selection.len())
        .find(|(_, placement)| {
            placement.indices().eq(selection.iter().copied())
                || placement.indices().rev().eq(selection.iter().copied())
        })
        .map(|(id, _)| id)
}
