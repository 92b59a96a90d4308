use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
    ops::RangeInclusive,
};

use rand::Rng;
use wordhunt_core::{
    CanonicalWord, CellPosition, Direction, Letter, LetterGrid, Placement, PlacementError,
    PlacementMap, Puzzle, PuzzleError, WordEntry, WordError, WordId, placer,
};

use crate::PuzzleSeed;

/// Default number of attempts per grid size.
pub const DEFAULT_ATTEMPTS: usize = 200;

/// Default number of random placement draws per word and attempt.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 140;

/// Number of sizes tried above the minimum when no maximum is configured.
pub const DEFAULT_SIZE_SLACK: usize = 6;

/// Tuning knobs for [`GridGenerator`].
///
/// # Examples
///
/// ```
/// use wordhunt_generator::GeneratorOptions;
///
/// let options = GeneratorOptions {
///     min_size: Some(10),
///     ..GeneratorOptions::default()
/// };
/// assert_eq!(options.attempts, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Smallest grid size to try. Raised to the longest word's length if smaller.
    pub min_size: Option<usize>,
    /// Largest grid size to try. Defaults to the effective minimum plus
    /// [`DEFAULT_SIZE_SLACK`].
    pub max_size: Option<usize>,
    /// Number of fresh grids tried per size.
    pub attempts: usize,
    /// Number of random (direction, start) draws per word before an attempt is abandoned.
    pub placement_attempts: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            min_size: None,
            max_size: None,
            attempts: DEFAULT_ATTEMPTS,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Error returned by [`GridGenerator`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// The word list is empty.
    #[display("no words to place")]
    NoWords,
    /// A word cannot be canonicalized.
    #[display("invalid word: {_0}")]
    #[from]
    InvalidWord(WordError),
    /// Two words share an id.
    #[display("duplicate word id {id}")]
    DuplicateId {
        /// The repeated id.
        id: WordId,
    },
    /// Two words have the same canonical letters.
    #[display("words {first} and {second} are both {value}")]
    DuplicateWord {
        /// Id of the earlier word.
        first: WordId,
        /// Id of the later word.
        second: WordId,
        /// The shared canonical value.
        value: String,
    },
    /// The size range is empty.
    #[display("maximum size {max_size} is below minimum size {min_size}")]
    InvalidSizeRange {
        /// Effective minimum size.
        min_size: usize,
        /// Configured maximum size.
        max_size: usize,
    },
    /// `attempts` or `placement_attempts` is zero.
    #[display("attempt counts must be positive")]
    ZeroAttempts,
    /// Every size and attempt failed to place all words.
    #[display(
        "unable to place all words in grids of size {min_size} to {max_size} \
         after {attempts} attempts each"
    )]
    Exhausted {
        /// Smallest size tried.
        min_size: usize,
        /// Largest size tried.
        max_size: usize,
        /// Attempts made per size.
        attempts: usize,
    },
    /// A checked placement could not be written. Indicates a bug.
    #[display("internal placement error: {_0}")]
    #[from]
    Placement(PlacementError),
    /// A generated placement left the grid. Indicates a bug.
    #[display("internal puzzle error: {_0}")]
    #[from]
    Puzzle(PuzzleError),
}

/// A puzzle together with the seed it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed that reproduces this puzzle for the same words and options.
    pub seed: PuzzleSeed,
    /// The generated puzzle.
    pub puzzle: Puzzle,
}

impl From<GeneratedPuzzle> for Puzzle {
    fn from(generated: GeneratedPuzzle) -> Self {
        generated.puzzle
    }
}

/// Builds word-search grids by bounded randomized search.
///
/// Words are placed longest first. For each grid size, from the minimum
/// upwards, up to [`GeneratorOptions::attempts`] fresh grids are tried. Within
/// an attempt each word gets [`GeneratorOptions::placement_attempts`] random
/// draws of a direction and a start cell; the first draw that fits is kept.
/// A word that runs out of draws abandons the whole attempt. The first attempt
/// that places every word has its remaining cells filled with random letters
/// and is returned as is.
///
/// The search is a heuristic: it may fail for crowded word lists, in which
/// case [`GenerateError::Exhausted`] is returned and the caller may retry with
/// more generous options.
///
/// # Examples
///
/// ```
/// use wordhunt_core::WordEntry;
/// use wordhunt_generator::{GridGenerator, PuzzleSeed};
///
/// let words = ["Road", "Engine", "Journey"].map(WordEntry::from_label);
/// let generator = GridGenerator::default();
/// let generated = generator.generate_with_seed(&words, PuzzleSeed::from_phrase("doc"))?;
///
/// let puzzle = &generated.puzzle;
/// assert!(puzzle.size() >= 7);
/// assert_eq!(puzzle.read_word("JOURNEY").as_deref(), Some("JOURNEY"));
/// # Ok::<(), wordhunt_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridGenerator {
    options: GeneratorOptions,
}

impl GridGenerator {
    /// Creates a generator with the given options.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Returns the generator's options.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// See [`GridGenerator::generate_with_rng`].
    pub fn generate(&self, words: &[WordEntry]) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`GridGenerator::generate_with_rng`].
    pub fn generate_with_seed(
        &self,
        words: &[WordEntry],
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        let puzzle = self.generate_with_rng(words, &mut rng)?;
        Ok(GeneratedPuzzle { seed, puzzle })
    }

    /// Generates a puzzle drawing every random choice from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an input error ([`GenerateError::NoWords`],
    /// [`GenerateError::InvalidWord`], [`GenerateError::DuplicateId`],
    /// [`GenerateError::DuplicateWord`], [`GenerateError::InvalidSizeRange`],
    /// [`GenerateError::ZeroAttempts`]) before searching, and
    /// [`GenerateError::Exhausted`] if no attempt places every word.
    pub fn generate_with_rng<R>(
        &self,
        words: &[WordEntry],
        rng: &mut R,
    ) -> Result<Puzzle, GenerateError>
    where
        R: Rng,
    {
        let words = prepare_words(words)?;
        let longest = words.first().map_or(0, CanonicalWord::len);
        let sizes = self.size_range(longest)?;
        let GeneratorOptions {
            attempts,
            placement_attempts,
            ..
        } = self.options;

        for size in sizes.clone() {
            for attempt in 1..=attempts {
                if let Some(puzzle) = try_attempt(&words, size, placement_attempts, rng)? {
                    log::debug!(
                        "placed {} words in a {size}x{size} grid on attempt {attempt}",
                        words.len()
                    );
                    return Ok(puzzle);
                }
                log::trace!("attempt {attempt} at size {size} abandoned");
            }
        }

        let (min_size, max_size) = sizes.into_inner();
        log::warn!(
            "grid generation exhausted: sizes {min_size}..={max_size}, {attempts} attempts each"
        );
        Err(GenerateError::Exhausted {
            min_size,
            max_size,
            attempts,
        })
    }

    fn size_range(&self, longest: usize) -> Result<RangeInclusive<usize>, GenerateError> {
        let GeneratorOptions {
            min_size,
            max_size,
            attempts,
            placement_attempts,
        } = self.options;
        if attempts == 0 || placement_attempts == 0 {
            return Err(GenerateError::ZeroAttempts);
        }
        let min_size = min_size.unwrap_or(longest).max(longest);
        let max_size = max_size.unwrap_or(min_size + DEFAULT_SIZE_SLACK);
        if max_size < min_size {
            return Err(GenerateError::InvalidSizeRange { min_size, max_size });
        }
        Ok(min_size..=max_size)
    }
}

/// Canonicalizes the words, rejects duplicates, and orders them longest first.
fn prepare_words(words: &[WordEntry]) -> Result<Vec<CanonicalWord>, GenerateError> {
    if words.is_empty() {
        return Err(GenerateError::NoWords);
    }

    let mut words = words
        .iter()
        .map(WordEntry::canonicalize)
        .collect::<Result<Vec<_>, _>>()?;

    let mut ids = HashSet::new();
    let mut values = HashMap::new();
    for word in &words {
        if !ids.insert(word.id()) {
            return Err(GenerateError::DuplicateId {
                id: word.id().clone(),
            });
        }
        if let Some(first) = values.insert(word.letters(), word.id()) {
            return Err(GenerateError::DuplicateWord {
                first: first.clone(),
                second: word.id().clone(),
                value: word.to_string(),
            });
        }
    }

    words.sort_by_key(|word| Reverse(word.len()));
    Ok(words)
}

/// Tries to place every word into a fresh grid of side `size`.
///
/// Returns `Ok(None)` as soon as one word runs out of draws.
fn try_attempt<R>(
    words: &[CanonicalWord],
    size: usize,
    placement_attempts: usize,
    rng: &mut R,
) -> Result<Option<Puzzle>, GenerateError>
where
    R: Rng,
{
    let mut grid = LetterGrid::new(size);
    let mut placements = PlacementMap::new();
    for word in words {
        let Some(placement) =
            place_randomly(&mut grid, &placements, word.letters(), placement_attempts, rng)?
        else {
            return Ok(None);
        };
        placements.insert(word.id().clone(), placement);
    }

    let grid = grid.fill_empty_with(|| random_letter(rng));
    Ok(Some(Puzzle::new(grid, placements)?))
}

fn place_randomly<R>(
    grid: &mut LetterGrid,
    placements: &PlacementMap,
    word: &[Letter],
    placement_attempts: usize,
    rng: &mut R,
) -> Result<Option<Placement>, GenerateError>
where
    R: Rng,
{
    let size = grid.size();
    for _ in 0..placement_attempts {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let rows = placer::start_bounds(size, word.len(), direction.row_step());
        let cols = placer::start_bounds(size, word.len(), direction.col_step());
        if rows.is_empty() || cols.is_empty() {
            continue;
        }
        let row = rng.random_range(rows);
        let col = rng.random_range(cols);
        if !placer::can_place_word(grid, word, row, col, direction) {
            continue;
        }
        let Some((end_row, end_col)) = direction.advance(row, col, word.len() - 1, size) else {
            continue;
        };
        let start = CellPosition::new(row, col, size).index;
        let end = CellPosition::new(end_row, end_col, size).index;
        if retraces_placement(placements, word.len(), start, end) {
            // A reversed word on the same cells would be unreachable by selection.
            log::trace!("draw at ({row}, {col}) {direction:?} retraces an earlier word");
            continue;
        }
        let cells = placer::place_word(grid, word, row, col, direction)?;
        return Ok(Some(Placement::new(direction, cells)));
    }
    Ok(None)
}

/// Returns whether the straight run of `len` cells from `start` to `end`
/// covers exactly the cells of an existing placement, in either order.
///
/// Two straight runs of equal length with the same end cells cover the same
/// cells, so comparing endpoints is enough.
fn retraces_placement(placements: &PlacementMap, len: usize, start: usize, end: usize) -> bool {
    placements.iter().any(|(_, placement)| {
        let cells = placement.cells();
        match (cells.first(), cells.last()) {
            (Some(first), Some(last)) if cells.len() == len => {
                let ends = (first.index, last.index);
                ends == (start, end) || ends == (end, start)
            }
            _ => false,
        }
    })
}

fn random_letter<R>(rng: &mut R) -> Letter
where
    R: Rng,
{
    Letter::ALL[rng.random_range(0..Letter::ALL.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn entries(labels: &[&str]) -> Vec<WordEntry> {
        labels.iter().copied().map(WordEntry::from_label).collect()
    }

    fn seed(phrase: &str) -> PuzzleSeed {
        PuzzleSeed::from_phrase(phrase)
    }

    const TRAVEL: &[&str] = &[
        "Beyond",
        "The Horizon",
        "Traveler",
        "Gaia",
        "Drive",
        "The Future",
        "Launching",
        "Unveil",
        "Beast",
        "Journey",
        "Luxury",
        "Comfort",
        "Intelligence",
        "Sophisticated",
    ];

    fn assert_placed_correctly(words: &[WordEntry], puzzle: &Puzzle) {
        let ids: BTreeSet<_> = words.iter().map(|w| w.id.clone()).collect();
        let placed: BTreeSet<_> = puzzle.placements().ids().cloned().collect();
        assert_eq!(placed, ids);

        for word in words {
            let canonical = word.canonicalize().unwrap();
            let placement = puzzle.placements().get(word.id.as_str()).unwrap();
            assert_eq!(placement.len(), canonical.len());
            assert_eq!(
                puzzle.read_word(word.id.as_str()).unwrap(),
                canonical.to_string()
            );
            // Consecutive cells are one direction step apart.
            for pair in placement.cells().windows(2) {
                let next = placement
                    .direction()
                    .advance(pair[0].row, pair[0].col, 1, puzzle.size());
                assert_eq!(next, Some((pair[1].row, pair[1].col)));
            }
        }
    }

    #[test]
    fn test_generate_places_every_word() {
        let words = entries(TRAVEL);
        let generated = GridGenerator::default()
            .generate_with_seed(&words, seed("travel"))
            .unwrap();
        let puzzle = &generated.puzzle;
        assert!((13..=19).contains(&puzzle.size()));
        assert_eq!(puzzle.grid().cells().len(), puzzle.size() * puzzle.size());
        assert_placed_correctly(&words, puzzle);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let words = entries(TRAVEL);
        let generator = GridGenerator::default();
        let a = generator.generate_with_seed(&words, seed("same")).unwrap();
        let b = generator.generate_with_seed(&words, seed("same")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, seed("same"));
    }

    #[test]
    fn test_random_seed_generation_succeeds() {
        let words = entries(&["Alpha", "Bravo", "Charlie"]);
        let generated = GridGenerator::default().generate(&words).unwrap();
        assert_placed_correctly(&words, &generated.puzzle);
    }

    #[test]
    fn test_min_size_equal_to_longest_word() {
        let words = entries(&["Compass"]);
        let generator = GridGenerator::new(GeneratorOptions {
            min_size: Some(3),
            max_size: Some(7),
            ..GeneratorOptions::default()
        });
        let puzzle = generator
            .generate_with_seed(&words, seed("boundary"))
            .unwrap()
            .puzzle;
        assert_eq!(puzzle.size(), 7);
        assert_placed_correctly(&words, &puzzle);

        // The word spans the full grid: it starts and ends on the border.
        let placement = puzzle.placements().get("COMPASS").unwrap();
        let first = placement.first_cell().unwrap();
        let last = *placement.cells().last().unwrap();
        let on_border =
            |pos: CellPosition| pos.row == 0 || pos.row == 6 || pos.col == 0 || pos.col == 6;
        assert!(on_border(first));
        assert!(on_border(last));
    }

    #[test]
    fn test_reversed_words_never_share_cells() {
        let words = entries(&["cat", "tac"]);
        let generator = GridGenerator::new(GeneratorOptions {
            min_size: Some(3),
            max_size: Some(3),
            ..GeneratorOptions::default()
        });
        let mut generated = 0;
        for i in 0..200 {
            let Ok(result) = generator.generate_with_seed(&words, seed(&format!("reversed-{i}")))
            else {
                continue;
            };
            generated += 1;
            let placements = result.puzzle.placements();
            let cat: Vec<_> = placements.get("CAT").unwrap().indices().collect();
            let tac: Vec<_> = placements.get("TAC").unwrap().indices().collect();
            let tac_reversed: Vec<_> = tac.iter().rev().copied().collect();
            assert_ne!(cat, tac);
            assert_ne!(cat, tac_reversed, "seed reversed-{i}");
        }
        assert!(generated > 0);
    }

    #[test]
    fn test_retraces_placement_compares_both_ends() {
        let cells = (0..3).map(|col| CellPosition::new(0, col, 3)).collect();
        let placements: PlacementMap = [(WordId::new("CAT"), Placement::new(Direction::East, cells))]
            .into_iter()
            .collect();
        assert!(retraces_placement(&placements, 3, 0, 2));
        assert!(retraces_placement(&placements, 3, 2, 0));
        assert!(!retraces_placement(&placements, 2, 2, 0));
        assert!(!retraces_placement(&placements, 3, 0, 6));
    }

    #[test]
    fn test_sizes_stay_within_configured_range() {
        let words = entries(&["abc", "def", "ghi", "jkl"]);
        let generator = GridGenerator::new(GeneratorOptions {
            min_size: Some(5),
            max_size: Some(6),
            ..GeneratorOptions::default()
        });
        for i in 0..20 {
            let puzzle = generator
                .generate_with_seed(&words, seed(&format!("range-{i}")))
                .unwrap()
                .puzzle;
            assert!((5..=6).contains(&puzzle.size()));
        }
    }

    #[test]
    fn test_exhaustion_is_reported() {
        // Three words without shared letters need six cells; a 2x2 grid has four.
        let words = entries(&["ab", "cd", "ef"]);
        let generator = GridGenerator::new(GeneratorOptions {
            min_size: None,
            max_size: Some(2),
            attempts: 5,
            placement_attempts: 10,
        });
        let err = generator
            .generate_with_seed(&words, seed("exhaust"))
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::Exhausted {
                min_size: 2,
                max_size: 2,
                attempts: 5
            }
        );
    }

    #[test]
    fn test_input_validation() {
        let generator = GridGenerator::default();
        let s = seed("validation");

        assert_eq!(
            generator.generate_with_seed(&[], s).unwrap_err(),
            GenerateError::NoWords
        );

        let words = entries(&["A", "Cat"]);
        assert_eq!(
            generator.generate_with_seed(&words, s).unwrap_err(),
            GenerateError::InvalidWord(WordError::TooShort {
                id: WordId::new("A"),
                len: 1
            })
        );

        let words = [WordEntry::new("G", "G700", "G700")];
        assert!(matches!(
            generator.generate_with_seed(&words, s).unwrap_err(),
            GenerateError::InvalidWord(WordError::InvalidCharacter { ch: '7', .. })
        ));

        let words = [
            WordEntry::new("A", "cat", "Cat"),
            WordEntry::new("A", "dog", "Dog"),
        ];
        assert_eq!(
            generator.generate_with_seed(&words, s).unwrap_err(),
            GenerateError::DuplicateId {
                id: WordId::new("A")
            }
        );

        let words = [
            WordEntry::new("A", "cat", "Cat"),
            WordEntry::new("B", "C-A-T", "C.A.T."),
        ];
        assert_eq!(
            generator.generate_with_seed(&words, s).unwrap_err(),
            GenerateError::DuplicateWord {
                first: WordId::new("A"),
                second: WordId::new("B"),
                value: "CAT".to_owned(),
            }
        );
    }

    #[test]
    fn test_option_validation() {
        let words = entries(&["wheel"]);
        let s = seed("options");

        let generator = GridGenerator::new(GeneratorOptions {
            max_size: Some(4),
            ..GeneratorOptions::default()
        });
        assert_eq!(
            generator.generate_with_seed(&words, s).unwrap_err(),
            GenerateError::InvalidSizeRange {
                min_size: 5,
                max_size: 4
            }
        );

        let generator = GridGenerator::new(GeneratorOptions {
            attempts: 0,
            ..GeneratorOptions::default()
        });
        assert_eq!(
            generator.generate_with_seed(&words, s).unwrap_err(),
            GenerateError::ZeroAttempts
        );
    }

    #[test]
    fn test_prepare_words_sorts_longest_first_stably() {
        let words = entries(&["ab", "abcd", "cd", "abc"]);
        let prepared = prepare_words(&words).unwrap();
        let order: Vec<_> = prepared.iter().map(ToString::to_string).collect();
        assert_eq!(order, ["ABCD", "ABC", "AB", "CD"]);
    }
}
