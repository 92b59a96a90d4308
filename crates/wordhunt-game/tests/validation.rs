//! Property tests for selection validation on generated puzzles.

use proptest::prelude::*;
use wordhunt_core::{Puzzle, WordEntry};
use wordhunt_game::{Game, SelectionOutcome, selection_path, validate_selection};
use wordhunt_generator::{GeneratorOptions, GridGenerator, PuzzleSeed};

const WORDS: &[&str] = &["Compass", "Atlas", "Route", "Ferry", "Summit", "Valley", "Oasis"];

fn puzzle(bytes: [u8; 32]) -> Puzzle {
    let words: Vec<_> = WORDS.iter().copied().map(WordEntry::from_label).collect();
    GridGenerator::default()
        .generate_with_seed(&words, PuzzleSeed::from_bytes(bytes))
        .unwrap()
        .puzzle
}

/// Submits every placement in turn and checks the game completes on the last.
fn complete_by_placements(puzzle: Puzzle) -> Result<(), TestCaseError> {
    let selections: Vec<Vec<usize>> = puzzle
        .placements()
        .iter()
        .map(|(_, placement)| placement.indices().collect())
        .collect();
    let mut game = Game::new(puzzle);
    for (i, selection) in selections.iter().enumerate() {
        prop_assert!(game.status().is_in_progress());
        let outcome = game.submit_selection(selection).unwrap();
        let is_last = i + 1 == selections.len();
        let completed_flag =
            matches!(outcome, SelectionOutcome::Found { completed, .. } if completed == is_last);
        prop_assert!(completed_flag, "unexpected outcome {:?}", outcome);
    }
    prop_assert!(game.is_completed());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_placement_validates_both_ways(bytes in any::<[u8; 32]>()) {
        let puzzle = puzzle(bytes);
        for (id, placement) in puzzle.placements() {
            let forward: Vec<usize> = placement.indices().collect();
            let backward: Vec<usize> = placement.indices().rev().collect();
            prop_assert_eq!(validate_selection(&forward, puzzle.placements()), Some(id));
            prop_assert_eq!(validate_selection(&backward, puzzle.placements()), Some(id));
        }
    }

    #[test]
    fn drag_between_word_ends_selects_the_word(bytes in any::<[u8; 32]>()) {
        let puzzle = puzzle(bytes);
        for (id, placement) in puzzle.placements() {
            let first = placement.cells()[0];
            let last = placement.cells()[placement.len() - 1];
            let path = selection_path(puzzle.size(), (last.row, last.col), (first.row, first.col))
                .unwrap();
            prop_assert_eq!(validate_selection(&path, puzzle.placements()), Some(id));
        }
    }

    #[test]
    fn arbitrary_selections_match_only_exact_placements(
        bytes in any::<[u8; 32]>(),
        selection in prop::collection::vec(0_usize..64, 0..9),
    ) {
        let puzzle = puzzle(bytes);
        let expected = puzzle.placements().iter().find(|(_, placement)| {
            selection.len() >= 2
                && (placement.indices().eq(selection.iter().copied())
                    || placement.indices().rev().eq(selection.iter().copied()))
        });
        prop_assert_eq!(
            validate_selection(&selection, puzzle.placements()),
            expected.map(|(id, _)| id)
        );
    }

    #[test]
    fn finding_every_word_completes_the_game(bytes in any::<[u8; 32]>()) {
        complete_by_placements(puzzle(bytes))?;
    }

    #[test]
    fn reversed_word_pairs_stay_completable(bytes in any::<[u8; 32]>()) {
        let words = ["Cat", "Tac", "Stop", "Pots"].map(WordEntry::from_label);
        let generator = GridGenerator::new(GeneratorOptions {
            min_size: Some(4),
            max_size: Some(4),
            ..GeneratorOptions::default()
        });
        let generated = generator.generate_with_seed(&words, PuzzleSeed::from_bytes(bytes));
        prop_assume!(generated.is_ok());
        if let Ok(generated) = generated {
            complete_by_placements(generated.puzzle)?;
        }
    }
}
