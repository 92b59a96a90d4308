//! Word-search puzzle generator and terminal player.
//!
//! `wordhunt generate` prints a puzzle, `wordhunt check` tests one selection
//! against a seeded puzzle, and `wordhunt play` runs an interactive session.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use wordhunt_core::WordEntry;
use wordhunt_game::{Game, Progress, selection_path, validate_selection};
use wordhunt_generator::{
    DEFAULT_ATTEMPTS, DEFAULT_PLACEMENT_ATTEMPTS, GeneratedPuzzle, GeneratorOptions,
    GridGenerator, PuzzleSeed,
};

use crate::{
    error::CliError,
    render::{AnswersView, GridView, PuzzleDto, WordListView},
};

mod error;
mod play;
mod render;
mod words;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle and print it.
    Generate(GenerateArgs),
    /// Check whether a selection spells a hidden word.
    Check(CheckArgs),
    /// Play a puzzle interactively.
    Play(PlayArgs),
}

#[derive(Debug, Args)]
struct PuzzleArgs {
    /// Words to hide. Defaults to a built-in list.
    words: Vec<String>,
    /// Read additional words from FILE (`label` or `id|label|value` per line).
    #[arg(long, value_name = "FILE")]
    words_file: Option<PathBuf>,
    /// Hex seed reproducing a previous puzzle.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,
    /// Derive the seed from a phrase.
    #[arg(long)]
    phrase: Option<String>,
    /// Smallest grid size to try.
    #[arg(long)]
    min_size: Option<usize>,
    /// Largest grid size to try.
    #[arg(long)]
    max_size: Option<usize>,
    /// Fresh grids tried per size.
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,
    /// Random placement draws per word and attempt.
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS)]
    placement_attempts: usize,
}

impl PuzzleArgs {
    fn seed(&self) -> Result<Option<PuzzleSeed>, CliError> {
        if let Some(hex) = &self.seed {
            return Ok(Some(hex.parse()?));
        }
        Ok(self.phrase.as_deref().map(PuzzleSeed::from_phrase))
    }

    fn generate(&self) -> Result<(Vec<WordEntry>, GeneratedPuzzle), CliError> {
        let words = words::load(&self.words, self.words_file.as_deref())?;
        let seed = self.seed()?.unwrap_or_else(PuzzleSeed::random);
        let generator = GridGenerator::new(GeneratorOptions {
            min_size: self.min_size,
            max_size: self.max_size,
            attempts: self.attempts,
            placement_attempts: self.placement_attempts,
        });
        let generated = generator.generate_with_seed(&words, seed)?;
        log::info!(
            "generated {}x{} puzzle with {} words (seed {})",
            generated.puzzle.size(),
            generated.puzzle.size(),
            generated.puzzle.word_count(),
            generated.seed
        );
        Ok((words, generated))
    }
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,
    /// Print the puzzle as JSON.
    #[arg(long, conflicts_with = "solution")]
    json: bool,
    /// Also print the answer key.
    #[arg(long)]
    solution: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,
    /// First cell of the selection, as `ROW,COL`.
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    from: (usize, usize),
    /// Last cell of the selection, as `ROW,COL`.
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    to: (usize, usize),
}

#[derive(Debug, Args)]
struct PlayArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,
    /// Hints available in this session. Defaults to the saved progress.
    #[arg(long, conflicts_with = "reset_hints")]
    hints: Option<u32>,
    /// Restore the full hint budget before playing.
    #[arg(long)]
    reset_hints: bool,
    /// JSON file holding the best time and hint budget between sessions.
    #[arg(long, value_name = "FILE")]
    progress: Option<PathBuf>,
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let number = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate {part:?}: {e}"))
    };
    Ok((number(row)?, number(col)?))
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate(args) => generate(&args),
        Command::Check(args) => check(&args),
        Command::Play(args) => play(&args),
    }
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let (words, generated) = args.puzzle.generate()?;
    if args.json {
        let json = serde_json::to_string_pretty(&PuzzleDto::new(&generated, &words))?;
        println!("{json}");
        return Ok(());
    }

    let puzzle = &generated.puzzle;
    println!("seed: {}", generated.seed);
    let (no_cells, no_words) = (BTreeSet::new(), BTreeSet::new());
    print!(
        "{}",
        GridView {
            puzzle,
            highlight: &no_cells,
            only_highlight: false,
        }
    );
    println!();
    print!(
        "{}",
        WordListView {
            words: &words,
            found: &no_words,
        }
    );
    if args.solution {
        let cells = puzzle
            .placements()
            .iter()
            .flat_map(|(_, placement)| placement.indices())
            .collect();
        println!();
        print!(
            "{}",
            GridView {
                puzzle,
                highlight: &cells,
                only_highlight: true,
            }
        );
        print!(
            "{}",
            AnswersView {
                puzzle,
                words: &words,
            }
        );
    }
    Ok(())
}

fn check(args: &CheckArgs) -> Result<(), CliError> {
    if args.puzzle.seed.is_none() && args.puzzle.phrase.is_none() {
        return Err(CliError::MissingSeed);
    }
    let (words, generated) = args.puzzle.generate()?;
    let puzzle = &generated.puzzle;
    let path = selection_path(puzzle.size(), args.from, args.to)?;
    match validate_selection(&path, puzzle.placements()) {
        Some(id) => {
            let label = words
                .iter()
                .find(|word| &word.id == id)
                .map_or(id.as_str(), |word| word.label.as_str());
            println!("found: {label}");
        }
        None => println!("no word"),
    }
    Ok(())
}

fn play(args: &PlayArgs) -> Result<(), CliError> {
    let mut progress = match &args.progress {
        Some(path) => load_progress(path)?,
        None => Progress::default(),
    };
    let hints = session_hints(&mut progress, args.hints, args.reset_hints);

    let (words, generated) = args.puzzle.generate()?;
    println!("seed: {}", generated.seed);
    let mut game = Game::with_hints(generated, hints);
    let mut rng = rand::rng();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = play::run(&mut game, &words, stdin.lock(), &mut stdout, &mut rng)?;

    for _ in game.hints_remaining()..hints {
        progress.consume_hint();
    }
    if summary.completed && progress.record_completion(summary.elapsed) {
        println!("New best time!");
    }
    if let Some(path) = &args.progress {
        save_progress(path, &progress)?;
    }
    Ok(())
}

/// Returns the hint budget for a new session.
///
/// The saved budget carries over between sessions unless `reset` restores it
/// or `requested` overrides it.
fn session_hints(progress: &mut Progress, requested: Option<u32>, reset: bool) -> u32 {
    if reset {
        progress.reset_hints();
    }
    requested.unwrap_or(progress.hints_remaining())
}

fn load_progress(path: &Path) -> Result<Progress, CliError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no progress file at {}, starting fresh", path.display());
            Ok(Progress::default())
        }
        Err(source) => Err(CliError::Io {
            path: path.to_owned(),
            source,
        }),
    }
}

fn save_progress(path: &Path, progress: &Progress) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(progress)?;
    fs::write(path, json).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use wordhunt_game::DEFAULT_HINTS;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("3,4"), Ok((3, 4)));
        assert_eq!(parse_cell(" 0 , 12 "), Ok((0, 12)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::try_parse_from([
            "wordhunt", "check", "--phrase", "demo", "--from", "0,0", "--to", "0,3", "ROAD",
        ])
        .unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.from, (0, 0));
        assert_eq!(args.to, (0, 3));
        assert_eq!(args.puzzle.words, ["ROAD"]);
        assert!(args.puzzle.seed().unwrap().is_some());
    }

    #[test]
    fn test_seed_and_phrase_conflict() {
        let result = Cli::try_parse_from([
            "wordhunt", "generate", "--seed", "00", "--phrase", "demo",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_progress_file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("wordhunt-progress-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        assert_eq!(load_progress(&path).unwrap(), Progress::default());

        let mut progress = Progress::default();
        progress.record_completion(std::time::Duration::from_millis(1500));
        save_progress(&path, &progress).unwrap();
        assert_eq!(load_progress(&path).unwrap(), progress);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_saved_hint_budget_carries_over() {
        let path = std::env::temp_dir()
            .join(format!("wordhunt-hints-{}.json", std::process::id()));
        let mut progress = Progress::default();
        while progress.hints_remaining() > 1 {
            progress.consume_hint();
        }
        save_progress(&path, &progress).unwrap();

        let mut loaded = load_progress(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(session_hints(&mut loaded, None, false), 1);
        assert_eq!(session_hints(&mut loaded, Some(5), false), 5);
        assert_eq!(loaded.hints_remaining(), 1);
        assert_eq!(session_hints(&mut loaded, None, true), DEFAULT_HINTS);
        assert_eq!(loaded.hints_remaining(), DEFAULT_HINTS);
    }

    #[test]
    fn test_hints_and_reset_conflict() {
        let result = Cli::try_parse_from(["wordhunt", "play", "--hints", "2", "--reset-hints"]);
        assert!(result.is_err());
        let cli = Cli::try_parse_from(["wordhunt", "play", "--reset-hints"]).unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play command");
        };
        assert!(args.reset_hints);
        assert_eq!(args.hints, None);
    }
}
