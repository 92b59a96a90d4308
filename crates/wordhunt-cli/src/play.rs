//! Line-based interactive play.

use std::{
    io::{BufRead, Write},
    time::{Duration, Instant},
};

use rand::Rng;
use wordhunt_core::WordEntry;
use wordhunt_game::{Game, GameError, SelectionOutcome, selection_path};

use crate::{
    error::CliError,
    render::{GridView, WordListView},
};

/// How a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SessionSummary {
    pub(crate) completed: bool,
    pub(crate) elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Select {
        from: (usize, usize),
        to: (usize, usize),
    },
    Hint,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["hint"] => Ok(Command::Hint),
        ["show"] => Ok(Command::Show),
        ["quit" | "exit"] => Ok(Command::Quit),
        [r1, c1, r2, c2] => {
            let number = |s: &str| {
                s.parse::<usize>()
                    .map_err(|_| format!("not a cell coordinate: {s:?}"))
            };
            Ok(Command::Select {
                from: (number(r1)?, number(c1)?),
                to: (number(r2)?, number(c2)?),
            })
        }
        _ => Err("expected `ROW COL ROW COL`, `hint`, `show`, or `quit`".to_owned()),
    }
}

/// Runs a session reading commands from `input` until the puzzle is solved,
/// the player quits, or the input ends.
pub(crate) fn run<I, O, R>(
    game: &mut Game,
    words: &[WordEntry],
    input: I,
    output: &mut O,
    rng: &mut R,
) -> Result<SessionSummary, CliError>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let started = Instant::now();
    show(game, words, output)?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{message}")?;
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Show => show(game, words, output)?,
            Command::Hint => match game.hint(rng) {
                Ok(hint) => writeln!(
                    output,
                    "A word starts at ({}, {}). {} hints left.",
                    hint.cell.row,
                    hint.cell.col,
                    game.hints_remaining()
                )?,
                Err(GameError::NoHintsRemaining) => writeln!(output, "No hints left.")?,
                Err(err) => return Err(err.into()),
            },
            Command::Select { from, to } => {
                let path = match selection_path(game.puzzle().size(), from, to) {
                    Ok(path) => path,
                    Err(err) => {
                        writeln!(output, "{err}")?;
                        write!(output, "> ")?;
                        output.flush()?;
                        continue;
                    }
                };
                match game.submit_selection(&path)? {
                    SelectionOutcome::TooShort => writeln!(output, "Select at least two cells.")?,
                    SelectionOutcome::NoMatch => writeln!(output, "No word there.")?,
                    SelectionOutcome::AlreadyFound(word) => {
                        writeln!(output, "{} is already found.", label(words, word.as_str()))?;
                    }
                    SelectionOutcome::Found { word, completed, .. } => {
                        writeln!(output, "Found {}!", label(words, word.as_str()))?;
                        if completed {
                            let elapsed = started.elapsed();
                            writeln!(
                                output,
                                "Puzzle complete in {:.1}s.",
                                elapsed.as_secs_f64()
                            )?;
                            return Ok(SessionSummary {
                                completed: true,
                                elapsed,
                            });
                        }
                        show(game, words, output)?;
                    }
                }
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(SessionSummary {
        completed: false,
        elapsed: started.elapsed(),
    })
}

fn show<O>(game: &Game, words: &[WordEntry], output: &mut O) -> Result<(), CliError>
where
    O: Write,
{
    let grid = GridView {
        puzzle: game.puzzle(),
        highlight: game.found_cells(),
        only_highlight: false,
    };
    write!(output, "{grid}")?;
    writeln!(
        output,
        "{} / {} words found",
        game.found_words().len(),
        game.puzzle().word_count()
    )?;
    let list = WordListView {
        words,
        found: game.found_words(),
    };
    write!(output, "{list}")?;
    Ok(())
}

fn label<'a>(words: &'a [WordEntry], id: &'a str) -> &'a str {
    words
        .iter()
        .find(|word| word.id.as_str() == id)
        .map_or(id, |word| word.label.as_str())
}
