use std::{io, path::PathBuf};

use wordhunt_game::GameError;
use wordhunt_generator::{GenerateError, ParseSeedError};

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("{}: {source}", path.display())]
    #[from(ignore)]
    Io { path: PathBuf, source: io::Error },
    #[display("{}:{line}: {message}", path.display())]
    #[from(ignore)]
    WordFile {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[display("checking a selection needs --seed or --phrase")]
    #[from(ignore)]
    MissingSeed,
    #[display("{_0}")]
    Generate(GenerateError),
    #[display("invalid seed: {_0}")]
    Seed(ParseSeedError),
    #[display("{_0}")]
    Game(GameError),
    #[display("failed to encode output: {_0}")]
    Json(serde_json::Error),
    #[display("terminal I/O failed: {_0}")]
    Terminal(io::Error),
}
