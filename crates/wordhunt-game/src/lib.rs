//! Word-search play sessions.
//!
//! This crate consumes generated puzzles and answers the questions a front
//! end asks while the player searches:
//!
//! - [`selection_path`] turns the endpoints of a drag into an ordered list of cells.
//! - [`validate_selection`] maps such a list to the hidden word it traces, if any.
//! - [`Game`] tracks found words, completion, and hints for one puzzle.
//! - [`Progress`] is the record kept between sessions (best time, hint budget).

pub use self::{error::*, game::*, progress::*, selection::*, validator::*};

mod error;
mod game;
mod progress;
mod selection;
mod validator;
