//! Word-search puzzle generation.
//!
//! [`GridGenerator`] hides a list of words in a square letter grid along the
//! eight straight and diagonal directions and fills the remaining cells with
//! random letters. Every random choice is drawn from a generator seeded by a
//! [`PuzzleSeed`], so a puzzle can be reproduced from its seed.
//!
//! # Examples
//!
//! ```
//! use wordhunt_core::WordEntry;
//! use wordhunt_generator::GridGenerator;
//!
//! let words = ["Compass", "Map", "Road"].map(WordEntry::from_label);
//! let generated = GridGenerator::default().generate(&words)?;
//!
//! println!("seed: {}", generated.seed);
//! println!("{}", generated.puzzle.grid());
//! # Ok::<(), wordhunt_generator::GenerateError>(())
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
