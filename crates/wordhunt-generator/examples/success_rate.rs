//! Example measuring how often grid generation succeeds.
//!
//! Generates puzzles for many random seeds in parallel and reports the
//! success rate and the distribution of grid sizes. Useful for tuning
//! `GeneratorOptions` for a given word list.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example success_rate -- Road Map Fuel Trip Lane
//! ```
//!
//! Tighten the search to see where it starts failing:
//!
//! ```sh
//! cargo run --example success_rate -- --max-size 6 --attempts 20 Road Map Fuel Trip Lane
//! ```

use std::{collections::BTreeMap, process};

use clap::Parser;
use rayon::prelude::*;
use wordhunt_core::WordEntry;
use wordhunt_generator::{GeneratorOptions, GridGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to hide.
    #[arg(required = true)]
    words: Vec<String>,

    /// Number of seeds to try.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    samples: usize,

    /// Smallest grid size to try.
    #[arg(long)]
    min_size: Option<usize>,

    /// Largest grid size to try.
    #[arg(long)]
    max_size: Option<usize>,

    /// Attempts per grid size.
    #[arg(long, default_value_t = wordhunt_generator::DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Placement draws per word.
    #[arg(long, default_value_t = wordhunt_generator::DEFAULT_PLACEMENT_ATTEMPTS)]
    placement_attempts: usize,
}

fn main() {
    let args = Args::parse();
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let words: Vec<_> = args
        .words
        .iter()
        .map(|word| WordEntry::from_label(word.as_str()))
        .collect();
    let generator = GridGenerator::new(GeneratorOptions {
        min_size: args.min_size,
        max_size: args.max_size,
        attempts: args.attempts,
        placement_attempts: args.placement_attempts,
    });

    let results: Vec<_> = (0..args.samples)
        .into_par_iter()
        .map(|_| {
            generator
                .generate_with_seed(&words, PuzzleSeed::random())
                .map(|generated| generated.puzzle.size())
        })
        .collect();

    let mut sizes = BTreeMap::new();
    let mut failures = 0;
    for result in &results {
        match result {
            Ok(size) => *sizes.entry(*size).or_insert(0_usize) += 1,
            Err(err) => {
                failures += 1;
                if failures == 1 {
                    eprintln!("first failure: {err}");
                }
            }
        }
    }

    let successes = args.samples - failures;
    #[expect(clippy::cast_precision_loss)]
    let rate = successes as f64 / args.samples as f64 * 100.0;
    println!("Samples: {}", args.samples);
    println!("Success rate: {rate:.1}% ({successes}/{})", args.samples);
    println!();
    println!("Grid sizes:");
    for (size, count) in sizes {
        println!("  {size}x{size}: {count}");
    }
}
