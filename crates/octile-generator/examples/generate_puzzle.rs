//! Example demonstrating start-grid generation.
//!
//! Prints the seed, the generated grid and whether it can reach the goal.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Only draw solvable grids, or walk a fixed number of slides from the goal:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --solvable
//! cargo run --example generate_puzzle -- --scramble 30
//! ```

use clap::Parser;
use octile_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to generate from (64 hex digits). Random if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Re-shuffle until the grid can reach the goal.
    #[arg(long, conflicts_with = "scramble")]
    solvable: bool,

    /// Walk this many random slides away from the goal instead of shuffling.
    #[arg(long, value_name = "MOVES")]
    scramble: Option<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let generator = PuzzleGenerator::default();
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);

    let puzzle = match args.scramble {
        Some(moves) => generator.scramble_with_seed(seed, moves),
        None if args.solvable => generator.generate_solvable_with_seed(seed),
        None => generator.generate_with_seed(seed),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Puzzle: {:#}", puzzle.initial);
    print!("{}", puzzle.initial);
    println!();
    println!("Goal: {:#}", generator.goal());
    println!(
        "Solvable: {}",
        puzzle.initial.is_solvable_to(generator.goal())
    );
}
