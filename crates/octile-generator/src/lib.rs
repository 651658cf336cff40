//! Random start grids for the 3×3 sliding-tile puzzle.
//!
//! Every grid is derived from a [`PuzzleSeed`], so any generated puzzle can
//! be reproduced from the seed printed alongside it.
//!
//! # Examples
//!
//! ```
//! use octile_core::Grid;
//! use octile_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(Grid::GOAL);
//! let puzzle = generator.generate();
//! println!("seed: {}", puzzle.seed);
//! println!("{}", puzzle.initial);
//!
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again.initial, puzzle.initial);
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
