//! Search strategies for the 3×3 sliding-tile puzzle.
//!
//! A [`Search`] drives one run from a start grid to a goal grid. The engine
//! owns the open list and the closed set; a [`SearchStrategy`] decides where
//! freshly generated nodes go in the open list, which is all that separates
//! breadth-first, depth-first and heuristic-ordered search.
//!
//! # Examples
//!
//! ```
//! use octile_core::Grid;
//! use octile_solver::{Search, strategy::BreadthFirst};
//!
//! let start: Grid = "123 84_ 765".parse()?;
//! let search = Search::new(Box::new(BreadthFirst::new()));
//! let report = search.run(start, Grid::GOAL)?;
//!
//! assert!(report.outcome().is_found());
//! assert_eq!(report.moves().map(|moves| moves.len()), Some(1));
//! # Ok::<(), octile_solver::SolverError>(())
//! ```

pub use self::{
    error::*,
    node::*,
    search::*,
    stats::*,
    strategy::{BoxedSearchStrategy, SearchStrategy},
};

mod error;
pub mod heuristic;
mod node;
mod search;
mod stats;
pub mod strategy;

#[cfg(test)]
mod testing;
