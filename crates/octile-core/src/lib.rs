//! Core data structures for the 3×3 sliding-tile puzzle.
//!
//! This crate provides the puzzle's state-space vocabulary shared by the
//! solver and the generator.
//!
//! # Overview
//!
//! - [`tile`]: Type-safe tiles 1-8 and the [`Cell`] alias, where `None` is the blank
//! - [`position`]: Row/column coordinates and edge-aware neighbour lookup
//! - [`direction`]: The four slide directions in successor-generation order
//! - [`grid`]: The validated, immutable [`Grid`] with move generation,
//!   rendering and parsing
//!
//! # Examples
//!
//! ```
//! use octile_core::{Direction, Grid};
//!
//! let start: Grid = "123 8_4 765".parse()?;
//! assert_eq!(start, Grid::GOAL);
//!
//! // Slide the tile below the blank upwards.
//! let blank = start.blank_position().unwrap();
//! let next = start.slide(blank, Direction::Up).unwrap();
//! assert_ne!(next, start);
//! assert!(next.is_solvable_to(&Grid::GOAL));
//! # Ok::<(), octile_core::GridError>(())
//! ```

pub mod direction;
mod error;
pub mod grid;
pub mod position;
pub mod tile;

pub use self::{
    direction::Direction,
    error::GridError,
    grid::Grid,
    position::Position,
    tile::{Cell, Tile, cell_code},
};
