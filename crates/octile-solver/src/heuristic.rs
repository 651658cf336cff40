//! Distance estimates from a candidate grid to the goal.
//!
//! Estimators are pure functions of the two grids. They are used by
//! [`HeuristicOrdered`](crate::strategy::HeuristicOrdered) to order the open
//! list.

use std::fmt::Debug;

use octile_core::{Grid, Position, cell_code};

/// A distance estimate from a candidate grid to a goal grid.
pub trait Heuristic: Debug + Send + Sync {
    /// Returns the name of the estimator.
    fn name(&self) -> &'static str;

    /// Estimates how far `candidate` is from `goal`.
    ///
    /// Returns 0 when the grids are equal.
    fn estimate(&self, candidate: &Grid, goal: &Grid) -> u32;
}

/// Counts the cells whose contents differ from the goal.
///
/// The blank counts as a value of its own, so the estimate ranges over 0-9
/// and is 0 only for the goal itself.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::heuristic::{Heuristic as _, MisplacedTiles};
///
/// let candidate: Grid = "123 4_6 758".parse()?;
/// assert_eq!(MisplacedTiles::new().estimate(&candidate, &Grid::GOAL), 4);
/// # Ok::<(), octile_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MisplacedTiles;

impl MisplacedTiles {
    /// Creates a new `MisplacedTiles` estimator.
    #[must_use]
    pub const fn new() -> Self {
        MisplacedTiles
    }
}

impl Heuristic for MisplacedTiles {
    fn name(&self) -> &'static str {
        "misplaced tiles"
    }

    fn estimate(&self, candidate: &Grid, goal: &Grid) -> u32 {
        Position::ALL
            .into_iter()
            .map(|pos| u32::from(candidate.cell(pos) != goal.cell(pos)))
            .sum()
    }
}

/// Sums, over all nine cells, how far each value's anti-diagonal
/// (`row + col`) is from the anti-diagonal of the same value in the goal.
///
/// This is not the per-tile Manhattan distance: a value that moves along
/// its anti-diagonal costs nothing, so the estimate can be 0 for grids that
/// differ from the goal.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::heuristic::{Heuristic as _, RowColumnDelta};
///
/// let candidate: Grid = "123 4_6 758".parse()?;
/// assert_eq!(RowColumnDelta::new().estimate(&candidate, &Grid::GOAL), 6);
///
/// // 2 and 8 swap along the same anti-diagonal.
/// let swapped: Grid = "183 2_4 765".parse()?;
/// assert_eq!(RowColumnDelta::new().estimate(&swapped, &Grid::GOAL), 0);
/// # Ok::<(), octile_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RowColumnDelta;

impl RowColumnDelta {
    /// Creates a new `RowColumnDelta` estimator.
    #[must_use]
    pub const fn new() -> Self {
        RowColumnDelta
    }
}

impl Heuristic for RowColumnDelta {
    fn name(&self) -> &'static str {
        "row-column delta"
    }

    fn estimate(&self, candidate: &Grid, goal: &Grid) -> u32 {
        let targets = goal.positions();
        Position::ALL
            .into_iter()
            .map(|pos| {
                let target = targets[usize::from(cell_code(candidate.cell(pos)))];
                u32::from(pos.diagonal().abs_diff(target.diagonal()))
            })
            .sum()
    }
}
