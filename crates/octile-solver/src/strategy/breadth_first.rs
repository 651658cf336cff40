use std::collections::VecDeque;

use octile_core::Grid;

use super::{BoxedSearchStrategy, SearchStrategy};
use crate::{NodeId, SearchTree};

/// Appends new nodes to the back of the open list.
///
/// The open list behaves as a FIFO queue, so nodes are expanded in order of
/// depth and the first goal found is at minimal depth.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::{Search, strategy::BreadthFirst};
///
/// let start: Grid = "1_3 824 765".parse()?;
/// let report = Search::new(Box::new(BreadthFirst::new())).run(start, Grid::GOAL)?;
/// assert_eq!(report.moves().map(|m| m.len()), Some(1));
/// # Ok::<(), octile_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl BreadthFirst {
    /// Creates a new `BreadthFirst` strategy.
    #[must_use]
    pub const fn new() -> Self {
        BreadthFirst
    }
}

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn clone_box(&self) -> BoxedSearchStrategy {
        Box::new(*self)
    }

    fn merge(
        &self,
        open: &mut VecDeque<NodeId>,
        survivors: &[NodeId],
        _tree: &mut SearchTree,
        _goal: &Grid,
    ) {
        open.extend(survivors.iter().copied());
    }
}
