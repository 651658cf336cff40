use std::collections::VecDeque;

use octile_core::Grid;

use super::{BoxedSearchStrategy, SearchStrategy};
use crate::{NodeId, SearchTree, heuristic::Heuristic};

/// Orders the open list by path cost plus a heuristic estimate.
///
/// Each new node's estimate is computed once and cached on the node. The
/// nodes are then appended and the whole open list is re-sorted ascending by
/// [`total_cost`](crate::SearchNode::total_cost). The sort is stable, so
/// nodes of equal cost keep their insertion order.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::{
///     Search,
///     heuristic::MisplacedTiles,
///     strategy::{HeuristicOrdered, SearchStrategy as _},
/// };
///
/// let strategy = HeuristicOrdered::new(MisplacedTiles::new());
/// assert_eq!(strategy.name(), "misplaced tiles");
///
/// let start: Grid = "283 164 7_5".parse()?;
/// let report = Search::new(Box::new(strategy)).run(start, Grid::GOAL)?;
/// assert!(report.outcome().is_found());
/// # Ok::<(), octile_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicOrdered<H> {
    heuristic: H,
}

impl<H> HeuristicOrdered<H> {
    /// Creates a strategy ordered by `heuristic`.
    #[must_use]
    pub const fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Returns the estimator this strategy orders by.
    #[must_use]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H> SearchStrategy for HeuristicOrdered<H>
where
    H: Heuristic + Clone + 'static,
{
    fn name(&self) -> &'static str {
        self.heuristic.name()
    }

    fn clone_box(&self) -> BoxedSearchStrategy {
        Box::new(self.clone())
    }

    fn merge(
        &self,
        open: &mut VecDeque<NodeId>,
        survivors: &[NodeId],
        tree: &mut SearchTree,
        goal: &Grid,
    ) {
        for &id in survivors {
            let estimate = self.heuristic.estimate(tree[id].grid(), goal);
            tree.node_mut(id).set_heuristic(estimate);
        }
        open.extend(survivors.iter().copied());
        open.make_contiguous()
            .sort_by_key(|&id| tree[id].total_cost());
    }
}
