//! Open-list insertion policies.
//!
//! The search engine always takes the next node from the front of the open
//! list. A [`SearchStrategy`] decides where each newly generated node goes,
//! which is enough to make the same engine behave as breadth-first,
//! depth-first or heuristic-ordered search.

use std::{collections::VecDeque, fmt::Debug};

use octile_core::Grid;

pub use self::{
    breadth_first::BreadthFirst, depth_first::DepthFirst, heuristic_ordered::HeuristicOrdered,
};
use crate::{
    NodeId, SearchTree,
    heuristic::{MisplacedTiles, RowColumnDelta},
};

mod breadth_first;
mod depth_first;
mod heuristic_ordered;

/// Returns all available strategies.
///
/// The order is breadth-first, depth-first, misplaced-tile ordered and
/// row-column-delta ordered.
///
/// # Examples
///
/// ```
/// use octile_solver::strategy;
///
/// let names = strategy::all_strategies()
///     .iter()
///     .map(|s| s.name())
///     .collect::<Vec<_>>();
/// assert_eq!(
///     names,
///     ["breadth-first", "depth-first", "misplaced tiles", "row-column delta"]
/// );
/// ```
#[must_use]
pub fn all_strategies() -> Vec<BoxedSearchStrategy> {
    vec![
        Box::new(BreadthFirst::new()),
        Box::new(DepthFirst::new()),
        Box::new(HeuristicOrdered::new(MisplacedTiles::new())),
        Box::new(HeuristicOrdered::new(RowColumnDelta::new())),
    ]
}

/// A policy for merging newly generated nodes into the open list.
pub trait SearchStrategy: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedSearchStrategy;

    /// Inserts `survivors` into `open`.
    ///
    /// `survivors` are the children of one expansion that were not already
    /// closed, in generation order. The policy may reorder the whole open
    /// list and may cache estimates on nodes in `tree`, but must not drop
    /// or duplicate entries.
    fn merge(
        &self,
        open: &mut VecDeque<NodeId>,
        survivors: &[NodeId],
        tree: &mut SearchTree,
        goal: &Grid,
    );
}

/// A boxed search strategy.
pub type BoxedSearchStrategy = Box<dyn SearchStrategy>;

impl Clone for BoxedSearchStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
