use std::collections::VecDeque;

use octile_core::Grid;

use super::{BoxedSearchStrategy, SearchStrategy};
use crate::{NodeId, SearchTree};

/// Pushes new nodes onto the front of the open list as one block.
///
/// The block keeps generation order, so the first child generated is the
/// next one expanded. Depth is unbounded; on this puzzle the search usually
/// wanders far before the closed set forces it back.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl DepthFirst {
    /// Creates a new `DepthFirst` strategy.
    #[must_use]
    pub const fn new() -> Self {
        DepthFirst
    }
}

impl SearchStrategy for DepthFirst {
    fn name(&self) -> &'static str {
        "depth-first"
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
        for &id in survivors.iter().rev() {
            open.push_front(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_as_block() {
        let mut tree = SearchTree::new();
        let ids = [Grid::GOAL; 5].map(|grid| tree.push_root(grid));
        let mut open = VecDeque::from([ids[0], ids[1]]);

        DepthFirst::new().merge(&mut open, &ids[2..], &mut tree, &Grid::GOAL);
        assert_eq!(open, [ids[2], ids[3], ids[4], ids[0], ids[1]]);
    }

    #[test]
    fn test_empty_survivors_leave_open_untouched() {
        let mut tree = SearchTree::new();
        let id = tree.push_root(Grid::GOAL);
        let mut open = VecDeque::from([id]);

        DepthFirst::new().merge(&mut open, &[], &mut tree, &Grid::GOAL);
        assert_eq!(open, [id]);
    }
}
