//! The search tree: an arena of nodes linked to their parents by handle.

use std::{cell::OnceCell, ops::Index};

use octile_core::{Direction, Grid, Position};
use tinyvec::ArrayVec;

use crate::SolverError;

/// A handle to a node in a [`SearchTree`].
///
/// Handles are only meaningful for the tree that issued them.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("#{_0}")]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the node's position in creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A grid reached by one slide, before it is added to the tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    /// The slide that produced the grid.
    pub direction: Direction,
    /// The resulting grid.
    pub grid: Grid,
}

/// A state in the search tree.
///
/// Wraps a [`Grid`] together with the link to the node it was generated
/// from, the number of slides from the root, and a heuristic estimate that
/// heuristic-ordered strategies fill in before the node is ordered.
///
/// Two nodes are equal when their grids are equal; parent, cost and
/// estimate are ignored.
#[derive(Debug, Clone)]
pub struct SearchNode {
    grid: Grid,
    parent: Option<NodeId>,
    direction: Option<Direction>,
    path_cost: u32,
    heuristic: Option<u32>,
    blank: OnceCell<Position>,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for SearchNode {}

impl SearchNode {
    fn new(
        grid: Grid,
        parent: Option<NodeId>,
        direction: Option<Direction>,
        path_cost: u32,
    ) -> Self {
        Self {
            grid,
            parent,
            direction,
            path_cost,
            heuristic: None,
            blank: OnceCell::new(),
        }
    }

    /// Returns the node's grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the node this one was generated from, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the slide that produced this node, or `None` for the root.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the number of slides from the root.
    #[must_use]
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Returns the cached heuristic estimate, if one has been set.
    #[must_use]
    pub fn heuristic(&self) -> Option<u32> {
        self.heuristic
    }

    /// Caches the heuristic estimate for this node.
    ///
    /// This is the only mutation a node ever sees.
    pub fn set_heuristic(&mut self, estimate: u32) {
        self.heuristic = Some(estimate);
    }

    /// Returns the path cost plus the cached estimate (0 if none is set).
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.path_cost + self.heuristic.unwrap_or(0)
    }

    /// Returns the blank's position, scanning the grid on first access.
    #[must_use]
    pub fn blank_position(&self) -> Option<Position> {
        if let Some(pos) = self.blank.get() {
            return Some(*pos);
        }
        let pos = self.grid.blank_position()?;
        let _ = self.blank.set(pos);
        Some(pos)
    }

    /// Returns one [`Successor`] per legal slide, in [`Direction::ALL`] order.
    ///
    /// Returns `None` only if the grid has no blank.
    #[must_use]
    pub fn successors(&self) -> Option<ArrayVec<[Successor; 4]>> {
        let blank = self.blank_position()?;
        Some(
            Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    let grid = self.grid.slide(blank, direction)?;
                    Some(Successor { direction, grid })
                })
                .collect(),
        )
    }
}

/// An arena owning every node created during a search run.
///
/// Nodes are never removed, so any node's path back to the root can be
/// reconstructed for as long as the tree lives.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::SearchTree;
///
/// let mut tree = SearchTree::new();
/// let root = tree.push_root(Grid::GOAL);
/// let successors = tree.successors(root)?;
/// assert_eq!(successors.len(), 4);
///
/// let child = tree.push_child(root, successors[0]);
/// assert_eq!(tree.parent(child), Some(root));
/// assert_eq!(tree[child].path_cost(), 1);
/// assert_eq!(tree.path_to(child), vec![root, child]);
/// # Ok::<(), octile_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node with no parent and a path cost of 0.
    pub fn push_root(&mut self, grid: Grid) -> NodeId {
        self.push(SearchNode::new(grid, None, None, 0))
    }

    /// Adds `successor` as a child of `parent`, one slide further from the root.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn push_child(&mut self, parent: NodeId, successor: Successor) -> NodeId {
        let path_cost = self[parent].path_cost + 1;
        self.push(SearchNode::new(
            successor.grid,
            Some(parent),
            Some(successor.direction),
            path_cost,
        ))
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node for `id`, or `None` if it was not issued by this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Returns a mutable reference to the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// Returns the parent of `id`, or `None` for the root.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    /// Generates the successors of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::MissingBlank`] if the node's grid has no blank.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn successors(&self, id: NodeId) -> Result<ArrayVec<[Successor; 4]>, SolverError> {
        self[id]
            .successors()
            .ok_or(SolverError::MissingBlank { node: id })
    }

    /// Follows parent links from `id` to the root and returns the path in
    /// root-first order.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use octile_core::Position;

    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_root_has_no_parent_and_zero_cost() {
        let mut tree = SearchTree::new();
        assert!(tree.is_empty());
        let root = tree.push_root(Grid::GOAL);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree[root].direction(), None);
        assert_eq!(tree[root].path_cost(), 0);
        assert_eq!(tree[root].heuristic(), None);
        assert_eq!(tree.path_to(root), vec![root]);
    }

    #[test]
    fn test_successor_count_follows_blank_location() {
        let cases = [
            ("_12 345 678", 2),
            ("1_2 345 678", 3),
            ("123 8_4 765", 4),
            ("123 456 78_", 2),
        ];
        for (s, expected) in cases {
            let mut tree = SearchTree::new();
            let root = tree.push_root(grid(s));
            assert_eq!(tree.successors(root).unwrap().len(), expected, "{s}");
        }
    }

    #[test]
    fn test_successors_in_direction_order() {
        let mut tree = SearchTree::new();
        let root = tree.push_root(Grid::GOAL);
        let successors = tree.successors(root).unwrap();
        let directions = successors.iter().map(|s| s.direction).collect::<Vec<_>>();
        assert_eq!(directions, Direction::ALL);
        assert_eq!(successors[0].grid, grid("123 864 7_5"));
        assert_eq!(successors[3].grid, grid("123 _84 765"));
    }

    #[test]
    fn test_children_accumulate_cost() {
        let mut tree = SearchTree::new();
        let root = tree.push_root(Grid::GOAL);
        let first = tree.successors(root).unwrap()[2];
        let a = tree.push_child(root, first);
        let second = tree.successors(a).unwrap()[0];
        let b = tree.push_child(a, second);

        assert_eq!(tree[b].path_cost(), 2);
        assert_eq!(tree[b].direction(), Some(Direction::Up));
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.path_to(b), vec![root, a, b]);
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let mut tree = SearchTree::new();
        let root = tree.push_root(Grid::GOAL);
        let left = tree.successors(root).unwrap()[2];
        let child = tree.push_child(root, left);
        let back = tree
            .successors(child)
            .unwrap()
            .into_iter()
            .find(|s| s.grid == Grid::GOAL)
            .unwrap();
        let grandchild = tree.push_child(child, back);
        tree.node_mut(grandchild).set_heuristic(7);

        assert_eq!(tree[root], tree[grandchild]);
        assert_ne!(tree[root].path_cost(), tree[grandchild].path_cost());
        assert_ne!(tree[root], tree[child]);
    }

    #[test]
    fn test_blank_position_is_cached() {
        let mut tree = SearchTree::new();
        let root = tree.push_root(grid("1_2 345 678"));
        assert_eq!(tree[root].blank_position(), Some(Position::new(0, 1)));
        assert_eq!(tree[root].blank_position(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_total_cost_adds_estimate() {
        let mut tree = SearchTree::new();
        let root = tree.push_root(Grid::GOAL);
        let child = tree.push_child(root, tree.successors(root).unwrap()[1]);
        assert_eq!(tree[child].total_cost(), 1);
        tree.node_mut(child).set_heuristic(5);
        assert_eq!(tree[child].heuristic(), Some(5));
        assert_eq!(tree[child].total_cost(), 6);
    }

    #[test]
    fn test_get_rejects_foreign_handle() {
        let tree = SearchTree::new();
        assert!(tree.get(NodeId::default()).is_none());
    }
}
