//! The search engine.

use std::collections::{HashSet, VecDeque};

use octile_core::{Direction, Grid};
use tinyvec::ArrayVec;

use crate::{
    BoxedSearchStrategy, NodeId, SearchNode, SearchStats, SearchStrategy, SearchTree, SolverError,
};

const PROGRESS_INTERVAL: usize = 100_000;

/// How a finished search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// The goal grid was selected; the node is its handle in the tree.
    Found(NodeId),
    /// The open list ran empty without reaching the goal.
    ///
    /// This is an ordinary result: half of all grids cannot reach a given
    /// goal.
    NotFound,
}

impl SearchOutcome {
    /// Returns the goal node if the search succeeded.
    #[must_use]
    pub fn found(self) -> Option<NodeId> {
        match self {
            Self::Found(id) => Some(id),
            Self::NotFound => None,
        }
    }
}

/// A search configured with one strategy.
///
/// The strategy decides where new nodes are placed in the open list; the
/// engine always selects from the front. A `Search` holds no per-run state
/// and can be reused for any number of runs.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::{
///     BoxedSearchStrategy, Search,
///     heuristic::{MisplacedTiles, RowColumnDelta},
///     strategy::{BreadthFirst, HeuristicOrdered},
/// };
///
/// let start: Grid = "283 164 7_5".parse()?;
/// let strategies: [BoxedSearchStrategy; 3] = [
///     Box::new(BreadthFirst::new()),
///     Box::new(HeuristicOrdered::new(MisplacedTiles::new())),
///     Box::new(HeuristicOrdered::new(RowColumnDelta::new())),
/// ];
/// for strategy in strategies {
///     let search = Search::new(strategy);
///     let report = search.run(start, Grid::GOAL)?;
///     assert!(report.outcome().is_found(), "{}", search.strategy().name());
/// }
/// # Ok::<(), octile_solver::SolverError>(())
/// ```
///
/// # Step-by-step search
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::{Search, strategy::DepthFirst};
///
/// let start: Grid = "283 164 7_5".parse()?;
/// let search = Search::new(Box::new(DepthFirst::new()));
/// let mut run = search.start(start, Grid::GOAL);
///
/// // Give up after a fixed budget.
/// while run.stats().expansions() < 1_000 {
///     if let Some(outcome) = run.step()? {
///         println!("{outcome:?}");
///         break;
///     }
/// }
/// println!("open: {}, closed: {}", run.open_len(), run.closed_len());
/// # Ok::<(), octile_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Search {
    strategy: BoxedSearchStrategy,
}

impl Search {
    /// Creates a search that orders its open list with `strategy`.
    #[must_use]
    pub fn new(strategy: BoxedSearchStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> &dyn SearchStrategy {
        self.strategy.as_ref()
    }

    /// Starts a run from `initial` towards `goal`.
    ///
    /// The root node is placed in the open list through the strategy, so
    /// heuristic strategies score it like any other node.
    #[must_use]
    pub fn start(&self, initial: Grid, goal: Grid) -> SearchRun<'_> {
        SearchRun::new(self.strategy(), initial, goal)
    }

    /// Runs a search from `initial` to `goal` until the goal is found or the
    /// open list is exhausted.
    ///
    /// There is no bound on time or memory; use [`start`](Self::start) and
    /// [`SearchRun::step`] to impose one.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::MissingBlank`] if a grid without a blank is
    /// encountered.
    pub fn run(&self, initial: Grid, goal: Grid) -> Result<SearchReport, SolverError> {
        self.start(initial, goal).finish()
    }
}

/// One search run in progress.
///
/// Owns the search tree, the open list and the closed set for the duration
/// of the run.
#[derive(Debug)]
pub struct SearchRun<'a> {
    strategy: &'a dyn SearchStrategy,
    goal: Grid,
    tree: SearchTree,
    open: VecDeque<NodeId>,
    closed: HashSet<Grid>,
    stats: SearchStats,
    outcome: Option<SearchOutcome>,
}

impl<'a> SearchRun<'a> {
    fn new(strategy: &'a dyn SearchStrategy, initial: Grid, goal: Grid) -> Self {
        log::debug!(
            "starting {} search from {initial:#} to {goal:#}",
            strategy.name()
        );
        let mut tree = SearchTree::new();
        let root = tree.push_root(initial);
        let mut open = VecDeque::new();
        strategy.merge(&mut open, &[root], &mut tree, &goal);
        let stats = SearchStats {
            max_open_len: open.len(),
            ..SearchStats::default()
        };
        Self {
            strategy,
            goal,
            tree,
            open,
            closed: HashSet::new(),
            stats,
            outcome: None,
        }
    }

    /// Performs one iteration: selects the front of the open list, tests it
    /// against the goal and, if it is not the goal, expands it.
    ///
    /// The open list is never deduplicated, so the same grid may be queued
    /// through several parents. Each copy is tested and expanded when it is
    /// selected, even if its grid was closed in the meantime; only the
    /// successors are filtered against the closed set.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(outcome))` - The run has finished; further calls return the
    ///   same outcome
    /// * `Ok(None)` - The run is still in progress
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::MissingBlank`] if the selected node's grid has
    /// no blank.
    pub fn step(&mut self) -> Result<Option<SearchOutcome>, SolverError> {
        if let Some(outcome) = self.outcome {
            return Ok(Some(outcome));
        }

        let Some(id) = self.open.pop_front() else {
            return Ok(Some(self.conclude(SearchOutcome::NotFound)));
        };
        self.stats.selections += 1;

        let grid = *self.tree[id].grid();
        self.closed.insert(grid);
        if grid == self.goal {
            return Ok(Some(self.conclude(SearchOutcome::Found(id))));
        }

        let successors = self.tree.successors(id)?;
        self.stats.expansions += 1;
        self.stats.generated += successors.len();

        let mut survivors = ArrayVec::<[NodeId; 4]>::new();
        for successor in successors {
            if self.closed.contains(&successor.grid) {
                self.stats.discarded_closed += 1;
                continue;
            }
            survivors.push(self.tree.push_child(id, successor));
        }
        log::trace!(
            "expanded {id} at cost {}: {} survivors",
            self.tree[id].path_cost(),
            survivors.len()
        );

        self.strategy
            .merge(&mut self.open, &survivors, &mut self.tree, &self.goal);
        self.stats.max_open_len = self.stats.max_open_len.max(self.open.len());

        if self.stats.expansions % PROGRESS_INTERVAL == 0 {
            log::debug!(
                "{} search: {} expanded, open {}, closed {}",
                self.strategy.name(),
                self.stats.expansions,
                self.open.len(),
                self.closed.len()
            );
        }
        Ok(None)
    }

    fn conclude(&mut self, outcome: SearchOutcome) -> SearchOutcome {
        log::debug!(
            "{} search finished with {outcome:?}: open {}, closed {}, {}",
            self.strategy.name(),
            self.open.len(),
            self.closed.len(),
            self.stats
        );
        self.outcome = Some(outcome);
        outcome
    }

    /// Steps the run until it finishes and returns the report.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::MissingBlank`] if a grid without a blank is
    /// encountered.
    pub fn finish(mut self) -> Result<SearchReport, SolverError> {
        let outcome = loop {
            if let Some(outcome) = self.step()? {
                break outcome;
            }
        };
        Ok(SearchReport {
            strategy: self.strategy.name(),
            outcome,
            open_len: self.open.len(),
            closed_len: self.closed.len(),
            stats: self.stats,
            tree: self.tree,
        })
    }

    /// Returns the outcome if the run has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Returns the goal grid.
    #[must_use]
    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    /// Returns the tree built so far.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Returns the nodes waiting in the open list, front first.
    #[must_use]
    pub fn open(&self) -> &VecDeque<NodeId> {
        &self.open
    }

    /// Returns the number of nodes in the open list.
    #[must_use]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Returns the number of distinct grids closed so far.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Returns `true` if a node with `grid` has been closed.
    #[must_use]
    pub fn is_closed(&self, grid: &Grid) -> bool {
        self.closed.contains(grid)
    }

    /// Returns the statistics collected so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// The result of a finished search run.
///
/// Keeps the whole search tree so the path to the goal can be rebuilt.
#[derive(Debug, Clone)]
pub struct SearchReport {
    strategy: &'static str,
    outcome: SearchOutcome,
    tree: SearchTree,
    open_len: usize,
    closed_len: usize,
    stats: SearchStats,
}

impl SearchReport {
    /// Returns the name of the strategy that produced this report.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// Returns how the run ended.
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// Returns the search tree.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Returns the open-list length when the run ended.
    #[must_use]
    pub fn open_len(&self) -> usize {
        self.open_len
    }

    /// Returns the number of distinct grids closed when the run ended.
    ///
    /// After a successful run this includes the goal.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed_len
    }

    /// Returns the run's statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the parent of `id`, or `None` for the root.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this report.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    /// Returns the nodes from the start to the goal, or `None` if the goal
    /// was not found.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::Grid;
    /// use octile_solver::{Search, strategy::BreadthFirst};
    ///
    /// let start: Grid = "123 84_ 765".parse()?;
    /// let report = Search::new(Box::new(BreadthFirst::new())).run(start, Grid::GOAL)?;
    ///
    /// let path = report.path().unwrap();
    /// assert_eq!(path.first().unwrap().grid(), &start);
    /// assert_eq!(path.last().unwrap().grid(), &Grid::GOAL);
    /// # Ok::<(), octile_solver::SolverError>(())
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<Vec<&SearchNode>> {
        let goal = self.outcome.found()?;
        Some(
            self.tree
                .path_to(goal)
                .into_iter()
                .map(|id| &self.tree[id])
                .collect(),
        )
    }

    /// Returns the slides from the start to the goal, or `None` if the goal
    /// was not found.
    #[must_use]
    pub fn moves(&self) -> Option<Vec<Direction>> {
        let path = self.path()?;
        Some(path.iter().filter_map(|node| node.direction()).collect())
    }
}
