use std::fmt::{self, Display};

/// Counters collected while a search runs.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_solver::{Search, strategy::BreadthFirst};
///
/// let search = Search::new(Box::new(BreadthFirst::new()));
/// let report = search.run(Grid::GOAL, Grid::GOAL)?;
///
/// let stats = report.stats();
/// assert_eq!(stats.selections(), 1);
/// assert_eq!(stats.expansions(), 0);
/// # Ok::<(), octile_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub(crate) selections: usize,
    pub(crate) expansions: usize,
    pub(crate) generated: usize,
    pub(crate) discarded_closed: usize,
    pub(crate) max_open_len: usize,
}

impl SearchStats {
    /// Returns the number of nodes taken from the front of the open list.
    #[must_use]
    pub fn selections(&self) -> usize {
        self.selections
    }

    /// Returns the number of nodes whose successors were generated.
    #[must_use]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Returns the number of successors generated.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Returns the number of successors dropped because their grid was
    /// already closed.
    #[must_use]
    pub fn discarded_closed(&self) -> usize {
        self.discarded_closed
    }

    /// Returns the largest open-list length observed.
    #[must_use]
    pub fn max_open_len(&self) -> usize {
        self.max_open_len
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "selections={} expansions={} generated={} discarded_closed={} max_open_len={}",
            self.selections,
            self.expansions,
            self.generated,
            self.discarded_closed,
            self.max_open_len,
        )
    }
}
