use octile_core::GridError;

use crate::NodeId;

/// Errors that can occur during a search run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolverError {
    /// A node's grid has no blank cell.
    ///
    /// Grids are validated on construction and slides only move the existing
    /// blank, so this indicates a broken invariant rather than bad input.
    #[display("search node {node} has no blank cell")]
    MissingBlank {
        /// The node being expanded.
        node: NodeId,
    },
    /// A start or goal configuration was invalid.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
}
