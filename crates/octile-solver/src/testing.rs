//! Test helpers for search runs.

use octile_core::{Grid, Position};

use crate::SearchNode;

/// Parses a grid from its compact form, panicking on bad input.
#[track_caller]
pub fn grid(s: &str) -> Grid {
    s.parse()
        .unwrap_or_else(|err| panic!("invalid grid {s:?}: {err}"))
}

/// Asserts that `path` runs from `start` to `goal` and that every step is a
/// single legal slide recorded with the right direction and cost.
#[track_caller]
pub fn assert_valid_path(path: &[&SearchNode], start: &Grid, goal: &Grid) {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        panic!("path is empty");
    };
    assert_eq!(first.grid(), start, "path does not begin at the start");
    assert_eq!(last.grid(), goal, "path does not end at the goal");
    assert_eq!(first.direction(), None);
    assert_eq!(first.path_cost(), 0);

    for (i, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let Some(direction) = to.direction() else {
            panic!("step {i} has no direction");
        };
        let blank: Position = from
            .blank_position()
            .unwrap_or_else(|| panic!("step {i} has no blank"));
        assert_eq!(
            from.grid().slide(blank, direction).as_ref(),
            Some(to.grid()),
            "step {i} is not a single {direction} slide"
        );
        assert_eq!(to.path_cost(), from.path_cost() + 1, "step {i} cost");
    }
}
