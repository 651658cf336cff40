//! The validated 3×3 puzzle configuration.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Direction, GridError, Position, Tile, cell_code};

/// A 3×3 arrangement of the eight tiles and one blank.
///
/// A `Grid` is validated at construction: each tile 1-8 appears exactly once
/// and the remaining cell is the blank. It is never modified afterwards;
/// [`slide`](Self::slide) returns a new grid.
///
/// Equality compares cell contents positionally, with the blank treated as a
/// distinct value. This is the equality used for goal tests and duplicate
/// suppression during search.
///
/// # Rendering
///
/// `{}` renders a fixed-width table with the blank as an empty cell, and
/// `{:#}` renders the compact one-line form accepted by [`FromStr`]:
///
/// ```
/// use octile_core::Grid;
///
/// let grid = Grid::GOAL;
/// assert_eq!(
///     grid.to_string(),
///     "+---+---+---+\n\
///      | 1 | 2 | 3 |\n\
///      +---+---+---+\n\
///      | 8 |   | 4 |\n\
///      +---+---+---+\n\
///      | 7 | 6 | 5 |\n\
///      +---+---+---+\n"
/// );
/// assert_eq!(format!("{grid:#}"), "123 8_4 765");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::GOAL
    }
}

impl Grid {
    /// The fixed goal configuration:
    ///
    /// ```text
    /// 1 2 3
    /// 8 _ 4
    /// 7 6 5
    /// ```
    pub const GOAL: Self = Self {
        cells: [
            Some(Tile::T1),
            Some(Tile::T2),
            Some(Tile::T3),
            Some(Tile::T8),
            None,
            Some(Tile::T4),
            Some(Tile::T7),
            Some(Tile::T6),
            Some(Tile::T5),
        ],
    };

    /// Creates a grid from nine cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DuplicateTile`] if a tile appears twice, or
    /// [`GridError::MissingTile`] if a tile is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::{Grid, Tile};
    ///
    /// let cells = [1, 2, 3, 8, 0, 4, 7, 6, 5].map(Tile::try_from_value);
    /// assert_eq!(Grid::from_cells(cells)?, Grid::GOAL);
    /// # Ok::<(), octile_core::GridError>(())
    /// ```
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, GridError> {
        let mut seen = [false; 9];
        for tile in cells.iter().flatten() {
            let slot = &mut seen[usize::from(tile.value())];
            if *slot {
                return Err(GridError::DuplicateTile { tile: *tile });
            }
            *slot = true;
        }
        if let Some(tile) = Tile::ALL
            .into_iter()
            .find(|tile| !seen[usize::from(tile.value())])
        {
            return Err(GridError::MissingTile { tile });
        }
        Ok(Self { cells })
    }

    /// Creates a grid from three rows of three cells, `None` marking the blank.
    ///
    /// An absent grid is represented by an empty slice of rows.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidRowCount`] if there are not exactly three rows
    /// - [`GridError::InvalidRowLength`] if a row does not have three cells
    /// - [`GridError::InvalidTile`] if a value is outside 1-8
    /// - [`GridError::DuplicateTile`] or [`GridError::MissingTile`] as for
    ///   [`from_cells`](Self::from_cells)
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::{Grid, GridError};
    ///
    /// let grid = Grid::try_from_rows(&[
    ///     [Some(1), Some(2), Some(3)],
    ///     [Some(8), None, Some(4)],
    ///     [Some(7), Some(6), Some(5)],
    /// ])?;
    /// assert_eq!(grid, Grid::GOAL);
    ///
    /// let short: &[&[Option<u8>]] = &[&[Some(1), Some(2)]];
    /// assert!(Grid::try_from_rows(short).is_err());
    /// # Ok::<(), GridError>(())
    /// ```
    pub fn try_from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[Option<u8>]>,
    {
        if rows.len() != usize::from(Position::SIDE) {
            return Err(GridError::InvalidRowCount { rows: rows.len() });
        }
        let mut cells = [None; 9];
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != usize::from(Position::SIDE) {
                return Err(GridError::InvalidRowLength {
                    row,
                    len: values.len(),
                });
            }
            for (col, value) in values.iter().enumerate() {
                cells[row * 3 + col] = match *value {
                    None => None,
                    Some(value) => {
                        Some(Tile::try_from_value(value).ok_or(GridError::InvalidTile { value })?)
                    }
                };
            }
        }
        Self::from_cells(cells)
    }

    /// Returns the cell at `pos`.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns all cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cells grouped by row.
    #[must_use]
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Finds the blank by scanning the cells in row-major order.
    ///
    /// A validated grid always has a blank; `None` is only possible if that
    /// invariant was broken.
    #[must_use]
    pub fn blank_position(&self) -> Option<Position> {
        self.position_of(None)
    }

    /// Finds the position holding `cell`, scanning in row-major order.
    #[must_use]
    pub fn position_of(&self, cell: Cell) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.cell(pos) == cell)
    }

    /// Returns the position of every value, indexed by [`cell_code`]
    /// (index 0 is the blank, 1-8 are the tiles).
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::{Grid, Position};
    ///
    /// let positions = Grid::GOAL.positions();
    /// assert_eq!(positions[0], Position::new(1, 1)); // blank
    /// assert_eq!(positions[8], Position::new(1, 0));
    /// ```
    #[must_use]
    pub fn positions(&self) -> [Position; 9] {
        let mut positions = [Position::default(); 9];
        for pos in Position::ALL {
            positions[usize::from(cell_code(self.cell(pos)))] = pos;
        }
        positions
    }

    /// Slides a tile into the blank at `blank`, returning the new grid.
    ///
    /// Returns `None` when `blank` is on the edge `direction` would take a
    /// tile from. `self` is left untouched.
    ///
    /// `blank` must be the blank's position, as returned by
    /// [`blank_position`](Self::blank_position).
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::{Direction, Grid, Position};
    ///
    /// let blank = Position::new(1, 1);
    /// let moved = Grid::GOAL.slide(blank, Direction::Up).unwrap();
    /// assert_eq!(moved, "123 864 7_5".parse::<Grid>()?);
    ///
    /// let corner: Grid = "_12 345 678".parse()?;
    /// assert_eq!(corner.slide(Position::new(0, 0), Direction::Down), None);
    /// # Ok::<(), octile_core::GridError>(())
    /// ```
    #[must_use]
    pub fn slide(&self, blank: Position, direction: Direction) -> Option<Self> {
        debug_assert_eq!(self.cell(blank), None, "slide from a non-blank cell");
        let source = blank.slide_source(direction)?;
        let mut cells = self.cells;
        cells.swap(blank.index(), source.index());
        Some(Self { cells })
    }

    /// Returns whether `goal` can be reached from this grid by sliding tiles.
    ///
    /// On a grid of odd width every slide preserves the parity of the number
    /// of inversions among the tiles, and grids of equal parity are mutually
    /// reachable. Exactly half of all shuffles are solvable.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::Grid;
    ///
    /// let swapped: Grid = "213 8_4 765".parse()?;
    /// assert!(Grid::GOAL.is_solvable_to(&Grid::GOAL));
    /// assert!(!swapped.is_solvable_to(&Grid::GOAL));
    /// # Ok::<(), octile_core::GridError>(())
    /// ```
    #[must_use]
    pub fn is_solvable_to(&self, goal: &Grid) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    fn inversions(&self) -> usize {
        let tiles = self.cells.iter().flatten().copied().collect::<Vec<Tile>>();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| a > b).count())
            .sum()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for (i, row) in self.rows().iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                for cell in row {
                    match cell {
                        Some(tile) => write!(f, "{tile}")?,
                        None => f.write_str("_")?,
                    }
                }
            }
            return Ok(());
        }

        const BORDER: &str = "+---+---+---+\n";
        f.write_str(BORDER)?;
        for row in self.rows() {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "| {tile} ")?,
                    None => f.write_str("|   ")?,
                }
            }
            f.write_str("|\n")?;
            f.write_str(BORDER)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a grid from a string of nine cells.
    ///
    /// - Digits 1-8 are tiles
    /// - `_`, `.` or `0` is the blank
    /// - Whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                '_' | '.' | '0' => Ok(None),
                '1'..='8' => {
                    #[allow(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    Ok(Some(Tile::from_value(value)))
                }
                _ => Err(GridError::InvalidChar { ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let cells: [Cell; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| GridError::InvalidCellCount { count: cells.len() })?;
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        Just((0..9).collect::<Vec<u8>>())
            .prop_shuffle()
            .prop_map(|values| {
                let mut cells = [None; 9];
                for (cell, value) in cells.iter_mut().zip(values) {
                    *cell = Tile::try_from_value(value);
                }
                Grid::from_cells(cells).unwrap()
            })
    }

    #[test]
    fn test_goal_layout() {
        assert_eq!(Grid::GOAL, grid("123 8_4 765"));
        assert_eq!(Grid::GOAL.blank_position(), Some(Position::new(1, 1)));
        assert_eq!(Grid::default(), Grid::GOAL);
    }

    #[test]
    fn test_from_cells_rejects_duplicates_and_omissions() {
        let mut cells = *Grid::GOAL.cells();
        cells[0] = Some(Tile::T2);
        assert_eq!(
            Grid::from_cells(cells),
            Err(GridError::DuplicateTile { tile: Tile::T2 })
        );

        let mut cells = *Grid::GOAL.cells();
        cells[0] = None;
        assert_eq!(
            Grid::from_cells(cells),
            Err(GridError::MissingTile { tile: Tile::T1 })
        );
    }

    #[test]
    fn test_try_from_rows_validates_shape() {
        let empty: &[[Option<u8>; 3]] = &[];
        assert_eq!(
            Grid::try_from_rows(empty),
            Err(GridError::InvalidRowCount { rows: 0 })
        );

        let rows: Vec<Vec<Option<u8>>> = vec![
            vec![Some(1), Some(2), Some(3)],
            vec![Some(8), None, Some(4), Some(9)],
            vec![Some(7), Some(6), Some(5)],
        ];
        assert_eq!(
            Grid::try_from_rows(&rows),
            Err(GridError::InvalidRowLength { row: 1, len: 4 })
        );

        let rows = [
            [Some(1), Some(2), Some(3)],
            [Some(8), None, Some(4)],
            [Some(7), Some(6), Some(9)],
        ];
        assert_eq!(
            Grid::try_from_rows(&rows),
            Err(GridError::InvalidTile { value: 9 })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123 8x4 765".parse::<Grid>(),
            Err(GridError::InvalidChar { ch: 'x' })
        );
        assert_eq!(
            "123 8_4 76".parse::<Grid>(),
            Err(GridError::InvalidCellCount { count: 8 })
        );
        assert_eq!(
            "123 8_4 7655".parse::<Grid>(),
            Err(GridError::InvalidCellCount { count: 10 })
        );
        assert_eq!(
            "123 8_4 76_".parse::<Grid>(),
            Err(GridError::MissingTile { tile: Tile::T5 })
        );
    }

    #[test]
    fn test_parse_accepts_all_blank_markers() {
        assert_eq!(grid("1238.4765"), Grid::GOAL);
        assert_eq!(grid("1 2 3\n8 0 4\n7 6 5"), Grid::GOAL);
    }

    #[test]
    fn test_render_blank_as_empty_cell() {
        let rendered = grid("_12 345 678").to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "|   | 1 | 2 |");
        assert_eq!(lines[3], "| 3 | 4 | 5 |");
        assert!(lines.iter().all(|line| line.len() == 13));
    }

    #[test]
    fn test_slide_each_direction_from_center() {
        let blank = Position::new(1, 1);
        let expected = [
            (Direction::Up, "123 864 7_5"),
            (Direction::Down, "1_3 824 765"),
            (Direction::Left, "123 84_ 765"),
            (Direction::Right, "123 _84 765"),
        ];
        for (direction, s) in expected {
            assert_eq!(Grid::GOAL.slide(blank, direction), Some(grid(s)));
        }
        // The source grid is untouched.
        assert_eq!(Grid::GOAL, grid("123 8_4 765"));
    }

    #[test]
    fn test_positions_is_inverse_of_cell() {
        let g = grid("4_1 275 386");
        let positions = g.positions();
        for pos in Position::ALL {
            assert_eq!(positions[usize::from(cell_code(g.cell(pos)))], pos);
        }
    }

    #[test]
    fn test_solvability_parity() {
        // One slide keeps parity.
        let moved = Grid::GOAL.slide(Position::new(1, 1), Direction::Left).unwrap();
        assert!(moved.is_solvable_to(&Grid::GOAL));
        // Swapping two tiles flips it.
        assert!(!grid("213 8_4 765").is_solvable_to(&Grid::GOAL));
    }

    proptest! {
        #[test]
        fn equality_is_an_equivalence(a in arb_grid(), b in arb_grid(), c in arb_grid()) {
            prop_assert_eq!(a, a);
            prop_assert_eq!(a == b, b == a);
            if a == b && b == c {
                prop_assert_eq!(a, c);
            }
        }

        #[test]
        fn compact_form_round_trips(g in arb_grid()) {
            let parsed: Grid = format!("{g:#}").parse().unwrap();
            prop_assert_eq!(parsed, g);
        }

        #[test]
        fn slides_swap_exactly_one_adjacent_pair(g in arb_grid()) {
            let blank = g.blank_position().unwrap();
            let mut count = 0;
            for direction in Direction::ALL {
                let Some(next) = g.slide(blank, direction) else {
                    continue;
                };
                count += 1;
                let changed = Position::ALL
                    .into_iter()
                    .filter(|&pos| g.cell(pos) != next.cell(pos))
                    .collect::<Vec<_>>();
                prop_assert_eq!(changed.len(), 2);
                let source = blank.slide_source(direction).unwrap();
                prop_assert!(changed.contains(&blank) && changed.contains(&source));
                prop_assert_eq!(next.cell(source), None);
                prop_assert_eq!(next.cell(blank), g.cell(source));
                prop_assert!(next.is_solvable_to(&g));
            }
            prop_assert_eq!(count, blank.slide_count());
            prop_assert!((2..=4).contains(&count));
        }
    }
}
