//! Grid position types.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell position on the 3×3 grid, addressed by `(row, col)`.
///
/// Rows are numbered top to bottom and columns left to right, both 0-2.
///
/// # Examples
///
/// ```
/// use octile_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 2);
/// assert_eq!(pos.index(), 5);
/// assert_eq!(Position::from_index(5), pos);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Number of rows and columns of the grid.
    pub const SIDE: u8 = 3;

    /// All nine positions in row-major order.
    ///
    /// This is the scan order used whenever the grid is searched for a value.
    #[allow(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 9] = {
        let mut all = [Self { row: 0, col: 0 }; 9];
        let mut i = 0;
        while i < 9 {
            all[i] = Self {
                row: (i / 3) as u8,
                col: (i % 3) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < Self::SIDE && col < Self::SIDE);
        Self { row, col }
    }

    /// Creates a position from its row-major index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 9);
        Self::ALL[index]
    }

    /// Returns the row (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * Self::SIDE + self.col) as usize
    }

    /// Returns `row + col`, the anti-diagonal this position lies on.
    #[must_use]
    pub const fn diagonal(self) -> u8 {
        self.row + self.col
    }

    /// Returns the neighbouring position one step along `(d_row, d_col)`,
    /// or `None` when that step leaves the grid.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let side = Self::SIDE as i8;
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || row >= side || col < 0 || col >= side {
            return None;
        }
        Some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Returns the cell whose tile slides into a blank at this position when
    /// moving in `direction`.
    ///
    /// Returns `None` if the blank is on the edge that `direction` would
    /// need a tile from.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::{Direction, Position};
    ///
    /// // A tile below the blank slides up.
    /// assert_eq!(
    ///     Position::new(1, 1).slide_source(Direction::Up),
    ///     Some(Position::new(2, 1))
    /// );
    /// // Nothing is below the bottom row.
    /// assert_eq!(Position::new(2, 0).slide_source(Direction::Up), None);
    /// ```
    #[must_use]
    pub const fn slide_source(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.blank_offset();
        self.offset(d_row, d_col)
    }

    /// Returns the number of legal slides into a blank at this position.
    ///
    /// This is 2 at a corner, 3 on an edge and 4 at the centre.
    #[must_use]
    pub fn slide_count(self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&d| self.slide_source(d).is_some())
            .count()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
