//! Slide directions.

use std::fmt::{self, Display};

/// The direction a tile slides into the blank.
///
/// Naming follows the tile, not the blank: [`Direction::Up`] moves the tile
/// below the blank upwards, so the blank ends up one row lower.
///
/// [`Direction::ALL`] fixes the order in which successors are generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The tile below the blank slides up.
    #[default]
    Up,
    /// The tile above the blank slides down.
    Down,
    /// The tile right of the blank slides left.
    Left,
    /// The tile left of the blank slides right.
    Right,
}

impl Direction {
    /// All directions in successor-generation order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(row, col)` step from the blank to the tile that slides.
    #[must_use]
    pub const fn blank_offset(self) -> (i8, i8) {
        match self {
            Self::Up => (1, 0),
            Self::Down => (-1, 0),
            Self::Left => (0, 1),
            Self::Right => (0, -1),
        }
    }

    /// Returns the direction that undoes this slide.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::Direction;
    ///
    /// for direction in Direction::ALL {
    ///     assert_eq!(direction.reverse().reverse(), direction);
    /// }
    /// assert_eq!(Direction::Up.reverse(), Direction::Down);
    /// ```
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_negates_offset() {
        for direction in Direction::ALL {
            let (r, c) = direction.blank_offset();
            let (rr, rc) = direction.reverse().blank_offset();
            assert_eq!((r + rr, c + rc), (0, 0));
        }
    }

    #[test]
    fn test_generation_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }
}
