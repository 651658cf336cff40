//! Numbered puzzle tile representation.

use std::fmt::{self, Display};

/// A numbered tile in the range 1-8.
///
/// This enum provides type-safe representation of the eight sliding tiles,
/// preventing invalid values at compile time. The blank cell is not a tile;
/// grids store it as `None` (see [`Cell`]).
///
/// # Examples
///
/// ```
/// use octile_core::Tile;
///
/// let tile = Tile::T5;
/// assert_eq!(tile.value(), 5);
///
/// // Create from a u8 value
/// let tile = Tile::from_value(7);
/// assert_eq!(tile, Tile::T7);
///
/// // Iterate over all tiles
/// for tile in Tile::ALL {
///     println!("{}", tile);
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tile {
    /// The tile numbered 1.
    #[default]
    T1 = 1,
    /// The tile numbered 2.
    T2 = 2,
    /// The tile numbered 3.
    T3 = 3,
    /// The tile numbered 4.
    T4 = 4,
    /// The tile numbered 5.
    T5 = 5,
    /// The tile numbered 6.
    T6 = 6,
    /// The tile numbered 7.
    T7 = 7,
    /// The tile numbered 8.
    T8 = 8,
}

/// The content of one grid cell: a tile, or `None` for the blank.
///
/// The blank is an ordinary matchable value: two cells are equal when both
/// hold the same tile or both are blank.
pub type Cell = Option<Tile>;

impl Tile {
    /// Array containing all tiles from 1 to 8.
    pub const ALL: [Self; 8] = [
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::T8,
    ];

    /// Creates a tile from a u8 value in the range 1-8.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::Tile;
    ///
    /// assert_eq!(Tile::from_value(1), Tile::T1);
    /// assert_eq!(Tile::from_value(8), Tile::T8);
    /// ```
    ///
    /// ```should_panic
    /// use octile_core::Tile;
    ///
    /// // The blank is not a tile
    /// let _ = Tile::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid tile value: {value}"))
    }

    /// Creates a tile from a u8 value, returning `None` outside the range 1-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::Tile;
    ///
    /// assert_eq!(Tile::try_from_value(3), Some(Tile::T3));
    /// assert_eq!(Tile::try_from_value(9), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::T1),
            2 => Some(Self::T2),
            3 => Some(Self::T3),
            4 => Some(Self::T4),
            5 => Some(Self::T5),
            6 => Some(Self::T6),
            7 => Some(Self::T7),
            8 => Some(Self::T8),
            _ => None,
        }
    }

    /// Returns the number printed on this tile (1-8).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.value()
    }
}

/// Returns the numeric code of a cell: the tile number, or `0` for the blank.
///
/// # Examples
///
/// ```
/// use octile_core::{Tile, cell_code};
///
/// assert_eq!(cell_code(Some(Tile::T4)), 4);
/// assert_eq!(cell_code(None), 0);
/// ```
#[must_use]
#[inline]
pub const fn cell_code(cell: Cell) -> u8 {
    match cell {
        Some(tile) => tile.value(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Tile::from_value(1), Tile::T1);
        assert_eq!(Tile::from_value(8), Tile::T8);
        assert_eq!(Tile::T1.value(), 1);
        assert_eq!(Tile::T8.value(), 8);

        assert_eq!(Tile::ALL.len(), 8);
        for tile in Tile::ALL {
            assert_eq!(Tile::from_value(tile.value()), tile);
        }

        assert_eq!(format!("{}", Tile::T3), "3");
        let value: u8 = Tile::T5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_try_from_value_rejects_out_of_range() {
        assert_eq!(Tile::try_from_value(0), None);
        assert_eq!(Tile::try_from_value(9), None);
        assert_eq!(Tile::try_from_value(255), None);
    }

    #[test]
    fn test_cell_code() {
        assert_eq!(cell_code(None), 0);
        for tile in Tile::ALL {
            assert_eq!(cell_code(Some(tile)), tile.value());
        }
    }

    #[test]
    #[should_panic(expected = "Invalid tile value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Tile::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid tile value: 9")]
    fn test_from_value_nine_panics() {
        let _ = Tile::from_value(9);
    }
}
