use crate::Tile;

/// Errors raised when a grid configuration is invalid.
///
/// Grids are validated once, at construction; every other operation can rely
/// on the eight tiles and the single blank being present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid does not have exactly three rows.
    ///
    /// An absent grid is reported as zero rows.
    #[display("grid must have 3 rows, got {rows}")]
    InvalidRowCount {
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row does not have exactly three cells.
    #[display("row {row} must have 3 cells, got {len}")]
    InvalidRowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        len: usize,
    },
    /// A cell holds a number outside 1-8.
    #[display("invalid tile value: {value}")]
    InvalidTile {
        /// The rejected value.
        value: u8,
    },
    /// A tile appears more than once.
    #[display("tile {tile} appears more than once")]
    DuplicateTile {
        /// The repeated tile.
        tile: Tile,
    },
    /// A tile is absent.
    ///
    /// With every tile present exactly once the ninth cell is necessarily
    /// the single blank.
    #[display("tile {tile} is missing")]
    MissingTile {
        /// The absent tile.
        tile: Tile,
    },
    /// A grid string contains a character that is neither a tile nor a blank.
    #[display("invalid character in grid string: {ch:?}")]
    InvalidChar {
        /// The rejected character.
        ch: char,
    },
    /// A grid string does not describe exactly nine cells.
    #[display("grid string must describe 9 cells, got {count}")]
    InvalidCellCount {
        /// Number of cells found.
        count: usize,
    },
}
