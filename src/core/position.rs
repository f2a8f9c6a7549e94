//! Board coordinates.
//!
//! A `Position` is a `(row, column)` pair. It can also be expressed as a
//! row-major cell index `0..9`, which is what hosts usually put on the wire.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A `(row, column)` coordinate.
///
/// Construction does not validate; use [`Position::is_on_board`] or build
/// from a cell index with [`Position::from_cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const CENTER: Position = Position::new(1, 1);

    /// Corner cells in their fixed listing order.
    pub const CORNERS: [Position; 4] = [
        Position::new(0, 0),
        Position::new(0, 2),
        Position::new(2, 0),
        Position::new(2, 2),
    ];

    /// Every cell in row-major order.
    pub const ALL: [Position; CELL_COUNT] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Build from a row-major cell index.
    ///
    /// ```
    /// use tictacshift::Position;
    ///
    /// assert_eq!(Position::from_cell(5), Some(Position::new(1, 2)));
    /// assert_eq!(Position::from_cell(9), None);
    /// ```
    #[must_use]
    pub const fn from_cell(cell: usize) -> Option<Self> {
        if cell < CELL_COUNT {
            Some(Self::new(cell / BOARD_SIZE, cell % BOARD_SIZE))
        } else {
            None
        }
    }

    /// Row-major cell index. Only meaningful for on-board positions.
    #[must_use]
    pub const fn cell(self) -> usize {
        self.row * BOARD_SIZE + self.column
    }

    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
