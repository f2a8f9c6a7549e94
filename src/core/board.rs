//! The 3x3 occupancy grid.
//!
//! A `Board` is always derived from the visible moves of a game; the engine
//! never stores one. Bots copy it freely to simulate placements.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::player::Player;
use super::position::{Position, BOARD_SIZE, CELL_COUNT};

/// Empty cells, stack-allocated for the whole board.
pub type EmptyCells = SmallVec<[Position; CELL_COUNT]>;

/// 3x3 grid of optional marks, indexed `[row][column]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of a cell. `None` for empty or off-board positions.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Player> {
        self.cells.get(row)?.get(column).copied().flatten()
    }

    /// Set or clear a cell.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    pub fn set(&mut self, pos: Position, value: Option<Player>) {
        self.cells[pos.row][pos.column] = value;
    }

    /// True if the cell is on the board and unoccupied.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        pos.is_on_board() && self[pos].is_none()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self[pos].is_none())
            .collect()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Copy of the board with `player` placed at `pos`.
    #[must_use]
    pub fn with(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Some(player));
        self
    }

    /// Rows as plain arrays, for hosts rendering the grid.
    #[must_use]
    pub fn rows(&self) -> &[[Option<Player>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Index<Position> for Board {
    type Output = Option<Player>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.row][pos.column]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.row][pos.column]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
