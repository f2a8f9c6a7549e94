//! Move records.
//!
//! A `Move` is created once when a placement is accepted and never mutated.
//! Whether it is still on the board is not stored here: fading is derived
//! from the move's position in the history.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::position::Position;

/// One accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    /// 0-based index of the move within its game.
    pub move_number: u32,
    /// Engine-wide creation sequence. Keeps increasing across resets.
    pub timestamp: u64,
}

impl Move {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    #[must_use]
    pub fn is_at(&self, row: usize, column: usize) -> bool {
        self.row == row && self.column == column
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} at ({}, {})",
            self.move_number, self.player, self.row, self.column
        )
    }
}
