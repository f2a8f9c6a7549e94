//! Win and draw detection.
//!
//! Lines are always scanned in the same order: rows top to bottom, columns
//! left to right, the main diagonal, then the anti-diagonal. The first
//! completed line decides the result.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Position};

/// Outcome of a game so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    Ongoing,
    Win(Player),
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

/// Orientation of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    /// (0,0) to (2,2).
    Diagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

/// A completed three-in-a-row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub kind: LineKind,
    /// Row or column index; 0 for diagonals.
    pub index: usize,
    pub positions: [Position; 3],
    pub player: Player,
}

const fn row(index: usize) -> (LineKind, usize, [Position; 3]) {
    (
        LineKind::Row,
        index,
        [Position::new(index, 0), Position::new(index, 1), Position::new(index, 2)],
    )
}

const fn column(index: usize) -> (LineKind, usize, [Position; 3]) {
    (
        LineKind::Column,
        index,
        [Position::new(0, index), Position::new(1, index), Position::new(2, index)],
    )
}

/// All eight lines in scan order.
pub const LINES: [(LineKind, usize, [Position; 3]); 8] = [
    row(0),
    row(1),
    row(2),
    column(0),
    column(1),
    column(2),
    (
        LineKind::Diagonal,
        0,
        [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    ),
    (
        LineKind::AntiDiagonal,
        0,
        [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
    ),
];

/// First completed line on the board, if any.
#[must_use]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&(kind, index, positions)| {
        let player = board[positions[0]]?;
        positions[1..]
            .iter()
            .all(|&pos| board[pos] == Some(player))
            .then_some(WinningLine {
                kind,
                index,
                positions,
                player,
            })
    })
}

/// True if `player` owns a complete line.
#[must_use]
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|(_, _, positions)| positions.iter().all(|&pos| board[pos] == Some(player)))
}

/// Result for a board after `move_counter` moves.
///
/// A completed line wins even on the move that reaches the draw ceiling.
#[must_use]
pub fn check_result(board: &Board, move_counter: u32, draw_ceiling: u32) -> GameResult {
    if let Some(line) = find_winning_line(board) {
        return GameResult::Win(line.player);
    }
    if move_counter >= draw_ceiling {
        return GameResult::Draw;
    }
    GameResult::Ongoing
}
