//! Player marks.
//!
//! Shifting tic-tac-toe is strictly two-player: `X` always opens the game and
//! turns alternate after every accepted move.

use serde::{Deserialize, Serialize};

/// One of the two marks on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    ///
    /// ```
    /// use tictacshift::Player;
    ///
    /// assert_eq!(Player::X.opposite(), Player::O);
    /// assert_eq!(Player::O.opposite(), Player::X);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The player due to move after `move_count` accepted moves.
    #[must_use]
    pub const fn to_move_after(move_count: usize) -> Self {
        if move_count % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
