//! Error types.
//!
//! Rule violations are not fatal: `place_move` simply returns `false`.
//! [`MoveRejection`] exists so callers that want to know *why* can ask
//! [`GameState::check_move`](crate::GameState::check_move).

use crate::core::Player;

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("game is already over")]
    GameOver,

    #[error("position ({row}, {column}) is off the board")]
    OutOfBounds { row: usize, column: usize },

    #[error("position ({row}, {column}) is occupied by {by}")]
    Occupied { row: usize, column: usize, by: Player },
}

/// Invalid [`GameConfig`](crate::GameConfig) values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("fade window must be between 1 and 8, got {window}")]
    InvalidFadeWindow { window: usize },

    #[error("draw ceiling must be at least 1, got {ceiling}")]
    InvalidDrawCeiling { ceiling: u32 },
}
