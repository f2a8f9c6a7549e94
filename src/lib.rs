//! # tictacshift
//!
//! Rules engine for shifting tic-tac-toe.
//!
//! The board only ever holds the six most recent moves: once a seventh move
//! is placed, the oldest one fades and its cell is free again. Because moves
//! keep disappearing, an undecided game is called a draw at move 20.
//!
//! ## Design Principles
//!
//! 1. **Derived board**: occupancy is rebuilt from the visible move window on
//!    every query. Moves carry no faded flag.
//!
//! 2. **Boolean failure**: illegal placements return `false` and leave the
//!    state untouched. [`GameState::check_move`] says why, if asked.
//!
//! 3. **Seeded randomness**: the bot's only random choice (corner order) is
//!    drawn from a [`GameRng`] owned by the game, so seeded games replay.
//!
//! 4. **One entry point**: local, remote and bot moves all go through
//!    [`GameState::place_move`]. Where a move came from is the host's concern.
//!
//! ## Modules
//!
//! - `core`: players, positions, boards, moves, RNG, configuration, game state
//! - `rules`: line detection and results
//! - `bot`: bot move policies
//! - `error`: rejection and configuration errors

pub mod bot;
pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, GameConfig, GameMode, GameRng, GameRngState, GameSnapshot, GameState, Move, Player,
    Position, DEFAULT_DRAW_CEILING, DEFAULT_FADE_WINDOW,
};

pub use crate::rules::{GameResult, LineKind, WinningLine};

pub use crate::bot::{BotDecision, BotPolicy, BotReason, GreedyBot, RandomBot};

pub use crate::error::{ConfigError, MoveRejection};

/// Start a game with the standard rules.
///
/// ```
/// use tictacshift::{new_game, GameMode, Player};
///
/// let game = new_game(GameMode::VsBot);
/// assert_eq!(game.current_player(), Player::X);
/// ```
#[must_use]
pub fn new_game(mode: GameMode) -> GameState {
    GameState::new(mode)
}
