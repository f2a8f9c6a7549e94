//! Core engine types: players, positions, boards, moves, RNG, configuration
//! and the game state itself.

pub mod board;
pub mod config;
pub mod game_move;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use board::{Board, EmptyCells};
pub use config::{GameConfig, GameMode, DEFAULT_DRAW_CEILING, DEFAULT_FADE_WINDOW};
pub use game_move::Move;
pub use player::Player;
pub use position::{Position, BOARD_SIZE, CELL_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameSnapshot, GameState};
