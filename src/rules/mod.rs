//! Line detection and game results.
//!
//! These functions are pure over a [`Board`](crate::core::Board); the game
//! state calls them after every accepted move and bots call them to test
//! hypothetical placements.

pub mod engine;

pub use engine::{check_result, find_winning_line, has_line, GameResult, LineKind, WinningLine, LINES};
