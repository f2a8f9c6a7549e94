//! Bot move policies.
//!
//! A policy looks at the visible board and picks a cell for the side to
//! move. Policies never touch the game state; the caller places the move.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, GameRng, Player, Position};
use crate::rules::has_line;

/// Why a policy picked its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotReason {
    /// Completes a line for the bot.
    Win,
    /// Takes the cell that would complete a line for the opponent.
    Block,
    Center,
    Corner,
    /// First empty cell in row-major order.
    Fallback,
    /// Uniform pick among empty cells.
    Random,
}

/// A chosen cell and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotDecision {
    pub position: Position,
    pub reason: BotReason,
}

impl BotDecision {
    #[must_use]
    pub const fn new(position: Position, reason: BotReason) -> Self {
        Self { position, reason }
    }
}

/// Policy for choosing the bot's next cell.
pub trait BotPolicy {
    /// Pick an empty cell for `me`, or `None` if the board is full.
    fn choose(&self, board: &Board, me: Player, rng: &mut GameRng) -> Option<BotDecision>;
}

/// First empty cell where placing `player` completes a line for them.
///
/// The placement is simulated on the board as given; moves that would fade
/// as a consequence are not taken into account.
#[must_use]
pub fn find_winning_cell(board: &Board, player: Player) -> Option<Position> {
    board
        .empty_cells()
        .into_iter()
        .find(|&pos| has_line(&board.with(pos, player), player))
}

/// Fixed-priority one-ply heuristic.
///
/// In order: win now, block the opponent's win, take the center, take a
/// corner (corners tried in shuffled order), take the first empty cell.
#[derive(Clone, Debug, Default)]
pub struct GreedyBot;

impl BotPolicy for GreedyBot {
    fn choose(&self, board: &Board, me: Player, rng: &mut GameRng) -> Option<BotDecision> {
        if let Some(pos) = find_winning_cell(board, me) {
            return Some(BotDecision::new(pos, BotReason::Win));
        }

        if let Some(pos) = find_winning_cell(board, me.opposite()) {
            return Some(BotDecision::new(pos, BotReason::Block));
        }

        if board.is_empty(Position::CENTER) {
            return Some(BotDecision::new(Position::CENTER, BotReason::Center));
        }

        let mut corners = Position::CORNERS;
        rng.shuffle(&mut corners);
        if let Some(&pos) = corners.iter().find(|&&pos| board.is_empty(pos)) {
            return Some(BotDecision::new(pos, BotReason::Corner));
        }

        let fallback = board.empty_cells().first().copied();
        if fallback.is_none() {
            trace!("no empty cell for greedy bot");
        }
        fallback.map(|pos| BotDecision::new(pos, BotReason::Fallback))
    }
}

/// Uniformly random empty cell.
#[derive(Clone, Debug, Default)]
pub struct RandomBot;

impl BotPolicy for RandomBot {
    fn choose(&self, board: &Board, _me: Player, rng: &mut GameRng) -> Option<BotDecision> {
        let empty = board.empty_cells();
        rng.choose(empty.as_slice())
            .map(|&pos| BotDecision::new(pos, BotReason::Random))
    }
}
