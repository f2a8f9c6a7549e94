//! Game state: move history, turn order, fading and results.
//!
//! ## Fading
//!
//! Only the most recent `fade_window` moves (6 by default) occupy the board.
//! Older moves stay in the history for display but free their cells. The
//! board is rebuilt from the visible window on every query; nothing per move
//! records whether it has faded.
//!
//! ## Failure
//!
//! Illegal placements are not errors. `place_move` returns `false` and leaves
//! the state untouched; `check_move` reports the reason when callers want it.
//!
//! ## Threading
//!
//! A `GameState` is a plain owned value with no interior locking. Hosts
//! serialize calls from a single thread of control.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::board::Board;
use super::config::{GameConfig, GameMode};
use super::game_move::Move;
use super::player::Player;
use super::position::{Position, BOARD_SIZE};
use super::rng::GameRng;
use crate::bot::{BotPolicy, GreedyBot};
use crate::error::{ConfigError, MoveRejection};
use crate::rules::{check_result, find_winning_line, GameResult, WinningLine};

/// A single game of shifting tic-tac-toe.
///
/// ```
/// use tictacshift::{GameMode, GameResult, GameState, Player};
///
/// let mut game = GameState::new(GameMode::Local);
/// assert!(game.place_move(0, 0));
/// assert!(!game.place_move(0, 0));
/// assert_eq!(game.current_player(), Player::O);
/// assert_eq!(game.result(), GameResult::Ongoing);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    moves: Vec<Move>,
    current_player: Player,
    move_counter: u32,
    result: GameResult,
    is_waiting_for_bot: bool,
    /// Source of `Move::timestamp`. Not reset between games.
    clock: u64,
    rng: GameRng,
}

impl GameState {
    /// New game with the standard rules.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self::from_valid_config(GameConfig::new(mode))
    }

    /// New game with custom rules.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Self {
            config,
            moves: Vec::new(),
            current_player: Player::X,
            move_counter: 0,
            result: GameResult::Ongoing,
            is_waiting_for_bot: false,
            clock: 0,
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Full move history, including faded moves.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Set between a human move and the bot's reply; for gating input.
    #[must_use]
    pub fn is_waiting_for_bot(&self) -> bool {
        self.is_waiting_for_bot
    }

    /// The bot's random source, e.g. to checkpoint it with `state()`.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Fading ===

    /// Moves still on the board, oldest first.
    #[must_use]
    pub fn visible_moves(&self) -> &[Move] {
        let start = self.moves.len().saturating_sub(self.config.fade_window);
        &self.moves[start..]
    }

    /// Occupancy rebuilt from the visible moves.
    #[must_use]
    pub fn board_state(&self) -> Board {
        let mut board = Board::new();
        for mv in self.visible_moves() {
            board.set(mv.position(), Some(mv.player));
        }
        board
    }

    /// The move that will fade when the next move is placed.
    ///
    /// Only set once the visible window is full.
    #[must_use]
    pub fn moves_about_to_fade(&self) -> Option<&Move> {
        let visible = self.visible_moves();
        if visible.len() >= self.config.fade_window {
            visible.first()
        } else {
            None
        }
    }

    /// True if the cell holds the move that fades next.
    #[must_use]
    pub fn will_fade(&self, row: usize, column: usize) -> bool {
        self.moves_about_to_fade()
            .is_some_and(|mv| mv.is_at(row, column))
    }

    // === Placement ===

    /// Explain whether a placement would be accepted.
    pub fn check_move(&self, row: usize, column: usize) -> Result<(), MoveRejection> {
        if self.result.is_over() {
            return Err(MoveRejection::GameOver);
        }
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(MoveRejection::OutOfBounds { row, column });
        }
        match self.board_state().get(row, column) {
            Some(by) => Err(MoveRejection::Occupied { row, column, by }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn can_place_move(&self, row: usize, column: usize) -> bool {
        self.check_move(row, column).is_ok()
    }

    /// Place the current player's mark.
    ///
    /// Returns `false` and changes nothing if the placement is illegal.
    /// Local and remote moves both come through here.
    pub fn place_move(&mut self, row: usize, column: usize) -> bool {
        if let Err(rejection) = self.check_move(row, column) {
            trace!(row, column, %rejection, "move rejected");
            return false;
        }

        let mv = Move {
            row,
            column,
            player: self.current_player,
            move_number: self.move_counter,
            timestamp: self.clock,
        };
        self.moves.push(mv);
        self.move_counter += 1;
        self.clock += 1;
        self.current_player = self.current_player.opposite();
        self.is_waiting_for_bot = false;

        self.result = check_result(&self.board_state(), self.move_counter, self.config.draw_ceiling);

        debug!(
            row,
            column,
            player = %mv.player,
            move_number = mv.move_number,
            "move placed"
        );
        if self.result.is_over() {
            debug!(result = ?self.result, moves = self.move_counter, "game over");
        }

        true
    }

    /// [`place_move`](Self::place_move) by position.
    pub fn place(&mut self, pos: Position) -> bool {
        self.place_move(pos.row, pos.column)
    }

    /// The completed line, if the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.result.winner().is_none() {
            return None;
        }
        find_winning_line(&self.board_state())
    }

    /// Clear the board for a new game. Mode and rules are kept.
    pub fn reset_game(&mut self) {
        self.moves.clear();
        self.current_player = Player::X;
        self.move_counter = 0;
        self.result = GameResult::Ongoing;
        self.is_waiting_for_bot = false;
        debug!(mode = ?self.config.mode, "game reset");
    }

    // === Turn gating ===

    /// True if `player` may move now. Hosts use this to gate local input
    /// in network games.
    #[must_use]
    pub fn is_turn_of(&self, player: Player) -> bool {
        !self.result.is_over() && self.current_player == player
    }

    /// True in bot mode when the bot is due to move.
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.config.mode == GameMode::VsBot && self.is_turn_of(self.config.bot_player)
    }

    /// Mark the bot as thinking, for hosts that delay the bot's reply.
    ///
    /// Returns `false` without changing anything if it is not the bot's turn.
    pub fn begin_bot_turn(&mut self) -> bool {
        if !self.is_bot_turn() {
            return false;
        }
        self.is_waiting_for_bot = true;
        true
    }

    // === Bot ===

    /// Let the greedy bot move.
    ///
    /// Only acts in `VsBot` mode on the bot's turn of an unfinished game.
    pub fn make_bot_move(&mut self) -> bool {
        self.make_bot_move_with(&GreedyBot)
    }

    /// Let `policy` move for the bot, under the same guards as
    /// [`make_bot_move`](Self::make_bot_move).
    pub fn make_bot_move_with<P: BotPolicy>(&mut self, policy: &P) -> bool {
        if !self.is_bot_turn() {
            trace!(
                mode = ?self.config.mode,
                current = %self.current_player,
                result = ?self.result,
                "bot move refused"
            );
            return false;
        }

        self.is_waiting_for_bot = true;

        let board = self.board_state();
        match policy.choose(&board, self.current_player, &mut self.rng) {
            Some(decision) => {
                debug!(
                    position = %decision.position,
                    reason = ?decision.reason,
                    "bot decision"
                );
                self.place(decision.position)
            }
            None => {
                self.is_waiting_for_bot = false;
                false
            }
        }
    }

    // === Snapshots ===

    /// Comparable copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            moves: self.moves.clone(),
            current_player: self.current_player,
            move_counter: self.move_counter,
            result: self.result,
            mode: self.config.mode,
            is_waiting_for_bot: self.is_waiting_for_bot,
        }
    }
}

/// Observable game state, detached from the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub moves: Vec<Move>,
    pub current_player: Player,
    pub move_counter: u32,
    pub result: GameResult,
    pub mode: GameMode,
    pub is_waiting_for_bot: bool,
}
