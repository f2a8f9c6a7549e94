//! Game configuration.
//!
//! A game is configured once at creation. The defaults are the standard
//! shifting rules: moves fade after 6 newer placements, the game is drawn
//! at move 20, and the bot plays `O`.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::position::CELL_COUNT;
use crate::error::ConfigError;

/// Default number of most recent moves that stay on the board.
pub const DEFAULT_FADE_WINDOW: usize = 6;

/// Default move count at which an undecided game is drawn.
pub const DEFAULT_DRAW_CEILING: u32 = 20;

/// Who is driving the second seat.
///
/// The mode never changes the rules. It only decides whether bot moves are
/// permitted; remote moves arrive through the same `place_move` entry point
/// as local ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two players on one device.
    #[default]
    Local,
    /// One human against the built-in bot.
    VsBot,
    /// Opponent moves are relayed from a remote peer.
    Network,
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,

    /// How many of the most recent moves stay visible.
    /// Must leave at least one cell free, so at most 8.
    pub fade_window: usize,

    /// Move count at which a game without a winning line is drawn.
    pub draw_ceiling: u32,

    /// Side played by the bot in `VsBot` mode.
    pub bot_player: Player,

    /// Seed for bot randomness. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Local,
            fade_window: DEFAULT_FADE_WINDOW,
            draw_ceiling: DEFAULT_DRAW_CEILING,
            bot_player: Player::O,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default rules for the given mode.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_fade_window(mut self, window: usize) -> Self {
        self.fade_window = window;
        self
    }

    #[must_use]
    pub fn with_draw_ceiling(mut self, ceiling: u32) -> Self {
        self.draw_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_bot_player(mut self, player: Player) -> Self {
        self.bot_player = player;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_window == 0 || self.fade_window >= CELL_COUNT {
            return Err(ConfigError::InvalidFadeWindow {
                window: self.fade_window,
            });
        }
        if self.draw_ceiling == 0 {
            return Err(ConfigError::InvalidDrawCeiling {
                ceiling: self.draw_ceiling,
            });
        }
        Ok(())
    }
}
