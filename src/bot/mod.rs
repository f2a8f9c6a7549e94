//! Bot opponents.
//!
//! - `GreedyBot`: win, block, center, corner, first free cell
//! - `RandomBot`: any free cell
//!
//! Both draw randomness only from the `GameRng` they are handed.

pub mod policy;

pub use policy::{find_winning_cell, BotDecision, BotPolicy, BotReason, GreedyBot, RandomBot};
