//! Scoring resolution and turn engine for the Farkle dice game.
//!
//! Given a roll of up to six dice, the [`ScoringEngine`] finds every atomic
//! scoring pattern in the sorted roll and combines them into every keepable
//! [`Selection`]. The [`turn`] module drives a single player's turn on top of
//! it (farkle, hot dice, the continue/stop decision), and [`Game`] runs the
//! round-robin loop across several players.

pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod scoring;
pub mod turn;

pub use config::GameConfig;
pub use dice::{DiceSource, RandomDice, Roll, ScriptedDice};
pub use error::{FarkleError, FarkleResult};
pub use game::{Game, GameSummary, TurnStats, simulate_turns};
pub use scoring::{Catalog, CatalogRow, Pattern, ScoringEngine, Selection};
pub use turn::{Decision, ThresholdBot, TurnEvent, TurnOutcome, TurnPlayer, TurnState, play_turn};
