//! The seam between the turn engine and whoever is playing.

use crate::dice::Roll;
use crate::error::{FarkleError, FarkleResult};
use crate::scoring::Selection;

use super::TurnState;

/// The answer to "keep rolling?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Roll the remaining dice.
    Continue,
    /// Bank the turn score.
    Stop,
}

/// Something that happened during a turn, for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// A player's turn is about to begin.
    Started {
        /// Seat name.
        player: String,
        /// Game score before the turn.
        game_score: u32,
    },
    /// Dice were rolled.
    Rolled {
        /// The sorted roll.
        roll: Roll,
    },
    /// The roll scored nothing; the turn is over.
    Farkle {
        /// The roll that farkled.
        roll: Roll,
        /// Turn score lost.
        forfeited: u32,
    },
    /// A selection was set aside.
    Kept {
        /// The chosen selection.
        selection: Selection,
        /// Turn score including the selection.
        turn_score: u32,
    },
    /// All six dice have scored; the turn continues with six fresh dice.
    HotDice {
        /// Turn score carried over.
        turn_score: u32,
    },
    /// The turn score passed the target; the game is won outright.
    InstantWin {
        /// Final turn score.
        turn_score: u32,
    },
    /// The player stopped and banked the turn score.
    Banked {
        /// Final turn score.
        turn_score: u32,
    },
    /// The turn's result was added to the player's game score.
    Scored {
        /// Seat name.
        player: String,
        /// Points the turn added.
        turn_score: u32,
        /// Game score after the turn.
        game_score: u32,
    },
}

/// A participant in a turn: a human at a prompt or a bot.
pub trait TurnPlayer {
    /// Pick one of `selections` (never empty) by index.
    ///
    /// Out-of-range indices and [`FarkleError::InvalidSelectionIndex`] are
    /// re-prompted. Any other error ends the turn.
    fn choose_selection(
        &mut self,
        state: &TurnState,
        roll: &Roll,
        selections: &[Selection],
    ) -> FarkleResult<usize>;

    /// Decide whether to keep rolling.
    ///
    /// [`FarkleError::InvalidContinueResponse`] is re-prompted; return
    /// [`FarkleError::AbortRequested`] to quit the game.
    fn decide(&mut self, state: &TurnState) -> FarkleResult<Decision>;

    /// Observe a turn event.
    fn notify(&mut self, _event: &TurnEvent) {}

    /// Told about invalid input before being asked again.
    fn reject(&mut self, _error: &FarkleError) {}
}
