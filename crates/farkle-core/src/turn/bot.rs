//! A simple automated player for simulations.

use crate::dice::Roll;
use crate::error::FarkleResult;
use crate::scoring::Selection;

use super::{Decision, TurnPlayer, TurnState};

/// Turn score at which [`ThresholdBot`] banks by default.
pub const DEFAULT_BANK_AT: u32 = 300;

/// Fewest dice [`ThresholdBot`] will roll by default.
pub const DEFAULT_MIN_DICE: usize = 2;

/// Keeps the best selection each roll and banks at a fixed turn score.
#[derive(Debug, Clone)]
pub struct ThresholdBot {
    bank_at: u32,
    min_dice: usize,
}

impl Default for ThresholdBot {
    fn default() -> Self {
        Self {
            bank_at: DEFAULT_BANK_AT,
            min_dice: DEFAULT_MIN_DICE,
        }
    }
}

impl ThresholdBot {
    /// A bot that banks once the turn score reaches `bank_at`.
    pub fn new(bank_at: u32) -> Self {
        Self {
            bank_at,
            ..Self::default()
        }
    }

    /// Also bank when fewer than `min_dice` dice would be rolled.
    pub fn with_min_dice(mut self, min_dice: usize) -> Self {
        self.min_dice = min_dice;
        self
    }

    /// Turn score at which the bot banks.
    pub fn bank_at(&self) -> u32 {
        self.bank_at
    }

    /// Fewest dice the bot will roll.
    pub fn min_dice(&self) -> usize {
        self.min_dice
    }
}

impl TurnPlayer for ThresholdBot {
    fn choose_selection(
        &mut self,
        _state: &TurnState,
        _roll: &Roll,
        selections: &[Selection],
    ) -> FarkleResult<usize> {
        // highest score, then fewest dice so more are left to roll
        let best = selections
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.score()
                    .cmp(&b.score())
                    .then_with(|| b.dice_count().cmp(&a.dice_count()))
            })
            .map_or(0, |(index, _)| index);
        Ok(best)
    }

    fn decide(&mut self, state: &TurnState) -> FarkleResult<Decision> {
        if state.turn_score() >= self.bank_at || state.dice_to_roll() < self.min_dice {
            Ok(Decision::Stop)
        } else {
            Ok(Decision::Continue)
        }
    }
}
