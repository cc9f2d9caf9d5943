//! A single player's turn.
//!
//! The turn is an explicit loop: roll the remaining dice, resolve scoring
//! selections, let the player keep one, then either stop or roll again. A
//! roll with nothing to keep is a farkle and zeroes the turn. Scoring all six
//! dice is hot dice: the pool resets to six and the turn score carries on.
//! A turn score above the target ends the turn immediately.

pub mod bot;
pub mod player;

pub use bot::ThresholdBot;
pub use player::{Decision, TurnEvent, TurnPlayer};

use tracing::{debug, info};

use crate::dice::{DICE_PER_TURN, DiceSource, Roll};
use crate::error::{FarkleError, FarkleResult};
use crate::scoring::{ScoringEngine, Selection};

/// Progress within a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    turn_score: u32,
    dice_to_roll: usize,
    kept: String,
    rolls: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// A fresh turn: no score, six dice, nothing kept.
    pub fn new() -> Self {
        Self {
            turn_score: 0,
            dice_to_roll: DICE_PER_TURN,
            kept: String::new(),
            rolls: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn with(turn_score: u32, dice_to_roll: usize, kept: &str) -> Self {
        Self {
            turn_score,
            dice_to_roll,
            kept: kept.to_string(),
            rolls: 0,
        }
    }

    /// Points accumulated this turn.
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// Dice available for the next roll.
    pub fn dice_to_roll(&self) -> usize {
        self.dice_to_roll
    }

    /// Digits set aside since the turn started or since the last hot dice.
    pub fn kept(&self) -> &str {
        &self.kept
    }

    /// Rolls made so far this turn.
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    fn keep(&mut self, selection: &Selection) {
        self.turn_score += selection.score();
        self.kept.push_str(&selection.dice());
    }

    /// Recompute the dice left to roll. Returns true on hot dice.
    fn refresh_dice(&mut self) -> bool {
        let remaining = DICE_PER_TURN.saturating_sub(self.kept.len());
        if remaining == 0 {
            self.dice_to_roll = DICE_PER_TURN;
            self.kept.clear();
            true
        } else {
            self.dice_to_roll = remaining;
            false
        }
    }
}

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player banked this score.
    Stopped(u32),
    /// A roll scored nothing; the turn is worth zero.
    Farkled,
    /// The turn score passed the target and ended the turn at once.
    InstantWin(u32),
}

impl TurnOutcome {
    /// Points the turn adds to the player's game score.
    pub fn score(self) -> u32 {
        match self {
            Self::Stopped(score) | Self::InstantWin(score) => score,
            Self::Farkled => 0,
        }
    }
}

/// Play one turn to completion.
///
/// `target_score` is the game's winning score; a turn score strictly above it
/// ends the turn as [`TurnOutcome::InstantWin`] without asking to continue.
/// Returns [`FarkleError::AbortRequested`] if the player quits.
pub fn play_turn(
    engine: &ScoringEngine,
    dice: &mut dyn DiceSource,
    player: &mut dyn TurnPlayer,
    target_score: u32,
) -> FarkleResult<TurnOutcome> {
    let mut state = TurnState::new();

    loop {
        let roll = Roll::new(dice.roll(state.dice_to_roll))?;
        state.rolls += 1;
        debug!(roll = %roll, dice = state.dice_to_roll, "rolled");
        player.notify(&TurnEvent::Rolled { roll: roll.clone() });

        let selections = engine.scoring_selections(&roll);
        if selections.is_empty() {
            info!(forfeited = state.turn_score, "farkle");
            player.notify(&TurnEvent::Farkle {
                roll,
                forfeited: state.turn_score,
            });
            return Ok(TurnOutcome::Farkled);
        }

        let index = prompt_selection(player, &state, &roll, &selections)?;
        let selection = &selections[index];
        state.keep(selection);
        debug!(kept = %selection, turn_score = state.turn_score, "kept selection");
        player.notify(&TurnEvent::Kept {
            selection: selection.clone(),
            turn_score: state.turn_score,
        });

        if state.turn_score > target_score {
            info!(turn_score = state.turn_score, "won the game in a single turn");
            player.notify(&TurnEvent::InstantWin {
                turn_score: state.turn_score,
            });
            return Ok(TurnOutcome::InstantWin(state.turn_score));
        }

        if state.refresh_dice() {
            debug!(turn_score = state.turn_score, "hot dice");
            player.notify(&TurnEvent::HotDice {
                turn_score: state.turn_score,
            });
        }

        match prompt_decision(player, &state)? {
            Decision::Stop => {
                info!(turn_score = state.turn_score, rolls = state.rolls, "banked");
                player.notify(&TurnEvent::Banked {
                    turn_score: state.turn_score,
                });
                return Ok(TurnOutcome::Stopped(state.turn_score));
            }
            Decision::Continue => continue,
        }
    }
}

fn prompt_selection(
    player: &mut dyn TurnPlayer,
    state: &TurnState,
    roll: &Roll,
    selections: &[Selection],
) -> FarkleResult<usize> {
    loop {
        let error = match player.choose_selection(state, roll, selections) {
            Ok(index) if index < selections.len() => return Ok(index),
            Ok(index) => FarkleError::InvalidSelectionIndex(format!(
                "{index} is not between 0 and {}",
                selections.len() - 1
            )),
            Err(error) if error.is_reprompt() => error,
            Err(error) => return Err(error),
        };
        debug!(%error, "asking for the selection again");
        player.reject(&error);
    }
}

fn prompt_decision(player: &mut dyn TurnPlayer, state: &TurnState) -> FarkleResult<Decision> {
    loop {
        match player.decide(state) {
            Ok(decision) => return Ok(decision),
            Err(error) if error.is_reprompt() => {
                debug!(%error, "asking to continue again");
                player.reject(&error);
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::dice::ScriptedDice;

    /// Plays back scripted answers. With no script left it keeps the best
    /// selection and stops.
    #[derive(Default)]
    struct Scripted {
        picks: VecDeque<FarkleResult<usize>>,
        decisions: VecDeque<FarkleResult<Decision>>,
        events: Vec<TurnEvent>,
        decided_at: Vec<TurnState>,
        rejected: usize,
    }

    impl Scripted {
        fn picks(mut self, picks: impl IntoIterator<Item = FarkleResult<usize>>) -> Self {
            self.picks.extend(picks);
            self
        }

        fn decisions(mut self, decisions: impl IntoIterator<Item = FarkleResult<Decision>>) -> Self {
            self.decisions.extend(decisions);
            self
        }
    }

    impl TurnPlayer for Scripted {
        fn choose_selection(
            &mut self,
            _state: &TurnState,
            _roll: &Roll,
            selections: &[Selection],
        ) -> FarkleResult<usize> {
            self.picks.pop_front().unwrap_or(Ok(selections.len() - 1))
        }

        fn decide(&mut self, state: &TurnState) -> FarkleResult<Decision> {
            self.decided_at.push(state.clone());
            self.decisions.pop_front().unwrap_or(Ok(Decision::Stop))
        }

        fn notify(&mut self, event: &TurnEvent) {
            self.events.push(event.clone());
        }

        fn reject(&mut self, _error: &FarkleError) {
            self.rejected += 1;
        }
    }

    fn play(rolls: Vec<Vec<u8>>, player: &mut Scripted, target: u32) -> FarkleResult<TurnOutcome> {
        let engine = ScoringEngine::standard().unwrap();
        let mut dice = ScriptedDice::new(rolls);
        play_turn(&engine, &mut dice, player, target)
    }

    #[test]
    fn farkle_on_first_roll() {
        let mut player = Scripted::default();
        let outcome = play(vec![vec![2, 2, 3, 3, 4, 6]], &mut player, 10_000).unwrap();
        assert_eq!(outcome, TurnOutcome::Farkled);
        assert_eq!(outcome.score(), 0);
        assert!(player.decided_at.is_empty());
        assert!(matches!(
            player.events.last(),
            Some(TurnEvent::Farkle { forfeited: 0, .. })
        ));
    }

    #[test]
    fn farkle_discards_accumulated_score() {
        let mut player = Scripted::default().decisions([Ok(Decision::Continue)]);
        let outcome = play(
            vec![vec![1, 2, 3, 4, 6, 6], vec![2, 3, 4, 6, 6]],
            &mut player,
            10_000,
        )
        .unwrap();
        assert_eq!(outcome, TurnOutcome::Farkled);
        assert!(matches!(
            player.events.last(),
            Some(TurnEvent::Farkle { forfeited: 100, .. })
        ));
    }

    #[test]
    fn stop_banks_turn_score() {
        // [5] = 50, [1] = 100, [1, 5] = 150
        let mut player = Scripted::default().picks([Ok(2)]);
        let outcome = play(vec![vec![1, 5, 2, 2, 3, 4]], &mut player, 10_000).unwrap();
        assert_eq!(outcome, TurnOutcome::Stopped(150));

        let state = &player.decided_at[0];
        assert_eq!(state.turn_score(), 150);
        assert_eq!(state.dice_to_roll(), 4);
        assert_eq!(state.kept(), "15");
        assert_eq!(state.rolls(), 1);
        assert_eq!(
            player.events.last(),
            Some(&TurnEvent::Banked { turn_score: 150 })
        );
    }

    #[test]
    fn continuing_rolls_remaining_dice() {
        let mut player = Scripted::default()
            .picks([Ok(0)])
            .decisions([Ok(Decision::Continue), Ok(Decision::Stop)]);
        let outcome = play(
            vec![vec![1, 2, 3, 4, 6, 6], vec![5, 2, 3, 4, 6, 6]],
            &mut player,
            10_000,
        )
        .unwrap();
        // the second roll is cut to five dice: 2 3 4 5 6
        assert_eq!(outcome, TurnOutcome::Stopped(150));
        assert_eq!(player.decided_at[1].dice_to_roll(), 4);
        assert_eq!(player.decided_at[1].kept(), "15");
    }

    #[test]
    fn hot_dice_in_one_roll_resets_pool() {
        let mut player = Scripted::default();
        let outcome = play(vec![vec![1, 1, 1, 5, 5, 5]], &mut player, 10_000).unwrap();
        assert_eq!(outcome, TurnOutcome::Stopped(2500));

        let state = &player.decided_at[0];
        assert_eq!(state.dice_to_roll(), 6);
        assert_eq!(state.kept(), "");
        assert_eq!(state.turn_score(), 2500);
        assert!(player.events.contains(&TurnEvent::HotDice { turn_score: 2500 }));
    }

    #[test]
    fn hot_dice_across_rolls_keeps_score() {
        let mut player = Scripted::default().decisions([Ok(Decision::Continue)]);
        let outcome = play(
            vec![vec![1, 1, 2, 3, 4, 6], vec![5, 5, 5, 1]],
            &mut player,
            10_000,
        )
        .unwrap();
        // [1, 1] = 200, then [1, 555] = 600
        assert_eq!(outcome, TurnOutcome::Stopped(800));

        let first = &player.decided_at[0];
        assert_eq!(first.dice_to_roll(), 4);
        assert_eq!(first.kept(), "11");

        let second = &player.decided_at[1];
        assert_eq!(second.dice_to_roll(), 6);
        assert_eq!(second.kept(), "");
        assert_eq!(second.turn_score(), 800);
        assert!(player.events.contains(&TurnEvent::HotDice { turn_score: 800 }));
    }

    #[test]
    fn hot_dice_then_farkle_scores_zero() {
        let mut player = Scripted::default().decisions([Ok(Decision::Continue)]);
        let outcome = play(
            vec![vec![1, 1, 1, 5, 5, 5], vec![2, 2, 3, 3, 4, 6]],
            &mut player,
            10_000,
        )
        .unwrap();
        assert_eq!(outcome, TurnOutcome::Farkled);
        assert!(matches!(
            player.events.last(),
            Some(TurnEvent::Farkle { forfeited: 2500, .. })
        ));
    }

    #[test]
    fn dice_count_tracks_kept_digits() {
        let mut player = Scripted::default()
            .picks([Ok(0), Ok(0), Ok(0)])
            .decisions([Ok(Decision::Continue), Ok(Decision::Continue)]);
        play(
            vec![
                vec![5, 2, 3, 4, 6, 6],
                vec![5, 2, 3, 4, 6],
                vec![1, 2, 3, 4],
            ],
            &mut player,
            10_000,
        )
        .unwrap();
        for state in &player.decided_at {
            assert_eq!(state.dice_to_roll(), DICE_PER_TURN - state.kept().len());
        }
        assert_eq!(player.decided_at[2].kept(), "551");
    }

    #[test]
    fn instant_win_skips_continue_prompt() {
        let mut player = Scripted::default();
        let outcome = play(vec![vec![1; 6]], &mut player, 1000).unwrap();
        assert_eq!(outcome, TurnOutcome::InstantWin(3000));
        assert_eq!(outcome.score(), 3000);
        assert!(player.decided_at.is_empty());
        assert_eq!(
            player.events.last(),
            Some(&TurnEvent::InstantWin { turn_score: 3000 })
        );
    }

    #[test]
    fn reaching_target_exactly_is_not_instant_win() {
        let mut player = Scripted::default();
        let outcome = play(vec![vec![1; 6]], &mut player, 3000).unwrap();
        assert_eq!(outcome, TurnOutcome::Stopped(3000));
        assert_eq!(player.decided_at.len(), 1);
    }

    #[test]
    fn invalid_selection_is_reprompted() {
        let mut player = Scripted::default().picks([
            Ok(99),
            Err(FarkleError::InvalidSelectionIndex("abc".into())),
            Ok(0),
        ]);
        let outcome = play(vec![vec![1, 5, 2, 2, 3, 4]], &mut player, 10_000).unwrap();
        assert_eq!(outcome, TurnOutcome::Stopped(50));
        assert_eq!(player.rejected, 2);
    }

    #[test]
    fn invalid_continue_response_is_reprompted() {
        let mut player = Scripted::default().decisions([
            Err(FarkleError::InvalidContinueResponse("maybe".into())),
            Ok(Decision::Stop),
        ]);
        let outcome = play(vec![vec![1, 2, 2, 3, 4, 6]], &mut player, 10_000).unwrap();
        assert_eq!(outcome, TurnOutcome::Stopped(100));
        assert_eq!(player.rejected, 1);
        assert_eq!(player.decided_at.len(), 2);
    }

    #[test]
    fn abort_propagates_from_decision() {
        let mut player = Scripted::default().decisions([Err(FarkleError::AbortRequested)]);
        let result = play(vec![vec![1, 2, 2, 3, 4, 6]], &mut player, 10_000);
        assert!(matches!(result, Err(FarkleError::AbortRequested)));
    }

    #[test]
    fn abort_propagates_from_selection() {
        let mut player = Scripted::default().picks([Err(FarkleError::AbortRequested)]);
        let result = play(vec![vec![1, 2, 2, 3, 4, 6]], &mut player, 10_000);
        assert!(matches!(result, Err(FarkleError::AbortRequested)));
        assert_eq!(player.rejected, 0);
    }

    #[test]
    fn bad_dice_source_is_an_error() {
        let mut player = Scripted::default();
        let result = play(vec![vec![7, 1]], &mut player, 10_000);
        assert!(matches!(result, Err(FarkleError::InvalidRoll(_))));
    }

    #[test]
    fn threshold_bot_plays_a_turn() {
        let engine = ScoringEngine::standard().unwrap();
        let mut dice = ScriptedDice::new([vec![1, 2, 3, 4, 6, 6], vec![5, 5, 2, 3, 4]]);
        let mut bot = ThresholdBot::new(200);
        let outcome = play_turn(&engine, &mut dice, &mut bot, 10_000).unwrap();
        assert_eq!(outcome, TurnOutcome::Stopped(200));
    }
}
