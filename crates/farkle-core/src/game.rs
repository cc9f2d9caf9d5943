//! The multi-player loop and turn simulation.
//!
//! A [`Game`] seats players in order and plays full rounds, so every seat
//! gets the same number of turns. Once a round ends with someone at or above
//! the target score, the highest score wins.

use std::cmp::Reverse;

use tracing::info;

use crate::config::GameConfig;
use crate::dice::DiceSource;
use crate::error::{FarkleError, FarkleResult};
use crate::scoring::ScoringEngine;
use crate::turn::{TurnEvent, TurnOutcome, TurnPlayer, play_turn};

struct Seat {
    name: String,
    score: u32,
    player: Box<dyn TurnPlayer>,
}

/// Final standings of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// The winning seat, or `None` if the round cap was hit first.
    pub winner: Option<String>,
    /// Every seat's final score, in seating order.
    pub scores: Vec<(String, u32)>,
    /// Rounds played.
    pub rounds: u32,
}

/// A game of Farkle between seated players.
pub struct Game {
    seats: Vec<Seat>,
    config: GameConfig,
    rounds: u32,
}

impl Game {
    /// Create a game with no players yet.
    pub fn new(config: GameConfig) -> Self {
        Self {
            seats: Vec::new(),
            config,
            rounds: 0,
        }
    }

    /// Seat a player at the end of the turn order.
    pub fn with_player(mut self, name: impl Into<String>, player: Box<dyn TurnPlayer>) -> Self {
        self.add_player(name, player);
        self
    }

    /// Seat a player at the end of the turn order.
    pub fn add_player(&mut self, name: impl Into<String>, player: Box<dyn TurnPlayer>) {
        self.seats.push(Seat {
            name: name.into(),
            score: 0,
            player,
        });
    }

    /// The game's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current scores in seating order.
    pub fn scores(&self) -> Vec<(String, u32)> {
        self.seats
            .iter()
            .map(|s| (s.name.clone(), s.score))
            .collect()
    }

    /// Rounds completed so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Play one turn for the seat at `seat` and add its score.
    pub fn play_turn(
        &mut self,
        seat: usize,
        engine: &ScoringEngine,
        dice: &mut dyn DiceSource,
    ) -> FarkleResult<TurnOutcome> {
        let target = self.config.target_score;
        let seat = self
            .seats
            .get_mut(seat)
            .ok_or_else(|| FarkleError::InvalidGame(format!("no seat {seat}")))?;

        seat.player.notify(&TurnEvent::Started {
            player: seat.name.clone(),
            game_score: seat.score,
        });
        let outcome = play_turn(engine, dice, seat.player.as_mut(), target)?;
        seat.score += outcome.score();
        info!(player = %seat.name, turn = outcome.score(), total = seat.score, "turn finished");
        seat.player.notify(&TurnEvent::Scored {
            player: seat.name.clone(),
            turn_score: outcome.score(),
            game_score: seat.score,
        });
        Ok(outcome)
    }

    /// Play rounds until someone reaches the target (or the round cap).
    pub fn run(
        &mut self,
        engine: &ScoringEngine,
        dice: &mut dyn DiceSource,
    ) -> FarkleResult<GameSummary> {
        if self.seats.is_empty() {
            return Err(FarkleError::InvalidGame("no players".to_string()));
        }

        let target = self.config.target_score;
        loop {
            for seat in 0..self.seats.len() {
                self.play_turn(seat, engine, dice)?;
            }
            self.rounds += 1;

            if self.seats.iter().any(|s| s.score >= target) {
                break;
            }
            if self.config.max_rounds.is_some_and(|cap| self.rounds >= cap) {
                info!(rounds = self.rounds, "round cap reached");
                return Ok(self.summary(None));
            }
        }

        // highest score wins; ties go to the earlier seat
        let winner = self
            .seats
            .iter()
            .enumerate()
            .min_by_key(|(index, seat)| (Reverse(seat.score), *index))
            .map(|(_, seat)| seat.name.clone());
        info!(winner = ?winner, rounds = self.rounds, "game over");
        Ok(self.summary(winner))
    }

    fn summary(&self, winner: Option<String>) -> GameSummary {
        GameSummary {
            winner,
            scores: self.scores(),
            rounds: self.rounds,
        }
    }
}

/// Aggregate results of many independent turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnStats {
    /// Turns played.
    pub turns: u32,
    /// Turns that ended in a farkle.
    pub farkles: u32,
    /// Turns that went past the target.
    pub instant_wins: u32,
    /// Sum of all turn scores.
    pub total_score: u64,
    /// Highest single turn score.
    pub best_turn: u32,
}

impl TurnStats {
    /// Record one turn.
    pub fn record(&mut self, outcome: TurnOutcome) {
        self.turns += 1;
        match outcome {
            TurnOutcome::Farkled => self.farkles += 1,
            TurnOutcome::InstantWin(_) => self.instant_wins += 1,
            TurnOutcome::Stopped(_) => {}
        }
        self.total_score += u64::from(outcome.score());
        self.best_turn = self.best_turn.max(outcome.score());
    }

    /// Average score per turn, or 0 with no turns.
    pub fn mean_score(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.turns)
        }
    }

    /// Fraction of turns that farkled, or 0 with no turns.
    pub fn farkle_rate(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            f64::from(self.farkles) / f64::from(self.turns)
        }
    }
}

/// Play `turns` independent turns with one player and collect statistics.
pub fn simulate_turns(
    engine: &ScoringEngine,
    dice: &mut dyn DiceSource,
    player: &mut dyn TurnPlayer,
    turns: u32,
    target_score: u32,
) -> FarkleResult<TurnStats> {
    let mut stats = TurnStats::default();
    for _ in 0..turns {
        stats.record(play_turn(engine, dice, player, target_score)?);
    }
    info!(
        turns = stats.turns,
        farkles = stats.farkles,
        mean = stats.mean_score(),
        "simulation finished"
    );
    Ok(stats)
}
