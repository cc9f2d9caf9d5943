//! Sources of die values.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::FACES;

/// Values that score nothing under the standard catalog for any prefix length.
const FARKLE_FILLER: [u8; 6] = [2, 3, 4, 6, 2, 3];

/// Something that can roll `n` six-sided dice.
pub trait DiceSource {
    /// Roll `n` dice, returning their values in roll order.
    fn roll(&mut self, n: usize) -> Vec<u8>;
}

/// Uniform, independent dice backed by a [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Dice seeded for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded dice if a seed is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.rng.random_range(1..=FACES)).collect()
    }
}

/// Replays predetermined rolls, one per call.
///
/// Each scripted roll is truncated to the number of dice requested. Once the
/// script runs out the dice show a non-scoring filler (`2, 3, 4, 6, 2, 3`), so
/// a turn that rolls past the script ends in a farkle instead of looping.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<Vec<u8>>,
}

impl ScriptedDice {
    /// Create a source that yields the given rolls in order.
    pub fn new<I>(rolls: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted rolls not yet used.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, n: usize) -> Vec<u8> {
        match self.rolls.pop_front() {
            Some(mut values) => {
                values.truncate(n);
                values
            }
            None => FARKLE_FILLER.iter().copied().cycle().take(n).collect(),
        }
    }
}
