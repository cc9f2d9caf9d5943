//! A validated, sorted roll of dice.

use itertools::Itertools;

use super::{DICE_PER_TURN, FACES, face_char};
use crate::error::{FarkleError, FarkleResult};

/// Between one and six die values, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Roll {
    values: Vec<u8>,
}

impl Roll {
    /// Build a roll from raw die values, sorting them.
    ///
    /// Fails if there are no dice, more than six, or a value outside 1-6.
    pub fn new(mut values: Vec<u8>) -> FarkleResult<Self> {
        if values.is_empty() || values.len() > DICE_PER_TURN {
            return Err(FarkleError::InvalidRoll(format!(
                "expected 1 to {DICE_PER_TURN} dice, got {}",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !(1..=FACES).contains(*v)) {
            return Err(FarkleError::InvalidRoll(format!(
                "die value {bad} is not between 1 and {FACES}"
            )));
        }
        values.sort_unstable();
        Ok(Self { values })
    }

    /// Die values in ascending order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The sorted values as a digit string, e.g. `[5, 1, 1, 6]` -> `"1156"`.
    pub fn digits(&self) -> String {
        self.values.iter().map(|&v| face_char(v)).collect()
    }

    /// Number of dice rolled.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a roll holds at least one die.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.values.iter().join(", "))
    }
}
