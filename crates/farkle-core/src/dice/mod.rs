//! Six-sided dice: validated rolls and the sources that produce them.
//!
//! A [`Roll`] is always kept in ascending order, since scoring works on the
//! sorted digit string. Randomness is injected through [`DiceSource`] so turns
//! can be replayed from a script.

pub mod roll;
pub mod source;

pub use roll::Roll;
pub use source::{DiceSource, RandomDice, ScriptedDice};

/// Number of dice a turn starts with, and the most a roll can hold.
pub const DICE_PER_TURN: usize = 6;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// The digit character for a die value (`1` -> `'1'`).
pub(crate) fn face_char(value: u8) -> char {
    char::from(b'0' + value)
}
