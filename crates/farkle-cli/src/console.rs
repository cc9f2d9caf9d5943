//! A human player at the terminal.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use itertools::Itertools;
use tracing::debug;

use farkle_core::{
    Decision, FarkleError, FarkleResult, Roll, Selection, TurnEvent, TurnPlayer, TurnState,
};

use crate::commands::selection_table;

/// Reads choices from stdin and narrates the turn on stdout.
pub struct ConsolePlayer {
    name: String,
}

impl ConsolePlayer {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl TurnPlayer for ConsolePlayer {
    fn choose_selection(
        &mut self,
        _state: &TurnState,
        _roll: &Roll,
        selections: &[Selection],
    ) -> FarkleResult<usize> {
        println!("  Select one of the scoring combos from your roll:");
        println!("{}", selection_table(selections));
        let line = prompt("  Choose the index of the combo you wish to keep: ")?;
        parse_selection(&line, selections.len())
    }

    fn decide(&mut self, state: &TurnState) -> FarkleResult<Decision> {
        println!(
            "  Turn score is {}. Do you want to keep rolling with {} dice?",
            state.turn_score(),
            state.dice_to_roll()
        );
        let line = prompt("  Keep rolling? Y/N: ")?;
        parse_decision(&line)
    }

    fn notify(&mut self, event: &TurnEvent) {
        match event {
            TurnEvent::Started { player, game_score } => {
                println!();
                println!("  {} (score {game_score})", format!("{player}'s turn").bold());
            }
            TurnEvent::Rolled { roll } => println!("  You rolled: {roll}"),
            TurnEvent::Farkle { forfeited, .. } => {
                println!(
                    "  {} Your turn is over and you scored 0.",
                    "FARKLE!".red().bold()
                );
                if *forfeited > 0 {
                    println!("  ({forfeited} points lost)");
                }
            }
            TurnEvent::Kept {
                selection,
                turn_score,
            } => println!(
                "  Kept {} for {}. Turn score is {turn_score}.",
                selection.parts().iter().join(" + "),
                selection.score()
            ),
            TurnEvent::HotDice { .. } => println!(
                "  {} All six dice scored, you get six fresh dice.",
                "Hot dice!".yellow().bold()
            ),
            TurnEvent::InstantWin { turn_score } => println!(
                "  {} You've won the whole game in a single turn! You scored {turn_score}.",
                "Wow!".green().bold()
            ),
            TurnEvent::Banked { turn_score } => println!("  You scored {turn_score}."),
            TurnEvent::Scored {
                player, game_score, ..
            } => println!("  Total score for {player} is {game_score}."),
        }
    }

    fn reject(&mut self, error: &FarkleError) {
        debug!(player = %self.name, %error, "invalid input");
        println!(
            "  {}",
            "I'm sorry, I don't understand. Please try again.".yellow()
        );
    }
}

/// Print a prompt and read one line. End of input counts as quitting.
fn prompt(text: &str) -> FarkleResult<String> {
    print!("{text}");
    io::stdout()
        .flush()
        .map_err(|_| FarkleError::AbortRequested)?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => Err(FarkleError::AbortRequested),
        Ok(_) => Ok(line),
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "exit")
}

/// Parse a selection index in `0..count`.
pub fn parse_selection(input: &str, count: usize) -> FarkleResult<usize> {
    let input = input.trim().to_lowercase();
    if is_quit(&input) {
        return Err(FarkleError::AbortRequested);
    }
    let index: usize = input
        .parse()
        .map_err(|_| FarkleError::InvalidSelectionIndex(format!("'{input}' is not a number")))?;
    if index >= count {
        return Err(FarkleError::InvalidSelectionIndex(format!(
            "{index} is not between 0 and {}",
            count.saturating_sub(1)
        )));
    }
    Ok(index)
}

/// Parse an answer to "keep rolling?".
pub fn parse_decision(input: &str) -> FarkleResult<Decision> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "y" | "yes" => Ok(Decision::Continue),
        "n" | "no" => Ok(Decision::Stop),
        other if is_quit(other) => Err(FarkleError::AbortRequested),
        _ => Err(FarkleError::InvalidContinueResponse(input)),
    }
}
