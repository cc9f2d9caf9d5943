use std::path::Path;

use colored::Colorize;

use farkle_core::{FarkleError, Game, GameConfig, RandomDice};

use crate::console::ConsolePlayer;

pub fn run(
    players: &[String],
    target: u32,
    seed: Option<u64>,
    catalog: Option<&Path>,
) -> Result<(), String> {
    let engine = super::load_engine(catalog)?;
    let mut config = GameConfig::default().with_target(target);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut dice = RandomDice::from_seed_option(config.seed);

    let mut game = Game::new(config);
    for name in players {
        game.add_player(name.clone(), Box::new(ConsolePlayer::new(name.clone())));
    }

    println!("  {} First to {target} wins.", "Welcome to Farkle!".bold());
    println!("  Type 'quit' at any prompt to leave.");

    match game.run(&engine, &mut dice) {
        Ok(summary) => {
            println!();
            for (name, score) in &summary.scores {
                println!("  {name}: {score}");
            }
            if let Some(winner) = summary.winner {
                println!("  {} wins!", winner.green().bold());
            }
            Ok(())
        }
        Err(FarkleError::AbortRequested) => {
            println!();
            println!("  Goodbye!");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
