use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use farkle_core::{RandomDice, ThresholdBot, simulate_turns};

pub fn run(
    turns: u32,
    bank_at: u32,
    min_dice: usize,
    seed: u64,
    target: u32,
    catalog: Option<&Path>,
) -> Result<(), String> {
    let engine = super::load_engine(catalog)?;
    let mut dice = RandomDice::seeded(seed);
    let mut bot = ThresholdBot::new(bank_at).with_min_dice(min_dice);

    let stats = simulate_turns(&engine, &mut dice, &mut bot, turns, target)
        .map_err(|e| format!("simulation error: {e}"))?;

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("(bank at {bank_at}, min {min_dice} dice, seed={seed})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Turns", "Farkles", "Instant wins", "Mean score", "Best turn"]);
    table.add_row(vec![
        stats.turns.to_string(),
        format!("{} ({:.1}%)", stats.farkles, stats.farkle_rate() * 100.0),
        stats.instant_wins.to_string(),
        format!("{:.1}", stats.mean_score()),
        stats.best_turn.to_string(),
    ]);

    println!("{table}");
    Ok(())
}
