use std::path::Path;

use colored::Colorize;
use serde_json::json;

use farkle_core::Roll;

pub fn run(dice: &[u8], json: bool, catalog: Option<&Path>) -> Result<(), String> {
    let engine = super::load_engine(catalog)?;
    let roll = Roll::new(dice.to_vec()).map_err(|e| e.to_string())?;
    let selections = engine.scoring_selections(&roll);

    if json {
        let rows: Vec<_> = selections
            .iter()
            .map(|s| {
                json!({
                    "keep": s.parts(),
                    "dice": s.dice(),
                    "score": s.score(),
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!("  {} {roll}", "Rolled".bold());
    if selections.is_empty() {
        println!("  {}", "FARKLE! Nothing scores.".red().bold());
        return Ok(());
    }

    println!("{}", super::selection_table(&selections));
    println!();
    println!("  {} scoring selections", selections.len());

    Ok(())
}
