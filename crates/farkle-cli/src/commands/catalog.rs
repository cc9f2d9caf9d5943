use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(json: bool, catalog: Option<&Path>) -> Result<(), String> {
    let engine = super::load_engine(catalog)?;
    let catalog = engine.catalog();

    if json {
        let text = serde_json::to_string_pretty(&catalog.rows()).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Pattern", "Dice", "Score"]);

    for pattern in catalog.patterns() {
        table.add_row(vec![
            pattern.digits().to_string(),
            pattern.size().to_string(),
            pattern.score().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} patterns", catalog.len());

    Ok(())
}
