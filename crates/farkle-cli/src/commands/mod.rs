pub mod catalog;
pub mod play;
pub mod score;
pub mod simulate;

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use itertools::Itertools;

use farkle_core::{Catalog, ScoringEngine, Selection};

/// Build the scoring engine from a catalog file, or the standard rules.
fn load_engine(catalog: Option<&Path>) -> Result<ScoringEngine, String> {
    let catalog = match catalog {
        Some(path) => Catalog::from_file(path).map_err(|e| e.to_string())?,
        None => Catalog::standard(),
    };
    ScoringEngine::new(catalog).map_err(|e| e.to_string())
}

/// Indexed table of selections, as shown when choosing what to keep.
pub fn selection_table(selections: &[Selection]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Index", "Dice to keep", "Score"]);

    for (index, selection) in selections.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            selection.parts().iter().join(" + "),
            selection.score().to_string(),
        ]);
    }
    table
}
