//! The pattern catalog: every atomic scoring pattern and its points.
//!
//! A [`Catalog`] is built once from [`CatalogRow`]s (the built-in preset or a
//! JSON table) and never mutated afterwards. Each pattern is keyed by its
//! ascending digit string, e.g. three ones are `"111"`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::preset;
use crate::dice::{DICE_PER_TURN, FACES, face_char};
use crate::error::{FarkleError, FarkleResult};

/// One row of a catalog source: the dice of a pattern and what it scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Die values in ascending order.
    pub dice: Vec<u8>,
    /// Points awarded for keeping exactly these dice.
    pub score: u32,
}

impl CatalogRow {
    /// Create a row.
    pub fn new(dice: Vec<u8>, score: u32) -> Self {
        Self { dice, score }
    }
}

/// A validated atomic scoring pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    digits: String,
    score: u32,
}

impl Pattern {
    /// The pattern's dice as an ascending digit string.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Points for this pattern.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of dice the pattern consumes.
    pub fn size(&self) -> usize {
        self.digits.len()
    }
}

/// An immutable table of scoring patterns.
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<Pattern>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build and validate a catalog from rows.
    ///
    /// Fails with [`FarkleError::MalformedCatalog`] if a row is empty, longer
    /// than six dice, uses a face outside 1-6, is not in ascending order,
    /// scores zero, or repeats another row's dice.
    pub fn from_rows<I>(rows: I) -> FarkleResult<Self>
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        let mut catalog = Self {
            patterns: Vec::new(),
            index: HashMap::new(),
        };

        for (line, row) in rows.into_iter().enumerate() {
            validate_row(line, &row)?;
            let digits: String = row.dice.iter().map(|&v| face_char(v)).collect();
            if catalog.index.contains_key(&digits) {
                return Err(FarkleError::MalformedCatalog(format!(
                    "row {line}: duplicate pattern {digits}"
                )));
            }
            catalog.push(digits, row.score);
        }

        if catalog.is_empty() {
            return Err(FarkleError::MalformedCatalog(
                "catalog has no patterns".to_string(),
            ));
        }

        debug!(patterns = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a JSON array of `{ "dice": [..], "score": n }` rows.
    pub fn from_json(text: &str) -> FarkleResult<Self> {
        let rows: Vec<CatalogRow> = serde_json::from_str(text)
            .map_err(|e| FarkleError::MalformedCatalog(format!("invalid JSON: {e}")))?;
        Self::from_rows(rows)
    }

    /// Read a JSON catalog file.
    pub fn from_file(path: &Path) -> FarkleResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| FarkleError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// The standard Farkle rules. See [`preset::standard_rows`].
    pub fn standard() -> Self {
        let mut catalog = Self {
            patterns: Vec::new(),
            index: HashMap::new(),
        };
        for row in preset::standard_rows() {
            let digits = row.dice.iter().map(|&v| face_char(v)).collect();
            catalog.push(digits, row.score);
        }
        catalog
    }

    fn push(&mut self, digits: String, score: u32) {
        self.index.insert(digits.clone(), self.patterns.len());
        self.patterns.push(Pattern { digits, score });
    }

    /// Points for a pattern's digit string, if the catalog has it.
    pub fn lookup_score(&self, digits: &str) -> Option<u32> {
        self.index.get(digits).map(|&i| self.patterns[i].score)
    }

    /// All patterns in load order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// The pattern at `index` in load order.
    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    /// The catalog as source rows, for export.
    pub fn rows(&self) -> Vec<CatalogRow> {
        self.patterns
            .iter()
            .map(|p| CatalogRow {
                dice: p.digits.bytes().map(|b| b - b'0').collect(),
                score: p.score,
            })
            .collect()
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the catalog has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn validate_row(line: usize, row: &CatalogRow) -> FarkleResult<()> {
    let malformed = |msg: String| -> FarkleResult<()> {
        Err(FarkleError::MalformedCatalog(format!("row {line}: {msg}")))
    };

    if row.dice.is_empty() {
        return malformed("pattern has no dice".to_string());
    }
    if row.dice.len() > DICE_PER_TURN {
        return malformed(format!(
            "pattern uses {} dice, at most {DICE_PER_TURN} allowed",
            row.dice.len()
        ));
    }
    if let Some(bad) = row.dice.iter().find(|v| !(1..=FACES).contains(*v)) {
        return malformed(format!("die value {bad} is not between 1 and {FACES}"));
    }
    if row.dice.windows(2).any(|w| w[0] > w[1]) {
        return malformed(format!("dice {:?} are not in ascending order", row.dice));
    }
    if row.score == 0 {
        return malformed("score must be positive".to_string());
    }
    Ok(())
}
