//! Scoring resolution: catalog, matcher and selection synthesis.
//!
//! [`ScoringEngine`] wraps the [`Matcher`], which owns an immutable
//! [`Catalog`] and the automaton built from it. Construct it once and share
//! it for the whole session.

pub mod catalog;
pub mod matcher;
pub mod preset;
pub mod selection;

pub use catalog::{Catalog, CatalogRow, Pattern};
pub use matcher::{AtomicMatch, Matcher};
pub use selection::{Selection, is_sublist, synthesize};

use tracing::debug;

use crate::dice::Roll;
use crate::error::FarkleResult;

/// Finds every scoring selection in a roll.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    matcher: Matcher,
}

impl ScoringEngine {
    /// Build the engine for a catalog.
    pub fn new(catalog: Catalog) -> FarkleResult<Self> {
        let patterns = catalog.len();
        let matcher = Matcher::new(catalog)?;
        debug!(patterns, "scoring engine ready");
        Ok(Self { matcher })
    }

    /// Engine for the standard rules.
    pub fn standard() -> FarkleResult<Self> {
        Self::new(Catalog::standard())
    }

    /// The catalog this engine scores with.
    pub fn catalog(&self) -> &Catalog {
        self.matcher.catalog()
    }

    /// Every atomic pattern occurrence in the roll.
    pub fn atomic_matches(&self, roll: &Roll) -> Vec<AtomicMatch<'_>> {
        self.matcher.find_all(&roll.digits())
    }

    /// Every distinct selection the player may keep from `roll`, ascending by
    /// score. Empty means the roll is a farkle.
    pub fn scoring_selections(&self, roll: &Roll) -> Vec<Selection> {
        let digits = roll.digits();
        let matches = self.matcher.find_all(&digits);
        let selections = synthesize(&matches, &digits);
        debug!(
            roll = %digits,
            atomic = matches.len(),
            selections = selections.len(),
            "resolved scoring selections"
        );
        selections
    }

    /// Whether the roll scores nothing.
    pub fn is_farkle(&self, roll: &Roll) -> bool {
        self.atomic_matches(roll).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use proptest::prelude::*;

    fn roll(values: &[u8]) -> Roll {
        Roll::new(values.to_vec()).unwrap()
    }

    fn parts_of(selections: &[Selection]) -> Vec<Vec<&str>> {
        selections
            .iter()
            .map(|s| s.parts().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn farkle_roll_has_no_selections() {
        let engine = ScoringEngine::standard().unwrap();
        let farkle = roll(&[2, 2, 3, 3, 4, 6]);
        assert!(engine.scoring_selections(&farkle).is_empty());
        assert!(engine.is_farkle(&farkle));
    }

    #[test]
    fn triple_ones_with_five() {
        let engine = ScoringEngine::standard().unwrap();
        let selections = engine.scoring_selections(&roll(&[1, 1, 1, 5, 6]));
        let rendered = selections.iter().map(ToString::to_string).join("\n");
        insta::assert_snapshot!(rendered, @r"
        [5] = 50
        [1] = 100
        [1, 5] = 150
        [1, 1] = 200
        [1, 1, 5] = 250
        [1, 1, 1] = 300
        [1, 1, 1, 5] = 350
        [111] = 1000
        [111, 5] = 1050
        ");
    }

    #[test]
    fn four_ones_offers_single_and_triple_keeps() {
        let engine = ScoringEngine::standard().unwrap();
        let selections = engine.scoring_selections(&roll(&[1, 1, 1, 1, 5, 6]));
        let parts = parts_of(&selections);

        assert!(parts.contains(&vec!["1", "1", "1", "5"]));
        assert!(parts.contains(&vec!["111", "5"]));
        assert!(parts.contains(&vec!["1111", "5"]));
        assert!(parts.contains(&vec!["1"]));
        assert!(!parts.contains(&vec!["1", "1111", "5"]));
        assert!(!parts.contains(&vec!["111", "111"]));
        for selection in &selections {
            assert!(selection.dice().matches('1').count() <= 4);
        }
    }

    #[test]
    fn no_duplicate_selections() {
        let engine = ScoringEngine::standard().unwrap();
        let selections = engine.scoring_selections(&roll(&[1, 1, 5, 5, 2, 3]));
        let mut keys: Vec<String> = selections.iter().map(Selection::dice).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), before);
        // 1, 5, 11, 15, 55, 115, 155, 1155
        assert_eq!(before, 8);
    }

    #[test]
    fn straight_is_offered_whole() {
        let engine = ScoringEngine::standard().unwrap();
        let selections = engine.scoring_selections(&roll(&[6, 5, 4, 3, 2, 1]));
        let best = selections.last().unwrap();
        assert_eq!(best.parts(), &["123456".to_string()]);
        assert_eq!(best.score(), 1500);
        assert!(!parts_of(&selections).contains(&vec!["1", "123456"]));
    }

    #[test]
    fn equal_scores_keep_discovery_order() {
        let engine = ScoringEngine::standard().unwrap();
        let selections = engine.scoring_selections(&roll(&[1, 5, 5]));
        assert_eq!(
            parts_of(&selections),
            vec![
                vec!["5"],
                vec!["1"],
                vec!["5", "5"],
                vec!["1", "5"],
                vec!["1", "5", "5"],
            ]
        );
        // the single 1 is found before the pair of 5s, so it ranks first at 100
        assert_eq!(selections[1].score(), selections[2].score());
    }

    #[test]
    fn sorted_ascending_by_score() {
        let engine = ScoringEngine::standard().unwrap();
        let selections = engine.scoring_selections(&roll(&[5, 5, 5, 1, 1, 4]));
        assert!(selections.windows(2).all(|w| w[0].score() <= w[1].score()));
    }

    #[test]
    fn custom_catalog() {
        let catalog = Catalog::from_rows([CatalogRow::new(vec![6], 60)]).unwrap();
        let engine = ScoringEngine::new(catalog).unwrap();
        let selections = engine.scoring_selections(&roll(&[6, 6, 1]));
        assert_eq!(
            selections.iter().map(Selection::score).collect::<Vec<_>>(),
            vec![60, 120]
        );
        assert!(engine.is_farkle(&roll(&[1, 5])));
    }

    proptest! {
        #[test]
        fn selections_fit_inside_the_roll(dice in prop::collection::vec(1u8..=6, 1..=6)) {
            let engine = ScoringEngine::standard().unwrap();
            let roll = Roll::new(dice).unwrap();
            let digits = roll.digits();
            for selection in engine.scoring_selections(&roll) {
                prop_assert!(is_sublist(selection.parts(), &digits));
                prop_assert!(selection.dice_count() <= roll.len());
                let expected: u32 = selection
                    .parts()
                    .iter()
                    .map(|p| engine.catalog().lookup_score(p).unwrap())
                    .sum();
                prop_assert_eq!(selection.score(), expected);
            }
        }

        #[test]
        fn resolution_is_deterministic(dice in prop::collection::vec(1u8..=6, 1..=6)) {
            let engine = ScoringEngine::standard().unwrap();
            let roll = Roll::new(dice).unwrap();
            prop_assert_eq!(engine.scoring_selections(&roll), engine.scoring_selections(&roll));
        }
    }
}
