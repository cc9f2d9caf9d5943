//! The standard Farkle scoring table.
//!
//! Every row is an ascending run of dice, so a pattern always shows up as a
//! contiguous substring of a sorted roll.

use itertools::Itertools;

use super::catalog::CatalogRow;
use crate::dice::FACES;

/// Single 1.
pub const SINGLE_ONE: u32 = 100;
/// Single 5.
pub const SINGLE_FIVE: u32 = 50;
/// Three 1s.
pub const TRIPLE_ONES: u32 = 1000;
/// Four of any face.
pub const FOUR_OF_A_KIND: u32 = 1000;
/// Five of any face.
pub const FIVE_OF_A_KIND: u32 = 2000;
/// Six of any face.
pub const SIX_OF_A_KIND: u32 = 3000;
/// 1-2-3-4-5-6.
pub const STRAIGHT: u32 = 1500;
/// Three distinct pairs.
pub const THREE_PAIRS: u32 = 1500;
/// Four of a kind together with a pair of another face.
pub const FOUR_AND_PAIR: u32 = 1500;
/// Two sets of three.
pub const TWO_TRIPLETS: u32 = 2500;

/// Rows of the standard catalog.
///
/// Three of a kind scores 100 times the face, except three 1s which score
/// 1000. Singles only score for 1 and 5.
pub fn standard_rows() -> Vec<CatalogRow> {
    let mut rows = vec![
        CatalogRow::new(vec![1], SINGLE_ONE),
        CatalogRow::new(vec![5], SINGLE_FIVE),
    ];

    for face in 1..=FACES {
        let triple = if face == 1 {
            TRIPLE_ONES
        } else {
            u32::from(face) * 100
        };
        rows.push(CatalogRow::new(vec![face; 3], triple));
        rows.push(CatalogRow::new(vec![face; 4], FOUR_OF_A_KIND));
        rows.push(CatalogRow::new(vec![face; 5], FIVE_OF_A_KIND));
        rows.push(CatalogRow::new(vec![face; 6], SIX_OF_A_KIND));
    }

    rows.push(CatalogRow::new((1..=FACES).collect(), STRAIGHT));

    for (a, b, c) in (1..=FACES).tuple_combinations() {
        rows.push(CatalogRow::new(vec![a, a, b, b, c, c], THREE_PAIRS));
    }

    for quad in 1..=FACES {
        for pair in (1..=FACES).filter(|&p| p != quad) {
            let mut dice = vec![quad; 4];
            dice.extend([pair, pair]);
            dice.sort_unstable();
            rows.push(CatalogRow::new(dice, FOUR_AND_PAIR));
        }
    }

    for (a, b) in (1..=FACES).tuple_combinations() {
        rows.push(CatalogRow::new(vec![a, a, a, b, b, b], TWO_TRIPLETS));
    }

    rows
}
