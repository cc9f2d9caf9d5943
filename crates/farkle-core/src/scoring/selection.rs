//! Combining atomic matches into every keepable selection.
//!
//! The matcher only reports single pattern occurrences. A player may keep
//! any combination of them as long as the combined dice were actually
//! rolled, so the synthesizer enumerates subsets of the matches and keeps
//! those that pass the containment check.

use std::cmp::Ordering;
use std::collections::HashSet;

use itertools::Itertools;

use super::matcher::AtomicMatch;

/// A set of dice a player may keep, with its total score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    parts: Vec<String>,
    score: u32,
}

impl Selection {
    /// The atomic patterns making up this selection, in roll order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Sum of the parts' scores.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// All kept dice as one ascending digit string.
    pub fn dice(&self) -> String {
        self.parts.iter().flat_map(|p| p.chars()).sorted_unstable().collect()
    }

    /// Number of dice this selection keeps.
    pub fn dice_count(&self) -> usize {
        self.parts.iter().map(String::len).sum()
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] = {}", self.parts.iter().join(", "), self.score)
    }
}

/// Whether the combined digits of `parts` can all be taken from `roll`
/// without using any die twice.
///
/// `roll` must be an ascending digit string. The parts are merged and sorted,
/// then walked against the roll in lockstep.
pub fn is_sublist<S: AsRef<str>>(parts: &[S], roll: &str) -> bool {
    let candidate: Vec<u8> = parts
        .iter()
        .flat_map(|p| p.as_ref().bytes())
        .sorted_unstable()
        .collect();
    let roll = roll.as_bytes();
    if candidate.len() > roll.len() {
        return false;
    }

    let (mut i, mut j) = (0, 0);
    while i < candidate.len() {
        let Some(&rolled) = roll.get(j) else {
            return false;
        };
        match candidate[i].cmp(&rolled) {
            // the roll skipped past this digit, so it is missing
            Ordering::Less => return false,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    true
}

/// Every distinct selection that can be built from `matches` within `roll`,
/// sorted ascending by score.
///
/// Two subsets of matches with the same multiset of pattern strings are the
/// same selection; the first one found is kept. Ties in score keep the order
/// in which an exhaustive size-then-position enumeration finds them.
pub fn synthesize(matches: &[AtomicMatch<'_>], roll: &str) -> Vec<Selection> {
    let mut subsets = Vec::new();
    collect_subsets(matches, roll, 0, &mut Vec::new(), &mut subsets);
    subsets.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut seen: HashSet<Vec<&str>> = HashSet::new();
    let mut selections = Vec::new();
    for subset in subsets {
        let key: Vec<&str> = subset
            .iter()
            .map(|&i| matches[i].digits())
            .sorted_unstable()
            .collect();
        if !seen.insert(key) {
            continue;
        }
        selections.push(Selection {
            parts: subset
                .iter()
                .map(|&i| matches[i].digits().to_string())
                .collect(),
            score: subset.iter().map(|&i| matches[i].score()).sum(),
        });
    }

    selections.sort_by_key(Selection::score);
    selections
}

/// Depth-first walk over subsets in increasing index order. A subset that
/// fails containment cannot be fixed by adding more matches, so its
/// supersets are skipped.
fn collect_subsets(
    matches: &[AtomicMatch<'_>],
    roll: &str,
    start: usize,
    chosen: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    for next in start..matches.len() {
        chosen.push(next);
        let parts: Vec<&str> = chosen.iter().map(|&i| matches[i].digits()).collect();
        if is_sublist(&parts, roll) {
            out.push(chosen.clone());
            collect_subsets(matches, roll, next + 1, chosen, out);
        }
        chosen.pop();
    }
}
