//! Multi-pattern search over a sorted roll.
//!
//! Sorting the roll turns "which scoring dice subsets are present" into
//! "which catalog digit strings occur as substrings", so one overlapping
//! Aho-Corasick pass over the (at most six) digits finds every atomic match,
//! including overlapping and repeated ones.

use std::cmp::Reverse;

use aho_corasick::AhoCorasick;

use super::catalog::{Catalog, Pattern};
use crate::error::FarkleResult;

/// One occurrence of a catalog pattern inside a sorted digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomicMatch<'c> {
    /// Offset of the first matched digit.
    pub start: usize,
    /// The catalog pattern that matched.
    pub pattern: &'c Pattern,
}

impl AtomicMatch<'_> {
    /// The matched digits.
    pub fn digits(&self) -> &str {
        self.pattern.digits()
    }

    /// Points for the matched pattern.
    pub fn score(&self) -> u32 {
        self.pattern.score()
    }

    /// Offset one past the last matched digit.
    pub fn end(&self) -> usize {
        self.start + self.pattern.size()
    }
}

/// A catalog together with the automaton built from its patterns.
///
/// Pattern ids reported by the automaton are catalog indices, so the two are
/// only ever constructed and used as a pair.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Catalog,
    automaton: AhoCorasick,
}

impl Matcher {
    /// Build the automaton for every pattern in `catalog`.
    pub fn new(catalog: Catalog) -> FarkleResult<Self> {
        let automaton = AhoCorasick::new(catalog.patterns().iter().map(Pattern::digits))?;
        Ok(Self { catalog, automaton })
    }

    /// The catalog this matcher searches for.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every occurrence of a catalog pattern in `digits`, ordered by end
    /// position and, at the same end, longest first.
    ///
    /// `digits` should be a sorted roll. Characters other than `1`-`6`
    /// never match.
    pub fn find_all(&self, digits: &str) -> Vec<AtomicMatch<'_>> {
        let mut found: Vec<AtomicMatch<'_>> = self
            .automaton
            .find_overlapping_iter(digits)
            .filter_map(|m| {
                self.catalog
                    .pattern(m.pattern().as_usize())
                    .map(|pattern| AtomicMatch {
                        start: m.start(),
                        pattern,
                    })
            })
            .collect();
        found.sort_by_key(|m| (m.end(), Reverse(m.pattern.size())));
        found
    }
}
