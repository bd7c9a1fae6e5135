//! Recursive cover search
//!
//! Depth-first backtracking over the candidate buckets. Each branch extends
//! the cover with a word for the rarest uncovered letter, with a one-time
//! allowance per path to skip a letter no word can provide.

use crate::core::{EncodedWord, FULL_COVER, Word};
use crate::search::CandidateIndex;
use rayon::prelude::*;
use std::fmt;

/// Rarest rank; the frontier starts here and walks downward.
const TOP_RANK: u8 = 25;

/// One complete cover: an ordered set of words with pairwise-distinct
/// letters that, together with at most one skipped letter, spans the
/// alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    words: Vec<Word>,
}

impl Combination {
    /// The chosen words, in the order the search selected them.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl<'a, 'b> From<&'a [&'b EncodedWord]> for Combination {
    fn from(path: &'a [&'b EncodedWord]) -> Self {
        Self {
            words: path.iter().map(|w| w.word().clone()).collect(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{word}")?;
        }
        write!(f, "]")
    }
}

/// The backtracking search over a read-only [`CandidateIndex`].
///
/// The engine holds no mutable state of its own; each enumeration starts
/// from scratch, so results are reproducible run to run.
pub struct SearchEngine<'a> {
    index: &'a CandidateIndex,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over a prebuilt index.
    #[must_use]
    pub const fn new(index: &'a CandidateIndex) -> Self {
        Self { index }
    }

    /// Enumerate every complete cover, streaming each to `on_result`.
    ///
    /// Depth-first, bucket order within a level, skip branch last, so the
    /// emission order is fixed for a fixed index.
    pub fn run<F>(&self, mut on_result: F)
    where
        F: FnMut(&[&'a EncodedWord]),
    {
        let mut chosen = Vec::with_capacity(8);
        self.search(0, TOP_RANK, false, &mut chosen, &mut on_result);
    }

    /// Enumerate every complete cover into a vector, in emission order.
    #[must_use]
    pub fn collect(&self) -> Vec<Combination> {
        let mut results = Vec::new();
        self.run(|path| results.push(Combination::from(path)));
        results
    }

    /// Parallel enumeration over the top-level branches.
    ///
    /// Sibling branches share no state, so the first frontier bucket (and
    /// the top-level skip branch) fan out across threads; per-branch results
    /// are reassembled in branch order, making the output identical to
    /// [`SearchEngine::collect`].
    #[must_use]
    pub fn collect_parallel(&self) -> Vec<Combination> {
        // Seeds mirror the two loops the sequential search runs at depth 0.
        let mut seeds: Vec<(u32, u8, bool, &EncodedWord)> = Vec::new();
        for word in self.index.bucket(TOP_RANK) {
            seeds.push((word.mask(), TOP_RANK - 1, false, word));
        }
        let skipped = 1u32 << TOP_RANK;
        for word in self.index.bucket(TOP_RANK - 1) {
            if word.mask() & skipped == 0 {
                seeds.push((skipped | word.mask(), TOP_RANK - 2, true, word));
            }
        }

        let per_branch: Vec<Vec<Combination>> = seeds
            .par_iter()
            .map(|&(covered, frontier, skip_used, first)| {
                let mut results = Vec::new();
                let mut chosen = vec![first];
                self.search(covered, frontier, skip_used, &mut chosen, &mut |path| {
                    results.push(Combination::from(path));
                });
                results
            })
            .collect();

        per_branch.into_iter().flatten().collect()
    }

    /// One level of the backtracking recursion.
    ///
    /// `chosen` is a shared path buffer grown with push and shrunk with pop
    /// around each child, so siblings never observe each other's words.
    fn search<F>(
        &self,
        covered: u32,
        frontier: u8,
        skip_used: bool,
        chosen: &mut Vec<&'a EncodedWord>,
        on_result: &mut F,
    ) where
        F: FnMut(&[&'a EncodedWord]),
    {
        if covered == FULL_COVER {
            on_result(chosen);
            return;
        }

        // Rarest letter not yet covered.
        let frontier = next_frontier(covered, frontier);

        for word in self.index.bucket(frontier) {
            if word.mask() & covered == 0 {
                chosen.push(word);
                self.search(
                    covered | word.mask(),
                    frontier.saturating_sub(1),
                    skip_used,
                    chosen,
                    on_result,
                );
                chosen.pop();
            }
        }

        // Mark the frontier letter covered without a word, once per path.
        // Extension then comes from the next bucket down only.
        if !skip_used && frontier > 0 {
            let covered = covered | (1 << frontier);
            for word in self.index.bucket(frontier - 1) {
                if word.mask() & covered == 0 {
                    chosen.push(word);
                    self.search(
                        covered | word.mask(),
                        frontier.saturating_sub(2),
                        true,
                        chosen,
                        on_result,
                    );
                    chosen.pop();
                }
            }
        }
    }
}

/// Highest rank at or below `from` whose bit is unset in `covered`.
///
/// Every rank above `from` is already covered by the time this runs, so an
/// unset bit always exists while `covered != FULL_COVER`.
fn next_frontier(covered: u32, from: u8) -> u8 {
    let uncovered = !covered & ((1u32 << (u32::from(from) + 1)) - 1);
    debug_assert!(uncovered != 0, "no uncovered rank at or below the frontier");
    (31 - uncovered.leading_zeros()) as u8
}
