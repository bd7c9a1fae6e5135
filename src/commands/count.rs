//! Cover counting command
//!
//! Runs the parallel enumeration and reports totals without printing the
//! covers themselves.

use crate::core::{LetterRanks, Word};
use crate::search::{CandidateIndex, SearchEngine};
use std::time::{Duration, Instant};

/// Result of a counting run
pub struct CountResult {
    pub words: usize,
    pub candidates: usize,
    pub rejected: usize,
    pub solutions: usize,
    pub duration: Duration,
}

impl CountResult {
    /// Candidates examined per second at the top search level.
    #[must_use]
    pub fn candidates_per_second(&self) -> f64 {
        self.candidates as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Count every cover in `words` using the parallel search.
#[must_use]
pub fn run_count(words: &[Word], ranks: &LetterRanks) -> CountResult {
    let index = CandidateIndex::from_words(words, ranks);
    let engine = SearchEngine::new(&index);

    let start = Instant::now();
    let solutions = engine.collect_parallel().len();
    let duration = start.elapsed();

    CountResult {
        words: words.len(),
        candidates: index.len(),
        rejected: words.len() - index.len(),
        solutions,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    #[test]
    fn count_matches_known_cover() {
        let words = words_from_slice(&["abcde", "fghij", "klmno", "pqrst", "uvwxy"]);
        let result = run_count(&words, &LetterRanks::standard());

        assert_eq!(result.solutions, 1);
        assert_eq!(result.candidates, 5);
        assert_eq!(result.rejected, 0);
    }

    #[test]
    fn count_zero_on_uncoverable_wordlist() {
        let words = words_from_slice(&["fjord", "waltz", "nymph"]);
        let result = run_count(&words, &LetterRanks::standard());

        assert_eq!(result.solutions, 0);
        assert_eq!(result.candidates, 3);
    }

    #[test]
    fn count_tracks_rejected_words() {
        let words = words_from_slice(&["apple", "speed", "fjord"]);
        let result = run_count(&words, &LetterRanks::standard());

        assert_eq!(result.words, 3);
        assert_eq!(result.candidates, 1);
        assert_eq!(result.rejected, 2);
    }
}
