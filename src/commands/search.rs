//! Streaming search command
//!
//! Runs the full enumeration over a wordlist, printing each cover as it is
//! found, and returns a run summary.

use crate::core::{LetterRanks, Word};
use crate::search::{CandidateIndex, Combination, SearchEngine};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Summary of a completed search run
pub struct SearchSummary {
    pub words: usize,
    pub candidates: usize,
    pub rejected: usize,
    pub solutions: usize,
    pub duration: Duration,
}

/// Enumerate every cover in `words`, streaming each line to stdout.
///
/// A spinner tracks the running cover count; result lines are printed
/// through it so the two do not interleave badly.
pub fn run_search(words: &[Word], ranks: &LetterRanks) -> SearchSummary {
    let index = CandidateIndex::from_words(words, ranks);
    let engine = SearchEngine::new(&index);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("static template"),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let mut solutions = 0usize;

    engine.run(|path| {
        solutions += 1;
        let combo = Combination::from(path);
        spinner.println(combo.to_string());
        spinner.set_message(format!("{solutions} covers found"));
    });

    spinner.finish_and_clear();

    SearchSummary {
        words: words.len(),
        candidates: index.len(),
        rejected: words.len() - index.len(),
        solutions,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    #[test]
    fn search_summary_counts_rejections_and_solutions() {
        let words = words_from_slice(&["abcde", "fghij", "klmno", "pqrst", "uvwxy", "apple"]);
        let ranks = LetterRanks::standard();

        let summary = run_search(&words, &ranks);

        assert_eq!(summary.words, 6);
        assert_eq!(summary.candidates, 5);
        assert_eq!(summary.rejected, 1); // "apple"
        assert_eq!(summary.solutions, 1);
    }

    #[test]
    fn search_summary_on_empty_wordlist() {
        let summary = run_search(&[], &LetterRanks::standard());
        assert_eq!(summary.words, 0);
        assert_eq!(summary.solutions, 0);
    }
}
